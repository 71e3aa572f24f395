//! Annotate trait

/// Annotations provide contextual information about content.
pub trait Annotate<T> {
    fn annotate(&self, doc: &mut T);
}

/// Annotator enables annotation chaining, adding multiple annotators and
/// doing the annotation process in one step.
///
/// Annotators run in insertion order.
pub struct Annotator<T>(Vec<Box<dyn Annotate<T>>>);

impl<T> Annotator<T> {
    pub fn add(&mut self, annotator: Box<dyn Annotate<T>>) -> &mut Annotator<T> {
        self.0.push(annotator);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Annotate<T> for Annotator<T> {
    fn annotate(&self, doc: &mut T) {
        for annotator in &self.0 {
            annotator.annotate(doc);
        }
    }
}

impl<T> Default for Annotator<T> {
    fn default() -> Self {
        Self(vec![])
    }
}
