//! Annotates texts without any disfluency marker.
use crate::spans;

use super::{Annotate, LangText, Reason};

#[derive(Default)]
pub struct MissingMarkers;

impl Annotate<LangText> for MissingMarkers {
    fn annotate(&self, doc: &mut LangText) {
        if !spans::has_markers(doc.content()) {
            doc.add_reason(Reason::MissingUnderscores);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker() {
        let mut t = LangText::new("I think we should go".to_string());
        MissingMarkers.annotate(&mut t);
        assert_eq!(t.reasons(), &[Reason::MissingUnderscores]);
    }

    #[test]
    fn a_lone_marker_counts() {
        // unbalanced, yet the annotator did mark something
        let mut t = LangText::new("I _think we should go".to_string());
        MissingMarkers.annotate(&mut t);
        assert!(!t.is_flagged());
    }
}
