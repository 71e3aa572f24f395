//! Removes every disfluency marker, giving re-annotators a clean slate.
use crate::spans;

use super::{LangText, Transform};

#[derive(Default)]
pub struct StripMarkers;

impl Transform<LangText> for StripMarkers {
    fn transform_own(&self, mut doc: LangText) -> LangText {
        let stripped = spans::strip_markers(doc.content());
        doc.set_content(stripped);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformers::Reason;

    #[test]
    fn strips_and_keeps_reasons() {
        let mut t = LangText::new("_uh_ I _I_ mean".to_string());
        t.add_reason(Reason::LongDisfluency);

        let t = StripMarkers.transform_own(t);
        assert_eq!(t.content(), "uh I I mean");
        assert_eq!(t.reasons(), &[Reason::LongDisfluency]);
    }
}
