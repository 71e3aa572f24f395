/*! Annotates texts holding an overly long disfluency.

A span of 10 words or more is unlikely to be a filler, a repair or a repetition:
the annotator probably wrapped the utterance itself.
!*/
use crate::spans;

use super::{Annotate, LangText, Reason};

pub struct LongDisfluency {
    min_words: usize,
}

impl LongDisfluency {
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl Default for LongDisfluency {
    fn default() -> Self {
        Self { min_words: 10 }
    }
}

impl Annotate<LangText> for LongDisfluency {
    fn annotate(&self, doc: &mut LangText) {
        let too_long = spans::spans_of(doc.content())
            .any(|span| span.split_whitespace().count() >= self.min_words);

        if too_long {
            doc.add_reason(Reason::LongDisfluency);
        }
    }
}
