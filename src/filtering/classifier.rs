//! Annotation error classification.
use std::fmt;

use serde::Serialize;

use super::{Filter, Length, Punctuation, WordCount};

/// Heuristic that flagged a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TooLong,
    EmbeddedPunctuation,
    TooManyWords,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TooLong => "too_long",
            ErrorKind::EmbeddedPunctuation => "embedded_punctuation",
            ErrorKind::TooManyWords => "too_many_words",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs every span heuristic.
///
/// Heuristics are independent: a span is flagged as soon as one of them fires.
#[derive(Default)]
pub struct SpanClassifier {
    length: Length,
    punctuation: Punctuation,
    words: WordCount,
}

impl SpanClassifier {
    /// Classifier with custom length/word thresholds.
    pub fn new(max_length: usize, max_words: usize) -> Self {
        Self {
            length: Length::with_max_size(max_length),
            punctuation: Punctuation,
            words: WordCount::with_max_words(max_words),
        }
    }

    /// Get the length threshold.
    pub fn max_length(&self) -> usize {
        *self.length.max_size()
    }

    /// Get the word count threshold.
    pub fn max_words(&self) -> usize {
        *self.words.max_words()
    }

    /// Heuristics that fire on `span`, in a fixed order.
    /// Empty if the span looks fine.
    pub fn classify(&self, span: &str) -> Vec<ErrorKind> {
        let mut kinds = Vec::new();
        if self.length.detect(span) {
            kinds.push(ErrorKind::TooLong);
        }
        if self.punctuation.detect(span) {
            kinds.push(ErrorKind::EmbeddedPunctuation);
        }
        if self.words.detect(span) {
            kinds.push(ErrorKind::TooManyWords);
        }
        kinds
    }

    pub fn is_error(&self, span: &str) -> bool {
        self.length.detect(span) || self.punctuation.detect(span) || self.words.detect(span)
    }
}

/// Checks `span` against the default thresholds.
pub fn is_likely_error(span: &str) -> bool {
    SpanClassifier::default().is_error(span)
}
