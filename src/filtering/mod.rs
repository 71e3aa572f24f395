/*! Span-level filtering

Filters flag disfluency spans that are likely annotation mistakes:
an annotator that wraps a whole sentence (or several) in underscores
produces spans that are too long, too wordy or contain sentence punctuation.

Each heuristic implements [Filter]. [SpanClassifier] runs all of them
and reports which ones fired.
! */
mod classifier;
mod filter;
mod span;

pub use classifier::{is_likely_error, ErrorKind, SpanClassifier};
pub use filter::Filter;
pub use span::{Length, Punctuation, WordCount};
