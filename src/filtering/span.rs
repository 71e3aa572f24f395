//! span-level heuristics
use super::Filter;

/// Number of trailing characters ignored by [Punctuation].
const PUNCTUATION_TAIL: usize = 5;

/// Sentence breaks that should not appear inside a disfluency.
const SENTENCE_BREAKS: [&str; 3] = [". ", "! ", "? "];

/// Simple length filter.
/// Flags spans that are longer than [Length::max_size] unicode codepoints.
///
/// [Length::max_size] is 50 by default.
pub struct Length {
    max_size: usize,
}

impl Length {
    /// specify a maximum length
    pub fn with_max_size(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Get a reference to the length's max size.
    pub fn max_size(&self) -> &usize {
        &self.max_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, span: &str) -> bool {
        span.chars().count() > self.max_size
    }
}

impl Default for Length {
    /// Default maximum length for spans is 50 Unicode Codepoints
    fn default() -> Self {
        Length { max_size: 50 }
    }
}

/// Embedded sentence punctuation.
///
/// Flags spans containing `. `, `! ` or `? ` anywhere but in their last 5 characters,
/// which usually means that surrounding prose got marked.
#[derive(Default)]
pub struct Punctuation;

impl Punctuation {
    /// The span without its last [PUNCTUATION_TAIL] characters.
    /// Empty for spans that are not longer than the tail.
    fn head(span: &str) -> &str {
        let nb_chars = span.chars().count();
        if nb_chars <= PUNCTUATION_TAIL {
            return "";
        }

        match span.char_indices().nth(nb_chars - PUNCTUATION_TAIL) {
            Some((idx, _)) => &span[..idx],
            None => span,
        }
    }
}

impl Filter<&str> for Punctuation {
    fn detect(&self, span: &str) -> bool {
        let head = Self::head(span);
        SENTENCE_BREAKS.iter().any(|brk| head.contains(brk))
    }
}

/// Word count filter.
/// Flags spans that have more than [WordCount::max_words] whitespace-separated words.
///
/// [WordCount::max_words] is 10 by default.
pub struct WordCount {
    max_words: usize,
}

impl WordCount {
    pub fn with_max_words(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> &usize {
        &self.max_words
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, span: &str) -> bool {
        span.split_whitespace().count() > self.max_words
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self { max_words: 10 }
    }
}
