//! Annotated language text.
use std::fmt;

use serde::Serialize;

/// Why a text needs a fresh annotation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// A marked span is so long it probably covers fluent prose.
    LongDisfluency,
    /// The annotator did not mark anything.
    MissingUnderscores,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::LongDisfluency => "long_disfluency",
            Reason::MissingUnderscores => "missing_underscores",
        }
    }

    /// `;`-joined representation used in reports.
    pub fn join(reasons: &[Reason]) -> String {
        reasons
            .iter()
            .map(Reason::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text of one language cell, with the reasons gathered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangText {
    content: String,
    reasons: Vec<Reason>,
}

impl LangText {
    pub fn new(content: String) -> Self {
        Self {
            content,
            reasons: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Add a reason, once.
    pub fn add_reason(&mut self, reason: Reason) {
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }

    pub fn is_flagged(&self) -> bool {
        !self.reasons.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Reason>) {
        (self.content, self.reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join() {
        assert_eq!(
            Reason::join(&[Reason::LongDisfluency, Reason::MissingUnderscores]),
            "long_disfluency;missing_underscores"
        );
        assert_eq!(Reason::join(&[]), "");
    }

    #[test]
    fn reasons_added_once() {
        let mut t = LangText::new("x".to_string());
        assert!(!t.is_flagged());
        t.add_reason(Reason::MissingUnderscores);
        t.add_reason(Reason::MissingUnderscores);
        assert_eq!(t.reasons(), &[Reason::MissingUnderscores]);
    }
}
