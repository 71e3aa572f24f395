/*! Disfluency span extraction.

Annotators mark disfluent segments by wrapping them in underscores:

```text
I _uh_ think we _we_ should go
```

yields the spans `uh` and `we`.

Boundaries are purely lexical: spans are the leftmost, non-overlapping matches
of `_([^_]+)_`. Unbalanced underscores are not detected, they just produce
fewer (or different) spans.
!*/
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPAN: Regex = Regex::new(r"_([^_]+)_").unwrap();
}

/// Marker character delimiting spans.
pub const MARKER: char = '_';

/// Extract the raw (case preserving) spans of `text`.
///
/// An absent value yields no spans.
pub fn extract_spans(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) => spans_of(text).map(String::from).collect(),
        None => Vec::new(),
    }
}

/// Borrowing iterator over the spans of `text`.
pub fn spans_of(text: &str) -> impl Iterator<Item = &str> {
    SPAN.captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Remove every marker from `text`.
pub fn strip_markers(text: &str) -> String {
    text.replace(MARKER, "")
}

/// `true` if `text` carries at least one marker.
pub fn has_markers(text: &str) -> bool {
    text.contains(MARKER)
}

/// Token extractor used for frequency analysis.
///
/// Tokens are lowercased unless `case_sensitive` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanExtractor {
    case_sensitive: bool,
}

impl SpanExtractor {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn extract(&self, text: Option<&str>) -> Vec<String> {
        let text = match text {
            Some(t) => t,
            None => return Vec::new(),
        };

        spans_of(text)
            .map(|span| {
                if self.case_sensitive {
                    span.to_string()
                } else {
                    span.to_lowercase()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers() {
        assert!(extract_spans(Some("no markers at all")).is_empty());
    }

    #[test]
    fn absent() {
        assert!(extract_spans(None).is_empty());
    }

    #[test]
    fn trailing_marker_ignored() {
        assert_eq!(extract_spans(Some("a_b_c_d_")), vec!["b", "d"]);
    }

    #[test]
    fn multiple_spans() {
        let text = "I _uh_ think we _we_ should _um, like_ go";
        assert_eq!(extract_spans(Some(text)), vec!["uh", "we", "um, like"]);
    }

    #[test]
    fn empty_pair_is_not_a_span() {
        // `__` has nothing in between, so the scan resumes on the second marker.
        assert_eq!(extract_spans(Some("__x_")), vec!["x"]);
    }

    #[test]
    fn spans_cross_lines() {
        assert_eq!(extract_spans(Some("_a\nb_")), vec!["a\nb"]);
    }

    #[test]
    fn reextracting_output_is_empty() {
        for span in extract_spans(Some("x _uh_ y _er_")) {
            assert!(extract_spans(Some(&span)).is_empty());
        }
    }

    #[test]
    fn strip() {
        assert_eq!(strip_markers("I _uh_ think"), "I uh think");
        assert!(!has_markers(&strip_markers("_a_ _b_")));
    }

    #[test]
    fn extractor_lowercases_by_default() {
        let e = SpanExtractor::default();
        assert!(!e.case_sensitive());
        assert_eq!(e.extract(Some("_Uh_ and _ÉH_")), vec!["uh", "éh"]);
    }

    #[test]
    fn extractor_case_sensitive() {
        let e = SpanExtractor::new(true);
        assert_eq!(e.extract(Some("_Uh_")), vec!["Uh"]);
        assert!(e.extract(None).is_empty());
    }
}
