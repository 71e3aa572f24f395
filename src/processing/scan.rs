//! Annotation error scanning.
//!
//! Every span of every target language is run through a [SpanClassifier].
//! Each flagged span becomes an [ErrorRecord].
use serde::{Serialize, Serializer};

use crate::filtering::{ErrorKind, SpanClassifier};
use crate::io::{Sample, Schema};
use crate::spans;

/// Error type reported for every flagged span.
pub const ERROR_TYPE: &str = "Long_Token";

const PREVIEW_CHARS: usize = 100;
const CONTEXT_CHARS: usize = 200;

fn serialize_kinds<S: Serializer>(kinds: &[ErrorKind], s: S) -> Result<S::Ok, S::Error> {
    let joined = kinds
        .iter()
        .map(ErrorKind::as_str)
        .collect::<Vec<_>>()
        .join(";");
    s.serialize_str(&joined)
}

/// A span flagged as a likely annotation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    #[serde(rename = "Sample_ID")]
    pub sample_id: String,
    #[serde(rename = "Language")]
    pub lang: String,
    #[serde(rename = "Error_Type")]
    pub error_type: &'static str,
    #[serde(rename = "Triggers", serialize_with = "serialize_kinds")]
    pub triggers: Vec<ErrorKind>,
    #[serde(rename = "Token_Length")]
    pub token_length: usize,
    #[serde(rename = "Token_Preview")]
    pub token_preview: String,
    #[serde(rename = "Full_Token")]
    pub full_token: String,
    #[serde(rename = "Context")]
    pub context: String,
}

/// [ErrorRecord] without the full span and context.
#[derive(Debug, Serialize)]
pub struct ErrorSummary<'a> {
    #[serde(rename = "Sample_ID")]
    pub sample_id: &'a str,
    #[serde(rename = "Language")]
    pub lang: &'a str,
    #[serde(rename = "Error_Type")]
    pub error_type: &'static str,
    #[serde(rename = "Triggers", serialize_with = "serialize_kinds")]
    pub triggers: &'a [ErrorKind],
    #[serde(rename = "Token_Length")]
    pub token_length: usize,
    #[serde(rename = "Token_Preview")]
    pub token_preview: &'a str,
}

impl ErrorRecord {
    fn new(sample_id: &str, lang: &str, span: &str, triggers: Vec<ErrorKind>, text: &str) -> Self {
        Self {
            sample_id: sample_id.to_string(),
            lang: lang.to_string(),
            error_type: ERROR_TYPE,
            triggers,
            token_length: span.chars().count(),
            token_preview: super::preview(span, PREVIEW_CHARS),
            full_token: span.to_string(),
            context: super::preview(text, CONTEXT_CHARS),
        }
    }

    pub fn summary(&self) -> ErrorSummary<'_> {
        ErrorSummary {
            sample_id: &self.sample_id,
            lang: &self.lang,
            error_type: self.error_type,
            triggers: &self.triggers,
            token_length: self.token_length,
            token_preview: &self.token_preview,
        }
    }
}

/// Flag the spans of every present target language text of `sample`.
pub fn scan_row(sample: &Sample, schema: &Schema, classifier: &SpanClassifier) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();

    for (lang, text) in sample.texts(schema) {
        let text = match text {
            Some(t) => t,
            None => continue,
        };

        for span in spans::spans_of(text) {
            let triggers = classifier.classify(span);
            if !triggers.is_empty() {
                errors.push(ErrorRecord::new(&sample.id, lang, span, triggers, text));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{Dataset, DatasetOptions};

    fn dataset(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes(), &DatasetOptions::default()).unwrap()
    }

    #[test]
    fn reference_is_not_scanned() {
        let long = "x".repeat(60);
        let d = dataset(&format!("ID,EN_disfluent,CS_disfluent\n1,_{}_,ok\n", long));
        let errors = scan_row(&d.samples()[0], d.schema(), &SpanClassifier::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn one_record_per_flagged_span() {
        let long = "y".repeat(60);
        let csv = format!(
            "ID,EN_disfluent,CS_disfluent\ns1,a,_{}_ _uh_ _a b c d e f g h i j k_\n",
            long
        );
        let d = dataset(&csv);
        let errors = scan_row(&d.samples()[0], d.schema(), &SpanClassifier::default());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].sample_id, "s1");
        assert_eq!(errors[0].lang, "CS");
        assert_eq!(errors[0].error_type, "Long_Token");
        assert_eq!(errors[0].token_length, 60);
        assert_eq!(errors[0].triggers, vec![ErrorKind::TooLong]);
        assert_eq!(errors[1].triggers, vec![ErrorKind::TooManyWords]);
    }

    #[test]
    fn preview_and_context_truncated() {
        let long = "z".repeat(150);
        let text = format!("_{}_ {}", long, "w".repeat(100));
        let d = dataset(&format!("ID,EN_disfluent,AR_disfluent\n7,a,{}\n", text));
        let errors = scan_row(&d.samples()[0], d.schema(), &SpanClassifier::default());

        let e = &errors[0];
        assert_eq!(e.full_token, long);
        assert_eq!(e.token_preview, format!("{}...", "z".repeat(100)));
        assert_eq!(e.context.chars().count(), 203);
        assert!(e.context.ends_with("..."));
    }

    #[test]
    fn summary_drops_full_text() {
        let mut out = csv::Writer::from_writer(vec![]);
        let record = ErrorRecord::new(
            "1",
            "ES",
            "a. b c d e",
            vec![ErrorKind::EmbeddedPunctuation],
            "_a. b c d e_",
        );
        out.serialize(record.summary()).unwrap();
        let written = String::from_utf8(out.into_inner().unwrap()).unwrap();
        assert_eq!(
            written,
            "Sample_ID,Language,Error_Type,Triggers,Token_Length,Token_Preview\n\
             1,ES,Long_Token,embedded_punctuation,10,a. b c d e\n"
        );
    }
}
