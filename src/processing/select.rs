//! Re-annotation target selection.
//!
//! A target language text is selected when one of the [ReannotationSelector] annotators flags it.
//! Selected texts are stripped of their markers so that re-annotators start from scratch.
use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::io::{Sample, Schema};
use crate::transformers::{
    Annotate, Annotator, LangText, LongDisfluency, MissingMarkers, Reason, StripMarkers, Transform,
};

fn serialize_reasons<S: Serializer>(reasons: &[Reason], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&Reason::join(reasons))
}

/// An (ID, Language) pair queued for re-annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReannotationCandidate {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Language")]
    pub lang: String,
    #[serde(rename = "Reason", serialize_with = "serialize_reasons")]
    pub reasons: Vec<Reason>,
    #[serde(rename = "EN_disfluent")]
    pub reference: Option<String>,
    #[serde(rename = "Text")]
    pub text: String,
}

impl ReannotationCandidate {
    pub fn key(&self) -> (&str, &str) {
        (&self.id, &self.lang)
    }
}

/// Selects target texts and prepares them for re-annotation.
pub struct ReannotationSelector {
    annotator: Annotator<LangText>,
    strip: StripMarkers,
}

impl ReannotationSelector {
    /// Selector flagging spans of at least `min_words` words, and unmarked texts.
    pub fn new(min_words: usize) -> Self {
        let mut annotator = Annotator::default();
        annotator
            .add(Box::new(LongDisfluency::new(min_words)))
            .add(Box::new(MissingMarkers));

        Self {
            annotator,
            strip: StripMarkers,
        }
    }

    /// Selector running a custom annotator chain.
    pub fn with_annotator(annotator: Annotator<LangText>) -> Self {
        Self {
            annotator,
            strip: StripMarkers,
        }
    }

    /// One candidate per flagged, present target language text of `sample`.
    pub fn select(&self, sample: &Sample, schema: &Schema) -> Vec<ReannotationCandidate> {
        sample
            .texts(schema)
            .filter_map(|(lang, text)| text.map(|t| (lang, t)))
            .filter_map(|(lang, text)| {
                let mut doc = LangText::new(text.to_string());
                self.annotator.annotate(&mut doc);
                if !doc.is_flagged() {
                    return None;
                }

                let (text, reasons) = self.strip.transform_own(doc).into_parts();
                Some(ReannotationCandidate {
                    id: sample.id.clone(),
                    lang: lang.to_string(),
                    reasons,
                    reference: sample.reference.clone(),
                    text,
                })
            })
            .collect()
    }
}

impl Default for ReannotationSelector {
    fn default() -> Self {
        Self::new(10)
    }
}

/// [ReannotationSelector::select] with default thresholds.
pub fn select_targets(sample: &Sample, schema: &Schema) -> Vec<ReannotationCandidate> {
    ReannotationSelector::default().select(sample, schema)
}

/// Keep the first candidate of each (ID, Language) pair, in order.
pub fn dedup_targets(candidates: Vec<ReannotationCandidate>) -> Vec<ReannotationCandidate> {
    candidates
        .into_iter()
        .unique_by(|c| (c.id.clone(), c.lang.clone()))
        .collect()
}
