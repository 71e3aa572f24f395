//! Google Forms items.
//!
//! Only the subset of the Forms API item resource we use: titled text questions.
use serde::Serialize;

/// Paste-back code shown to Prolific participants at the end of a form.
pub const DEFAULT_COMPLETION_CODE: &str = "COMPLETED021384";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextQuestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub required: bool,
    pub text_question: TextQuestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub question: Question,
}

/// A form item holding a single text question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub question_item: QuestionItem,
}

impl FormItem {
    fn text(title: String, description: Option<String>, required: bool, paragraph: bool) -> Self {
        Self {
            title,
            description,
            question_item: QuestionItem {
                question: Question {
                    required,
                    text_question: TextQuestion {
                        paragraph: if paragraph { Some(true) } else { None },
                    },
                },
            },
        }
    }

    /// Optional short answer asking for the participant's Prolific ID.
    pub fn prolific_id() -> Self {
        Self::text(
            "Provide your Prolific ID in the box below.".to_string(),
            None,
            false,
            false,
        )
    }

    /// Closing item holding the completion code.
    pub fn completion_code(code: &str) -> Self {
        Self::text(
            "Completion Code".to_string(),
            Some(format!(
                "Paste the following completion code when you return to Prolific: {}. Thanks!\n",
                code
            )),
            false,
            true,
        )
    }

    /// Translation question for the sample `id`.
    pub fn translation(id: &str, number: usize, lang_name: &str, text: &str) -> Self {
        Self::text(
            format!("[{}] Translation {}", id, number),
            Some(format!(
                "Translate the following text into {}:\n{}",
                lang_name, text
            )),
            true,
            true,
        )
    }

    /// Re-annotation question: the marked reference and the unmarked target text.
    pub fn reannotation(
        id: &str,
        number: usize,
        lang_name: &str,
        reference: &str,
        text: &str,
    ) -> Self {
        Self::text(
            format!("[{}] Annotation {}", id, number),
            Some(format!(
                "English (reference — notice the _underscore_ markers):\n{}\n\n---\n\n\
                 {} text (copy this into the box below and add _ markers):\n{}",
                reference, lang_name, text
            )),
            true,
            true,
        )
    }
}
