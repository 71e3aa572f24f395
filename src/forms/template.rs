//! Base form template.
//!
//! A JSON file holding the two descriptions of a task:
//! ```json
//! {"description": {"google": "...", "prolific": "..."}}
//! ```
//! `[TARGET_LANGUAGE]` is replaced by the language name.
use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;

use crate::error::Error;

const PLACEHOLDER: &str = "[TARGET_LANGUAGE]";

#[derive(Debug, Clone, Deserialize)]
pub struct Descriptions {
    /// Shown at the top of the form.
    pub google: String,
    /// Study description for the Prolific listing.
    pub prolific: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseForm {
    pub description: Descriptions,
}

impl BaseForm {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }

    pub fn google_description(&self, lang_name: &str) -> String {
        self.description.google.replace(PLACEHOLDER, lang_name)
    }

    pub fn prolific_description(&self, lang_name: &str) -> String {
        self.description.prolific.replace(PLACEHOLDER, lang_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution() {
        let t: BaseForm = serde_json::from_str(
            r#"{"description": {"google": "Translate to [TARGET_LANGUAGE].", "prolific": "[TARGET_LANGUAGE] speakers, [TARGET_LANGUAGE]!"}, "unused": 1}"#,
        )
        .unwrap();

        assert_eq!(t.google_description("Czech"), "Translate to Czech.");
        assert_eq!(t.prolific_description("Hindi"), "Hindi speakers, Hindi!");
    }

    #[test]
    fn from_missing_path() {
        assert!(matches!(
            BaseForm::from_path(Path::new("does/not/exist.json")),
            Err(Error::Io(_))
        ));
    }
}
