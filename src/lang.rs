//! Language codes and names.
//!
//! Language codes are the uppercase prefixes of the dataset columns
//! (`CS` for `CS_disfluent`). The reference language is English.
use std::collections::HashMap;

use lazy_static::lazy_static;

/// Column suffix marking a disfluency-annotated text column.
pub const DISFLUENT_SUFFIX: &str = "_disfluent";

/// Code of the reference (gold standard) language.
pub const REFERENCE_LANG: &str = "EN";

lazy_static! {
    /// Target languages of the translation campaign, in campaign order.
    pub static ref TRANSLATION_LANGS: Vec<&'static str> =
        vec!["ZH", "ES", "HI", "FR", "DE", "IT", "SW", "CS", "AR", "LG"];

    /// Languages that went through re-annotation.
    /// Swahili and Luganda were not part of that round.
    pub static ref REANNOTATION_LANGS: Vec<&'static str> =
        vec!["ZH", "ES", "HI", "FR", "DE", "IT", "CS", "AR"];

    /// Display names, used in form titles and descriptions.
    pub static ref LANG_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("EN", "English");
        m.insert("ZH", "Mandarin");
        m.insert("ES", "Spanish");
        m.insert("HI", "Hindi");
        m.insert("FR", "French");
        m.insert("DE", "German");
        m.insert("IT", "Italian");
        m.insert("SW", "Swahili");
        m.insert("CS", "Czech");
        m.insert("AR", "Arabic");
        m.insert("LG", "Luganda");
        m
    };
}

/// Column name holding the annotated text of `code`.
pub fn column_name(code: &str) -> String {
    format!("{}{}", code, DISFLUENT_SUFFIX)
}

/// Language code of a disfluent column, if `column` is one.
pub fn code_of(column: &str) -> Option<&str> {
    column
        .strip_suffix(DISFLUENT_SUFFIX)
        .filter(|code| !code.is_empty())
}

/// Display name of `code`, falling back on the code itself.
pub fn name_of(code: &str) -> &str {
    LANG_NAMES.get(code).copied().unwrap_or(code)
}
