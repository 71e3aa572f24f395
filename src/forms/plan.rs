/*! Form planning.

Turns source rows into [FormPlan]s: which form gets which questions.
Planning is pure, nothing remote happens here.

- Translation forms: every language gets the whole dataset, in chunks of `items_per_form` rows.
- Re-annotation forms: every language gets its own targets, in one form,
  or two halves when there are more than `split_above` targets.
!*/
use serde::Deserialize;

use crate::error::Error;
use crate::lang;

use super::FormItem;

/// Row of the translation dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRow {
    /// Conversation file, `sw2005` or `2005`.
    pub file: String,
    pub speaker: String,
    pub turn: String,
    pub text_disfluent: String,
}

impl TranslationRow {
    /// Sample identifier: zero-padded conversation, speaker and turn (`sw02005_A_3`).
    pub fn sample_id(&self) -> Result<String, Error> {
        let conv: u32 = self
            .file
            .replace("sw", "")
            .trim()
            .parse()
            .map_err(|_| Error::Custom(format!("invalid conversation file {:?}", self.file)))?;
        Ok(format!("sw{:05}_{}_{}", conv, self.speaker, self.turn))
    }
}

/// Row of a re-annotation targets file.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Language")]
    pub lang: String,
    #[serde(rename = "Reason")]
    pub reason: String,
    #[serde(rename = "EN_disfluent", default)]
    pub reference: String,
    #[serde(rename = "Text")]
    pub text: String,
}

/// A question and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedQuestion {
    pub number: usize,
    pub source_id: String,
    /// Row index in the translation dataset.
    pub source_row_index: Option<usize>,
    /// Re-annotation reasons.
    pub reason: Option<String>,
    pub item: FormItem,
}

/// A form to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPlan {
    pub uid: String,
    pub title: String,
    pub lang_code: String,
    pub lang_name: String,
    /// 1-based part number.
    pub part: usize,
    pub questions: Vec<PlannedQuestion>,
}

impl FormPlan {
    /// Every item of the form, framing items included.
    pub fn items(&self, completion_code: &str) -> Vec<FormItem> {
        std::iter::once(FormItem::prolific_id())
            .chain(self.questions.iter().map(|q| q.item.clone()))
            .chain(std::iter::once(FormItem::completion_code(completion_code)))
            .collect()
    }
}

/// Translation forms for each of `langs`.
pub fn plan_translation(
    rows: &[TranslationRow],
    langs: &[&str],
    items_per_form: usize,
) -> Result<Vec<FormPlan>, Error> {
    if items_per_form == 0 {
        return Err(Error::Custom("items per form must be positive".to_string()));
    }

    let ids = rows
        .iter()
        .map(TranslationRow::sample_id)
        .collect::<Result<Vec<_>, _>>()?;

    let mut plans = Vec::new();
    for code in langs {
        let name = lang::name_of(code);
        for (chunk_idx, chunk) in rows.chunks(items_per_form).enumerate() {
            let part = chunk_idx + 1;
            let offset = chunk_idx * items_per_form;
            let questions = chunk
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    let number = idx + 1;
                    let id = &ids[offset + idx];
                    PlannedQuestion {
                        number,
                        source_id: id.clone(),
                        source_row_index: Some(offset + idx),
                        reason: None,
                        item: FormItem::translation(id, number, name, &row.text_disfluent),
                    }
                })
                .collect();

            plans.push(FormPlan {
                uid: format!("{}_T{}", code, part),
                title: format!("Translation Task – {} (Part {})", name, part),
                lang_code: code.to_string(),
                lang_name: name.to_string(),
                part,
                questions,
            });
        }
    }
    Ok(plans)
}

/// Split `len` items in parts: one part, or two halves above `split_above`.
fn reannotation_parts(len: usize, split_above: usize) -> Vec<std::ops::Range<usize>> {
    if len > split_above {
        let mid = len / 2;
        vec![0..mid, mid..len]
    } else {
        vec![0..len]
    }
}

/// Re-annotation forms for each of `langs` that has targets.
pub fn plan_reannotation(rows: &[TargetRow], langs: &[&str], split_above: usize) -> Vec<FormPlan> {
    let mut plans = Vec::new();
    for code in langs {
        let targets: Vec<&TargetRow> = rows.iter().filter(|r| r.lang == *code).collect();
        if targets.is_empty() {
            continue;
        }

        let name = lang::name_of(code);
        for (part_idx, range) in reannotation_parts(targets.len(), split_above)
            .into_iter()
            .enumerate()
        {
            let part = part_idx + 1;
            let questions = targets[range]
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    let number = idx + 1;
                    PlannedQuestion {
                        number,
                        source_id: row.id.clone(),
                        source_row_index: None,
                        reason: Some(row.reason.clone()),
                        item: FormItem::reannotation(&row.id, number, name, &row.reference, &row.text),
                    }
                })
                .collect();

            plans.push(FormPlan {
                uid: format!("{}_R{}", code, part),
                title: format!("Reannotation Task – {} (Part {})", name, part),
                lang_code: code.to_string(),
                lang_name: name.to_string(),
                part,
                questions,
            });
        }
    }
    plans
}
