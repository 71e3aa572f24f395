//! Remote form creation.
use log::info;
use serde::Serialize;

use crate::error::Error;

use super::api::participant_url;
use super::{BaseForm, FormPlan, FormsApi};

/// A created form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    pub form_id: String,
    pub uid: String,
    pub lang_code: String,
    pub participant_url: String,
    pub prolific_description: String,
}

impl FormResult {
    /// `UID | LANG | form_id | url | description`, with newlines of the description escaped.
    pub fn link_line(&self) -> String {
        format!(
            "{} | {} | {} | {} | {}",
            self.uid,
            self.lang_code,
            self.form_id,
            self.participant_url,
            self.prolific_description.replace('\n', "\\n")
        )
    }
}

/// Where a question ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormMapping {
    pub language_code: String,
    pub language_name: String,
    pub form_uid: String,
    pub form_id: String,
    pub form_part: usize,
    pub question_number: usize,
    pub source_row_index: Option<usize>,
    pub source_id: String,
    pub reason: Option<String>,
}

/// Creates planned forms through a [FormsApi].
///
/// Each form is created, described, filled, then moved to the Drive folder if one is set.
/// Nothing tracks already created forms: running twice creates every form twice.
pub struct FormBuilder<'a, A: FormsApi> {
    api: &'a A,
    template: &'a BaseForm,
    folder_id: Option<String>,
    completion_code: String,
}

impl<'a, A: FormsApi> FormBuilder<'a, A> {
    pub fn new(api: &'a A, template: &'a BaseForm, completion_code: &str) -> Self {
        Self {
            api,
            template,
            folder_id: None,
            completion_code: completion_code.to_string(),
        }
    }

    /// Drive folder receiving the created forms.
    pub fn folder(mut self, folder_id: Option<String>) -> Self {
        self.folder_id = folder_id;
        self
    }

    /// Create one form.
    pub fn build(&self, plan: &FormPlan) -> Result<(FormResult, Vec<FormMapping>), Error> {
        let form_id = self.api.create_form(&plan.title)?;
        self.api
            .set_description(&form_id, &self.template.google_description(&plan.lang_name))?;
        self.api
            .add_items(&form_id, &plan.items(&self.completion_code))?;

        info!("[OK] {} | {}", plan.uid, form_id);

        if let Some(folder_id) = &self.folder_id {
            self.api.move_to_folder(&form_id, folder_id)?;
        }

        let mappings = plan
            .questions
            .iter()
            .map(|q| FormMapping {
                language_code: plan.lang_code.clone(),
                language_name: plan.lang_name.clone(),
                form_uid: plan.uid.clone(),
                form_id: form_id.clone(),
                form_part: plan.part,
                question_number: q.number,
                source_row_index: q.source_row_index,
                source_id: q.source_id.clone(),
                reason: q.reason.clone(),
            })
            .collect();

        let result = FormResult {
            participant_url: participant_url(&form_id),
            form_id,
            uid: plan.uid.clone(),
            lang_code: plan.lang_code.clone(),
            prolific_description: self.template.prolific_description(&plan.lang_name),
        };

        Ok((result, mappings))
    }

    /// Create every form, in order. Stops at the first failure.
    pub fn build_all(&self, plans: &[FormPlan]) -> Result<(Vec<FormResult>, Vec<FormMapping>), Error> {
        let mut results = Vec::with_capacity(plans.len());
        let mut mappings = Vec::new();

        let mut current_lang = None;
        for plan in plans {
            if current_lang != Some(plan.lang_code.as_str()) {
                info!("=== Creating forms for {} ({}) ===", plan.lang_name, plan.lang_code);
                current_lang = Some(plan.lang_code.as_str());
            }

            let (result, form_mappings) = self.build(plan)?;
            results.push(result);
            mappings.extend(form_mappings);
        }

        Ok((results, mappings))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::forms::{plan_translation, FormItem, TranslationRow};

    /// Records every call, hands out `form-<n>` ids.
    #[derive(Default)]
    pub(crate) struct RecordingApi {
        pub calls: RefCell<Vec<String>>,
        pub items: RefCell<Vec<Vec<FormItem>>>,
        /// Fail `create_form` once this many forms exist.
        pub fail_after: Option<usize>,
    }

    impl FormsApi for RecordingApi {
        fn create_form(&self, title: &str) -> Result<String, Error> {
            let nb = self.items.borrow().len();
            if self.fail_after.map_or(false, |max| nb >= max) {
                return Err(Error::Api("quota exceeded".to_string()));
            }
            self.calls.borrow_mut().push(format!("create {}", title));
            self.items.borrow_mut().push(vec![]);
            Ok(format!("form-{}", nb + 1))
        }

        fn set_description(&self, form_id: &str, description: &str) -> Result<(), Error> {
            self.calls
                .borrow_mut()
                .push(format!("describe {} {}", form_id, description));
            Ok(())
        }

        fn add_items(&self, form_id: &str, items: &[FormItem]) -> Result<(), Error> {
            self.calls
                .borrow_mut()
                .push(format!("items {} {}", form_id, items.len()));
            if let Some(last) = self.items.borrow_mut().last_mut() {
                last.extend_from_slice(items);
            }
            Ok(())
        }

        fn move_to_folder(&self, file_id: &str, folder_id: &str) -> Result<(), Error> {
            self.calls
                .borrow_mut()
                .push(format!("move {} {}", file_id, folder_id));
            Ok(())
        }
    }

    fn template() -> BaseForm {
        serde_json::from_str(
            r#"{"description": {"google": "Into [TARGET_LANGUAGE]", "prolific": "[TARGET_LANGUAGE]\nspeakers"}}"#,
        )
        .unwrap()
    }

    fn rows(nb: usize) -> Vec<TranslationRow> {
        (0..nb)
            .map(|i| TranslationRow {
                file: "sw2005".to_string(),
                speaker: "B".to_string(),
                turn: i.to_string(),
                text_disfluent: "uh".to_string(),
            })
            .collect()
    }

    #[test]
    fn call_order() {
        let api = RecordingApi::default();
        let template = template();
        let plans = plan_translation(&rows(3), &["CS"], 20).unwrap();

        let (results, mappings) = FormBuilder::new(&api, &template, "CODE")
            .folder(Some("folder".to_string()))
            .build_all(&plans)
            .unwrap();

        assert_eq!(
            *api.calls.borrow(),
            vec![
                "create Translation Task – Czech (Part 1)".to_string(),
                "describe form-1 Into Czech".to_string(),
                "items form-1 5".to_string(),
                "move form-1 folder".to_string(),
            ]
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link_line(), "CS_T1 | CS | form-1 | https://docs.google.com/forms/d/form-1/viewform | Czech\\nspeakers");
        assert_eq!(mappings.len(), 3);
        assert!(mappings.iter().all(|m| m.form_id == "form-1"));
        assert_eq!(mappings[2].source_id, "sw02005_B_2");
    }

    #[test]
    fn no_folder_no_move() {
        let api = RecordingApi::default();
        let template = template();
        let plans = plan_translation(&rows(1), &["AR", "ES"], 20).unwrap();

        let (results, _) = FormBuilder::new(&api, &template, "CODE")
            .build_all(&plans)
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].form_id, "form-2");
        assert!(!api.calls.borrow().iter().any(|c| c.starts_with("move")));
    }

    #[test]
    fn failure_aborts() {
        let api = RecordingApi {
            fail_after: Some(1),
            ..Default::default()
        };
        let template = template();
        let plans = plan_translation(&rows(1), &["AR", "ES"], 20).unwrap();

        let res = FormBuilder::new(&api, &template, "CODE").build_all(&plans);
        assert!(matches!(res, Err(Error::Api(_))));
        assert_eq!(api.items.borrow().len(), 1);
    }
}
