//! Survey creation pipelines.
//!
//! Plans the forms of a task, creates them remotely, then saves
//! - the links file (one line per form, for the Prolific study setup),
//! - the mapping CSV (one row per question, to join answers back to samples).
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::forms::{
    plan_reannotation, plan_translation, BaseForm, FormBuilder, FormPlan, FormResult, FormsApi,
    TargetRow, TranslationRow, DEFAULT_COMPLETION_CODE,
};
use crate::io::{write_csv, write_lines};
use crate::lang;

use super::Pipeline;

/// Kind of forms to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTask {
    /// Translate the source dataset, `items_per_form` rows per form.
    Translation { items_per_form: usize },
    /// Re-annotate selected targets, splitting languages above `split_above` targets.
    Reannotation { split_above: usize },
}

impl FormTask {
    fn default_langs(&self) -> Vec<String> {
        let langs = match self {
            FormTask::Translation { .. } => &*lang::TRANSLATION_LANGS,
            FormTask::Reannotation { .. } => &*lang::REANNOTATION_LANGS,
        };
        langs.iter().map(|l| l.to_string()).collect()
    }
}

fn read_rows<T: DeserializeOwned>(src: &Path) -> Result<Vec<T>, Error> {
    let rows = csv::Reader::from_path(src)?
        .deserialize()
        .collect::<Result<Vec<T>, _>>()?;
    info!("loaded {} rows from {:?}", rows.len(), src);
    Ok(rows)
}

pub struct FormsPipeline<A: FormsApi> {
    task: FormTask,
    src: PathBuf,
    template: PathBuf,
    links: PathBuf,
    mapping: PathBuf,
    langs: Vec<String>,
    folder_id: Option<String>,
    completion_code: String,
    api: A,
}

impl<A: FormsApi> FormsPipeline<A> {
    /// `links` and `mapping` are output files.
    pub fn new(
        task: FormTask,
        src: PathBuf,
        template: PathBuf,
        links: PathBuf,
        mapping: PathBuf,
        api: A,
    ) -> Self {
        Self {
            langs: task.default_langs(),
            task,
            src,
            template,
            links,
            mapping,
            folder_id: None,
            completion_code: DEFAULT_COMPLETION_CODE.to_string(),
            api,
        }
    }

    pub fn folder(mut self, folder_id: Option<String>) -> Self {
        self.folder_id = folder_id;
        self
    }

    pub fn completion_code(mut self, code: &str) -> Self {
        self.completion_code = code.to_string();
        self
    }

    /// Override the task languages.
    pub fn langs(mut self, langs: Vec<String>) -> Self {
        self.langs = langs;
        self
    }

    fn plan(&self) -> Result<Vec<FormPlan>, Error> {
        let langs: Vec<&str> = self.langs.iter().map(String::as_str).collect();
        match self.task {
            FormTask::Translation { items_per_form } => {
                let rows: Vec<TranslationRow> = read_rows(&self.src)?;
                plan_translation(&rows, &langs, items_per_form)
            }
            FormTask::Reannotation { split_above } => {
                let rows: Vec<TargetRow> = read_rows(&self.src)?;
                Ok(plan_reannotation(&rows, &langs, split_above))
            }
        }
    }
}

impl<A: FormsApi> Pipeline<Vec<FormResult>> for FormsPipeline<A> {
    fn run(&self) -> Result<Vec<FormResult>, Error> {
        let template = BaseForm::from_path(&self.template)?;
        let plans = self.plan()?;
        info!("{} forms to create", plans.len());

        let (results, mappings) = FormBuilder::new(&self.api, &template, &self.completion_code)
            .folder(self.folder_id.clone())
            .build_all(&plans)?;

        println!("\ndone: {} forms created\n", results.len());
        let lines: Vec<String> = results.iter().map(FormResult::link_line).collect();
        for line in &lines {
            println!("{}", line);
        }

        write_lines(&self.links, &lines)?;
        write_csv(&self.mapping, &mappings)?;

        Ok(results)
    }
}
