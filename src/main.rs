//! # uhmazing
//!
//! Annotation quality tooling for the uh-mazing disfluency corpus.
//!
//! ## Getting started
//!
//! ```sh
//! uhmazing 0.1.0
//! disfluency annotation tooling.
//!
//! USAGE:
//!     uhmazing <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     detect                Detect likely annotation errors
//!     forms-reannotation    Create the re-annotation forms
//!     forms-translation     Create the translation forms
//!     help                  Prints this message or the help of the given subcommand(s)
//!     reannotate            Select texts to re-annotate
//!     report                Per-language error rates and span length distributions
//!     tokens                Count disfluency tokens per language
//! ```
//!
//! Forms commands read `GOOGLE_ACCESS_TOKEN` and `DRIVE_FOLDER_ID` from the environment
//! (or a `.env` file) when no token file or folder is given.
use std::env;

use structopt::StructOpt;

#[macro_use]
extern crate log;

use uhmazing::cli;
use uhmazing::error::Error;
use uhmazing::forms::GoogleForms;
use uhmazing::pipelines::{
    ErrorDetection, ErrorReport, FormTask, FormsPipeline, Pipeline, Reannotation, TokenStats,
};

const TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";
const FOLDER_VAR: &str = "DRIVE_FOLDER_ID";

/// Build the API client from the token file, or the environment.
fn google_forms(args: &cli::FormsArgs) -> Result<GoogleForms, Error> {
    match &args.token_file {
        Some(path) => GoogleForms::from_token_file(path),
        None => env::var(TOKEN_VAR)
            .map(GoogleForms::new)
            .map_err(|_| Error::Custom(format!("no token file given and {} is not set", TOKEN_VAR))),
    }
}

fn folder(args: &cli::FormsArgs) -> Option<String> {
    let folder = args.folder.clone().or_else(|| env::var(FOLDER_VAR).ok());
    if folder.is_none() {
        warn!("no Drive folder set, forms stay in the Drive root");
    }
    folder
}

fn forms_pipeline(
    task: FormTask,
    src: std::path::PathBuf,
    template: std::path::PathBuf,
    links: std::path::PathBuf,
    mapping: std::path::PathBuf,
    remote: &cli::FormsArgs,
) -> Result<(), Error> {
    let mut p = FormsPipeline::new(task, src, template, links, mapping, google_forms(remote)?)
        .folder(folder(remote))
        .completion_code(&remote.completion_code);
    if let Some(langs) = &remote.langs {
        p = p.langs(langs.clone());
    }
    p.run()?;
    Ok(())
}

fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let opt = cli::Uhmazing::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Uhmazing::Detect(d) => {
            let p = ErrorDetection::new(d.dataset.src.clone(), d.dst, d.dataset.options())
                .with_thresholds(d.max_length, d.max_words);
            p.run()?;
        }

        cli::Uhmazing::Reannotate(r) => {
            let p = Reannotation::new(r.dataset.src.clone(), r.dst, r.dataset.options())
                .with_min_words(r.min_words);
            p.run()?;
        }

        cli::Uhmazing::Tokens(t) => {
            let p = TokenStats::new(t.dataset.src.clone(), t.dst, t.dataset.options())
                .case_sensitive(t.case_sensitive)
                .top_n(t.top_n);
            p.run()?;
        }

        cli::Uhmazing::Report(r) => {
            let p = ErrorReport::new(r.dataset.src.clone(), r.errors, r.dst, r.dataset.options())
                .bins(r.bins);
            p.run()?;
        }

        cli::Uhmazing::FormsTranslation(f) => {
            let task = FormTask::Translation {
                items_per_form: f.items_per_form,
            };
            forms_pipeline(task, f.src, f.template, f.links, f.mapping, &f.remote)?;
        }

        cli::Uhmazing::FormsReannotation(f) => {
            let task = FormTask::Reannotation {
                split_above: f.split_above,
            };
            forms_pipeline(task, f.src, f.template, f.links, f.mapping, &f.remote)?;
        }
    };
    Ok(())
}
