//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::io::DatasetOptions;

#[derive(Debug, StructOpt)]
#[structopt(name = "uhmazing", about = "disfluency annotation tooling.")]
/// Holds every command that is callable by the `uhmazing` command.
pub enum Uhmazing {
    #[structopt(about = "Detect likely annotation errors")]
    Detect(Detect),
    #[structopt(about = "Select texts to re-annotate")]
    Reannotate(Reannotate),
    #[structopt(about = "Count disfluency tokens per language")]
    Tokens(Tokens),
    #[structopt(about = "Per-language error rates and span length distributions")]
    Report(Report),
    #[structopt(about = "Create the translation forms")]
    FormsTranslation(FormsTranslation),
    #[structopt(about = "Create the re-annotation forms")]
    FormsReannotation(FormsReannotation),
}

#[derive(Debug, StructOpt)]
/// Dataset location and columns, shared by the analysis commands.
pub struct DatasetArgs {
    #[structopt(
        parse(from_os_str),
        long = "src",
        help = "annotated dataset",
        default_value = "data/uh-mazing.csv"
    )]
    pub src: PathBuf,
    #[structopt(long = "id-column", help = "sample id column", default_value = "ID")]
    pub id_column: String,
    #[structopt(long = "reference", help = "reference language code", default_value = "EN")]
    pub reference: String,
    #[structopt(
        long = "langs",
        help = "target language codes. Discovered from the headers if not set."
    )]
    pub langs: Option<Vec<String>>,
}

impl DatasetArgs {
    pub fn options(&self) -> DatasetOptions {
        DatasetOptions {
            id_column: self.id_column.clone(),
            reference: self.reference.clone(),
            langs: self.langs.clone(),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Detect command and parameters.
///
/// ```sh
/// uhmazing-detect 0.1.0
/// Detect likely annotation errors
///
/// USAGE:
///     uhmazing detect [OPTIONS]
///
/// OPTIONS:
///         --dst <dst>                  output folder [default: outputs/results]
///         --max-length <max-length>    flag spans longer than this (chars) [default: 50]
///         --max-words <max-words>      flag spans with more words than this [default: 10]
///         --src <src>                  annotated dataset [default: data/uh-mazing.csv]
/// ```
pub struct Detect {
    #[structopt(flatten)]
    pub dataset: DatasetArgs,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "output folder",
        default_value = "outputs/results"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "max-length",
        help = "flag spans longer than this (chars)",
        default_value = "50"
    )]
    pub max_length: usize,
    #[structopt(
        long = "max-words",
        help = "flag spans with more words than this",
        default_value = "10"
    )]
    pub max_words: usize,
}

#[derive(Debug, StructOpt)]
pub struct Reannotate {
    #[structopt(flatten)]
    pub dataset: DatasetArgs,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "output folder",
        default_value = "outputs/results"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "min-words",
        help = "select texts having a span of at least this many words",
        default_value = "10"
    )]
    pub min_words: usize,
}

#[derive(Debug, StructOpt)]
pub struct Tokens {
    #[structopt(flatten)]
    pub dataset: DatasetArgs,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "output folder",
        default_value = "outputs/results"
    )]
    pub dst: PathBuf,
    #[structopt(long = "case-sensitive", help = "do not lowercase tokens")]
    pub case_sensitive: bool,
    #[structopt(
        long = "top-n",
        help = "number of tokens printed per language",
        default_value = "15"
    )]
    pub top_n: usize,
}

#[derive(Debug, StructOpt)]
pub struct Report {
    #[structopt(flatten)]
    pub dataset: DatasetArgs,
    #[structopt(
        parse(from_os_str),
        long = "errors",
        help = "detailed error report, as written by `detect`",
        default_value = "outputs/results/annotation_errors.csv"
    )]
    pub errors: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "output folder",
        default_value = "outputs/results"
    )]
    pub dst: PathBuf,
    #[structopt(long = "bins", help = "histogram bins", default_value = "20")]
    pub bins: usize,
}

#[derive(Debug, StructOpt)]
/// Remote access, shared by the forms commands.
///
/// The access token is taken from `--token-file`, then from `GOOGLE_ACCESS_TOKEN`.
/// The Drive folder is taken from `--folder`, then from `DRIVE_FOLDER_ID`.
pub struct FormsArgs {
    #[structopt(
        parse(from_os_str),
        long = "token-file",
        help = "OAuth credentials file holding an access token"
    )]
    pub token_file: Option<PathBuf>,
    #[structopt(long = "folder", help = "Drive folder receiving the forms")]
    pub folder: Option<String>,
    #[structopt(
        long = "completion-code",
        help = "Prolific completion code",
        default_value = "COMPLETED021384"
    )]
    pub completion_code: String,
    #[structopt(long = "langs", help = "target language codes. Task languages if not set.")]
    pub langs: Option<Vec<String>>,
}

#[derive(Debug, StructOpt)]
pub struct FormsTranslation {
    #[structopt(
        parse(from_os_str),
        long = "src",
        help = "translation dataset",
        default_value = "data/translation-dataset-with-timestamps.csv"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "template",
        help = "base form",
        default_value = "forms/base_form.json"
    )]
    pub template: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "links",
        help = "form links output",
        default_value = "data/google_forms.txt"
    )]
    pub links: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "mapping",
        help = "question mapping output",
        default_value = "data/form_item_mapping.csv"
    )]
    pub mapping: PathBuf,
    #[structopt(
        long = "items-per-form",
        help = "number of texts per form",
        default_value = "20"
    )]
    pub items_per_form: usize,
    #[structopt(flatten)]
    pub remote: FormsArgs,
}

#[derive(Debug, StructOpt)]
pub struct FormsReannotation {
    #[structopt(
        parse(from_os_str),
        long = "src",
        help = "targets file, as written by `reannotate`",
        default_value = "outputs/results/reannotation_targets.csv"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "template",
        help = "base form",
        default_value = "forms/base_reannotation_form.json"
    )]
    pub template: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "links",
        help = "form links output",
        default_value = "data/reannotation_forms.txt"
    )]
    pub links: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "mapping",
        help = "question mapping output",
        default_value = "data/reannotation_form_mapping.csv"
    )]
    pub mapping: PathBuf,
    #[structopt(
        long = "split-above",
        help = "split a language in two forms above this many texts",
        default_value = "30"
    )]
    pub split_above: usize,
    #[structopt(flatten)]
    pub remote: FormsArgs,
}
