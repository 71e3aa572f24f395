//! Error report.
//!
//! Combines the output of [super::ErrorDetection] with the dataset token counts:
//! errors, token totals and error rate per language (`error_summary.csv`),
//! and a length histogram of the flagged spans of the most affected languages
//! (`error_length_distribution.csv`).
//!
//! Languages without errors are left out, except the reference language which is always
//! listed with 0 errors: it is the gold standard.
use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::{write_csv, Dataset, DatasetOptions};
use crate::processing::{error_rate, histogram};
use crate::spans;

use super::Pipeline;

pub const SUMMARY_FILE: &str = "error_summary.csv";
pub const DISTRIBUTION_FILE: &str = "error_length_distribution.csv";

/// The columns of an error report we need.
#[derive(Debug, Deserialize)]
struct ErrorRow {
    #[serde(rename = "Language")]
    lang: String,
    #[serde(rename = "Token_Length")]
    token_length: usize,
}

/// Error statistics of a language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageErrorSummary {
    #[serde(rename = "Language")]
    pub lang: String,
    #[serde(rename = "Errors")]
    pub errors: usize,
    #[serde(rename = "Total_Tokens")]
    pub total_tokens: u64,
    #[serde(rename = "Error_Rate_%", serialize_with = "two_decimals")]
    pub error_rate: f64,
}

fn two_decimals<S: serde::Serializer>(rate: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.2}", rate))
}

#[derive(Debug, Serialize)]
struct DistributionRow<'a> {
    #[serde(rename = "Language")]
    lang: &'a str,
    #[serde(rename = "Bin_Start")]
    start: f64,
    #[serde(rename = "Bin_End")]
    end: f64,
    #[serde(rename = "Count")]
    count: usize,
}

/// Mean of the listed error rates.
pub fn mean_error_rate(summary: &[LanguageErrorSummary]) -> Option<f64> {
    if summary.is_empty() {
        return None;
    }
    Some(summary.iter().map(|s| s.error_rate).sum::<f64>() / summary.len() as f64)
}

pub struct ErrorReport {
    src: PathBuf,
    errors: PathBuf,
    dst: PathBuf,
    dataset: DatasetOptions,
    nb_bins: usize,
    nb_langs: usize,
}

impl ErrorReport {
    /// `src` is the dataset, `errors` the detailed error report.
    pub fn new(src: PathBuf, errors: PathBuf, dst: PathBuf, dataset: DatasetOptions) -> Self {
        Self {
            src,
            errors,
            dst,
            dataset,
            nb_bins: 20,
            nb_langs: 3,
        }
    }

    /// Number of histogram bins.
    pub fn bins(mut self, nb_bins: usize) -> Self {
        self.nb_bins = nb_bins;
        self
    }

    fn read_errors(&self) -> Result<Vec<ErrorRow>, Error> {
        let f = File::open(&self.errors)?;
        let rows = csv::Reader::from_reader(f)
            .deserialize()
            .collect::<Result<Vec<ErrorRow>, _>>()?;
        info!("loaded {} errors from {:?}", rows.len(), self.errors);
        Ok(rows)
    }

    /// Raw token count per language.
    fn total_tokens(dataset: &Dataset) -> HashMap<String, u64> {
        let mut totals: HashMap<String, u64> = dataset
            .schema()
            .all_langs()
            .map(|l| (l.code().to_string(), 0))
            .collect();

        for sample in dataset.samples() {
            for (lang, text) in sample.all_texts(dataset.schema()) {
                let nb = text.map(|t| spans::spans_of(t).count()).unwrap_or(0) as u64;
                *totals.entry(lang.to_string()).or_insert(0) += nb;
            }
        }
        totals
    }

    /// Per-language summaries, most errors first.
    ///
    /// Only languages with at least one error are listed, plus the reference.
    fn summarize(
        errors: &[ErrorRow],
        totals: &HashMap<String, u64>,
        reference: &str,
    ) -> Vec<LanguageErrorSummary> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        counts.insert(reference, 0);
        for e in errors {
            *counts.entry(e.lang.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(lang, nb_errors)| {
                let total = totals.get(lang).copied().unwrap_or(0);
                LanguageErrorSummary {
                    lang: lang.to_string(),
                    errors: nb_errors,
                    total_tokens: total,
                    error_rate: error_rate(nb_errors, total),
                }
            })
            .sorted_by(|a, b| b.errors.cmp(&a.errors).then_with(|| a.lang.cmp(&b.lang)))
            .collect()
    }
}

impl Pipeline<Vec<LanguageErrorSummary>> for ErrorReport {
    fn run(&self) -> Result<Vec<LanguageErrorSummary>, Error> {
        let errors = self.read_errors()?;
        let dataset = Dataset::from_path(&self.src, &self.dataset)?;
        let totals = Self::total_tokens(&dataset);
        let summary = Self::summarize(&errors, &totals, dataset.schema().reference().code());

        write_csv(&self.dst.join(SUMMARY_FILE), &summary)?;

        // length distribution of the most affected languages
        let mut distribution = Vec::new();
        for lang_summary in summary
            .iter()
            .filter(|s| s.errors > 0)
            .take(self.nb_langs)
        {
            let lengths: Vec<usize> = errors
                .iter()
                .filter(|e| e.lang == lang_summary.lang)
                .map(|e| e.token_length)
                .collect();
            for bin in histogram(&lengths, self.nb_bins) {
                distribution.push(DistributionRow {
                    lang: &lang_summary.lang,
                    start: bin.start,
                    end: bin.end,
                    count: bin.count,
                });
            }
        }
        write_csv(&self.dst.join(DISTRIBUTION_FILE), distribution)?;

        println!("\n=== SUMMARY ===\n");
        for s in &summary {
            let marker = if s.errors == 0 { '✓' } else { '✗' };
            println!(
                "{} {}: {:3} errors / {} tokens ({:5.2}%)",
                marker, s.lang, s.errors, s.total_tokens, s.error_rate
            );
        }

        let total_errors: usize = summary.iter().map(|s| s.errors).sum();
        println!("\nTotal errors across all languages: {}", total_errors);
        if let Some(mean) = mean_error_rate(&summary) {
            println!("Average error rate: {:.2}%", mean);
        }

        Ok(summary)
    }
}
