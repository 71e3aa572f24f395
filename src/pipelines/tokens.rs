//! Disfluency token statistics.
//!
//! Counts the marked tokens of every language (reference included) and writes
//! - one `disfluency_tokens_<LANG>.csv` frequency table per language,
//! - `disfluencies_summary.csv` with total and unique token counts per language.
use std::path::PathBuf;

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::io::{write_csv, write_empty_csv, Dataset, DatasetOptions};
use crate::processing::{TokenCounter, FREQUENCY_HEADERS};
use crate::spans::SpanExtractor;

use super::Pipeline;

pub const SUMMARY_FILE: &str = "disfluencies_summary.csv";

/// Name of the frequency table of `lang`.
pub fn tokens_file(lang: &str) -> String {
    format!("disfluency_tokens_{}.csv", lang)
}

#[derive(Debug, Serialize)]
struct LanguageTokens<'a> {
    #[serde(rename = "Language")]
    lang: &'a str,
    #[serde(rename = "Total_Tokens")]
    total: u64,
    #[serde(rename = "Unique_Types")]
    unique: usize,
}

pub struct TokenStats {
    src: PathBuf,
    dst: PathBuf,
    dataset: DatasetOptions,
    extractor: SpanExtractor,
    top_n: usize,
}

impl TokenStats {
    pub fn new(src: PathBuf, dst: PathBuf, dataset: DatasetOptions) -> Self {
        Self {
            src,
            dst,
            dataset,
            extractor: SpanExtractor::default(),
            top_n: 15,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.extractor = SpanExtractor::new(case_sensitive);
        self
    }

    /// Number of tokens printed per language.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Count tokens per language, in schema order.
    fn count(&self, dataset: &Dataset) -> Vec<(String, TokenCounter)> {
        let mut counters: Vec<(String, TokenCounter)> = dataset
            .schema()
            .all_langs()
            .map(|lang| (lang.code().to_string(), TokenCounter::default()))
            .collect();

        for sample in dataset.samples() {
            let texts = sample.all_texts(dataset.schema());
            for ((_, counter), (_, text)) in counters.iter_mut().zip(texts) {
                counter.extend(self.extractor.extract(text));
            }
        }

        for (lang, counter) in &counters {
            info!(
                "{}: {} total tokens, {} unique",
                lang,
                counter.total(),
                counter.unique()
            );
        }
        counters
    }
}

impl Pipeline<Vec<(String, TokenCounter)>> for TokenStats {
    fn run(&self) -> Result<Vec<(String, TokenCounter)>, Error> {
        let dataset = Dataset::from_path(&self.src, &self.dataset)?;
        let counts = self.count(&dataset);

        for (lang, counter) in counts.iter().sorted_by(|a, b| a.0.cmp(&b.0)) {
            let dst = self.dst.join(tokens_file(lang));
            let most_common = counter.most_common();
            if most_common.is_empty() {
                println!("No disfluencies found for {}", lang);
                write_empty_csv(&dst, &FREQUENCY_HEADERS)?;
                continue;
            }

            println!("Top {} disfluency tokens: {}", self.top_n, lang);
            for entry in most_common.iter().take(self.top_n) {
                println!("  {:>6}  {}", entry.frequency, entry.token);
            }

            write_csv(&dst, most_common)?;
        }

        let summary = counts
            .iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .map(|(lang, counter)| LanguageTokens {
                lang,
                total: counter.total(),
                unique: counter.unique(),
            });
        write_csv(&self.dst.join(SUMMARY_FILE), summary)?;

        Ok(counts)
    }
}
