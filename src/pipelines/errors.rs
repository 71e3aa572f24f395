//! Annotation error detection.
//!
//! Scans every target language text of the dataset and reports spans that look like
//! annotation mistakes (see [crate::filtering]).
//!
//! # Outputs
//! - `annotation_errors.csv`: one row per flagged span, with the full span and its context,
//! - `annotation_errors_summary.csv`: same rows without the full texts.
//!
//! Nothing is written if no error is found.
use std::path::PathBuf;

use log::{info, warn};

use crate::error::Error;
use crate::filtering::SpanClassifier;
use crate::io::{write_csv, Dataset, DatasetOptions};
use crate::processing::{scan_row, tally, ErrorRecord};

use super::Pipeline;

pub const ERRORS_FILE: &str = "annotation_errors.csv";
pub const SUMMARY_FILE: &str = "annotation_errors_summary.csv";

/// Languages an example is printed for.
const EXAMPLE_LANGS: [&str; 3] = ["CS", "AR", "ES"];

pub struct ErrorDetection {
    src: PathBuf,
    dst: PathBuf,
    dataset: DatasetOptions,
    max_length: usize,
    max_words: usize,
}

impl ErrorDetection {
    /// `dst` is the output folder.
    pub fn new(src: PathBuf, dst: PathBuf, dataset: DatasetOptions) -> Self {
        Self {
            src,
            dst,
            dataset,
            max_length: 50,
            max_words: 10,
        }
    }

    /// Use custom span thresholds.
    pub fn with_thresholds(mut self, max_length: usize, max_words: usize) -> Self {
        self.max_length = max_length;
        self.max_words = max_words;
        self
    }

    fn print_breakdown(errors: &[ErrorRecord]) {
        println!("\nFound {} potential annotation errors\n", errors.len());
        println!("Errors by language:");
        for (lang, count) in tally(errors.iter().map(|e| e.lang.as_str())) {
            println!("  {}: {} errors", lang, count);
        }
    }

    fn print_examples(errors: &[ErrorRecord]) {
        println!("\n=== EXAMPLES ===\n");
        for lang in EXAMPLE_LANGS {
            if let Some(example) = errors.iter().find(|e| e.lang == lang) {
                println!("{} example:", lang);
                println!("  Sample: {}", example.sample_id);
                println!("  Token length: {} chars", example.token_length);
                println!("  Preview: {}", example.token_preview);
                println!();
            }
        }
    }
}

impl Pipeline<Vec<ErrorRecord>> for ErrorDetection {
    fn run(&self) -> Result<Vec<ErrorRecord>, Error> {
        let dataset = Dataset::from_path(&self.src, &self.dataset)?;
        let classifier = SpanClassifier::new(self.max_length, self.max_words);

        if dataset.is_empty() {
            warn!("{:?} holds no samples", self.src);
        }
        info!(
            "detecting annotation errors (max length {}, max words {})",
            classifier.max_length(),
            classifier.max_words()
        );
        let errors: Vec<ErrorRecord> = dataset
            .samples()
            .iter()
            .flat_map(|sample| scan_row(sample, dataset.schema(), &classifier))
            .collect();

        Self::print_breakdown(&errors);

        if errors.is_empty() {
            println!("No errors detected!");
            return Ok(errors);
        }

        write_csv(&self.dst.join(ERRORS_FILE), &errors)?;
        write_csv(&self.dst.join(SUMMARY_FILE), errors.iter().map(ErrorRecord::summary))?;
        Self::print_examples(&errors);

        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn no_errors_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("data.csv");
        fs::write(&src, "ID,EN_disfluent,CS_disfluent\n1,_uh_,_ehm_\n").unwrap();

        let dst = dir.path().join("results");
        let p = ErrorDetection::new(src, dst.clone(), DatasetOptions::default());
        assert!(p.run().unwrap().is_empty());
        assert!(!dst.join(ERRORS_FILE).exists());
    }

    #[test]
    fn custom_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("data.csv");
        fs::write(&src, "ID,EN_disfluent,CS_disfluent\n1,_uh_,_ehm ehm_\n").unwrap();

        let p = ErrorDetection::new(src, dir.path().to_path_buf(), DatasetOptions::default())
            .with_thresholds(5, 1);
        let errors = p.run().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }
}
