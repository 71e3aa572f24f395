//! Re-annotation target selection.
//!
//! Finds every (ID, Language) pair whose annotation should be redone,
//! and writes them to `reannotation_targets.csv` with their markers removed.
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;
use crate::io::{write_csv, Dataset, DatasetOptions};
use crate::processing::{dedup_targets, tally, ReannotationCandidate, ReannotationSelector};

use super::Pipeline;

pub const TARGETS_FILE: &str = "reannotation_targets.csv";

pub struct Reannotation {
    src: PathBuf,
    dst: PathBuf,
    dataset: DatasetOptions,
    min_words: usize,
}

impl Reannotation {
    pub fn new(src: PathBuf, dst: PathBuf, dataset: DatasetOptions) -> Self {
        Self {
            src,
            dst,
            dataset,
            min_words: 10,
        }
    }

    /// Minimum number of words for a span to be considered too long.
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    fn print_breakdown(targets: &[ReannotationCandidate]) {
        println!(
            "Found {} (ID, Language) pairs needing reannotation\n",
            targets.len()
        );

        println!("By language:");
        for (lang, count) in tally(targets.iter().map(|t| t.lang.as_str())) {
            println!("  {}: {}", lang, count);
        }

        println!("\nBy reason:");
        for (reason, count) in tally(targets.iter().flat_map(|t| t.reasons.iter().copied())) {
            println!("  {}: {}", reason, count);
        }
    }
}

impl Pipeline<Vec<ReannotationCandidate>> for Reannotation {
    fn run(&self) -> Result<Vec<ReannotationCandidate>, Error> {
        let dataset = Dataset::from_path(&self.src, &self.dataset)?;
        let selector = ReannotationSelector::new(self.min_words);

        let candidates: Vec<ReannotationCandidate> = dataset
            .samples()
            .iter()
            .flat_map(|sample| selector.select(sample, dataset.schema()))
            .collect();

        let nb_candidates = candidates.len();
        let targets = dedup_targets(candidates);
        if targets.len() != nb_candidates {
            debug!(
                "dropped {} duplicate (ID, Language) pairs",
                nb_candidates - targets.len()
            );
        }

        Self::print_breakdown(&targets);

        let dst = self.dst.join(TARGETS_FILE);
        write_csv(&dst, &targets)?;
        info!("saved targets to {:?}", dst);

        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn writes_targets() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("data.csv");
        fs::write(
            &src,
            "ID,EN_disfluent,CS_disfluent,AR_disfluent\n1,I _uh_ go,jdu,_آه_\n2,_um_,_ehm_,نذهب\n",
        )
        .unwrap();

        let p = Reannotation::new(src, dir.path().to_path_buf(), DatasetOptions::default());
        let targets = p.run().unwrap();
        let keys: Vec<_> = targets.iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec![("1", "CS"), ("2", "AR")]);

        let written = fs::read_to_string(dir.path().join(TARGETS_FILE)).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("ID,Language,Reason,EN_disfluent,Text"));
        assert_eq!(lines.next(), Some("1,CS,missing_underscores,I _uh_ go,jdu"));
    }
}
