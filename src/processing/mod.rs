/*! Row processing

Row-level logic shared by the batch pipelines:
- [scan] flags likely annotation errors,
- [select] picks texts that need a fresh annotation,
- [stats] counts tokens and builds histograms.
!*/
pub mod scan;
pub mod select;
pub mod stats;

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

pub use scan::{scan_row, ErrorRecord, ErrorSummary};
pub use select::{dedup_targets, select_targets, ReannotationCandidate, ReannotationSelector};
pub use stats::{error_rate, histogram, Bin, TokenCounter, TokenFrequency, FREQUENCY_HEADERS};

/// Keep the first `max_chars` characters of `text`, adding `...` if something was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Count occurrences of each key, most frequent first.
/// Ties are ordered by key.
pub fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}
