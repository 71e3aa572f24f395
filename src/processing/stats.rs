//! Descriptive statistics.
//!
//! Token frequency tables and histograms, i.e. the data behind the per-language charts.
use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

/// Token counter. Holds token counts and the total number of tokens.
///
/// Ties in [TokenCounter::most_common] keep first-seen order.
#[derive(Debug, Default, Clone)]
pub struct TokenCounter {
    // token -> (count, first seen rank)
    counts: HashMap<String, (u64, usize)>,
    nb_tokens: u64,
}

/// Columns of a frequency table.
pub const FREQUENCY_HEADERS: [&str; 2] = ["Token", "Frequency"];

/// A serializable frequency table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenFrequency {
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "Frequency")]
    pub frequency: u64,
}

impl TokenCounter {
    /// Convinience function to add 1 to a token count.
    /// Creates the entry if the token is not counted yet.
    #[inline]
    pub fn add(&mut self, token: &str) {
        let next_rank = self.counts.len();
        self.counts
            .entry(token.to_string())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, next_rank));

        self.nb_tokens += 1;
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().for_each(|t| self.add(t.as_ref()));
    }

    /// Total number of tokens (not unique).
    pub fn total(&self) -> u64 {
        self.nb_tokens
    }

    /// Number of distinct tokens.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).map(|(c, _)| *c).unwrap_or(0)
    }

    /// Tokens by decreasing frequency.
    pub fn most_common(&self) -> Vec<TokenFrequency> {
        self.counts
            .iter()
            .sorted_by(|a, b| (b.1).0.cmp(&(a.1).0).then_with(|| (a.1).1.cmp(&(b.1).1)))
            .map(|(token, (count, _))| TokenFrequency {
                token: token.clone(),
                frequency: *count,
            })
            .collect()
    }
}

/// Error rate in percent. 0 when there are no tokens.
pub fn error_rate(errors: usize, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        errors as f64 / total as f64 * 100.0
    }
}

/// A histogram bin. `end` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split the `[min, max]` range of `values` into `nb_bins` equal-width bins.
///
/// If every value is equal, the range is widened to `[v - 0.5, v + 0.5]`.
/// Empty input (or zero bins) gives no bins.
pub fn histogram(values: &[usize], nb_bins: usize) -> Vec<Bin> {
    let (min, max) = match values.iter().minmax().into_option() {
        Some((min, max)) => (*min as f64, *max as f64),
        None => return Vec::new(),
    };
    if nb_bins == 0 {
        return Vec::new();
    }

    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / nb_bins as f64;

    let mut bins: Vec<Bin> = (0..nb_bins)
        .map(|i| Bin {
            start: lo + width * i as f64,
            end: lo + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for v in values {
        let idx = (((*v as f64) - lo) / width).floor() as usize;
        // the maximum falls in the last bin
        bins[idx.min(nb_bins - 1)].count += 1;
    }

    bins
}
