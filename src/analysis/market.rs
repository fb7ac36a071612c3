// Market keyword classification.
//
// Merge every brand's cleaned keywords, count how often each keyword occurs
// across the whole set, and split the result into two tiers:
//
//   common: frequency >= 2 (shared by at least two brands, since each
//           cleaned list holds a keyword at most once)
//   market: common keywords whose frequency also meets the threshold
//
// The threshold adapts to data volume. With few common keywords every one of
// them is a market keyword (threshold 2); once the common set grows past the
// big-data limit the bar rises (threshold 4) so the market set stays focused.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::models::{CleanResult, KeywordEntry};
use crate::corpus::normalize::{backfill, NormalizedIndex};

/// Minimum cross-brand frequency for a keyword to be "common".
pub const COMMON_MIN_FREQUENCY: usize = 2;

/// Thresholds for market classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Threshold used when the common set is larger than `big_data_limit`
    pub common_threshold_high: usize,
    /// Threshold used otherwise
    pub common_threshold_low: usize,
    pub big_data_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            common_threshold_high: 4,
            common_threshold_low: 2,
            big_data_limit: 700,
        }
    }
}

impl AnalysisConfig {
    /// Pick the market threshold for a common set of `common_count` keywords.
    ///
    /// Exactly `big_data_limit` still uses the low threshold.
    pub fn threshold_for(&self, common_count: usize) -> usize {
        if common_count > self.big_data_limit {
            self.common_threshold_high
        } else {
            self.common_threshold_low
        }
    }
}

/// Cross-brand aggregate for one normalized keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    /// Casing from the first occurrence
    pub keyword: String,
    /// Occurrences across all cleaned lists
    pub frequency: usize,
    /// Distinct contributing brands, in the order they were first seen
    pub sources: Vec<String>,
    pub search_volume: Option<f64>,
    pub cpc: Option<f64>,
    pub kd: Option<f64>,
}

impl KeywordFrequency {
    fn first(entry: &KeywordEntry) -> Self {
        Self {
            keyword: entry.keyword.clone(),
            frequency: 1,
            sources: vec![entry.source.clone()],
            search_volume: entry.search_volume,
            cpc: entry.cpc,
            kd: entry.kd,
        }
    }

    fn absorb(&mut self, entry: &KeywordEntry) {
        self.frequency += 1;
        if !self.sources.contains(&entry.source) {
            self.sources.push(entry.source.clone());
        }
        backfill(&mut self.search_volume, entry.search_volume);
        backfill(&mut self.cpc, entry.cpc);
        backfill(&mut self.kd, entry.kd);
    }
}

/// Common and market tiers for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketKeywordResult {
    /// Frequency >= 2, highest frequency first
    pub common_keywords: Vec<KeywordFrequency>,
    /// Frequency >= threshold, highest frequency first; a subset of common
    pub market_keywords: Vec<KeywordFrequency>,
    pub threshold: usize,
    pub total_common_count: usize,
}

/// Aggregate every occurrence of every cleaned keyword, case-insensitively.
///
/// Brands are walked in order, then each brand's list in order; the result
/// is in first-discovery order.
pub fn aggregate(clean_results: &[CleanResult]) -> Vec<KeywordFrequency> {
    let mut index: NormalizedIndex<KeywordFrequency> = NormalizedIndex::new();

    for entry in clean_results
        .iter()
        .flat_map(|result| result.cleaned_keywords.iter())
    {
        index.record(
            &entry.keyword,
            || KeywordFrequency::first(entry),
            |existing| existing.absorb(entry),
        );
    }

    index.into_values()
}

/// Classify cleaned keywords into common and market tiers.
pub fn analyze(clean_results: &[CleanResult], config: &AnalysisConfig) -> MarketKeywordResult {
    let aggregated = aggregate(clean_results);
    let distinct = aggregated.len();

    let mut common_keywords: Vec<KeywordFrequency> = aggregated
        .into_iter()
        .filter(|kf| kf.frequency >= COMMON_MIN_FREQUENCY)
        .collect();

    let total_common_count = common_keywords.len();
    let threshold = config.threshold_for(total_common_count);

    // Stable sort: equal frequencies stay in discovery order
    common_keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let market_keywords: Vec<KeywordFrequency> = common_keywords
        .iter()
        .filter(|kf| kf.frequency >= threshold)
        .cloned()
        .collect();

    info!(
        brands = clean_results.len(),
        distinct,
        common = total_common_count,
        market = market_keywords.len(),
        threshold,
        "Classified market keywords"
    );

    MarketKeywordResult {
        common_keywords,
        market_keywords,
        threshold,
        total_common_count,
    }
}
