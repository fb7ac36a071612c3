// Headline numbers for one analysis run.

use serde::{Deserialize, Serialize};

use super::market::MarketKeywordResult;
use crate::corpus::models::{BrandCorpus, CleanResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_brands: usize,
    /// Keyword rows as ingested, before cleanup
    pub total_original_keywords: usize,
    pub total_cleaned_keywords: usize,
    pub total_common_keywords: usize,
    pub total_market_keywords: usize,
    pub used_threshold: usize,
}

pub fn summarize(
    corpora: &[BrandCorpus],
    clean_results: &[CleanResult],
    market: &MarketKeywordResult,
) -> AnalysisSummary {
    AnalysisSummary {
        total_brands: clean_results.len(),
        total_original_keywords: corpora.iter().map(|c| c.original_count).sum(),
        total_cleaned_keywords: clean_results
            .iter()
            .map(|r| r.cleaned_keywords.len())
            .sum(),
        total_common_keywords: market.total_common_count,
        total_market_keywords: market.market_keywords.len(),
        used_threshold: market.threshold,
    }
}
