// Unique (domain) keyword extraction.
//
// A brand's unique keywords are its cleaned keywords minus every common
// keyword. All common keywords are excluded, not just the market tier, so
// what remains appears in exactly one brand's cleaned list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::market::MarketKeywordResult;
use crate::corpus::models::{CleanResult, KeywordEntry};
use crate::corpus::normalize::SeenSet;

/// Keywords only one brand ranks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueKeywordResult {
    pub brand_name: String,
    /// In the brand's cleaned-list order; may be empty
    pub unique_keywords: Vec<KeywordEntry>,
}

/// Strip common keywords from each brand's cleaned list, in brand order.
pub fn extract(
    clean_results: &[CleanResult],
    market: &MarketKeywordResult,
) -> Vec<UniqueKeywordResult> {
    let excluded: SeenSet = market
        .common_keywords
        .iter()
        .map(|kf| kf.keyword.as_str())
        .collect();

    clean_results
        .iter()
        .map(|result| {
            let unique_keywords: Vec<KeywordEntry> = result
                .cleaned_keywords
                .iter()
                .filter(|entry| !excluded.contains(&entry.keyword))
                .cloned()
                .collect();

            debug!(
                brand = result.brand_name,
                cleaned = result.cleaned_keywords.len(),
                unique = unique_keywords.len(),
                "Extracted unique keywords"
            );

            UniqueKeywordResult {
                brand_name: result.brand_name.clone(),
                unique_keywords,
            }
        })
        .collect()
}
