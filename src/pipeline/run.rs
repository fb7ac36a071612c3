// Full analysis run: detect -> review -> clean -> classify -> extract.
//
// Every stage is a pure function of its input, so the same corpora and
// review always produce the same report.

use std::collections::HashSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::review::Review;
use crate::analysis::market::{self, AnalysisConfig, MarketKeywordResult};
use crate::analysis::summary::{self, AnalysisSummary};
use crate::analysis::unique::{self, UniqueKeywordResult};
use crate::cleanup::{detect, execute};
use crate::corpus::models::{BrandCorpus, CleanResult};

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub clean_results: Vec<CleanResult>,
    pub market: MarketKeywordResult,
    pub unique: Vec<UniqueKeywordResult>,
    pub summary: AnalysisSummary,
}

/// Brand names key every per-brand result, so they must not repeat.
pub fn ensure_unique_brands(corpora: &[BrandCorpus]) -> Result<()> {
    let mut seen = HashSet::new();
    for corpus in corpora {
        if !seen.insert(corpus.brand_name.as_str()) {
            anyhow::bail!(
                "Brand '{}' appears more than once; rename one of the source files",
                corpus.brand_name
            );
        }
    }
    Ok(())
}

/// Run the whole pipeline over `corpora`.
pub fn run(
    corpora: &[BrandCorpus],
    review: &Review,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    ensure_unique_brands(corpora)?;

    let mut detected = detect::detect_all(corpora);
    review.apply(&mut detected);

    let clean_results = execute::execute_all(corpora, detected)?;
    let market = market::analyze(&clean_results, config);
    let unique = unique::extract(&clean_results, &market);
    let summary = summary::summarize(corpora, &clean_results, &market);

    info!(
        brands = summary.total_brands,
        original = summary.total_original_keywords,
        cleaned = summary.total_cleaned_keywords,
        common = summary.total_common_keywords,
        market = summary.total_market_keywords,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        clean_results,
        market,
        unique,
        summary,
    })
}
