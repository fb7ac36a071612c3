// Review overrides applied between detection and execution.
//
// Detected candidates are all selected by default. A reviewer can keep
// specific keywords or keep every brand term, which deselects the matching
// candidates before cleanup runs.

use tracing::info;

use crate::corpus::models::{CleanReason, CleanResult};

#[derive(Debug, Clone, Default)]
pub struct Review {
    /// Keywords to keep (case-insensitive); deselected in both candidate lists
    pub keep_keywords: Vec<String>,
    /// Keep all brand-vanity keywords instead of removing them
    pub keep_brand_terms: bool,
}

impl Review {
    pub fn is_empty(&self) -> bool {
        self.keep_keywords.is_empty() && !self.keep_brand_terms
    }

    /// Deselect the candidates this review keeps. Returns how many changed.
    pub fn apply(&self, results: &mut [CleanResult]) -> usize {
        if self.is_empty() {
            return 0;
        }

        let before: usize = results.iter().map(CleanResult::selected_count).sum();

        for result in results.iter_mut() {
            if self.keep_brand_terms {
                result.set_all(CleanReason::BrandVanity, false);
            }
            for keyword in &self.keep_keywords {
                result.deselect_keyword(keyword);
            }
        }

        let after: usize = results.iter().map(CleanResult::selected_count).sum();
        let changed = before - after;
        info!(deselected = changed, "Applied review overrides");
        changed
    }
}
