// Cleanup execution: apply reviewed candidates to a brand's keyword list.
//
// Rules, applied in the corpus's original order:
//   - a selected vanity keyword is removed everywhere it occurs
//   - every other keyword keeps only its first occurrence
//
// The second rule covers selected duplicates and also keywords the detector
// never flagged or the reviewer deselected. Once a normalized keyword has been
// emitted it is never emitted again.

use anyhow::Result;
use tracing::debug;

use crate::corpus::models::{BrandCorpus, CleanResult, KeywordEntry};
use crate::corpus::normalize::SeenSet;

/// Produce the cleaned keyword list for one brand.
pub fn execute(corpus: &BrandCorpus, result: &CleanResult) -> Vec<KeywordEntry> {
    let vanity: SeenSet = result
        .brand_keywords
        .iter()
        .filter(|item| item.selected)
        .map(|item| item.keyword.as_str())
        .collect();

    let mut seen = SeenSet::new();
    let cleaned: Vec<KeywordEntry> = corpus
        .keywords
        .iter()
        .filter(|entry| !vanity.contains(&entry.keyword) && seen.first_time(&entry.keyword))
        .cloned()
        .collect();

    debug!(
        brand = corpus.brand_name,
        before = corpus.keywords.len(),
        after = cleaned.len(),
        "Applied cleanup"
    );

    cleaned
}

/// Apply cleanup for every brand.
///
/// `results` must be the detector's output for `corpora`, same length and
/// same brand order. Anything else is a caller bug and is rejected rather
/// than producing a cleaned list under the wrong brand.
pub fn execute_all(corpora: &[BrandCorpus], results: Vec<CleanResult>) -> Result<Vec<CleanResult>> {
    if corpora.len() != results.len() {
        anyhow::bail!(
            "Cannot apply cleanup: {} brand corpora but {} cleanup results",
            corpora.len(),
            results.len()
        );
    }

    corpora
        .iter()
        .zip(results)
        .map(|(corpus, mut result)| {
            if corpus.brand_name != result.brand_name {
                anyhow::bail!(
                    "Cleanup result for brand '{}' paired with corpus '{}'",
                    result.brand_name,
                    corpus.brand_name
                );
            }
            result.cleaned_keywords = execute(corpus, &result);
            Ok(result)
        })
        .collect()
}
