// Cleanup detection: find keywords a brand's list should probably lose.
//
// Two independent scans over one brand's keywords:
//   - duplicates: the same keyword (case-insensitive) appears more than once
//   - vanity terms: the keyword contains a fragment of the brand's own name,
//     which reflects branded search rather than market demand
//
// Nothing is removed here. The output is a list of candidates, all selected
// by default, for someone to review before the executor applies them.

use tracing::debug;

use crate::corpus::models::{BrandCorpus, CleanReason, CleanResult, CleanableItem};
use crate::corpus::normalize::{normalize, NormalizedIndex, SeenSet};

/// Fragments shorter than this never count as brand matches.
const MIN_FRAGMENT_CHARS: usize = 3;

/// Hands out candidate ids for one analysis run.
///
/// Scoped to a run rather than the process so that two runs over the same
/// input produce the same ids.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("clean_{}", self.last)
    }
}

/// Split a brand name into the lower-cased fragments used for vanity matching.
///
/// "Nike-Running_Club" -> ["nike", "running", "club"]. Fragments of two
/// characters or fewer are dropped so "LA Gear" does not flag every keyword
/// containing "la".
pub fn brand_fragments(brand_name: &str) -> Vec<String> {
    normalize(brand_name)
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| part.chars().count() >= MIN_FRAGMENT_CHARS)
        .map(str::to_string)
        .collect()
}

/// Detect cleanup candidates for one brand with a fresh id sequence.
pub fn detect(corpus: &BrandCorpus) -> CleanResult {
    detect_with(corpus, &mut IdSequence::new())
}

/// Detect cleanup candidates for one brand, drawing ids from `ids`.
pub fn detect_with(corpus: &BrandCorpus, ids: &mut IdSequence) -> CleanResult {
    let mut counts: NormalizedIndex<usize> = NormalizedIndex::new();
    for entry in &corpus.keywords {
        counts.record(&entry.keyword, || 1, |count| *count += 1);
    }

    let fragments = brand_fragments(&corpus.brand_name);

    let mut result = CleanResult::new(corpus.brand_name.clone());
    let mut seen_duplicates = SeenSet::new();
    let mut seen_vanity = SeenSet::new();

    for entry in &corpus.keywords {
        let count = counts.get(&entry.keyword).copied().unwrap_or(0);
        if count > 1 && seen_duplicates.first_time(&entry.keyword) {
            result.duplicates.push(CleanableItem {
                id: ids.next_id(),
                keyword: entry.keyword.clone(),
                source: corpus.brand_name.clone(),
                reason: CleanReason::Duplicate,
                selected: true,
                count: Some(count),
            });
        }

        let lower = entry.normalized();
        let is_vanity = fragments.iter().any(|fragment| lower.contains(fragment.as_str()));
        if is_vanity && seen_vanity.first_time(&entry.keyword) {
            result.brand_keywords.push(CleanableItem {
                id: ids.next_id(),
                keyword: entry.keyword.clone(),
                source: corpus.brand_name.clone(),
                reason: CleanReason::BrandVanity,
                selected: true,
                count: None,
            });
        }
    }

    debug!(
        brand = corpus.brand_name,
        keywords = corpus.keywords.len(),
        duplicates = result.duplicates.len(),
        vanity = result.brand_keywords.len(),
        "Detected cleanup candidates"
    );

    result
}

/// Detect candidates for every brand, in corpus order, with ids unique
/// across the whole batch.
pub fn detect_all(corpora: &[BrandCorpus]) -> Vec<CleanResult> {
    let mut ids = IdSequence::new();
    corpora
        .iter()
        .map(|corpus| detect_with(corpus, &mut ids))
        .collect()
}
