// Data models: the types that flow between pipeline stages.
//
// Everything here is run-scoped: built when files are ingested, thrown away
// when the next run starts. Nothing is persisted.

use serde::{Deserialize, Serialize};

use super::normalize::normalize;

/// One observed keyword row from a brand's keyword-research export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Keyword text exactly as it appeared in the source (original case)
    pub keyword: String,
    pub search_volume: Option<f64>,
    pub cpc: Option<f64>,
    /// Keyword difficulty
    pub kd: Option<f64>,
    /// Brand this row came from
    pub source: String,
}

impl KeywordEntry {
    /// An entry with no metrics attached.
    pub fn new(keyword: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            search_volume: None,
            cpc: None,
            kd: None,
            source: source.into(),
        }
    }

    pub fn with_metrics(
        mut self,
        search_volume: Option<f64>,
        cpc: Option<f64>,
        kd: Option<f64>,
    ) -> Self {
        self.search_volume = search_volume;
        self.cpc = cpc;
        self.kd = kd;
        self
    }

    /// Lower-cased keyword used for every equality and containment check.
    pub fn normalized(&self) -> String {
        normalize(&self.keyword)
    }
}

/// A brand's full keyword list as ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandCorpus {
    /// Unique across a run: derived from the source file name
    pub brand_name: String,
    pub keywords: Vec<KeywordEntry>,
    pub original_count: usize,
}

impl BrandCorpus {
    pub fn new(brand_name: impl Into<String>, keywords: Vec<KeywordEntry>) -> Self {
        let original_count = keywords.len();
        Self {
            brand_name: brand_name.into(),
            keywords,
            original_count,
        }
    }
}

/// Why a keyword was flagged for cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanReason {
    /// Occurs more than once inside a single brand's list
    Duplicate,
    /// Contains a fragment of the brand's own name
    #[serde(rename = "brand")]
    BrandVanity,
}

impl CleanReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanReason::Duplicate => "duplicate",
            CleanReason::BrandVanity => "brand",
        }
    }
}

impl std::fmt::Display for CleanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cleanup candidate awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanableItem {
    /// Unique within one analysis run
    pub id: String,
    pub keyword: String,
    pub source: String,
    pub reason: CleanReason,
    /// Whether the cleanup will be applied (defaults to true)
    pub selected: bool,
    /// Occurrence count inside the brand (duplicates only)
    pub count: Option<usize>,
}

/// Cleanup candidates and, once executed, the cleaned list for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanResult {
    pub brand_name: String,
    pub duplicates: Vec<CleanableItem>,
    pub brand_keywords: Vec<CleanableItem>,
    /// Empty until the executor has run for this brand
    pub cleaned_keywords: Vec<KeywordEntry>,
}

impl CleanResult {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            duplicates: Vec::new(),
            brand_keywords: Vec::new(),
            cleaned_keywords: Vec::new(),
        }
    }

    /// All candidates, duplicates first.
    pub fn items(&self) -> impl Iterator<Item = &CleanableItem> {
        self.duplicates.iter().chain(self.brand_keywords.iter())
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut CleanableItem> {
        self.duplicates
            .iter_mut()
            .chain(self.brand_keywords.iter_mut())
    }

    /// Flip one candidate's selection. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items_mut().find(|item| item.id == id) {
            Some(item) => {
                item.selected = !item.selected;
                true
            }
            None => false,
        }
    }

    /// Set one candidate's selection. Returns false if the id is unknown.
    pub fn set_selected(&mut self, id: &str, selected: bool) -> bool {
        match self.items_mut().find(|item| item.id == id) {
            Some(item) => {
                item.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Select or deselect every candidate flagged for `reason`.
    pub fn set_all(&mut self, reason: CleanReason, selected: bool) {
        let list = match reason {
            CleanReason::Duplicate => &mut self.duplicates,
            CleanReason::BrandVanity => &mut self.brand_keywords,
        };
        for item in list.iter_mut() {
            item.selected = selected;
        }
    }

    /// Deselect every candidate for `keyword` (case-insensitive) in both
    /// lists. Returns how many candidates changed.
    pub fn deselect_keyword(&mut self, keyword: &str) -> usize {
        let target = normalize(keyword);
        let mut changed = 0;
        for item in self.items_mut() {
            if item.selected && normalize(&item.keyword) == target {
                item.selected = false;
                changed += 1;
            }
        }
        changed
    }

    pub fn selected_count(&self) -> usize {
        self.items().filter(|item| item.selected).count()
    }
}
