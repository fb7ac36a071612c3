// Cross-brand analysis: frequency aggregation, market classification,
// unique-term extraction and run summaries.

pub mod market;
pub mod summary;
pub mod unique;
