// Intra-brand cleanup: flag duplicate and vanity keywords, then apply the
// reviewed selections.

pub mod detect;
pub mod execute;
