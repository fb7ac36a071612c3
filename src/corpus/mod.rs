// Corpus model: the keyword lists every pipeline stage reads and writes.

pub mod models;
pub mod normalize;
