// Pipeline orchestration: wires cleanup, classification and extraction
// together for one run over a set of brand corpora.

pub mod review;
pub mod run;
