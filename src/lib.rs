// seoking: market, common and unique keyword analysis across brands
//
// This is the library root. Each module corresponds to one stage of the
// keyword pipeline, plus the ingest and output layers around it.

pub mod analysis;
pub mod cleanup;
pub mod config;
pub mod corpus;
pub mod export;
pub mod ingest;
pub mod output;
pub mod pipeline;
