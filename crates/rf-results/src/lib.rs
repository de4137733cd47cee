//! rf-results: result records for regenflow analyses.

pub mod types;

pub use types::HeatingResults;
