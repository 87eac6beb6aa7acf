//! Weighting and aggregation passes over a materialised exposure batch.

pub mod aggregation;
pub mod parallel;
pub mod weighting;
