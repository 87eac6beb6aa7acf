//! # rwa-engine
//!
//! Standardised credit risk weighting under Bank Al-Maghrib rules.
//!
//! Each credit exposure is mapped to one regulatory risk weight from a
//! closed scale (0%, 20%, 35%, 50%, 75%, 100%, 150%), turned into a
//! risk-weighted asset amount, and aggregated per segment and portfolio.
//! Every weight carries the clause that produced it, for audit.
//!
//! ## Architecture
//!
//! - **core**: exposures, segments, currencies, the weight scale, and the
//!   normalisation of loosely typed input rows
//! - **tables**: rating buckets and the static per-category weight tables
//! - **rules**: one resolver per counterparty segment, plus dispatch
//! - **engine**: weighting, aggregation and optional parallel execution
//! - **config**: regulatory thresholds and execution settings
//! - **simulation**: random portfolio generation

pub mod config;
pub mod core;
pub mod engine;
pub mod rules;
pub mod simulation;
pub mod tables;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::core::currency::CurrencyCode;
    pub use crate::core::exposure::{Exposure, ExposureSet, Maturity, PropertyUsage};
    pub use crate::core::normalize::{normalize, DataQualityIssue, RawExposure};
    pub use crate::core::segment::Segment;
    pub use crate::core::weight::RiskWeight;
    pub use crate::engine::aggregation::{PortfolioAggregate, SegmentAggregate};
    pub use crate::engine::weighting::{RwaReport, WeightingEngine, WeightingResult};
    pub use crate::rules::Rule;
}
