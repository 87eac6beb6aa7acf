//! Foundational types: exposures, segments, currencies, risk weights and the
//! normalisation step that turns raw rows into typed exposures.

pub mod currency;
pub mod exposure;
pub mod normalize;
pub mod segment;
pub mod weight;
