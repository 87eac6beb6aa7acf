//! Segment rule resolvers.
//!
//! One pure function per counterparty segment. Each evaluates its clauses
//! top to bottom and returns the first that applies, together with the
//! weight it assigns. Resolvers read only the exposure and the immutable
//! tables in [`RuleContext`], so they can run on any thread in any order.

pub mod credit_institution;
pub mod dispatch;
pub mod distressed;
pub mod enterprise;
pub mod mdb;
pub mod mortgage;
pub mod public_body;
pub mod retail;
pub mod rule;
pub mod sovereign;

use crate::config::EngineConfig;
use crate::core::exposure::Exposure;
use crate::core::weight::RiskWeight;
use crate::tables::weights::WeightTables;

pub use rule::Rule;

/// Read-only inputs shared by every resolver.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub tables: &'a WeightTables,
    pub config: &'a EngineConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(tables: &'a WeightTables, config: &'a EngineConfig) -> Self {
        Self { tables, config }
    }
}

/// A weight together with the clause that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub weight: RiskWeight,
    pub rule: Rule,
}

impl Resolution {
    pub fn new(weight: RiskWeight, rule: Rule) -> Self {
        Self { weight, rule }
    }
}

/// Signature shared by all segment resolvers.
pub type Resolver = fn(&Exposure, &RuleContext<'_>) -> Resolution;

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn resolve_with(resolver: Resolver, exposure: &Exposure, config: &EngineConfig) -> Resolution {
        resolver(exposure, &RuleContext::new(WeightTables::standard(), config))
    }

    pub fn resolve(resolver: Resolver, exposure: &Exposure) -> Resolution {
        resolve_with(resolver, exposure, &EngineConfig::default())
    }
}
