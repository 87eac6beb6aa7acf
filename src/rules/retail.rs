//! Retail claims: micro-enterprises and individuals.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::Exposure;
use crate::core::weight::RiskWeight;

pub fn resolve_micro_enterprise(_exposure: &Exposure, _ctx: &RuleContext<'_>) -> Resolution {
    Resolution::new(RiskWeight::SeventyFive, Rule::MicroEnterpriseFlat)
}

/// Amounts strictly above the configured threshold leave the retail
/// portfolio and take 100%.
pub fn resolve_individual(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    let threshold = ctx.config.individual_threshold;
    if exposure.amount() > threshold {
        Resolution::new(RiskWeight::Hundred, Rule::IndividualAboveThreshold { threshold })
    } else {
        Resolution::new(
            RiskWeight::SeventyFive,
            Rule::IndividualWithinThreshold { threshold },
        )
    }
}
