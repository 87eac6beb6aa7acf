//! Distressed (past-due or defaulted) claims, weighted by provisioning level.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::{Exposure, PropertyUsage};
use crate::core::weight::RiskWeight;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const LOW_PROVISION: Decimal = dec!(0.20);
const HIGH_PROVISION: Decimal = dec!(0.50);

/// Provisions held over outstanding balance; zero when nothing is outstanding.
pub fn provision_ratio(exposure: &Exposure) -> Decimal {
    let outstanding = exposure.outstanding_balance();
    if outstanding <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    exposure
        .provision_held()
        .checked_div(outstanding)
        .unwrap_or(Decimal::ZERO)
}

pub fn resolve(exposure: &Exposure, _ctx: &RuleContext<'_>) -> Resolution {
    if exposure.outstanding_balance() <= Decimal::ZERO {
        return Resolution::new(RiskWeight::HundredFifty, Rule::DistressedNoOutstanding);
    }

    let ratio = provision_ratio(exposure);
    let residential = exposure.usage() == PropertyUsage::Residential;
    let weight = match (residential, ratio) {
        (true, r) if r < LOW_PROVISION => RiskWeight::Hundred,
        (true, _) => RiskWeight::Fifty,
        (false, r) if r < LOW_PROVISION => RiskWeight::HundredFifty,
        (false, r) if r <= HIGH_PROVISION => RiskWeight::Hundred,
        (false, _) => RiskWeight::Fifty,
    };

    Resolution::new(
        weight,
        Rule::DistressedProvisioned {
            provision_ratio: ratio,
            residential,
        },
    )
}
