//! Real-estate loans.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::{Exposure, PropertyUsage};
use crate::core::weight::RiskWeight;
use rust_decimal::Decimal;

/// Loan-to-value of the exposure, `None` unless both sides are positive.
pub fn loan_to_value(exposure: &Exposure) -> Option<Decimal> {
    let value = exposure.mortgaged_asset_value();
    if exposure.amount() > Decimal::ZERO && value > Decimal::ZERO {
        exposure.amount().checked_div(value)
    } else {
        None
    }
}

pub fn resolve(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    let usage = exposure.usage();
    let flags = exposure.flags();

    if usage == PropertyUsage::Residential {
        return Resolution::new(RiskWeight::ThirtyFive, Rule::MortgageResidential);
    }
    if usage.is_commercial() && flags.mortgage_guaranteed {
        return Resolution::new(RiskWeight::Hundred, Rule::MortgageCommercialGuaranteed);
    }
    if usage == PropertyUsage::CommercialLease {
        return Resolution::new(RiskWeight::Fifty, Rule::MortgageCommercialLease);
    }
    if flags.state_convention {
        if let Some(ltv) = loan_to_value(exposure) {
            if ltv <= ctx.config.mortgage_ltv_cap {
                return Resolution::new(
                    RiskWeight::SeventyFive,
                    Rule::MortgageStateConvention { loan_to_value: ltv },
                );
            }
        }
    }

    Resolution::new(RiskWeight::ThirtyFive, Rule::MortgageResidentialFallback)
}
