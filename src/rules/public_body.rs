//! Claims on public bodies.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::Exposure;
use crate::core::weight::RiskWeight;

pub fn resolve(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    if exposure.flags().budget_guaranteed {
        return Resolution::new(RiskWeight::Twenty, Rule::PublicBodyBudgetGuaranteed);
    }

    match exposure.external_rating() {
        Some(rating) => Resolution::new(
            ctx.tables.general.weight(Some(rating.bucket)),
            Rule::PublicBodyRated {
                code: rating.code.clone(),
                bucket: rating.bucket,
            },
        ),
        None => Resolution::new(ctx.tables.general.unrated(), Rule::PublicBodyUnrated),
    }
}
