//! Claims on multilateral development banks.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::Exposure;
use crate::core::weight::RiskWeight;

pub fn resolve(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    if exposure.flags().bam_agreement {
        return Resolution::new(RiskWeight::Zero, Rule::MdbListed);
    }

    match exposure.external_rating() {
        Some(rating) => Resolution::new(
            ctx.tables.mdb.weight(Some(rating.bucket)),
            Rule::MdbRated {
                code: rating.code.clone(),
                bucket: rating.bucket,
            },
        ),
        None => Resolution::new(ctx.tables.mdb.unrated(), Rule::MdbUnrated),
    }
}
