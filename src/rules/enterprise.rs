//! Claims on enterprises.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::Exposure;
use crate::core::weight::RiskWeight;

pub fn resolve(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    if exposure.maturity().is_under_one_year() {
        if let Some(rating) = exposure.short_term_rating() {
            return Resolution::new(
                ctx.tables.enterprise_short_term.weight(Some(rating.bucket)),
                Rule::EnterpriseShortTermRated {
                    code: rating.code.clone(),
                    bucket: rating.bucket,
                },
            );
        }
    }

    let flags = exposure.flags();
    if flags.bam_agreement {
        return Resolution::new(RiskWeight::Hundred, Rule::EnterpriseBamAgreement);
    }

    let threshold = ctx.config.large_exposure_threshold;
    if flags.group_affiliated && exposure.bank_debt() >= threshold {
        return Resolution::new(
            RiskWeight::HundredFifty,
            Rule::EnterpriseLargeGroup {
                bank_debt: exposure.bank_debt(),
                threshold,
            },
        );
    }

    match exposure.external_rating() {
        Some(rating) => Resolution::new(
            ctx.tables.enterprise.weight(Some(rating.bucket)),
            Rule::EnterpriseRated {
                code: rating.code.clone(),
                bucket: rating.bucket,
            },
        ),
        None => Resolution::new(ctx.tables.enterprise.unrated(), Rule::EnterpriseUnrated),
    }
}
