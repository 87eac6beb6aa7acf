//! Claims on banks and other credit institutions.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::{Exposure, Maturity};
use crate::core::weight::RiskWeight;

pub fn resolve(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    let domestic = &ctx.config.domestic_currency;

    if exposure.maturity() == Maturity::UpToThreeMonths
        && exposure.currency() == domestic
        && !ctx.config.rating_based_interbank_short_term
    {
        return Resolution::new(
            RiskWeight::Twenty,
            Rule::InterbankShortTermLocal {
                currency: domestic.clone(),
            },
        );
    }

    if exposure.maturity().is_under_one_year() {
        if let Some(rating) = exposure.short_term_rating() {
            return Resolution::new(
                ctx.tables.credit_short_term.weight(Some(rating.bucket)),
                Rule::InterbankShortTermRated {
                    code: rating.code.clone(),
                    bucket: rating.bucket,
                },
            );
        }
    }

    match exposure.external_rating() {
        Some(rating) => Resolution::new(
            ctx.tables.general.weight(Some(rating.bucket)),
            Rule::InterbankRated {
                code: rating.code.clone(),
                bucket: rating.bucket,
            },
        ),
        None => Resolution::new(ctx.tables.general.unrated(), Rule::InterbankUnrated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::exposure::ExposureBuilder;
    use crate::core::segment::Segment;
    use crate::rules::testing;
    use rust_decimal_macros::dec;

    fn bank(maturity: Maturity, currency: &str) -> ExposureBuilder {
        Exposure::builder(Segment::CreditInstitution, dec!(50_000_000))
            .maturity(maturity)
            .currency(currency)
    }

    #[test]
    fn test_short_dated_local_carve_out() {
        let e = bank(Maturity::UpToThreeMonths, "MAD")
            .external_rating("B-")
            .short_term_rating("A-3")
            .build();
        let r = testing::resolve(resolve, &e);
        assert_eq!(r.weight, RiskWeight::Twenty);
        assert!(matches!(r.rule, Rule::InterbankShortTermLocal { .. }));
    }

    #[test]
    fn test_carve_out_disabled_uses_ratings() {
        let config = EngineConfig::default().with_rating_based_interbank_short_term(true);
        let e = bank(Maturity::UpToThreeMonths, "MAD")
            .short_term_rating("A-3")
            .build();
        let r = testing::resolve_with(resolve, &e, &config);
        assert_eq!(r.weight, RiskWeight::Hundred);
        assert!(matches!(r.rule, Rule::InterbankShortTermRated { .. }));
    }

    #[test]
    fn test_foreign_currency_short_dated_uses_short_term_table() {
        let e = bank(Maturity::UpToThreeMonths, "EUR")
            .short_term_rating("A-2")
            .build();
        assert_eq!(testing::resolve(resolve, &e).weight, RiskWeight::Fifty);
    }

    #[test]
    fn test_under_one_year_short_term_rating() {
        let e = bank(Maturity::UnderOneYear, "USD")
            .short_term_rating("P-1")
            .external_rating("BB")
            .build();
        assert_eq!(testing::resolve(resolve, &e).weight, RiskWeight::Twenty);
    }

    #[test]
    fn test_long_maturity_ignores_short_term_rating() {
        let e = bank(Maturity::OneYearOrMore, "USD")
            .short_term_rating("A-1")
            .external_rating("BB")
            .build();
        let r = testing::resolve(resolve, &e);
        assert_eq!(r.weight, RiskWeight::Hundred);
        assert!(matches!(r.rule, Rule::InterbankRated { .. }));
    }

    #[test]
    fn test_unrated() {
        let e = bank(Maturity::Unspecified, "USD").build();
        let r = testing::resolve(resolve, &e);
        assert_eq!(r.weight, RiskWeight::Fifty);
        assert_eq!(r.rule, Rule::InterbankUnrated);
    }
}
