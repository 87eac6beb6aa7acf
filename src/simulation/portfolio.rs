use crate::core::currency::CurrencyCode;
use crate::core::exposure::{Exposure, ExposureBuilder, ExposureSet, Maturity, PropertyUsage};
use crate::core::segment::Segment;
use crate::tables::weights::PmaeClass;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Configuration for random portfolio generation.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub exposure_count: usize,
    pub currencies: Vec<CurrencyCode>,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    /// Share of exposures filed under an unrecognised segment label.
    pub unknown_segment_ratio: f64,
    /// Fixed seed for reproducible portfolios.
    pub seed: Option<u64>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            exposure_count: 100,
            currencies: vec![
                CurrencyCode::new("MAD"),
                CurrencyCode::new("EUR"),
                CurrencyCode::new("USD"),
            ],
            min_amount: dec!(10_000),
            max_amount: dec!(50_000_000),
            unknown_segment_ratio: 0.02,
            seed: None,
        }
    }
}

const LONG_TERM: [&str; 14] = [
    "AAA", "AA", "AA-", "A+", "A-", "BBB+", "BBB-", "BB", "B+", "B-", "CCC", "Baa2", "NR", "",
];
const SHORT_TERM: [&str; 6] = ["A-1+", "A-2", "P-3", "B", "NP", ""];
const SOVEREIGNS: [&str; 6] = [
    "Etat marocain",
    "Bank Al-Maghrib",
    "France",
    "Senegal",
    "IMF",
    "Banque Centrale Européenne",
];
const UNKNOWN_SEGMENTS: [&str; 3] = ["leasing", "unknown_type", "fonds"];

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn random_amount<R: Rng>(rng: &mut R, min: Decimal, max: Decimal) -> Decimal {
    let lo = (min * Decimal::ONE_HUNDRED).trunc();
    let hi = (max * Decimal::ONE_HUNDRED).trunc();
    let (lo, hi) = match (i64::try_from(lo), i64::try_from(hi)) {
        (Ok(lo), Ok(hi)) if lo < hi => (lo, hi),
        _ => return min.max(Decimal::ZERO),
    };
    Decimal::new(rng.gen_range(lo..hi), 2)
}

fn maturity<R: Rng>(rng: &mut R) -> Maturity {
    *[
        Maturity::UpToThreeMonths,
        Maturity::UnderOneYear,
        Maturity::OneYearOrMore,
        Maturity::Unspecified,
    ]
    .choose(rng)
    .unwrap_or(&Maturity::Unspecified)
}

fn usage<R: Rng>(rng: &mut R) -> PropertyUsage {
    *[
        PropertyUsage::Residential,
        PropertyUsage::Commercial,
        PropertyUsage::CommercialLease,
        PropertyUsage::Unspecified,
    ]
    .choose(rng)
    .unwrap_or(&PropertyUsage::Unspecified)
}

fn segment_attributes<R: Rng>(
    rng: &mut R,
    segment: &Segment,
    builder: ExposureBuilder,
    amount: Decimal,
) -> ExposureBuilder {
    match segment {
        Segment::Sovereign => builder
            .sub_segment(pick(rng, &SOVEREIGNS))
            .external_rating(pick(rng, &LONG_TERM))
            .pmae_class(PmaeClass::new(rng.gen_range(0..=PmaeClass::MAX))),
        Segment::PublicBody => builder
            .budget_guaranteed(rng.gen_bool(0.3))
            .external_rating(pick(rng, &LONG_TERM)),
        Segment::MultilateralDevelopmentBank => builder
            .bam_agreement(rng.gen_bool(0.3))
            .external_rating(pick(rng, &LONG_TERM)),
        Segment::CreditInstitution => builder
            .maturity(maturity(rng))
            .short_term_rating(pick(rng, &SHORT_TERM))
            .external_rating(pick(rng, &LONG_TERM)),
        Segment::Enterprise => {
            let group = rng.gen_bool(0.3);
            let bank_debt = if group && rng.gen_bool(0.5) {
                random_amount(rng, dec!(100_000_000), dec!(1_000_000_000))
            } else {
                Decimal::ZERO
            };
            builder
                .maturity(maturity(rng))
                .short_term_rating(pick(rng, &SHORT_TERM))
                .bam_agreement(rng.gen_bool(0.1))
                .group_affiliated(group)
                .bank_debt(bank_debt)
                .external_rating(pick(rng, &LONG_TERM))
        }
        Segment::MortgageLoan => {
            let value = random_amount(rng, amount * dec!(0.8), amount * dec!(2.5));
            builder
                .usage(usage(rng))
                .mortgage_guaranteed(rng.gen_bool(0.5))
                .state_convention(rng.gen_bool(0.3))
                .mortgaged_asset_value(value)
        }
        Segment::DistressedDebt => {
            let provision = random_amount(rng, Decimal::ZERO, amount.max(dec!(0.01)));
            builder
                .distressed(true)
                .usage(usage(rng))
                .outstanding_balance(amount)
                .provision_held(provision)
        }
        Segment::MicroEnterprise | Segment::Individual | Segment::Other(_) => builder,
    }
}

/// Generate a random exposure set spanning every segment.
///
/// Useful for property tests, benchmarks and demos.
pub fn generate_random_portfolio(config: &PortfolioConfig) -> ExposureSet {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let currencies: Vec<CurrencyCode> = if config.currencies.is_empty() {
        vec![CurrencyCode::new("MAD")]
    } else {
        config.currencies.clone()
    };

    (0..config.exposure_count)
        .map(|_| {
            let segment = if rng.gen_bool(config.unknown_segment_ratio.clamp(0.0, 1.0)) {
                Segment::parse(pick(&mut rng, &UNKNOWN_SEGMENTS))
            } else {
                Segment::KNOWN[rng.gen_range(0..Segment::KNOWN.len())].clone()
            };
            let amount = random_amount(&mut rng, config.min_amount, config.max_amount);
            let currency = currencies[rng.gen_range(0..currencies.len())].clone();
            let builder = Exposure::builder(segment.clone(), amount).currency(currency);
            segment_attributes(&mut rng, &segment, builder, amount).build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::weighting::WeightingEngine;

    #[test]
    fn test_random_portfolio_generation() {
        let config = PortfolioConfig {
            exposure_count: 200,
            seed: Some(7),
            ..Default::default()
        };
        let set = generate_random_portfolio(&config);
        assert_eq!(set.len(), 200);
        assert!(set
            .exposures()
            .iter()
            .all(|e| e.amount() >= config.min_amount && e.amount() < config.max_amount));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = PortfolioConfig {
            exposure_count: 50,
            seed: Some(42),
            ..Default::default()
        };
        let a = generate_random_portfolio(&config);
        let b = generate_random_portfolio(&config);
        let amounts = |s: &ExposureSet| {
            s.exposures()
                .iter()
                .map(|e| e.amount())
                .collect::<Vec<_>>()
        };
        assert_eq!(amounts(&a), amounts(&b));
    }

    #[test]
    fn test_random_portfolio_weighting() {
        let set = generate_random_portfolio(&PortfolioConfig {
            exposure_count: 500,
            ..Default::default()
        });
        let report = WeightingEngine::default().run(&set);
        assert_eq!(report.results.len(), 500);
        assert_eq!(report.aggregate.total_exposure(), set.gross_exposure());
        assert!(report.aggregate.total_rwa() <= set.gross_exposure() * dec!(1.5));
    }
}
