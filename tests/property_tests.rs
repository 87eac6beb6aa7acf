use proptest::prelude::*;
use rwa_engine::config::EngineConfig;
use rwa_engine::core::exposure::{Exposure, ExposureFlags, Maturity, PropertyUsage};
use rwa_engine::core::segment::Segment;
use rwa_engine::core::weight::RiskWeight;
use rwa_engine::engine::aggregation::PortfolioAggregate;
use rwa_engine::engine::weighting::WeightingEngine;
use rwa_engine::tables::weights::PmaeClass;
use rust_decimal::Decimal;

fn arb_segment() -> impl Strategy<Value = Segment> {
    let mut pool = Segment::KNOWN.to_vec();
    pool.push(Segment::parse("unknown_type"));
    pool.push(Segment::parse("leasing"));
    prop::sample::select(pool)
}

/// Ratings drawn from valid codes, markers and garbage.
fn arb_rating() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "AAA", "AA-", "A+", "A", "BBB", "BBB-", "BB+", "B", "B-", "CCC", "D", "Aa2", "Baa1",
        "NR", "", "???", "XYZ",
    ])
}

fn arb_short_rating() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["A-1+", "A-1", "A-2", "P-3", "NP", "", "Q"])
}

fn arb_sub_segment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Etat marocain",
        "BAM",
        "France",
        "BIS",
        "Commission européenne",
        "",
    ])
}

/// Amount in cents, 0 to 10 billion.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_flags() -> impl Strategy<Value = ExposureFlags> {
    prop::array::uniform6(any::<bool>()).prop_map(|f| ExposureFlags {
        budget_guaranteed: f[0],
        distressed: f[1],
        bam_agreement: f[2],
        group_affiliated: f[3],
        mortgage_guaranteed: f[4],
        state_convention: f[5],
    })
}

fn arb_maturity() -> impl Strategy<Value = Maturity> {
    prop::sample::select(vec![
        Maturity::UpToThreeMonths,
        Maturity::UnderOneYear,
        Maturity::OneYearOrMore,
        Maturity::Unspecified,
    ])
}

fn arb_usage() -> impl Strategy<Value = PropertyUsage> {
    prop::sample::select(vec![
        PropertyUsage::Residential,
        PropertyUsage::Commercial,
        PropertyUsage::CommercialLease,
        PropertyUsage::Unspecified,
    ])
}

fn arb_exposure() -> impl Strategy<Value = Exposure> {
    (
        (arb_segment(), arb_amount(), arb_sub_segment()),
        (
            prop::sample::select(vec!["MAD", "EUR", "USD"]),
            arb_rating(),
            arb_short_rating(),
            prop::option::of(0u8..=7),
        ),
        (arb_maturity(), arb_usage(), arb_flags()),
        (arb_amount(), arb_amount(), arb_amount(), arb_amount()),
    )
        .prop_map(
            |(
                (segment, amount, sub_segment),
                (currency, rating, short_rating, pmae),
                (maturity, usage, flags),
                (bank_debt, asset_value, outstanding, provision),
            )| {
                Exposure::builder(segment, amount)
                    .sub_segment(sub_segment)
                    .currency(currency)
                    .external_rating(rating)
                    .short_term_rating(short_rating)
                    .pmae_class(pmae.and_then(PmaeClass::new))
                    .maturity(maturity)
                    .usage(usage)
                    .flags(flags)
                    .bank_debt(bank_debt)
                    .mortgaged_asset_value(asset_value)
                    .outstanding_balance(outstanding)
                    .provision_held(provision)
                    .build()
            },
        )
}

fn arb_exposures() -> impl Strategy<Value = Vec<Exposure>> {
    prop::collection::vec(arb_exposure(), 0..60)
}

fn arb_config() -> impl Strategy<Value = EngineConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(rating_based, flag_routing)| {
        EngineConfig::default()
            .with_rating_based_interbank_short_term(rating_based)
            .with_distressed_flag_override(flag_routing)
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Every weight is on the closed regulatory scale.
    //
    // Whatever the inputs, including garbage ratings and unknown
    // segments, the weight is one of 0, 20, 35, 50, 75, 100 or 150%.
    // ===================================================================
    #[test]
    fn weight_is_on_closed_scale(e in arb_exposure(), config in arb_config()) {
        let r = WeightingEngine::new(config).weigh(&e);
        prop_assert!(RiskWeight::ALL.contains(&r.weight));
        prop_assert!(RiskWeight::try_from(r.weight.as_decimal()).is_ok());
    }

    // ===================================================================
    // INVARIANT 2: RWA = amount × weight, exactly.
    // ===================================================================
    #[test]
    fn rwa_is_amount_times_weight(e in arb_exposure()) {
        let r = WeightingEngine::default().weigh(&e);
        prop_assert_eq!(r.rwa, e.amount() * r.weight.as_decimal());
        prop_assert!(r.rwa >= Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 3: Total RWA is the sum of the parts, in any order.
    //
    // Reversing and rotating the input must not change any total.
    // ===================================================================
    #[test]
    fn aggregation_is_order_independent(exposures in arb_exposures(), shift in 0usize..60) {
        let engine = WeightingEngine::default();
        let results = engine.weigh_all(&exposures);
        let baseline = PortfolioAggregate::from_results(&results);

        let sum: Decimal = results.iter().map(|r| r.rwa).sum();
        prop_assert_eq!(baseline.total_rwa(), sum);

        let mut permuted = results.clone();
        permuted.reverse();
        if !permuted.is_empty() {
            let k = shift % permuted.len();
            permuted.rotate_left(k);
        }
        prop_assert_eq!(PortfolioAggregate::from_results(&permuted), baseline);
    }

    // ===================================================================
    // INVARIANT 4: Merging shards equals aggregating the whole set.
    //
    // Split at any point, aggregate each side, merge either way round.
    // ===================================================================
    #[test]
    fn shard_merge_is_associative(exposures in arb_exposures(), split in 0usize..60, split2 in 0usize..60) {
        let results = WeightingEngine::default().weigh_all(&exposures);
        let whole = PortfolioAggregate::from_results(&results);

        let i = split.min(results.len());
        let j = split2.min(results.len()).max(i);
        let a = PortfolioAggregate::from_results(&results[..i]);
        let b = PortfolioAggregate::from_results(&results[i..j]);
        let c = PortfolioAggregate::from_results(&results[j..]);

        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(c.merge(b));
        prop_assert_eq!(&left, &whole);
        prop_assert_eq!(&right, &whole);
    }

    // ===================================================================
    // INVARIANT 5: Zero total exposure means a zero average weight.
    // ===================================================================
    #[test]
    fn zero_exposure_average_is_zero(mut exposures in arb_exposures()) {
        exposures.iter_mut().for_each(|e| {
            *e = Exposure::builder(e.segment().clone(), Decimal::ZERO)
                .flags(*e.flags())
                .build();
        });
        let report = WeightingEngine::default().run(&exposures.into_iter().collect());
        prop_assert_eq!(report.aggregate.total_exposure(), Decimal::ZERO);
        prop_assert_eq!(report.aggregate.average_weight(), Decimal::ZERO);
        for segment in report.aggregate.segments().values() {
            prop_assert_eq!(segment.average_weight(), Decimal::ZERO);
        }
    }

    // ===================================================================
    // INVARIANT 6: Parallel and sequential runs agree.
    //
    // Needs `--features parallel`; without it both engines run the
    // sequential path.
    // ===================================================================
    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential(exposures in arb_exposures()) {
        let sequential = WeightingEngine::new(EngineConfig::sequential());
        let eager = WeightingEngine::new(EngineConfig::default().with_threshold(1));
        prop_assert!(eager.config().should_parallelize(exposures.len().max(1)));
        let a = sequential.weigh_all(&exposures);
        let b = eager.weigh_all(&exposures);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(sequential.aggregate(&a), eager.aggregate(&b));
    }

    // ===================================================================
    // INVARIANT 7: Domestic sovereigns are always 0%.
    // ===================================================================
    #[test]
    fn domestic_sovereign_is_zero(rating in arb_rating(), pmae in prop::option::of(0u8..=7), amount in arb_amount()) {
        let e = Exposure::builder(Segment::Sovereign, amount)
            .sub_segment("Bank Al-Maghrib")
            .currency("MAD")
            .external_rating(rating)
            .pmae_class(pmae.and_then(PmaeClass::new))
            .build();
        prop_assert_eq!(WeightingEngine::default().weigh(&e).weight, RiskWeight::Zero);
    }
}
