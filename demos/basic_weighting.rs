//! Basic risk weighting example.
//!
//! Weights a handful of exposures one by one and shows the clause behind
//! each weight.

use rwa_engine::core::exposure::{Exposure, Maturity, PropertyUsage};
use rwa_engine::core::segment::Segment;
use rwa_engine::engine::weighting::WeightingEngine;
use rwa_engine::tables::weights::PmaeClass;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  rwa-engine: Basic Weighting Example     ║");
    println!("╚══════════════════════════════════════════╝\n");

    let engine = WeightingEngine::default();

    let exposures = vec![
        Exposure::builder(Segment::Sovereign, dec!(500_000_000))
            .sub_segment("Etat marocain")
            .currency("MAD")
            .build(),
        Exposure::builder(Segment::Sovereign, dec!(40_000_000))
            .sub_segment("Republic of Senegal")
            .currency("XOF")
            .pmae_class(PmaeClass::new(4))
            .build(),
        Exposure::builder(Segment::CreditInstitution, dec!(75_000_000))
            .currency("EUR")
            .maturity(Maturity::UnderOneYear)
            .short_term_rating("A-1")
            .build(),
        Exposure::builder(Segment::Enterprise, dec!(120_000_000))
            .group_affiliated(true)
            .bank_debt(dec!(650_000_000))
            .external_rating("A")
            .build(),
        Exposure::builder(Segment::MortgageLoan, dec!(900_000))
            .usage(PropertyUsage::Unspecified)
            .state_convention(true)
            .mortgaged_asset_value(dec!(1_200_000))
            .build(),
        Exposure::builder(Segment::DistressedDebt, dec!(2_000_000))
            .outstanding_balance(dec!(2_000_000))
            .provision_held(dec!(700_000))
            .build(),
    ];

    for exposure in &exposures {
        let r = engine.weigh(exposure);
        println!("━━━ {} ━━━", r.segment);
        println!("  Amount:  {}", r.amount);
        println!("  Weight:  {}", r.weight);
        println!("  RWA:     {}", r.rwa);
        println!("  Clause:  {}", r.explanation);
        for (name, value) in &r.attributes {
            println!("    {:<22} {}", name, value);
        }
        println!();
    }
}
