//! Portfolio-level breakdown of a generated book.
//!
//! Generates a random portfolio, runs the full pass and prints per-segment
//! totals along with the clauses that fired most often.

use rwa_engine::engine::weighting::WeightingEngine;
use rwa_engine::simulation::portfolio::{generate_random_portfolio, PortfolioConfig};
use std::collections::BTreeMap;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  rwa-engine: Segment Breakdown Example   ║");
    println!("╚══════════════════════════════════════════╝\n");

    let set = generate_random_portfolio(&PortfolioConfig {
        exposure_count: 2_000,
        seed: Some(11),
        ..Default::default()
    });

    let report = WeightingEngine::default().run(&set);
    println!("{}", report.aggregate);

    let mut clauses: BTreeMap<&'static str, usize> = BTreeMap::new();
    for result in &report.results {
        *clauses.entry(result.rule.code()).or_default() += 1;
    }

    let mut ranked: Vec<_> = clauses.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("━━━ Clauses Fired ━━━\n");
    for (code, count) in ranked.iter().take(12) {
        println!("  {:<36} {:>6}", code, count);
    }
}
