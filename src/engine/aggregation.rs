use crate::engine::weighting::WeightingResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

fn ratio(rwa: Decimal, exposure: Decimal) -> Decimal {
    if exposure == Decimal::ZERO {
        return Decimal::ZERO;
    }
    rwa.checked_div(exposure).unwrap_or(Decimal::ZERO)
}

/// Totals for one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentAggregate {
    pub count: usize,
    pub total_exposure: Decimal,
    pub total_rwa: Decimal,
}

impl SegmentAggregate {
    /// RWA over exposure, 0 for an empty segment.
    pub fn average_weight(&self) -> Decimal {
        ratio(self.total_rwa, self.total_exposure)
    }

    fn add(&mut self, amount: Decimal, rwa: Decimal) {
        self.count += 1;
        self.total_exposure = self.total_exposure.saturating_add(amount);
        self.total_rwa = self.total_rwa.saturating_add(rwa);
    }

    fn absorb(&mut self, other: &SegmentAggregate) {
        self.count += other.count;
        self.total_exposure = self.total_exposure.saturating_add(other.total_exposure);
        self.total_rwa = self.total_rwa.saturating_add(other.total_rwa);
    }
}

/// Portfolio-wide totals with a per-segment breakdown.
///
/// Aggregates form a commutative monoid under [`PortfolioAggregate::merge`]
/// with `PortfolioAggregate::default()` as identity, so shards may be folded
/// independently and merged in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioAggregate {
    count: usize,
    total_exposure: Decimal,
    total_rwa: Decimal,
    segments: BTreeMap<String, SegmentAggregate>,
}

impl PortfolioAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_results(results: &[WeightingResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.add(r);
            acc
        })
    }

    pub fn add(&mut self, result: &WeightingResult) {
        self.count += 1;
        self.total_exposure = self.total_exposure.saturating_add(result.amount);
        self.total_rwa = self.total_rwa.saturating_add(result.rwa);
        self.segments
            .entry(result.segment.label().to_string())
            .or_default()
            .add(result.amount, result.rwa);
    }

    #[must_use]
    pub fn merge(mut self, other: PortfolioAggregate) -> Self {
        self.count += other.count;
        self.total_exposure = self.total_exposure.saturating_add(other.total_exposure);
        self.total_rwa = self.total_rwa.saturating_add(other.total_rwa);
        for (label, part) in &other.segments {
            self.segments.entry(label.clone()).or_default().absorb(part);
        }
        self
    }

    // --- Accessors ---

    /// Number of exposures aggregated.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total_exposure(&self) -> Decimal {
        self.total_exposure
    }

    pub fn total_rwa(&self) -> Decimal {
        self.total_rwa
    }

    /// Total RWA over total exposure, 0 for an empty portfolio.
    pub fn average_weight(&self) -> Decimal {
        ratio(self.total_rwa, self.total_exposure)
    }

    pub fn distinct_segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, label: &str) -> Option<&SegmentAggregate> {
        self.segments.get(label)
    }

    /// Segments in label order.
    pub fn segments(&self) -> &BTreeMap<String, SegmentAggregate> {
        &self.segments
    }
}

fn as_percent(weight: Decimal) -> Decimal {
    weight.saturating_mul(Decimal::ONE_HUNDRED).round_dp(2)
}

impl fmt::Display for PortfolioAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Portfolio RWA ===")?;
        writeln!(f, "Exposures:      {}", self.count)?;
        writeln!(f, "Segments:       {}", self.distinct_segment_count())?;
        writeln!(f, "Total Exposure: {}", self.total_exposure)?;
        writeln!(f, "Total RWA:      {}", self.total_rwa)?;
        writeln!(f, "Average Weight: {}%", as_percent(self.average_weight()))?;

        for (label, segment) in &self.segments {
            writeln!(f, "\n--- {} ---", label)?;
            writeln!(f, "  Count:    {}", segment.count)?;
            writeln!(f, "  Exposure: {}", segment.total_exposure)?;
            writeln!(f, "  RWA:      {}", segment.total_rwa)?;
            writeln!(f, "  Weight:   {}%", as_percent(segment.average_weight()))?;
        }
        Ok(())
    }
}
