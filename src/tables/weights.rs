//! Per-category risk-weight tables.
//!
//! Tables are plain immutable data. [`WeightTables::standard`] hands out a
//! reference to the process-wide instance, which is a `static` and needs no
//! initialisation or synchronisation.

use crate::core::weight::RiskWeight;
use crate::tables::rating::{LongTermBucket, ShortTermBucket};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use RiskWeight::{Fifty, Hundred, HundredFifty, Twenty, Zero};

/// Long-term rating bucket → weight, plus the category's unrated default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingWeightTable {
    pub name: &'static str,
    buckets: [(LongTermBucket, RiskWeight); 6],
    unrated: RiskWeight,
}

impl RatingWeightTable {
    pub const fn new(
        name: &'static str,
        buckets: [(LongTermBucket, RiskWeight); 6],
        unrated: RiskWeight,
    ) -> Self {
        Self {
            name,
            buckets,
            unrated,
        }
    }

    /// Same bucket values under a different unrated default.
    pub const fn with_unrated(&self, name: &'static str, unrated: RiskWeight) -> Self {
        Self {
            name,
            buckets: self.buckets,
            unrated,
        }
    }

    /// Weight for a bucket; `None` yields the unrated default.
    pub fn weight(&self, bucket: Option<LongTermBucket>) -> RiskWeight {
        bucket
            .and_then(|b| self.buckets.iter().find(|(k, _)| *k == b).map(|(_, w)| *w))
            .unwrap_or(self.unrated)
    }

    pub fn unrated(&self) -> RiskWeight {
        self.unrated
    }
}

/// Short-term tier → weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortTermWeightTable {
    pub name: &'static str,
    tiers: [(ShortTermBucket, RiskWeight); 4],
    unrated: RiskWeight,
}

impl ShortTermWeightTable {
    pub const fn new(
        name: &'static str,
        tiers: [(ShortTermBucket, RiskWeight); 4],
        unrated: RiskWeight,
    ) -> Self {
        Self {
            name,
            tiers,
            unrated,
        }
    }

    pub fn weight(&self, bucket: Option<ShortTermBucket>) -> RiskWeight {
        bucket
            .and_then(|b| self.tiers.iter().find(|(k, _)| *k == b).map(|(_, w)| *w))
            .unwrap_or(self.unrated)
    }
}

/// Export-credit-insurance premium class (PMAE), 0 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PmaeClass(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("PMAE class must be between 0 and 7, got {0}")]
pub struct InvalidPmaeClass(pub u8);

impl TryFrom<u8> for PmaeClass {
    type Error = InvalidPmaeClass;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        Self::new(class).ok_or(InvalidPmaeClass(class))
    }
}

impl From<PmaeClass> for u8 {
    fn from(class: PmaeClass) -> Self {
        class.0
    }
}

impl PmaeClass {
    pub const MAX: u8 = 7;

    pub fn new(class: u8) -> Option<Self> {
        (class <= Self::MAX).then_some(Self(class))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// PMAE class → weight. Classes 0-1 collapse to 0%, 4-6 to 100%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PmaeTable {
    weights: [RiskWeight; 8],
}

impl PmaeTable {
    pub const STANDARD: PmaeTable = PmaeTable {
        weights: [Zero, Zero, Twenty, Fifty, Hundred, Hundred, Hundred, HundredFifty],
    };

    pub fn weight(&self, class: PmaeClass) -> RiskWeight {
        self.weights[usize::from(class.0)]
    }
}

const GENERAL_BUCKETS: [(LongTermBucket, RiskWeight); 6] = [
    (LongTermBucket::AaaToAaMinus, Twenty),
    (LongTermBucket::AToAMinus, Fifty),
    (LongTermBucket::Bbb, Fifty),
    (LongTermBucket::Bb, Hundred),
    (LongTermBucket::B, Hundred),
    (LongTermBucket::BelowBMinus, HundredFifty),
];

const SHORT_TERM_TIERS: [(ShortTermBucket, RiskWeight); 4] = [
    (ShortTermBucket::A1, Twenty),
    (ShortTermBucket::A2, Fifty),
    (ShortTermBucket::A3, Hundred),
    (ShortTermBucket::BelowA3, HundredFifty),
];

const GENERAL: RatingWeightTable = RatingWeightTable::new("general", GENERAL_BUCKETS, Fifty);

/// The full set of tables consulted by the segment resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightTables {
    pub general: RatingWeightTable,
    pub sovereign: RatingWeightTable,
    pub mdb: RatingWeightTable,
    pub enterprise: RatingWeightTable,
    pub credit_short_term: ShortTermWeightTable,
    pub enterprise_short_term: ShortTermWeightTable,
    pub pmae: PmaeTable,
}

static STANDARD: WeightTables = WeightTables {
    general: GENERAL,
    sovereign: RatingWeightTable::new(
        "sovereign",
        [
            (LongTermBucket::AaaToAaMinus, Zero),
            (LongTermBucket::AToAMinus, Twenty),
            (LongTermBucket::Bbb, Fifty),
            (LongTermBucket::Bb, Hundred),
            (LongTermBucket::B, Hundred),
            (LongTermBucket::BelowBMinus, HundredFifty),
        ],
        Hundred,
    ),
    mdb: RatingWeightTable::new("mdb", GENERAL_BUCKETS, Fifty),
    enterprise: GENERAL.with_unrated("enterprise", Hundred),
    credit_short_term: ShortTermWeightTable::new("credit short-term", SHORT_TERM_TIERS, Fifty),
    enterprise_short_term: ShortTermWeightTable::new(
        "enterprise short-term",
        SHORT_TERM_TIERS,
        Fifty,
    ),
    pmae: PmaeTable::STANDARD,
};

impl WeightTables {
    /// The regulatory tables in force.
    pub fn standard() -> &'static WeightTables {
        &STANDARD
    }
}
