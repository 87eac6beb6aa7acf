use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A regulatory risk weight.
///
/// Weights form a closed set: every resolver returns one of these variants,
/// so no interpolated or out-of-scale value can ever reach an RWA figure.
///
/// # Examples
///
/// ```
/// use rwa_engine::core::weight::RiskWeight;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(RiskWeight::ThirtyFive.as_decimal(), dec!(0.35));
/// assert_eq!(RiskWeight::try_from(dec!(1.50)).unwrap(), RiskWeight::HundredFifty);
/// assert!(RiskWeight::try_from(dec!(0.40)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum RiskWeight {
    Zero,
    Twenty,
    ThirtyFive,
    Fifty,
    SeventyFive,
    Hundred,
    HundredFifty,
}

/// Errors arising from converting numbers into risk weights.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightError {
    #[error("{0} is not a regulatory risk weight")]
    NotInScale(Decimal),
}

impl RiskWeight {
    /// Every weight, in ascending order.
    pub const ALL: [RiskWeight; 7] = [
        RiskWeight::Zero,
        RiskWeight::Twenty,
        RiskWeight::ThirtyFive,
        RiskWeight::Fifty,
        RiskWeight::SeventyFive,
        RiskWeight::Hundred,
        RiskWeight::HundredFifty,
    ];

    /// Whole-number percentage (0, 20, 35, 50, 75, 100, 150).
    pub const fn percent(self) -> u32 {
        match self {
            RiskWeight::Zero => 0,
            RiskWeight::Twenty => 20,
            RiskWeight::ThirtyFive => 35,
            RiskWeight::Fifty => 50,
            RiskWeight::SeventyFive => 75,
            RiskWeight::Hundred => 100,
            RiskWeight::HundredFifty => 150,
        }
    }

    /// The weight as an exact decimal fraction.
    pub fn as_decimal(self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }

    /// Risk-weighted amount: `amount × weight`, exact.
    ///
    /// `None` when the product overflows the decimal range.
    pub fn apply(self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.as_decimal())
    }
}

impl From<RiskWeight> for Decimal {
    fn from(weight: RiskWeight) -> Self {
        weight.as_decimal()
    }
}

impl TryFrom<Decimal> for RiskWeight {
    type Error = WeightError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        RiskWeight::ALL
            .into_iter()
            .find(|w| w.as_decimal() == value)
            .ok_or(WeightError::NotInScale(value))
    }
}

impl fmt::Display for RiskWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
