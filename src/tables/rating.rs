//! Ordinal rating scales.
//!
//! Agency codes are normalised and then matched exactly against ordered
//! notch lists, best bucket first. Matching is never by substring, so `A`
//! cannot be mistaken for part of `AA-`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-term rating buckets shared by every long-term weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LongTermBucket {
    /// AAA to AA-
    AaaToAaMinus,
    /// A+ to A-
    AToAMinus,
    /// BBB+ to BBB-
    Bbb,
    /// BB+ to BB-
    Bb,
    /// B+ to B-
    B,
    /// Anything below B-
    BelowBMinus,
}

impl LongTermBucket {
    /// Buckets in matching priority order.
    pub const ORDER: [LongTermBucket; 6] = [
        LongTermBucket::AaaToAaMinus,
        LongTermBucket::AToAMinus,
        LongTermBucket::Bbb,
        LongTermBucket::Bb,
        LongTermBucket::B,
        LongTermBucket::BelowBMinus,
    ];

    /// Normalised notches (S&P/Fitch, then Moody's) belonging to this bucket.
    pub const fn notches(self) -> &'static [&'static str] {
        match self {
            LongTermBucket::AaaToAaMinus => &["AAA", "AA+", "AA", "AA-", "AA1", "AA2", "AA3"],
            LongTermBucket::AToAMinus => &["A+", "A", "A-", "A1", "A2", "A3"],
            LongTermBucket::Bbb => &["BBB+", "BBB", "BBB-", "BAA1", "BAA2", "BAA3"],
            LongTermBucket::Bb => &["BB+", "BB", "BB-", "BA1", "BA2", "BA3"],
            LongTermBucket::B => &["B+", "B", "B-", "B1", "B2", "B3"],
            LongTermBucket::BelowBMinus => &[
                "CCC+", "CCC", "CCC-", "CC", "C", "D", "SD", "RD", "DDD", "DD", "CAA1", "CAA2",
                "CAA3", "CAA", "CA",
            ],
        }
    }

    /// Bucket holding a normalised code, if any.
    pub fn of(code: &str) -> Option<Self> {
        Self::ORDER
            .into_iter()
            .find(|bucket| bucket.notches().contains(&code))
    }

    pub const fn label(self) -> &'static str {
        match self {
            LongTermBucket::AaaToAaMinus => "AAA to AA-",
            LongTermBucket::AToAMinus => "A+ to A-",
            LongTermBucket::Bbb => "BBB+ to BBB-",
            LongTermBucket::Bb => "BB+ to BB-",
            LongTermBucket::B => "B+ to B-",
            LongTermBucket::BelowBMinus => "below B-",
        }
    }
}

impl fmt::Display for LongTermBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Short-term rating tiers used for exposures under one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShortTermBucket {
    A1,
    A2,
    A3,
    BelowA3,
}

impl ShortTermBucket {
    pub const ORDER: [ShortTermBucket; 4] = [
        ShortTermBucket::A1,
        ShortTermBucket::A2,
        ShortTermBucket::A3,
        ShortTermBucket::BelowA3,
    ];

    pub const fn notches(self) -> &'static [&'static str] {
        match self {
            ShortTermBucket::A1 => &["A-1+", "A-1", "A1+", "P-1", "F1+", "F1"],
            ShortTermBucket::A2 => &["A-2", "P-2", "F2"],
            ShortTermBucket::A3 => &["A-3", "P-3", "F3"],
            ShortTermBucket::BelowA3 => &["B", "B-1", "B-2", "B-3", "C", "D", "NP", "F4"],
        }
    }

    pub fn of(code: &str) -> Option<Self> {
        Self::ORDER
            .into_iter()
            .find(|bucket| bucket.notches().contains(&code))
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShortTermBucket::A1 => "A-1",
            ShortTermBucket::A2 => "A-2",
            ShortTermBucket::A3 => "A-3",
            ShortTermBucket::BelowA3 => "below A-3",
        }
    }
}

impl fmt::Display for ShortTermBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of reading a raw rating field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingLookup<B> {
    /// The code matched a bucket.
    Rated { code: String, bucket: B },
    /// Blank or an explicit "not rated" marker.
    NotRated,
    /// A non-blank code that matches nothing on the scale.
    Unrecognized(String),
}

const NOT_RATED_MARKERS: [&str; 9] = [
    "NR",
    "N/R",
    "UNRATED",
    "WR",
    "NA",
    "N/A",
    "-",
    "PAS DE NOTATION",
    "NON NOTE",
];

/// Normalise a raw agency code.
///
/// Trims, uppercases, folds Unicode minus signs and dashes to `-` and keeps
/// only the leading code token, so `"aa− (stable)"` becomes `"AA-"`.
pub fn normalize_code(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '\u{2212}' | '\u{2013}' | '\u{2014}' | '\u{2010}' | '\u{2011}' => '-',
            other => other,
        })
        .collect::<String>()
        .to_uppercase();

    if NOT_RATED_MARKERS.contains(&folded.as_str()) {
        return folded;
    }

    folded
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '+' || *c == '-')
        .collect()
}

fn lookup<B>(raw: &str, of: impl Fn(&str) -> Option<B>) -> RatingLookup<B> {
    let code = normalize_code(raw);
    if code.is_empty() || NOT_RATED_MARKERS.contains(&code.as_str()) {
        // A token-less string such as "???" is garbled, not blank.
        if code.is_empty() && !raw.trim().is_empty() {
            return RatingLookup::Unrecognized(raw.trim().to_string());
        }
        return RatingLookup::NotRated;
    }
    match of(&code) {
        Some(bucket) => RatingLookup::Rated { code, bucket },
        None => RatingLookup::Unrecognized(raw.trim().to_string()),
    }
}

/// Read a long-term rating field.
pub fn lookup_long_term(raw: &str) -> RatingLookup<LongTermBucket> {
    lookup(raw, LongTermBucket::of)
}

/// Read a short-term rating field.
pub fn lookup_short_term(raw: &str) -> RatingLookup<ShortTermBucket> {
    lookup(raw, ShortTermBucket::of)
}
