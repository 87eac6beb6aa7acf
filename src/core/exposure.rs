use crate::core::currency::CurrencyCode;
use crate::core::segment::Segment;
use crate::tables::rating::{
    lookup_long_term, lookup_short_term, LongTermBucket, RatingLookup, ShortTermBucket,
};
use crate::tables::weights::PmaeClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Original maturity bucket of an exposure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maturity {
    /// Three months or less.
    UpToThreeMonths,
    /// Less than one year (and more than three months when known).
    UnderOneYear,
    OneYearOrMore,
    #[default]
    Unspecified,
}

impl Maturity {
    /// Read a maturity label such as `"<3 months"`, `"< 1 an"` or `"sup_1_an"`.
    ///
    /// Returns `None` for a non-blank label that names no bucket.
    pub fn parse(raw: &str) -> Option<Self> {
        let s: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect();
        if s.is_empty() {
            return Some(Maturity::Unspecified);
        }
        let below = s.starts_with('<') || s.starts_with('≤') || s.starts_with("inf");
        if s.contains("3mois") || s.contains("3month") || s.ends_with("3m") {
            return below.then_some(Maturity::UpToThreeMonths);
        }
        if s.contains("courtterme") || s.contains("shortterm") {
            return Some(Maturity::UnderOneYear);
        }
        if s.contains("longterme") || s.contains("longterm") {
            return Some(Maturity::OneYearOrMore);
        }
        let one_year = s.contains("1an") || s.contains("1year") || s.ends_with("1y");
        if !one_year {
            return None;
        }
        if s.starts_with(">=") || s.starts_with('≥') || s.starts_with('>') || s.starts_with("sup")
        {
            Some(Maturity::OneYearOrMore)
        } else if below {
            Some(Maturity::UnderOneYear)
        } else {
            None
        }
    }

    /// True for every bucket shorter than one year.
    pub fn is_under_one_year(self) -> bool {
        matches!(self, Maturity::UpToThreeMonths | Maturity::UnderOneYear)
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Maturity::UpToThreeMonths => "<=3 months",
            Maturity::UnderOneYear => "<1 year",
            Maturity::OneYearOrMore => ">=1 year",
            Maturity::Unspecified => "unspecified",
        })
    }
}

/// Usage of a financed property (mortgage and distressed-debt rules).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyUsage {
    Residential,
    Commercial,
    /// Commercial property financed by lease-purchase.
    CommercialLease,
    #[default]
    Unspecified,
}

impl PropertyUsage {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        if ["residenti", "résidenti", "habitation", "housing", "dwelling"]
            .iter()
            .any(|k| s.contains(k))
        {
            PropertyUsage::Residential
        } else if ["bail", "lease", "location"].iter().any(|k| s.contains(k)) {
            PropertyUsage::CommercialLease
        } else if ["commercial", "professionnel", "office", "bureau"]
            .iter()
            .any(|k| s.contains(k))
        {
            PropertyUsage::Commercial
        } else {
            PropertyUsage::Unspecified
        }
    }

    pub fn is_commercial(self) -> bool {
        matches!(self, PropertyUsage::Commercial | PropertyUsage::CommercialLease)
    }
}

impl fmt::Display for PropertyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyUsage::Residential => "residential",
            PropertyUsage::Commercial => "commercial",
            PropertyUsage::CommercialLease => "commercial lease",
            PropertyUsage::Unspecified => "unspecified",
        })
    }
}

/// A recognised long-term agency rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermRating {
    pub code: String,
    pub bucket: LongTermBucket,
}

impl LongTermRating {
    /// `None` when the code is blank, "not rated", or unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        match lookup_long_term(raw) {
            RatingLookup::Rated { code, bucket } => Some(Self { code, bucket }),
            RatingLookup::NotRated | RatingLookup::Unrecognized(_) => None,
        }
    }
}

/// A recognised short-term agency rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTermRating {
    pub code: String,
    pub bucket: ShortTermBucket,
}

impl ShortTermRating {
    pub fn parse(raw: &str) -> Option<Self> {
        match lookup_short_term(raw) {
            RatingLookup::Rated { code, bucket } => Some(Self { code, bucket }),
            RatingLookup::NotRated | RatingLookup::Unrecognized(_) => None,
        }
    }
}

/// Boolean attributes consulted by the segment rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureFlags {
    /// Reimbursement is provided for in the state budget (public bodies).
    pub budget_guaranteed: bool,
    /// The exposure is in arrears or default.
    pub distressed: bool,
    /// Listed by, or under agreement with, Bank Al-Maghrib.
    pub bam_agreement: bool,
    /// Counterparty belongs to a group.
    pub group_affiliated: bool,
    pub mortgage_guaranteed: bool,
    /// Loan granted under a convention with the state.
    pub state_convention: bool,
}

/// A single credit exposure, already cleaned and typed.
///
/// Exposures are immutable once built; the engine only reads them. Use
/// [`Exposure::builder`] for typed construction or
/// [`crate::core::normalize::normalize`] for loosely typed ingestion rows.
///
/// # Examples
///
/// ```
/// use rwa_engine::core::exposure::Exposure;
/// use rwa_engine::core::segment::Segment;
/// use rust_decimal_macros::dec;
///
/// let exposure = Exposure::builder(Segment::Sovereign, dec!(10_000_000))
///     .sub_segment("Etat marocain")
///     .currency("MAD")
///     .external_rating("BBB-")
///     .build();
///
/// assert_eq!(exposure.amount(), dec!(10_000_000));
/// assert!(exposure.external_rating().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exposure {
    id: Uuid,
    segment: Segment,
    sub_segment: String,
    currency: CurrencyCode,
    external_rating: Option<LongTermRating>,
    short_term_rating: Option<ShortTermRating>,
    pmae_class: Option<PmaeClass>,
    maturity: Maturity,
    usage: PropertyUsage,
    flags: ExposureFlags,
    amount: Decimal,
    /// Total bank debt of the counterparty (or its group).
    bank_debt: Decimal,
    mortgaged_asset_value: Decimal,
    outstanding_balance: Decimal,
    provision_held: Decimal,
}

impl Exposure {
    pub fn builder(segment: Segment, amount: Decimal) -> ExposureBuilder {
        ExposureBuilder::new(segment, amount)
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn sub_segment(&self) -> &str {
        &self.sub_segment
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn external_rating(&self) -> Option<&LongTermRating> {
        self.external_rating.as_ref()
    }

    pub fn short_term_rating(&self) -> Option<&ShortTermRating> {
        self.short_term_rating.as_ref()
    }

    pub fn pmae_class(&self) -> Option<PmaeClass> {
        self.pmae_class
    }

    pub fn maturity(&self) -> Maturity {
        self.maturity
    }

    pub fn usage(&self) -> PropertyUsage {
        self.usage
    }

    pub fn flags(&self) -> &ExposureFlags {
        &self.flags
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn bank_debt(&self) -> Decimal {
        self.bank_debt
    }

    pub fn mortgaged_asset_value(&self) -> Decimal {
        self.mortgaged_asset_value
    }

    pub fn outstanding_balance(&self) -> Decimal {
        self.outstanding_balance
    }

    pub fn provision_held(&self) -> Decimal {
        self.provision_held
    }
}

/// Step-by-step construction of an [`Exposure`].
///
/// Rating setters accept raw agency codes; a code that does not parse is
/// stored as unrated.
#[derive(Debug, Clone)]
pub struct ExposureBuilder {
    inner: Exposure,
}

impl ExposureBuilder {
    pub fn new(segment: Segment, amount: Decimal) -> Self {
        Self {
            inner: Exposure {
                id: Uuid::new_v4(),
                segment,
                sub_segment: String::new(),
                currency: CurrencyCode::default(),
                external_rating: None,
                short_term_rating: None,
                pmae_class: None,
                maturity: Maturity::Unspecified,
                usage: PropertyUsage::Unspecified,
                flags: ExposureFlags::default(),
                amount,
                bank_debt: Decimal::ZERO,
                mortgaged_asset_value: Decimal::ZERO,
                outstanding_balance: Decimal::ZERO,
                provision_held: Decimal::ZERO,
            },
        }
    }

    /// Use a specific ID (useful for testing / determinism).
    pub fn id(mut self, id: Uuid) -> Self {
        self.inner.id = id;
        self
    }

    pub fn sub_segment(mut self, sub_segment: impl Into<String>) -> Self {
        self.inner.sub_segment = sub_segment.into();
        self
    }

    pub fn currency(mut self, currency: impl Into<CurrencyCode>) -> Self {
        self.inner.currency = currency.into();
        self
    }

    pub fn external_rating(mut self, raw: &str) -> Self {
        self.inner.external_rating = LongTermRating::parse(raw);
        self
    }

    pub fn rating(mut self, rating: Option<LongTermRating>) -> Self {
        self.inner.external_rating = rating;
        self
    }

    pub fn short_term_rating(mut self, raw: &str) -> Self {
        self.inner.short_term_rating = ShortTermRating::parse(raw);
        self
    }

    pub fn short_rating(mut self, rating: Option<ShortTermRating>) -> Self {
        self.inner.short_term_rating = rating;
        self
    }

    pub fn pmae_class(mut self, class: Option<PmaeClass>) -> Self {
        self.inner.pmae_class = class;
        self
    }

    pub fn maturity(mut self, maturity: Maturity) -> Self {
        self.inner.maturity = maturity;
        self
    }

    pub fn usage(mut self, usage: PropertyUsage) -> Self {
        self.inner.usage = usage;
        self
    }

    pub fn flags(mut self, flags: ExposureFlags) -> Self {
        self.inner.flags = flags;
        self
    }

    pub fn budget_guaranteed(mut self, value: bool) -> Self {
        self.inner.flags.budget_guaranteed = value;
        self
    }

    pub fn distressed(mut self, value: bool) -> Self {
        self.inner.flags.distressed = value;
        self
    }

    pub fn bam_agreement(mut self, value: bool) -> Self {
        self.inner.flags.bam_agreement = value;
        self
    }

    pub fn group_affiliated(mut self, value: bool) -> Self {
        self.inner.flags.group_affiliated = value;
        self
    }

    pub fn mortgage_guaranteed(mut self, value: bool) -> Self {
        self.inner.flags.mortgage_guaranteed = value;
        self
    }

    pub fn state_convention(mut self, value: bool) -> Self {
        self.inner.flags.state_convention = value;
        self
    }

    pub fn bank_debt(mut self, value: Decimal) -> Self {
        self.inner.bank_debt = value;
        self
    }

    pub fn mortgaged_asset_value(mut self, value: Decimal) -> Self {
        self.inner.mortgaged_asset_value = value;
        self
    }

    pub fn outstanding_balance(mut self, value: Decimal) -> Self {
        self.inner.outstanding_balance = value;
        self
    }

    pub fn provision_held(mut self, value: Decimal) -> Self {
        self.inner.provision_held = value;
        self
    }

    pub fn build(self) -> Exposure {
        self.inner
    }
}

/// An ordered batch of exposures submitted to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExposureSet {
    exposures: Vec<Exposure>,
}

impl ExposureSet {
    pub fn new() -> Self {
        Self {
            exposures: Vec::new(),
        }
    }

    pub fn add(&mut self, exposure: Exposure) {
        self.exposures.push(exposure);
    }

    pub fn exposures(&self) -> &[Exposure] {
        &self.exposures
    }

    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }

    /// Sum of all exposure amounts.
    pub fn gross_exposure(&self) -> Decimal {
        self.exposures
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount()))
    }

    /// All distinct segments referenced in this set.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> =
            self.exposures.iter().map(|e| e.segment().clone()).collect();
        segments.sort();
        segments.dedup();
        segments
    }
}

impl FromIterator<Exposure> for ExposureSet {
    fn from_iter<T: IntoIterator<Item = Exposure>>(iter: T) -> Self {
        Self {
            exposures: iter.into_iter().collect(),
        }
    }
}
