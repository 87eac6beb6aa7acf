//! Defensive coercion of loosely typed ingestion rows.
//!
//! This is the only place that decides what a missing or malformed field
//! means. Resolvers downstream see a fully typed [`Exposure`] and never
//! re-check their inputs.
//!
//! Policy:
//! - numeric fields: missing, unparseable or beyond [`AMOUNT_LIMIT`] ⇒ 0
//! - flags: missing or unrecognised ⇒ `false`
//! - ratings: blank ⇒ unrated; unrecognised code ⇒ unrated
//! - PMAE class: anything other than an integer 0-7 ⇒ absent
//! - segment: any label is accepted, unknown ones become `Segment::Other`
//!
//! Each fallback other than a plain absence is reported as a
//! [`DataQualityIssue`] so callers can surface it.

use crate::core::currency::CurrencyCode;
use crate::core::exposure::{
    Exposure, ExposureFlags, LongTermRating, Maturity, PropertyUsage, ShortTermRating,
};
use crate::core::segment::Segment;
use crate::tables::rating::{lookup_long_term, lookup_short_term, RatingLookup};
use crate::tables::weights::PmaeClass;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// An exposure row as delivered by an ingestion collaborator.
///
/// Every field is optional and untyped. Deserialisation never fails: any
/// JSON value is accepted, a non-object counts as an empty row, and each
/// field takes the first non-blank column among its names (the English
/// name, then the French columns of the Bank Al-Maghrib templates).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RawExposure {
    pub id: Option<Value>,
    pub segment: Option<Value>,
    pub sub_segment: Option<Value>,
    pub currency: Option<Value>,
    /// `note_externe`
    pub external_rating: Option<Value>,
    /// `note_sup_1_an`, used when `external_rating` is blank.
    pub long_term_rating: Option<Value>,
    pub short_term_rating: Option<Value>,
    pub pmae_class: Option<Value>,
    /// Residual maturity (`echeance`).
    pub maturity: Option<Value>,
    /// Original maturity (`echeance_initiale`), preferred for credit
    /// institutions.
    pub initial_maturity: Option<Value>,
    pub usage: Option<Value>,
    pub budget_guaranteed: Option<Value>,
    pub distressed: Option<Value>,
    pub bam_agreement: Option<Value>,
    pub group_affiliated: Option<Value>,
    pub mortgage_guaranteed: Option<Value>,
    pub state_convention: Option<Value>,
    pub amount: Option<Value>,
    pub bank_debt: Option<Value>,
    pub mortgaged_asset_value: Option<Value>,
    pub outstanding_balance: Option<Value>,
    pub provision_held: Option<Value>,
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

impl From<Value> for RawExposure {
    fn from(value: Value) -> Self {
        let Value::Object(mut row) = value else {
            return Self::default();
        };
        let mut column = |names: &[&str]| -> Option<Value> {
            names
                .iter()
                .filter_map(|name| row.remove(*name))
                .find(|v| !is_blank(v))
        };

        RawExposure {
            id: column(&["id"]),
            segment: column(&["segment"]),
            sub_segment: column(&["sub_segment", "sous_segment"]),
            currency: column(&["currency", "monnaie"]),
            external_rating: column(&["external_rating", "note_externe"]),
            long_term_rating: column(&["long_term_rating", "note_sup_1_an", "note_sup_1an"]),
            short_term_rating: column(&["short_term_rating", "note_inf_1_an", "note_inf_1an"]),
            pmae_class: column(&["pmae_class", "note_pmae"]),
            maturity: column(&["maturity", "echeance"]),
            initial_maturity: column(&["initial_maturity", "echeance_initiale"]),
            usage: column(&["usage"]),
            budget_guaranteed: column(&[
                "budget_guaranteed",
                "remboursement_budget",
                "remboursement_prevu_budget",
            ]),
            distressed: column(&["distressed", "creance_souffrance"]),
            bam_agreement: column(&["bam_agreement", "accord_bank_maghrib"]),
            group_affiliated: column(&["group_affiliated", "appart_grpe"]),
            mortgage_guaranteed: column(&["mortgage_guaranteed", "garanti_hypotheque"]),
            state_convention: column(&["state_convention", "convention_etat"]),
            amount: column(&["amount", "montant"]),
            bank_debt: column(&["bank_debt", "dette_banc"]),
            mortgaged_asset_value: column(&[
                "mortgaged_asset_value",
                "valeur_bien_hypotheque",
                "valeur_bien_hypoteq",
            ]),
            outstanding_balance: column(&["outstanding_balance", "valeur_encours_creance"]),
            provision_held: column(&["provision_held", "provision_constitue"]),
        }
    }
}

/// Largest magnitude accepted for a monetary field. Anything beyond is
/// treated as malformed, which keeps `amount × 150%` and portfolio sums
/// well inside the decimal range.
pub const AMOUNT_LIMIT: Decimal = dec!(100_000_000_000_000_000_000);

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// A required field was absent or null.
    Missing,
    /// A value was present but could not be read.
    Malformed,
}

/// A data-quality signal raised while normalising one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataQualityIssue {
    pub field: &'static str,
    pub kind: IssueKind,
    /// The offending raw value, rendered as text.
    pub raw: String,
    /// What the field was coerced to.
    pub fallback: String,
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::Missing => write!(f, "{} missing, using {}", self.field, self.fallback),
            IssueKind::Malformed => write!(
                f,
                "{} malformed ({:?}), using {}",
                self.field, self.raw, self.fallback
            ),
        }
    }
}

/// Result of normalising one raw row.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub exposure: Exposure,
    pub issues: Vec<DataQualityIssue>,
}

struct Collector {
    issues: Vec<DataQualityIssue>,
}

impl Collector {
    fn push(&mut self, field: &'static str, kind: IssueKind, raw: String, fallback: &str) {
        self.issues.push(DataQualityIssue {
            field,
            kind,
            raw,
            fallback: fallback.to_string(),
        });
    }

    fn decimal(&mut self, field: &'static str, value: Option<&Value>, required: bool) -> Decimal {
        match value {
            None | Some(Value::Null) => {
                if required {
                    self.push(field, IssueKind::Missing, String::new(), "0");
                }
                Decimal::ZERO
            }
            Some(v) => match parse_decimal(v) {
                Some(d) if d.abs() <= AMOUNT_LIMIT => d,
                _ => {
                    self.push(field, IssueKind::Malformed, render(v), "0");
                    Decimal::ZERO
                }
            },
        }
    }

    fn flag(&mut self, field: &'static str, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(v) => parse_flag(v).unwrap_or_else(|| {
                self.push(field, IssueKind::Malformed, render(v), "false");
                false
            }),
        }
    }
}

/// Render a JSON value as plain text (strings without quotes).
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn text(value: Option<&Value>) -> String {
    value.map(render).unwrap_or_default().trim().to_string()
}

/// Parse a numeric value, tolerating thousands separators and spaces.
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64_retain)),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '_' && *c != '\u{a0}')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            // "1,234,567.89" vs. "1234,5"
            let cleaned = if cleaned.contains('.') {
                cleaned.replace(',', "")
            } else if cleaned.matches(',').count() == 1 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            };
            Decimal::from_str(&cleaned)
                .or_else(|_| Decimal::from_scientific(&cleaned))
                .ok()
        }
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse a boolean flag; accepts `true/false`, `1/0`, `yes/no`, `oui/non`.
pub fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(x) if x == 1.0 => Some(true),
            Some(x) if x == 0.0 => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "oui" | "o" | "vrai" => Some(true),
            "false" | "0" | "no" | "n" | "non" | "faux" | "" => Some(false),
            _ => None,
        },
        Value::Null => Some(false),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_pmae(value: &Value) -> Option<PmaeClass> {
    let class = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u8::try_from(class).ok().and_then(PmaeClass::new)
}

/// Turn one raw row into a typed exposure plus the issues found on the way.
///
/// Never fails: every field has a documented fallback.
pub fn normalize(raw: &RawExposure) -> Normalized {
    let mut c = Collector { issues: Vec::new() };

    let segment_label = text(raw.segment.as_ref());
    if segment_label.is_empty() {
        c.push("segment", IssueKind::Missing, String::new(), "other");
    }
    let segment = Segment::parse(&segment_label);

    let amount = c.decimal("amount", raw.amount.as_ref(), true);

    let rating_label = [raw.external_rating.as_ref(), raw.long_term_rating.as_ref()]
        .into_iter()
        .map(text)
        .find(|t| !t.is_empty())
        .unwrap_or_default();
    let external_rating = match lookup_long_term(&rating_label) {
        RatingLookup::Rated { code, bucket } => Some(LongTermRating { code, bucket }),
        RatingLookup::NotRated => None,
        RatingLookup::Unrecognized(code) => {
            c.push("external_rating", IssueKind::Malformed, code, "unrated");
            None
        }
    };

    let short_term_rating = match lookup_short_term(&text(raw.short_term_rating.as_ref())) {
        RatingLookup::Rated { code, bucket } => Some(ShortTermRating { code, bucket }),
        RatingLookup::NotRated => None,
        RatingLookup::Unrecognized(code) => {
            c.push("short_term_rating", IssueKind::Malformed, code, "unrated");
            None
        }
    };

    let pmae_class = match raw.pmae_class.as_ref() {
        None | Some(Value::Null) => None,
        Some(v) if text(Some(v)).is_empty() || text(Some(v)).eq_ignore_ascii_case("unrated") => {
            None
        }
        Some(v) => {
            let class = parse_pmae(v);
            if class.is_none() {
                c.push("pmae_class", IssueKind::Malformed, render(v), "absent");
            }
            class
        }
    };

    // Credit institutions are weighted on original maturity, others on
    // residual maturity; either column stands in when the other is blank.
    let mut maturity_columns = [
        ("maturity", text(raw.maturity.as_ref())),
        ("initial_maturity", text(raw.initial_maturity.as_ref())),
    ];
    if segment == Segment::CreditInstitution {
        maturity_columns.reverse();
    }
    let (maturity_field, maturity_label) = maturity_columns
        .into_iter()
        .find(|(_, label)| !label.is_empty())
        .unwrap_or(("maturity", String::new()));
    let maturity = Maturity::parse(&maturity_label).unwrap_or_else(|| {
        c.push(maturity_field, IssueKind::Malformed, maturity_label.clone(), "unspecified");
        Maturity::Unspecified
    });

    let flags = ExposureFlags {
        budget_guaranteed: c.flag("budget_guaranteed", raw.budget_guaranteed.as_ref()),
        distressed: c.flag("distressed", raw.distressed.as_ref()),
        bam_agreement: c.flag("bam_agreement", raw.bam_agreement.as_ref()),
        group_affiliated: c.flag("group_affiliated", raw.group_affiliated.as_ref()),
        mortgage_guaranteed: c.flag("mortgage_guaranteed", raw.mortgage_guaranteed.as_ref()),
        state_convention: c.flag("state_convention", raw.state_convention.as_ref()),
    };

    let mut builder = Exposure::builder(segment, amount)
        .sub_segment(text(raw.sub_segment.as_ref()))
        .currency(CurrencyCode::new(text(raw.currency.as_ref())))
        .rating(external_rating)
        .short_rating(short_term_rating)
        .pmae_class(pmae_class)
        .maturity(maturity)
        .usage(PropertyUsage::parse(&text(raw.usage.as_ref())))
        .flags(flags)
        .bank_debt(c.decimal("bank_debt", raw.bank_debt.as_ref(), false))
        .mortgaged_asset_value(c.decimal(
            "mortgaged_asset_value",
            raw.mortgaged_asset_value.as_ref(),
            false,
        ))
        .outstanding_balance(c.decimal(
            "outstanding_balance",
            raw.outstanding_balance.as_ref(),
            false,
        ))
        .provision_held(c.decimal("provision_held", raw.provision_held.as_ref(), false));

    match raw.id.as_ref() {
        None | Some(Value::Null) => {}
        Some(v) => match Uuid::parse_str(&text(Some(v))) {
            Ok(id) => builder = builder.id(id),
            Err(_) => c.push("id", IssueKind::Malformed, render(v), "generated id"),
        },
    }

    Normalized {
        exposure: builder.build(),
        issues: c.issues,
    }
}

impl From<&Exposure> for RawExposure {
    /// Render a typed exposure back into row form, e.g. for writing
    /// generated portfolios that [`normalize`] reads back unchanged.
    fn from(exposure: &Exposure) -> Self {
        let string = |s: &str| (!s.is_empty()).then(|| Value::String(s.to_string()));
        let number = |d: Decimal| Some(Value::String(d.to_string()));
        let flags = exposure.flags();
        RawExposure {
            id: Some(Value::String(exposure.id().to_string())),
            segment: string(exposure.segment().label()),
            sub_segment: string(exposure.sub_segment()),
            currency: string(exposure.currency().as_str()),
            external_rating: exposure
                .external_rating()
                .map(|r| Value::String(r.code.clone())),
            short_term_rating: exposure
                .short_term_rating()
                .map(|r| Value::String(r.code.clone())),
            pmae_class: exposure.pmae_class().map(|c| Value::from(c.value())),
            maturity: match exposure.maturity() {
                Maturity::Unspecified => None,
                m => Some(Value::String(m.to_string())),
            },
            initial_maturity: None,
            long_term_rating: None,
            usage: match exposure.usage() {
                PropertyUsage::Unspecified => None,
                u => Some(Value::String(u.to_string())),
            },
            budget_guaranteed: Some(Value::Bool(flags.budget_guaranteed)),
            distressed: Some(Value::Bool(flags.distressed)),
            bam_agreement: Some(Value::Bool(flags.bam_agreement)),
            group_affiliated: Some(Value::Bool(flags.group_affiliated)),
            mortgage_guaranteed: Some(Value::Bool(flags.mortgage_guaranteed)),
            state_convention: Some(Value::Bool(flags.state_convention)),
            amount: number(exposure.amount()),
            bank_debt: number(exposure.bank_debt()),
            mortgaged_asset_value: number(exposure.mortgaged_asset_value()),
            outstanding_balance: number(exposure.outstanding_balance()),
            provision_held: number(exposure.provision_held()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::rating::LongTermBucket;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn raw(value: Value) -> RawExposure {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_french_columns() {
        let row = raw(json!({
            "segment": "souverain",
            "sous_segment": "Etat marocain",
            "monnaie": "mad",
            "note_externe": "BBB",
            "montant": "2 500 000",
            "appart_grpe": "oui"
        }));
        let n = normalize(&row);
        assert!(n.issues.is_empty(), "{:?}", n.issues);
        let e = n.exposure;
        assert_eq!(e.segment(), &Segment::Sovereign);
        assert_eq!(e.currency().as_str(), "MAD");
        assert_eq!(e.amount(), dec!(2_500_000));
        assert_eq!(e.external_rating().map(|r| r.bucket), Some(LongTermBucket::Bbb));
        assert!(e.flags().group_affiliated);
    }

    #[test]
    fn test_malformed_amount_becomes_zero() {
        let n = normalize(&raw(json!({ "segment": "tpe", "amount": "n/a" })));
        assert_eq!(n.exposure.amount(), Decimal::ZERO);
        assert_eq!(n.issues.len(), 1);
        assert_eq!(n.issues[0].field, "amount");
        assert_eq!(n.issues[0].kind, IssueKind::Malformed);
    }

    #[test]
    fn test_missing_amount_reported() {
        let n = normalize(&raw(json!({ "segment": "tpe" })));
        assert_eq!(n.exposure.amount(), Decimal::ZERO);
        assert_eq!(n.issues[0].kind, IssueKind::Missing);
    }

    #[test]
    fn test_garbled_rating_is_unrated() {
        let n = normalize(&raw(json!({
            "segment": "entreprise",
            "amount": 10,
            "external_rating": "Q-9"
        })));
        assert!(n.exposure.external_rating().is_none());
        assert_eq!(n.issues[0].field, "external_rating");
    }

    #[test]
    fn test_pmae_parsing() {
        let n = normalize(&raw(json!({ "segment": "souverain", "amount": 1, "note_pmae": "3" })));
        assert_eq!(n.exposure.pmae_class().map(|c| c.value()), Some(3));

        let n = normalize(&raw(json!({ "segment": "souverain", "amount": 1, "note_pmae": 9 })));
        assert!(n.exposure.pmae_class().is_none());
        assert_eq!(n.issues[0].field, "pmae_class");

        let n = normalize(&raw(json!({ "segment": "souverain", "amount": 1, "note_pmae": "" })));
        assert!(n.exposure.pmae_class().is_none());
        assert!(n.issues.is_empty());
    }

    #[test]
    fn test_decimal_formats() {
        assert_eq!(parse_decimal(&json!(1500000)), Some(dec!(1500000)));
        assert_eq!(parse_decimal(&json!(0.35)), Some(dec!(0.35)));
        assert_eq!(parse_decimal(&json!("1,234,567.50")), Some(dec!(1234567.50)));
        assert_eq!(parse_decimal(&json!("1234,5")), Some(dec!(1234.5)));
        assert_eq!(parse_decimal(&json!("1e6")), Some(dec!(1000000)));
        assert_eq!(parse_decimal(&json!("")), None);
        assert_eq!(parse_decimal(&json!(true)), None);
    }

    #[test]
    fn test_flag_vocabulary() {
        assert_eq!(parse_flag(&json!("Oui")), Some(true));
        assert_eq!(parse_flag(&json!("non")), Some(false));
        assert_eq!(parse_flag(&json!(1)), Some(true));
        assert_eq!(parse_flag(&json!(false)), Some(false));
        assert_eq!(parse_flag(&json!("maybe")), None);
    }

    #[test]
    fn test_typed_exposure_reads_back() {
        let original = Exposure::builder(Segment::CreditInstitution, dec!(12_500.50))
            .sub_segment("Banque X")
            .currency("EUR")
            .maturity(Maturity::UpToThreeMonths)
            .short_term_rating("A-2")
            .external_rating("BBB-")
            .build();
        let n = normalize(&RawExposure::from(&original));
        assert!(n.issues.is_empty(), "{:?}", n.issues);
        let e = n.exposure;
        assert_eq!(e.id(), original.id());
        assert_eq!(e.amount(), original.amount());
        assert_eq!(e.maturity(), Maturity::UpToThreeMonths);
        assert_eq!(e.short_term_rating(), original.short_term_rating());
        assert_eq!(e.external_rating(), original.external_rating());
    }

    #[test]
    fn test_template_row_with_every_column() {
        let row = raw(json!({
            "segment": "entreprise",
            "sous_segment": "Grande entreprise",
            "monnaie": "MAD",
            "note_externe": "",
            "note_pmae": "",
            "remboursement_budget": "non",
            "creance_souffrance": "non",
            "echeance_initiale": "",
            "echeance": "sup_1_an",
            "note_inf_1_an": "",
            "note_sup_1_an": "BBB",
            "accord_bank_maghrib": "non",
            "appart_grpe": "oui",
            "dette_banc": "120 000 000",
            "montant": "25 000 000",
            "garanti_hypotheque": "",
            "usage": "",
            "convention_etat": "",
            "valeur_bien_hypoteq": "",
            "valeur_encours_creance": "",
            "provision_constitue": ""
        }));
        let n = normalize(&row);
        assert!(n.issues.is_empty(), "{:?}", n.issues);
        let e = n.exposure;
        assert_eq!(e.maturity(), Maturity::OneYearOrMore);
        assert_eq!(e.external_rating().map(|r| r.bucket), Some(LongTermBucket::Bbb));
        assert_eq!(e.bank_debt(), dec!(120_000_000));
    }

    #[test]
    fn test_duplicate_columns_do_not_fail() {
        let row = raw(json!({
            "segment": "entreprise",
            "echeance": "sup_1_an",
            "echeance_initiale": "",
            "note_externe": "BBB",
            "note_sup_1_an": "BBB",
            "note_inf_1an": "A-1",
            "note_inf_1_an": "A-2"
        }));
        let e = normalize(&row).exposure;
        assert_eq!(e.maturity(), Maturity::OneYearOrMore);
        assert_eq!(e.external_rating().map(|r| r.code.as_str()), Some("BBB"));
        assert_eq!(e.short_term_rating().map(|r| r.code.as_str()), Some("A-2"));
    }

    #[test]
    fn test_credit_institution_reads_initial_maturity() {
        let row = json!({
            "segment": "etablissement_credit",
            "montant": 1,
            "echeance_initiale": "inf_3mois",
            "echeance": "sup_1_an"
        });
        let n = normalize(&raw(row.clone()));
        assert_eq!(n.exposure.maturity(), Maturity::UpToThreeMonths);

        let mut enterprise = row;
        enterprise["segment"] = json!("entreprise");
        assert_eq!(normalize(&raw(enterprise)).exposure.maturity(), Maturity::OneYearOrMore);

        let fallback = raw(json!({ "segment": "bank", "montant": 1, "echeance": "inf_1_an" }));
        assert_eq!(normalize(&fallback).exposure.maturity(), Maturity::UnderOneYear);
    }

    #[test]
    fn test_malformed_id_is_replaced() {
        let n = normalize(&raw(json!({ "id": "row-17", "segment": "tpe", "amount": 1 })));
        assert_eq!(n.issues.len(), 1);
        assert_eq!(n.issues[0].field, "id");
        assert_eq!(n.issues[0].raw, "row-17");

        let id = Uuid::new_v4();
        let n = normalize(&raw(json!({ "id": id.to_string(), "segment": "tpe", "amount": 1 })));
        assert_eq!(n.exposure.id(), id);
    }

    #[test]
    fn test_amount_beyond_limit_is_malformed() {
        let n = normalize(&raw(json!({
            "segment": "entreprise",
            "amount": "60000000000000000000000000000",
            "bank_debt": "-79228162514264337593543950335"
        })));
        assert_eq!(n.exposure.amount(), Decimal::ZERO);
        assert_eq!(n.exposure.bank_debt(), Decimal::ZERO);
        assert_eq!(n.issues.len(), 2);
        assert!(n.issues.iter().all(|i| i.kind == IssueKind::Malformed));

        let at_limit = normalize(&raw(json!({ "segment": "tpe", "amount": AMOUNT_LIMIT.to_string() })));
        assert_eq!(at_limit.exposure.amount(), AMOUNT_LIMIT);
    }

    #[test]
    fn test_non_object_row_is_empty() {
        let row: RawExposure = serde_json::from_value(json!(["not", "a", "row"])).unwrap();
        let n = normalize(&row);
        assert_eq!(n.exposure.segment(), &Segment::Other(String::new()));
        assert!(n.issues.iter().any(|i| i.field == "segment"));
        assert!(n.issues.iter().any(|i| i.field == "amount"));
    }

    #[test]
    fn test_unknown_segment_kept() {
        let n = normalize(&raw(json!({ "segment": "unknown_type", "amount": 500000 })));
        assert_eq!(n.exposure.segment(), &Segment::Other("unknown_type".into()));
        assert!(n.issues.is_empty());
    }
}
