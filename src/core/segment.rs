use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulatory counterparty segment of an exposure.
///
/// Parsing is total: any label outside the known vocabulary becomes
/// [`Segment::Other`], which the dispatcher weights at the conservative
/// default instead of rejecting.
///
/// Both English labels and the French labels used in Bank Al-Maghrib
/// reporting templates are accepted.
///
/// # Examples
///
/// ```
/// use rwa_engine::core::segment::Segment;
///
/// assert_eq!(Segment::parse(" Souverain "), Segment::Sovereign);
/// assert_eq!(Segment::parse("credit-institution"), Segment::CreditInstitution);
/// assert_eq!(Segment::parse("unknown_type"), Segment::Other("unknown_type".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Segment {
    Sovereign,
    PublicBody,
    MultilateralDevelopmentBank,
    CreditInstitution,
    Enterprise,
    MicroEnterprise,
    Individual,
    MortgageLoan,
    DistressedDebt,
    /// Unrecognised label, kept in normalised form.
    Other(String),
}

impl Segment {
    /// Every recognised segment.
    pub const KNOWN: [Segment; 9] = [
        Segment::Sovereign,
        Segment::PublicBody,
        Segment::MultilateralDevelopmentBank,
        Segment::CreditInstitution,
        Segment::Enterprise,
        Segment::MicroEnterprise,
        Segment::Individual,
        Segment::MortgageLoan,
        Segment::DistressedDebt,
    ];

    /// Lowercase, trim and fold spaces and hyphens to underscores.
    pub fn normalize_label(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }

    pub fn parse(raw: &str) -> Self {
        let label = Self::normalize_label(raw);
        match label.as_str() {
            "sovereign" | "souverain" | "etat" | "état" => Segment::Sovereign,
            "public_body" | "public_sector_entity" | "pse" | "organisme_public" => {
                Segment::PublicBody
            }
            "mdb" | "bmd" | "multilateral_development_bank" => {
                Segment::MultilateralDevelopmentBank
            }
            "credit_institution" | "bank" | "etablissement_credit" | "établissement_crédit"
            | "etablissement_de_credit" | "entite_bancaire" => Segment::CreditInstitution,
            "enterprise" | "corporate" | "entreprise" | "grande_entreprise" => Segment::Enterprise,
            "micro_enterprise" | "very_small_enterprise" | "tpe" => Segment::MicroEnterprise,
            "individual" | "retail" | "particulier" => Segment::Individual,
            "mortgage_loan" | "mortgage" | "real_estate" | "pret" | "prêt" | "immobilier"
            | "pret_immobilier" | "prêt_immobilier" => Segment::MortgageLoan,
            "distressed_debt" | "distressed" | "creance_souffrance" | "créance_souffrance"
            | "creance_en_souffrance" | "créance_en_souffrance" => Segment::DistressedDebt,
            _ => Segment::Other(label),
        }
    }

    /// Canonical label used as the aggregation key.
    pub fn label(&self) -> &str {
        match self {
            Segment::Sovereign => "sovereign",
            Segment::PublicBody => "public_body",
            Segment::MultilateralDevelopmentBank => "mdb",
            Segment::CreditInstitution => "credit_institution",
            Segment::Enterprise => "enterprise",
            Segment::MicroEnterprise => "micro_enterprise",
            Segment::Individual => "individual",
            Segment::MortgageLoan => "mortgage_loan",
            Segment::DistressedDebt => "distressed_debt",
            Segment::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Segment::Other(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        segment.label().to_string()
    }
}
