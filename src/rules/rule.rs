use crate::core::currency::CurrencyCode;
use crate::tables::rating::{LongTermBucket, ShortTermBucket};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// The regulatory clause that determined an exposure's weight.
///
/// Each variant carries the inputs that made it fire, so the rendered
/// explanation is self-contained for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "clause", rename_all = "snake_case")]
pub enum Rule {
    SovereignDomestic { currency: CurrencyCode },
    SovereignSupranational { institution: &'static str },
    SovereignRated { code: String, bucket: LongTermBucket },
    SovereignPmae { class: u8 },
    SovereignUnrated,

    PublicBodyBudgetGuaranteed,
    PublicBodyRated { code: String, bucket: LongTermBucket },
    PublicBodyUnrated,

    MdbListed,
    MdbRated { code: String, bucket: LongTermBucket },
    MdbUnrated,

    InterbankShortTermLocal { currency: CurrencyCode },
    InterbankShortTermRated { code: String, bucket: ShortTermBucket },
    InterbankRated { code: String, bucket: LongTermBucket },
    InterbankUnrated,

    EnterpriseShortTermRated { code: String, bucket: ShortTermBucket },
    EnterpriseBamAgreement,
    EnterpriseLargeGroup { bank_debt: Decimal, threshold: Decimal },
    EnterpriseRated { code: String, bucket: LongTermBucket },
    EnterpriseUnrated,

    MicroEnterpriseFlat,

    IndividualAboveThreshold { threshold: Decimal },
    IndividualWithinThreshold { threshold: Decimal },

    MortgageResidential,
    MortgageCommercialGuaranteed,
    MortgageCommercialLease,
    MortgageStateConvention { loan_to_value: Decimal },
    MortgageResidentialFallback,

    DistressedNoOutstanding,
    DistressedProvisioned { provision_ratio: Decimal, residential: bool },

    UnrecognizedSegment { label: String },
}

impl Rule {
    /// Stable machine-readable identifier of the clause.
    pub fn code(&self) -> &'static str {
        match self {
            Rule::SovereignDomestic { .. } => "sovereign.domestic",
            Rule::SovereignSupranational { .. } => "sovereign.supranational",
            Rule::SovereignRated { .. } => "sovereign.rated",
            Rule::SovereignPmae { .. } => "sovereign.pmae",
            Rule::SovereignUnrated => "sovereign.unrated",
            Rule::PublicBodyBudgetGuaranteed => "public_body.budget_guaranteed",
            Rule::PublicBodyRated { .. } => "public_body.rated",
            Rule::PublicBodyUnrated => "public_body.unrated",
            Rule::MdbListed => "mdb.listed",
            Rule::MdbRated { .. } => "mdb.rated",
            Rule::MdbUnrated => "mdb.unrated",
            Rule::InterbankShortTermLocal { .. } => "credit_institution.short_term_local",
            Rule::InterbankShortTermRated { .. } => "credit_institution.short_term_rated",
            Rule::InterbankRated { .. } => "credit_institution.rated",
            Rule::InterbankUnrated => "credit_institution.unrated",
            Rule::EnterpriseShortTermRated { .. } => "enterprise.short_term_rated",
            Rule::EnterpriseBamAgreement => "enterprise.bam_agreement",
            Rule::EnterpriseLargeGroup { .. } => "enterprise.large_group",
            Rule::EnterpriseRated { .. } => "enterprise.rated",
            Rule::EnterpriseUnrated => "enterprise.unrated",
            Rule::MicroEnterpriseFlat => "micro_enterprise.flat",
            Rule::IndividualAboveThreshold { .. } => "individual.above_threshold",
            Rule::IndividualWithinThreshold { .. } => "individual.within_threshold",
            Rule::MortgageResidential => "mortgage.residential",
            Rule::MortgageCommercialGuaranteed => "mortgage.commercial_guaranteed",
            Rule::MortgageCommercialLease => "mortgage.commercial_lease",
            Rule::MortgageStateConvention { .. } => "mortgage.state_convention",
            Rule::MortgageResidentialFallback => "mortgage.residential_fallback",
            Rule::DistressedNoOutstanding => "distressed.no_outstanding",
            Rule::DistressedProvisioned { .. } => "distressed.provisioned",
            Rule::UnrecognizedSegment { .. } => "other.default",
        }
    }

    /// True when the clause is a fallback taken for lack of data.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            Rule::SovereignUnrated
                | Rule::PublicBodyUnrated
                | Rule::MdbUnrated
                | Rule::InterbankUnrated
                | Rule::EnterpriseUnrated
                | Rule::MortgageResidentialFallback
                | Rule::DistressedNoOutstanding
                | Rule::UnrecognizedSegment { .. }
        )
    }
}

fn percent(ratio: Decimal) -> Decimal {
    ratio.saturating_mul(Decimal::ONE_HUNDRED).round_dp(2).normalize()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::SovereignDomestic { currency } => write!(
                f,
                "Sovereign: Moroccan state / Bank Al-Maghrib in {}",
                currency
            ),
            Rule::SovereignSupranational { institution } => {
                write!(f, "Sovereign: supranational institution ({})", institution)
            }
            Rule::SovereignRated { code, bucket } => {
                write!(f, "Sovereign: rated {} ({}) on sovereign scale", code, bucket)
            }
            Rule::SovereignPmae { class } => {
                write!(f, "Sovereign: unrated, PMAE class {}", class)
            }
            Rule::SovereignUnrated => f.write_str("Sovereign: unrated, no PMAE class"),
            Rule::PublicBodyBudgetGuaranteed => {
                f.write_str("Public body: reimbursement provided for in state budget")
            }
            Rule::PublicBodyRated { code, bucket } => {
                write!(f, "Public body: rated {} ({})", code, bucket)
            }
            Rule::PublicBodyUnrated => f.write_str("Public body: unrated"),
            Rule::MdbListed => f.write_str("MDB: listed by Bank Al-Maghrib"),
            Rule::MdbRated { code, bucket } => {
                write!(f, "MDB: rated {} ({}) on MDB scale", code, bucket)
            }
            Rule::MdbUnrated => f.write_str("MDB: unrated"),
            Rule::InterbankShortTermLocal { currency } => write!(
                f,
                "Credit institution: original maturity <=3 months in {}",
                currency
            ),
            Rule::InterbankShortTermRated { code, bucket } => write!(
                f,
                "Credit institution: maturity <1 year, short-term rating {} ({})",
                code, bucket
            ),
            Rule::InterbankRated { code, bucket } => {
                write!(f, "Credit institution: rated {} ({})", code, bucket)
            }
            Rule::InterbankUnrated => f.write_str("Credit institution: unrated"),
            Rule::EnterpriseShortTermRated { code, bucket } => write!(
                f,
                "Enterprise: maturity <1 year, short-term rating {} ({})",
                code, bucket
            ),
            Rule::EnterpriseBamAgreement => {
                f.write_str("Enterprise: single weight under Bank Al-Maghrib agreement")
            }
            Rule::EnterpriseLargeGroup {
                bank_debt,
                threshold,
            } => write!(
                f,
                "Enterprise: group entity with bank debt {} >= {}",
                bank_debt, threshold
            ),
            Rule::EnterpriseRated { code, bucket } => {
                write!(f, "Enterprise: rated {} ({})", code, bucket)
            }
            Rule::EnterpriseUnrated => f.write_str("Enterprise: unrated"),
            Rule::MicroEnterpriseFlat => f.write_str("Micro-enterprise: flat weight"),
            Rule::IndividualAboveThreshold { threshold } => {
                write!(f, "Individual: amount > {}", threshold)
            }
            Rule::IndividualWithinThreshold { threshold } => {
                write!(f, "Individual: amount <= {}", threshold)
            }
            Rule::MortgageResidential => f.write_str("Mortgage: residential property"),
            Rule::MortgageCommercialGuaranteed => {
                f.write_str("Mortgage: commercial property secured by mortgage")
            }
            Rule::MortgageCommercialLease => f.write_str("Mortgage: commercial lease-purchase"),
            Rule::MortgageStateConvention { loan_to_value } => write!(
                f,
                "Mortgage: state convention, loan-to-value {}%",
                percent(*loan_to_value)
            ),
            Rule::MortgageResidentialFallback => {
                f.write_str("Mortgage: no specific clause, residential treatment")
            }
            Rule::DistressedNoOutstanding => {
                f.write_str("Distressed debt: no outstanding balance, maximum weight")
            }
            Rule::DistressedProvisioned {
                provision_ratio,
                residential,
            } => write!(
                f,
                "Distressed debt{}: provisions {}% of outstanding",
                if *residential { " (residential)" } else { "" },
                percent(*provision_ratio)
            ),
            Rule::UnrecognizedSegment { label } => {
                write!(f, "Unrecognised segment '{}': conservative default", label)
            }
        }
    }
}
