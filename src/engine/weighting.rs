use crate::config::EngineConfig;
use crate::core::exposure::{Exposure, ExposureSet};
use crate::core::normalize::{normalize, DataQualityIssue, RawExposure};
use crate::core::segment::Segment;
use crate::core::weight::RiskWeight;
use crate::engine::aggregation::PortfolioAggregate;
use crate::engine::parallel::{maybe_parallel_fold, maybe_parallel_map};
use crate::rules::dispatch::dispatch;
use crate::rules::{distressed, mortgage, Rule, RuleContext};
use crate::tables::weights::WeightTables;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Weight and RWA of a single exposure, with the clause that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightingResult {
    pub exposure_id: Uuid,
    pub segment: Segment,
    pub sub_segment: String,
    pub amount: Decimal,
    pub weight: RiskWeight,
    /// `amount * weight`, exact.
    pub rwa: Decimal,
    pub rule: Rule,
    /// Audit rendering of `rule` including the weight.
    pub explanation: String,
    /// The inputs the firing rule family consulted, as displayed values.
    pub attributes: Vec<(&'static str, String)>,
}

impl fmt::Display for WeightingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] amount {} x {} = {} | {}",
            self.exposure_id, self.segment, self.amount, self.weight, self.rwa, self.explanation
        )
    }
}

/// Everything one calculation pass hands to reporting collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct RwaReport {
    pub results: Vec<WeightingResult>,
    pub aggregate: PortfolioAggregate,
    pub computed_at: DateTime<Utc>,
}

impl fmt::Display for RwaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computed at: {}", self.computed_at.to_rfc3339())?;
        write!(f, "{}", self.aggregate)?;
        writeln!(f, "\n=== Exposures ===")?;
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        Ok(())
    }
}

fn rating_text<T>(rating: Option<&T>, code: impl Fn(&T) -> &str) -> String {
    rating.map_or_else(|| "unrated".to_string(), |r| code(r).to_string())
}

/// Per-family list of the exposure fields a rule family reads.
fn consulted_attributes(exposure: &Exposure, rule: &Rule) -> Vec<(&'static str, String)> {
    let flags = exposure.flags();
    let long_term = || {
        (
            "external_rating",
            rating_text(exposure.external_rating(), |r| r.code.as_str()),
        )
    };
    let short_term = || {
        (
            "short_term_rating",
            rating_text(exposure.short_term_rating(), |r| r.code.as_str()),
        )
    };

    match rule {
        Rule::SovereignDomestic { .. }
        | Rule::SovereignSupranational { .. }
        | Rule::SovereignRated { .. }
        | Rule::SovereignPmae { .. }
        | Rule::SovereignUnrated => vec![
            ("sub_segment", exposure.sub_segment().to_string()),
            ("currency", exposure.currency().to_string()),
            long_term(),
            (
                "pmae_class",
                exposure
                    .pmae_class()
                    .map_or_else(|| "none".to_string(), |c| c.value().to_string()),
            ),
        ],
        Rule::PublicBodyBudgetGuaranteed
        | Rule::PublicBodyRated { .. }
        | Rule::PublicBodyUnrated => vec![
            ("budget_guaranteed", flags.budget_guaranteed.to_string()),
            long_term(),
        ],
        Rule::MdbListed | Rule::MdbRated { .. } | Rule::MdbUnrated => vec![
            ("bam_agreement", flags.bam_agreement.to_string()),
            long_term(),
        ],
        Rule::InterbankShortTermLocal { .. }
        | Rule::InterbankShortTermRated { .. }
        | Rule::InterbankRated { .. }
        | Rule::InterbankUnrated => vec![
            ("maturity", exposure.maturity().to_string()),
            ("currency", exposure.currency().to_string()),
            short_term(),
            long_term(),
        ],
        Rule::EnterpriseShortTermRated { .. }
        | Rule::EnterpriseBamAgreement
        | Rule::EnterpriseLargeGroup { .. }
        | Rule::EnterpriseRated { .. }
        | Rule::EnterpriseUnrated => vec![
            ("maturity", exposure.maturity().to_string()),
            short_term(),
            ("bam_agreement", flags.bam_agreement.to_string()),
            ("group_affiliated", flags.group_affiliated.to_string()),
            ("bank_debt", exposure.bank_debt().to_string()),
            long_term(),
        ],
        Rule::MicroEnterpriseFlat => Vec::new(),
        Rule::IndividualAboveThreshold { .. } | Rule::IndividualWithinThreshold { .. } => {
            vec![("amount", exposure.amount().to_string())]
        }
        Rule::MortgageResidential
        | Rule::MortgageCommercialGuaranteed
        | Rule::MortgageCommercialLease
        | Rule::MortgageStateConvention { .. }
        | Rule::MortgageResidentialFallback => vec![
            ("usage", exposure.usage().to_string()),
            ("mortgage_guaranteed", flags.mortgage_guaranteed.to_string()),
            ("state_convention", flags.state_convention.to_string()),
            (
                "mortgaged_asset_value",
                exposure.mortgaged_asset_value().to_string(),
            ),
            (
                "loan_to_value",
                mortgage::loan_to_value(exposure).map_or_else(
                    || "n/a".to_string(),
                    |ltv| ltv.round_dp(4).normalize().to_string(),
                ),
            ),
        ],
        Rule::DistressedNoOutstanding | Rule::DistressedProvisioned { .. } => vec![
            ("outstanding_balance", exposure.outstanding_balance().to_string()),
            ("provision_held", exposure.provision_held().to_string()),
            (
                "provision_ratio",
                distressed::provision_ratio(exposure)
                    .round_dp(4)
                    .normalize()
                    .to_string(),
            ),
            ("usage", exposure.usage().to_string()),
        ],
        Rule::UnrecognizedSegment { .. } => Vec::new(),
    }
}

/// Stateless weighting engine.
///
/// Holds the process-wide weight tables by reference and a copy of the
/// configuration. Every call is independent, so a single engine can be
/// shared across threads.
///
/// # Examples
///
/// ```
/// use rwa_engine::core::exposure::Exposure;
/// use rwa_engine::core::segment::Segment;
/// use rwa_engine::engine::weighting::WeightingEngine;
/// use rust_decimal_macros::dec;
///
/// let engine = WeightingEngine::default();
/// let exposure = Exposure::builder(Segment::Individual, dec!(1_500_000)).build();
/// let result = engine.weigh(&exposure);
///
/// assert_eq!(result.weight.as_decimal(), dec!(1.00));
/// assert_eq!(result.rwa, dec!(1_500_000));
/// ```
#[derive(Debug, Clone)]
pub struct WeightingEngine {
    tables: &'static WeightTables,
    config: EngineConfig,
}

impl Default for WeightingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl WeightingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            tables: WeightTables::standard(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tables(&self) -> &'static WeightTables {
        self.tables
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext::new(self.tables, &self.config)
    }

    /// Weight one exposure.
    pub fn weigh(&self, exposure: &Exposure) -> WeightingResult {
        let resolution = dispatch(exposure, &self.context());
        let amount = exposure.amount();
        let rwa = resolution.weight.apply(amount).unwrap_or_else(|| {
            warn!(
                "{}: RWA of {} x {} overflows, saturating",
                exposure.id(),
                amount,
                resolution.weight
            );
            amount.saturating_mul(resolution.weight.as_decimal())
        });

        debug!(
            "{} [{}]: {} -> {}",
            exposure.id(),
            exposure.segment(),
            resolution.rule.code(),
            resolution.weight
        );

        WeightingResult {
            exposure_id: exposure.id(),
            segment: exposure.segment().clone(),
            sub_segment: exposure.sub_segment().to_string(),
            amount,
            weight: resolution.weight,
            rwa,
            explanation: format!("{} - weight {}", resolution.rule, resolution.weight),
            attributes: consulted_attributes(exposure, &resolution.rule),
            rule: resolution.rule,
        }
    }

    /// Weight a batch, preserving input order.
    pub fn weigh_all(&self, exposures: &[Exposure]) -> Vec<WeightingResult> {
        maybe_parallel_map(exposures, &self.config, |e| self.weigh(e))
    }

    /// Reduce results into portfolio totals.
    pub fn aggregate(&self, results: &[WeightingResult]) -> PortfolioAggregate {
        maybe_parallel_fold(
            results,
            &self.config,
            PortfolioAggregate::default(),
            |mut acc, r| {
                acc.add(r);
                acc
            },
            PortfolioAggregate::merge,
        )
    }

    /// Weight and aggregate a whole exposure set.
    pub fn run(&self, exposures: &ExposureSet) -> RwaReport {
        let results = self.weigh_all(exposures.exposures());
        let aggregate = self.aggregate(&results);

        let fallbacks = results.iter().filter(|r| r.rule.is_fallback()).count();
        info!(
            "weighted {} exposures across {} segments: exposure {}, RWA {} ({} fallback clauses)",
            aggregate.count(),
            aggregate.distinct_segment_count(),
            aggregate.total_exposure(),
            aggregate.total_rwa(),
            fallbacks
        );

        RwaReport {
            results,
            aggregate,
            computed_at: Utc::now(),
        }
    }

    /// Normalise loosely typed rows, then [`run`](Self::run) them.
    ///
    /// Data-quality issues are logged and returned alongside the report;
    /// they never stop the batch.
    pub fn run_raw(&self, rows: Vec<RawExposure>) -> (RwaReport, Vec<DataQualityIssue>) {
        let mut issues = Vec::new();
        let mut exposures = ExposureSet::new();

        for (row, raw) in rows.iter().enumerate() {
            let normalized = normalize(raw);
            for issue in &normalized.issues {
                warn!("row {} ({}): {}", row, normalized.exposure.id(), issue);
            }
            issues.extend(normalized.issues);
            exposures.add(normalized.exposure);
        }

        if !issues.is_empty() {
            info!("{} data-quality issues in {} rows", issues.len(), rows.len());
        }

        (self.run(&exposures), issues)
    }
}
