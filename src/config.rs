//! Engine configuration.
//!
//! Every regulatory threshold the rules consult lives here, so a deployment
//! can pin or audit them without touching the resolvers. Defaults follow the
//! Bank Al-Maghrib standardised approach.

use crate::core::currency::CurrencyCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors arising from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable parameters of the weighting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Local currency for the sovereign and interbank carve-outs.
    pub domestic_currency: CurrencyCode,

    /// Bank debt at or above which a group-affiliated enterprise is
    /// weighted 150%.
    pub large_exposure_threshold: Decimal,

    /// Amount above which an individual exposure is weighted 100%.
    pub individual_threshold: Decimal,

    /// Maximum loan-to-value for the 75% state-convention mortgage weight.
    pub mortgage_ltv_cap: Decimal,

    /// Weight domestic-currency interbank claims of three months or less by
    /// rating instead of the flat 20%.
    pub rating_based_interbank_short_term: bool,

    /// Route any exposure flagged as distressed to the distressed-debt rule,
    /// whatever its declared segment.
    pub distressed_flag_overrides_segment: bool,

    /// Enable parallel processing (requires the `parallel` feature).
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            domestic_currency: CurrencyCode::new("MAD"),
            large_exposure_threshold: dec!(500_000_000),
            individual_threshold: dec!(1_000_000),
            mortgage_ltv_cap: dec!(0.80),
            rating_based_interbank_short_term: false,
            distressed_flag_overrides_segment: false,
            parallel: true,
            parallel_threshold: 1_000,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A config that always processes sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_domestic_currency(mut self, currency: impl Into<CurrencyCode>) -> Self {
        self.domestic_currency = currency.into();
        self
    }

    #[must_use]
    pub fn with_large_exposure_threshold(mut self, threshold: Decimal) -> Self {
        self.large_exposure_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_individual_threshold(mut self, threshold: Decimal) -> Self {
        self.individual_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_rating_based_interbank_short_term(mut self, enabled: bool) -> Self {
        self.rating_based_interbank_short_term = enabled;
        self
    }

    #[must_use]
    pub fn with_distressed_flag_override(mut self, enabled: bool) -> Self {
        self.distressed_flag_overrides_segment = enabled;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for `count` items.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Check that thresholds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domestic_currency.is_blank() {
            return Err(ConfigError::Invalid {
                field: "domestic_currency",
                reason: "must not be blank".to_string(),
            });
        }
        if self.large_exposure_threshold < Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "large_exposure_threshold",
                reason: format!("must be non-negative, got {}", self.large_exposure_threshold),
            });
        }
        if self.individual_threshold < Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "individual_threshold",
                reason: format!("must be non-negative, got {}", self.individual_threshold),
            });
        }
        if self.mortgage_ltv_cap <= Decimal::ZERO || self.mortgage_ltv_cap > Decimal::ONE {
            return Err(ConfigError::Invalid {
                field: "mortgage_ltv_cap",
                reason: format!("must be in (0, 1], got {}", self.mortgage_ltv_cap),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
