use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217-style currency code of an exposure.
///
/// Codes are normalised on construction (trimmed, uppercased) so that
/// `"mad"`, `" MAD "` and `"MAD"` all compare equal. The domestic currency
/// used by the local-currency carve-outs is configured on the engine, not
/// hard-wired here.
///
/// # Examples
///
/// ```
/// use rwa_engine::core::currency::CurrencyCode;
///
/// let mad = CurrencyCode::new(" mad");
/// assert_eq!(mad, CurrencyCode::new("MAD"));
/// assert_ne!(mad, CurrencyCode::new("EUR"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no currency was supplied.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison against a raw code.
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_equality() {
        let a = CurrencyCode::new("MAD");
        let b = CurrencyCode::new("mad ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_currency_matches() {
        let eur = CurrencyCode::new("EUR");
        assert!(eur.matches("eur"));
        assert!(!eur.matches("MAD"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let code: CurrencyCode = serde_json::from_str("\" eur\"").unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"EUR\"");
    }

    #[test]
    fn test_blank_currency() {
        assert!(CurrencyCode::new("  ").is_blank());
        assert!(CurrencyCode::default().is_blank());
        assert!(!CurrencyCode::new("USD").is_blank());
    }
}
