//! Exchange rates and currency conversion
//!
//! A [`RateTable`] maps currency codes to their value in the home
//! currency and performs pairwise conversion. The table is built once
//! per session and shared read-only by every calculation.

use crate::error::{Result, TradeError};
use crate::types::{Cash, Rate};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Static table of conversion rates into a home currency.
///
/// Each entry maps an upper-cased currency code to the number of
/// home-currency units one foreign unit is worth. The home currency
/// itself is always present at rate 1.0.
///
/// Codes not present in the table resolve to 1.0 rather than failing,
/// i.e. unrecognised currencies are treated as already being in the
/// home currency. A warning is logged when this happens.
///
/// # Example
/// ```
/// use tradecalc::exchange::RateTable;
///
/// let rates = RateTable::seeded();
/// assert_eq!(rates.rate("usd"), 83.0);
/// assert_eq!(rates.convert(100.0, "USD", "INR"), 8300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    home: String,
    rates: HashMap<String, Rate>,
}

impl RateTable {
    /// Create an empty table with only the home currency at rate 1.0
    pub fn new(home: &str) -> Self {
        let home = home.to_uppercase();
        let mut rates = HashMap::new();
        rates.insert(home.clone(), 1.0);
        Self { home, rates }
    }

    /// Default table used by the calculator: INR home with USD, EUR
    /// and AED rates
    pub fn seeded() -> Self {
        let mut rates = HashMap::new();
        for (code, rate) in [("USD", 83.0), ("EUR", 90.5), ("AED", 22.6), ("INR", 1.0)] {
            rates.insert(code.to_string(), rate);
        }
        Self {
            home: "INR".to_string(),
            rates,
        }
    }

    /// Add or replace a rate. Rates must be positive and finite.
    pub fn insert(&mut self, code: &str, rate: Rate) -> Result<()> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(TradeError::InvalidRate {
                code: code.to_uppercase(),
                rate,
            });
        }
        self.rates.insert(code.to_uppercase(), rate);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert) for table construction
    pub fn with_rate(mut self, code: &str, rate: Rate) -> Result<Self> {
        self.insert(code, rate)?;
        Ok(self)
    }

    /// Home currency code
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Check whether a code is actually seeded in the table.
    ///
    /// Collectors that want strict currency validation can call this
    /// before accepting an input, since [`rate`](Self::rate) never fails.
    pub fn has_rate(&self, code: &str) -> bool {
        self.rates.contains_key(&code.to_uppercase())
    }

    /// Number of seeded currencies, home included
    pub fn num_rates(&self) -> usize {
        self.rates.len()
    }

    /// Rate for a currency code, case-insensitive.
    ///
    /// Unknown codes fall back to 1.0 silently.
    pub fn rate(&self, code: &str) -> Rate {
        let code = code.to_uppercase();
        match self.rates.get(&code) {
            Some(rate) => *rate,
            None => {
                log::warn!("No rate for currency {}, assuming 1.0", code);
                1.0
            }
        }
    }

    /// Convert an amount between two currencies via their
    /// home-currency rates
    pub fn convert(&self, amount: Cash, from: &str, to: &str) -> Cash {
        // Same code always converts 1:1
        if from.eq_ignore_ascii_case(to) {
            return amount;
        }
        amount * self.rate(from) / self.rate(to)
    }

    /// Convert an amount into the home currency
    pub fn convert_to_home(&self, amount: Cash, from: &str) -> Cash {
        self.convert(amount, from, &self.home)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seeded_rates() {
        let rates = RateTable::seeded();
        assert_eq!(rates.home(), "INR");
        assert_eq!(rates.rate("USD"), 83.0);
        assert_eq!(rates.rate("EUR"), 90.5);
        assert_eq!(rates.rate("AED"), 22.6);
        assert_eq!(rates.rate("INR"), 1.0);
        assert_eq!(rates.num_rates(), 4);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let rates = RateTable::seeded();
        assert_eq!(rates.rate("usd"), 83.0);
        assert_eq!(rates.rate("Eur"), 90.5);
    }

    #[test]
    fn test_unknown_code_falls_back_to_one() {
        // Documented quirk: unknown codes are treated as home currency
        let rates = RateTable::seeded();
        assert_eq!(rates.rate("XYZ"), 1.0);
        assert!(!rates.has_rate("XYZ"));
        assert_eq!(rates.convert(250.0, "XYZ", "INR"), 250.0);
    }

    #[test]
    fn test_convert_to_home() {
        let rates = RateTable::seeded();
        assert_eq!(rates.convert_to_home(1000.0, "USD"), 83_000.0);
        assert_eq!(rates.convert_to_home(1000.0, "INR"), 1000.0);
    }

    #[test]
    fn test_convert_between_foreign_pairs() {
        let rates = RateTable::seeded();
        // 100 EUR in USD = 100 * 90.5 / 83.0
        assert_relative_eq!(
            rates.convert(100.0, "EUR", "USD"),
            100.0 * 90.5 / 83.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_convert_identity() {
        let rates = RateTable::seeded();
        assert_eq!(rates.convert(42.0, "USD", "USD"), 42.0);
        // Holds for unknown codes too: both sides resolve to 1.0
        assert_eq!(rates.convert(42.0, "XYZ", "XYZ"), 42.0);
    }

    #[test]
    fn test_round_trip() {
        let rates = RateTable::seeded();
        let home = rates.convert_to_home(123.45, "EUR");
        let back = rates.convert(home, "INR", "EUR");
        assert_relative_eq!(back, 123.45, max_relative = 1e-12);
    }

    #[test]
    fn test_insert_rejects_non_positive_rates() {
        let mut rates = RateTable::new("INR");
        assert!(rates.insert("USD", 0.0).is_err());
        assert!(rates.insert("USD", -1.0).is_err());
        assert!(rates.insert("USD", f64::NAN).is_err());
        assert!(rates.insert("USD", 83.0).is_ok());
    }

    #[test]
    fn test_with_rate_builder() {
        let rates = RateTable::new("USD")
            .with_rate("EUR", 1.08)
            .unwrap()
            .with_rate("GBP", 1.27)
            .unwrap();
        assert_eq!(rates.home(), "USD");
        assert_eq!(rates.rate("GBP"), 1.27);
    }
}
