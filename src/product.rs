//! Trade line items

use crate::error::{Result, TradeError};
use crate::types::Cash;
use serde::{Deserialize, Serialize};

/// A quantity × unit-price entry in a given currency.
///
/// Immutable once added to a calculation. The value is expressed in
/// the item's own currency; conversion into the home currency is the
/// calculation's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (non-empty)
    pub name: String,
    /// Free-form product identifier, e.g. an HS code; not validated
    pub code: String,
    /// Units traded (at least 1)
    pub quantity: u32,
    /// Price per unit, in `currency`
    pub unit_price: Cash,
    /// Currency code of `unit_price`
    pub currency: String,
}

impl LineItem {
    /// Create a validated line item
    pub fn new(
        name: &str,
        code: &str,
        quantity: u32,
        unit_price: Cash,
        currency: &str,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(TradeError::Validation(
                "line item name must not be empty".to_string(),
            ));
        }
        if quantity == 0 {
            return Err(TradeError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }
        if unit_price < 0.0 || !unit_price.is_finite() {
            return Err(TradeError::Validation(format!(
                "unit price must be non-negative, got {}",
                unit_price
            )));
        }
        Ok(Self {
            name: name.to_string(),
            code: code.to_string(),
            quantity,
            unit_price,
            currency: currency.to_string(),
        })
    }

    /// Total value in the item's own currency
    pub fn total_value(&self) -> Cash {
        self.quantity as f64 * self.unit_price
    }
}
