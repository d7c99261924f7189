//! Logistics and miscellaneous cost maps

use crate::error::{Result, TradeError};
use crate::types::Cash;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Free-form cost categories, already expressed in the home currency.
///
/// Logistics covers freight, insurance, port handling and the like;
/// misc covers documentation, packaging, certification. Category names
/// are free-form and kept only for display; the calculation consumes
/// the sums. Setting a category twice replaces the earlier amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    logistics: HashMap<String, Cash>,
    misc: HashMap<String, Cash>,
}

impl CostBreakdown {
    /// Create an empty cost breakdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a logistics cost under a category name
    pub fn set_logistics(&mut self, category: &str, amount: Cash) -> Result<()> {
        Self::check(category, amount)?;
        self.logistics.insert(category.to_string(), amount);
        Ok(())
    }

    /// Record a miscellaneous cost under a category name
    pub fn set_misc(&mut self, category: &str, amount: Cash) -> Result<()> {
        Self::check(category, amount)?;
        self.misc.insert(category.to_string(), amount);
        Ok(())
    }

    fn check(category: &str, amount: Cash) -> Result<()> {
        if amount < 0.0 || !amount.is_finite() {
            return Err(TradeError::Validation(format!(
                "cost '{}' must be non-negative, got {}",
                category, amount
            )));
        }
        Ok(())
    }

    /// Sum of all logistics costs
    pub fn logistics_total(&self) -> Cash {
        self.logistics.values().sum()
    }

    /// Sum of all miscellaneous costs
    pub fn misc_total(&self) -> Cash {
        self.misc.values().sum()
    }

    /// Recorded logistics categories
    pub fn logistics(&self) -> &HashMap<String, Cash> {
        &self.logistics
    }

    /// Recorded miscellaneous categories
    pub fn misc(&self) -> &HashMap<String, Cash> {
        &self.misc
    }

    /// True when no costs have been recorded
    pub fn is_empty(&self) -> bool {
        self.logistics.is_empty() && self.misc.is_empty()
    }
}
