//! Trade calculations - import and export summaries
//!
//! A [`TradeCalculation`] accumulates line items, cost maps and
//! direction-specific financial terms, then produces an immutable
//! [`TradeSummary`] against a shared [`RateTable`].

use crate::costs::CostBreakdown;
use crate::error::{Result, TradeError};
use crate::exchange::RateTable;
use crate::product::LineItem;
use crate::terms::{ExportTerms, ImportTerms};
use crate::types::{Cash, Percent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeKind {
    Import,
    Export,
}

impl TradeKind {
    /// Get kind as string
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeKind::Import => "Import",
            TradeKind::Export => "Export",
        }
    }
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction-specific financial terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TradeTerms {
    Import(ImportTerms),
    Export(ExportTerms),
}

impl TradeTerms {
    /// Trade direction these terms apply to
    pub fn kind(&self) -> TradeKind {
        match self {
            TradeTerms::Import(_) => TradeKind::Import,
            TradeTerms::Export(_) => TradeKind::Export,
        }
    }

    fn margin(&self) -> Percent {
        match self {
            TradeTerms::Import(terms) => terms.margin,
            TradeTerms::Export(terms) => terms.margin,
        }
    }
}

/// One import or export transaction being priced.
///
/// Fully populated by a single caller before the summary is computed;
/// line items are immutable once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeCalculation {
    terms: TradeTerms,
    items: Vec<LineItem>,
    costs: CostBreakdown,
}

impl TradeCalculation {
    /// Import trade with default terms
    pub fn import() -> Self {
        Self::with_terms(TradeTerms::Import(ImportTerms::default()))
    }

    /// Export trade with default terms
    pub fn export() -> Self {
        Self::with_terms(TradeTerms::Export(ExportTerms::default()))
    }

    /// Trade with explicit terms
    pub fn with_terms(terms: TradeTerms) -> Self {
        Self {
            terms,
            items: Vec::new(),
            costs: CostBreakdown::new(),
        }
    }

    /// Trade direction
    pub fn kind(&self) -> TradeKind {
        self.terms.kind()
    }

    /// Financial terms in effect
    pub fn terms(&self) -> &TradeTerms {
        &self.terms
    }

    /// Append a line item. Heterogeneous currencies are allowed.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Line items added so far
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Replace the cost breakdown
    pub fn set_costs(&mut self, costs: CostBreakdown) {
        self.costs = costs;
    }

    /// Mutable access to the cost breakdown
    pub fn costs_mut(&mut self) -> &mut CostBreakdown {
        &mut self.costs
    }

    /// Cost breakdown in effect
    pub fn costs(&self) -> &CostBreakdown {
        &self.costs
    }

    /// Sum of line item values converted into the home currency.
    ///
    /// This is the CIF value for imports and the FOB value for exports.
    pub fn base_value(&self, rates: &RateTable) -> Cash {
        self.items
            .iter()
            .map(|item| rates.convert_to_home(item.total_value(), &item.currency))
            .sum()
    }

    /// Compute the summary record for this trade.
    ///
    /// Returns [`TradeError::DegenerateTrade`] when the landed or
    /// adjusted cost works out to zero, since the realized margin is
    /// undefined there.
    pub fn summary(&self, rates: &RateTable) -> Result<TradeSummary> {
        let base_value = self.base_value(rates);
        let logistics_total = self.costs.logistics_total();
        let misc_total = self.costs.misc_total();

        let total_cost = match &self.terms {
            TradeTerms::Import(terms) => {
                let customs_duty = base_value * terms.customs_duty / 100.0;
                // GST compounds on value plus duty, not on value alone
                let gst = (base_value + customs_duty) * terms.gst / 100.0;
                // finance_interest is a fraction, not a percentage
                let finance = base_value * terms.finance_interest;
                let commission = base_value * terms.commission / 100.0;
                base_value
                    + logistics_total
                    + misc_total
                    + customs_duty
                    + gst
                    + finance
                    + commission
            }
            TradeTerms::Export(terms) => {
                let incentive = base_value * terms.export_incentive / 100.0;
                let rebate = base_value * terms.tax_rebate / 100.0;
                let commission = base_value * terms.commission / 100.0;
                let bank_fee = base_value * terms.bank_charges / 100.0;
                // incentive and rebate reduce the exporter's effective cost
                base_value + logistics_total + misc_total - incentive - rebate
                    + commission
                    + bank_fee
            }
        };

        if total_cost == 0.0 {
            return Err(TradeError::DegenerateTrade { kind: self.kind() });
        }

        let margin = self.terms.margin();
        let selling_value = total_cost * (1.0 + margin / 100.0);
        let profit = selling_value - total_cost;
        let realized_margin_pct = profit / total_cost * 100.0;

        log::debug!(
            "{} summary: base {:.2}, cost {:.2}, selling {:.2}, profit {:.2}",
            self.kind(),
            base_value,
            total_cost,
            selling_value,
            profit
        );

        Ok(TradeSummary {
            kind: self.kind(),
            base_value,
            total_cost,
            selling_value,
            profit,
            realized_margin_pct,
        })
    }
}

/// Output record of a trade calculation. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    /// Trade direction
    pub kind: TradeKind,
    /// CIF (import) or FOB (export) value in the home currency
    pub base_value: Cash,
    /// Landed cost (import) or adjusted cost (export)
    pub total_cost: Cash,
    /// Cost marked up by the target margin
    pub selling_value: Cash,
    /// Selling value minus cost
    pub profit: Cash,
    /// Profit as a percentage of cost
    pub realized_margin_pct: Percent,
}

impl TradeSummary {
    /// Display label for `base_value`
    pub fn base_value_label(&self) -> &'static str {
        match self.kind {
            TradeKind::Import => "Total CIF",
            TradeKind::Export => "Total FOB",
        }
    }

    /// Display label for `total_cost`
    pub fn cost_label(&self) -> &'static str {
        match self.kind {
            TradeKind::Import => "Landed Cost",
            TradeKind::Export => "Adjusted Cost",
        }
    }
}
