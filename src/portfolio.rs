//! Trade portfolio and profit aggregation

use crate::error::Result;
use crate::exchange::RateTable;
use crate::trade::{TradeCalculation, TradeSummary};
use crate::types::Cash;
use serde::{Deserialize, Serialize};

/// Ordered collection of completed trade calculations for one owner.
///
/// Grows monotonically; insertion order is display order. Summaries
/// are recomputed on every [`summarize`](Self::summarize) call rather
/// than cached, which is idempotent since trades are not mutated after
/// being added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    owner: String,
    trades: Vec<TradeCalculation>,
}

impl Portfolio {
    /// Create an empty portfolio for an owner
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            trades: Vec::new(),
        }
    }

    /// Portfolio owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Append a trade. No deduplication or validation is performed.
    pub fn add_trade(&mut self, trade: TradeCalculation) {
        self.trades.push(trade);
    }

    /// Stored trades, in insertion order
    pub fn trades(&self) -> &[TradeCalculation] {
        &self.trades
    }

    /// Number of stored trades
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// True when no trades have been added
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Recompute every stored trade and aggregate profit.
    ///
    /// A degenerate trade surfaces as an error entry in its slot
    /// without aborting the rest; only successful summaries contribute
    /// to the profit total. An empty portfolio yields no entries and a
    /// zero total.
    pub fn summarize(&self, rates: &RateTable) -> PortfolioSummary {
        let entries: Vec<Result<TradeSummary>> = self
            .trades
            .iter()
            .map(|trade| trade.summary(rates))
            .collect();

        let total_profit: Cash = entries
            .iter()
            .filter_map(|entry| entry.as_ref().ok())
            .map(|summary| summary.profit)
            .sum();

        log::debug!(
            "portfolio '{}': {} trades, total profit {:.2}",
            self.owner,
            entries.len(),
            total_profit
        );

        PortfolioSummary {
            owner: self.owner.clone(),
            entries,
            total_profit,
        }
    }
}

/// Per-trade summaries plus the aggregate profit, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Portfolio owner, for display
    pub owner: String,
    /// One entry per stored trade; degenerate trades carry their error
    pub entries: Vec<Result<TradeSummary>>,
    /// Sum of profit across the successful entries
    pub total_profit: Cash,
}

impl PortfolioSummary {
    /// Successful summaries only, preserving order
    pub fn successes(&self) -> impl Iterator<Item = &TradeSummary> {
        self.entries.iter().filter_map(|entry| entry.as_ref().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::LineItem;
    use approx::assert_relative_eq;

    fn import_trade() -> TradeCalculation {
        let mut trade = TradeCalculation::import();
        trade.add_item(LineItem::new("Steel coils", "7208", 10, 100.0, "USD").unwrap());
        trade
    }

    fn export_trade() -> TradeCalculation {
        let mut trade = TradeCalculation::export();
        trade.add_item(LineItem::new("Garments", "6109", 5, 200.0, "EUR").unwrap());
        trade
    }

    #[test]
    fn test_empty_portfolio() {
        let rates = RateTable::seeded();
        let portfolio = Portfolio::new("Acme Trading");

        let summary = portfolio.summarize(&rates);
        assert_eq!(summary.owner, "Acme Trading");
        assert!(summary.entries.is_empty());
        assert_eq!(summary.total_profit, 0.0);
    }

    #[test]
    fn test_total_profit_is_sum_of_entries() {
        let rates = RateTable::seeded();
        let mut portfolio = Portfolio::new("Acme Trading");
        portfolio.add_trade(import_trade());
        portfolio.add_trade(export_trade());

        let summary = portfolio.summarize(&rates);
        assert_eq!(summary.entries.len(), 2);
        assert_relative_eq!(summary.total_profit, 43_259.425, max_relative = 1e-12);

        let sum: f64 = summary.successes().map(|s| s.profit).sum();
        assert_relative_eq!(summary.total_profit, sum);
    }

    #[test]
    fn test_degenerate_trade_does_not_abort_the_rest() {
        let rates = RateTable::seeded();
        let mut portfolio = Portfolio::new("Acme Trading");
        portfolio.add_trade(import_trade());
        portfolio.add_trade(TradeCalculation::export()); // all-zero trade
        portfolio.add_trade(export_trade());

        let summary = portfolio.summarize(&rates);
        assert_eq!(summary.entries.len(), 3);
        assert!(summary.entries[0].is_ok());
        assert!(summary.entries[1].is_err());
        assert!(summary.entries[2].is_ok());
        assert_relative_eq!(summary.total_profit, 43_259.425, max_relative = 1e-12);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let rates = RateTable::seeded();
        let mut portfolio = Portfolio::new("Acme Trading");
        portfolio.add_trade(export_trade());
        portfolio.add_trade(import_trade());

        let summary = portfolio.summarize(&rates);
        let kinds: Vec<_> = summary.successes().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![crate::trade::TradeKind::Export, crate::trade::TradeKind::Import]
        );
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let rates = RateTable::seeded();
        let mut portfolio = Portfolio::new("Acme Trading");
        portfolio.add_trade(import_trade());

        let first = portfolio.summarize(&rates);
        let second = portfolio.summarize(&rates);
        assert_eq!(first, second);
    }
}
