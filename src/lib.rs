//! # tradecalc
//!
//! Landed cost, selling price and profit margin calculator for
//! import/export trade transactions.
//!
//! Multi-currency product values are converted into a home currency
//! via a [`RateTable`](exchange::RateTable), combined with logistics
//! and miscellaneous costs, and adjusted by duty, tax, incentive and
//! margin terms to produce a [`TradeSummary`](trade::TradeSummary).
//! Completed calculations aggregate into a
//! [`Portfolio`](portfolio::Portfolio).
//!
//! The crate is the pure calculation core: inputs are collected and
//! validated by an external form layer, and the returned summary
//! records are rendered by it. Every operation is a synchronous
//! in-memory computation with no I/O.
//!
//! ## Example
//!
//! ```rust
//! use tradecalc::prelude::*;
//!
//! let rates = RateTable::seeded();
//!
//! let mut trade = TradeCalculation::import();
//! trade.add_item(LineItem::new("Steel coils", "7208", 10, 100.0, "USD").unwrap());
//! trade.costs_mut().set_logistics("freight", 5000.0).unwrap();
//!
//! let summary = trade.summary(&rates).unwrap();
//! assert!(summary.profit > 0.0);
//!
//! let mut portfolio = Portfolio::new("Acme Trading");
//! portfolio.add_trade(trade);
//! let totals = portfolio.summarize(&rates);
//! assert_eq!(totals.entries.len(), 1);
//! ```

pub mod costs;
pub mod error;
pub mod exchange;
pub mod portfolio;
pub mod product;
pub mod terms;
pub mod trade;
pub mod types;

pub mod prelude {
    //! Commonly used types
    pub use crate::costs::CostBreakdown;
    pub use crate::error::{Result, TradeError};
    pub use crate::exchange::RateTable;
    pub use crate::portfolio::{Portfolio, PortfolioSummary};
    pub use crate::product::LineItem;
    pub use crate::terms::{ExportTerms, ImportTerms};
    pub use crate::trade::{TradeCalculation, TradeKind, TradeSummary, TradeTerms};
}
