//! Error types for tradecalc

use crate::trade::TradeKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for tradecalc
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TradeError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid rate for {code}: {rate} (rates must be positive and finite)")]
    InvalidRate { code: String, rate: f64 },

    #[error("Degenerate {kind} trade: cost basis is zero, margin is undefined")]
    DegenerateTrade { kind: TradeKind },
}

/// Result type alias for tradecalc operations
pub type Result<T> = std::result::Result<T, TradeError>;
