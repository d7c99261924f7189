//! Core scalar types

/// Money/cash type (using f64 for precision)
pub type Cash = f64;

/// Exchange rate: home-currency units per one foreign unit
pub type Rate = f64;

/// Percentage type (0.0 to 100.0)
pub type Percent = f64;
