//! Compound growth and after-tax investment value
//!
//! All rates are expressed in percentage points (10.0 means 10%).

mod compound;

pub use compound::{after_tax_return, compound_growth, growth_factor};
pub(crate) use compound::taxed_growth;

/// Flat tax rate applied to gains realised at retirement
pub const RETIREMENT_GAINS_TAX_RATE_PP: f64 = 15.0;

/// Retirement age used when the caller does not supply one
pub const DEFAULT_RETIREMENT_AGE: i32 = 60;
