//! Error types for projections and plan loading

use thiserror::Error;

/// Errors raised while growing money or projecting retirement wealth
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid {field}: {value} (must be non-negative)")]
    InvalidYears { field: &'static str, value: i32 },

    #[error("invalid age range: current age {current_age}, retirement age {retirement_age}")]
    InvalidAgeRange { current_age: i32, retirement_age: i32 },

    #[error("numeric overflow growing {principal} at {rate_pp}% for {years} years")]
    NumericOverflow { principal: f64, rate_pp: f64, years: i32 },
}

/// Errors raised while loading premium plans
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plans: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown payment cadence: {0}")]
    UnknownCadence(String),

    #[error("plan '{label}' has negative premium paying years ({years})")]
    NegativePayingYears { label: String, years: i32 },
}
