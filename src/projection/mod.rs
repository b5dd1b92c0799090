//! Retirement wealth projection for a single premium schedule

mod cashflows;
mod engine;

pub use cashflows::{ProjectionResult, ProjectionSummary, YearRow};
pub use engine::{retirement_projection, AgePolicy, NegativeHorizon, ProjectionConfig, ProjectionEngine};
