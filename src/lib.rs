//! Term Compare - retirement wealth projections for term insurance premium plans
//!
//! This library provides:
//! - Compound growth and after-tax investment value
//! - Year-by-year projection of wealth at retirement under a premium schedule
//! - Premium plan definitions and CSV loading
//! - Ranked comparison of plans for one investor

pub mod error;
pub mod growth;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{PlanError, ProjectionError};
pub use growth::{after_tax_return, compound_growth, DEFAULT_RETIREMENT_AGE, RETIREMENT_GAINS_TAX_RATE_PP};
pub use plan::{InvestorProfile, PaymentCadence, PremiumPlan};
pub use projection::{retirement_projection, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::{Comparison, PlanOutcome, ScenarioRunner};
