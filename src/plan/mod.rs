//! Premium plans and investor profiles

mod data;
pub mod loader;

pub use data::{InvestorProfile, PaymentCadence, PremiumPlan};
pub use loader::{load_plans, load_plans_from_reader};
