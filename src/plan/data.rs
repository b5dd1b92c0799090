//! Premium schedules and the investor they are projected for

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::growth::DEFAULT_RETIREMENT_AGE;

/// How often the premium is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentCadence {
    /// Twelve installments a year
    Monthly,
    /// One installment a year
    Yearly,
}

impl PaymentCadence {
    /// Number of installments paid in a year
    pub fn installments_per_year(&self) -> u32 {
        match self {
            PaymentCadence::Monthly => 12,
            PaymentCadence::Yearly => 1,
        }
    }
}

impl fmt::Display for PaymentCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentCadence::Monthly => write!(f, "Monthly"),
            PaymentCadence::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A premium schedule offered by an insurer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumPlan {
    /// Display label; derived from cadence and end age when absent
    #[serde(default)]
    pub label: Option<String>,

    pub cadence: PaymentCadence,

    /// Amount paid per installment
    pub installment: f64,

    /// Years the premium is paid, counted from the current age
    pub premium_paying_years: i32,
}

impl PremiumPlan {
    pub fn new(cadence: PaymentCadence, installment: f64, premium_paying_years: i32) -> Self {
        Self {
            label: None,
            cadence,
            installment,
            premium_paying_years,
        }
    }

    pub fn monthly(installment: f64, premium_paying_years: i32) -> Self {
        Self::new(PaymentCadence::Monthly, installment, premium_paying_years)
    }

    pub fn yearly(installment: f64, premium_paying_years: i32) -> Self {
        Self::new(PaymentCadence::Yearly, installment, premium_paying_years)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Total premium paid in one year
    pub fn yearly_premium(&self) -> f64 {
        self.installment * f64::from(self.cadence.installments_per_year())
    }

    /// Explicit label, or "<cadence>, till <age premiums stop>"
    pub fn display_label(&self, current_age: i32) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!(
                "{}, till {}",
                self.cadence,
                current_age.saturating_add(self.premium_paying_years)
            ),
        }
    }

    /// The six quotes compared for a 25 year old: pay till 85, 60 or 35,
    /// monthly or yearly.
    pub fn reference_plans() -> Vec<PremiumPlan> {
        vec![
            PremiumPlan::monthly(10_178.0, 60),
            PremiumPlan::yearly(115_650.0, 60),
            PremiumPlan::monthly(11_137.0, 35),
            PremiumPlan::yearly(126_555.0, 35),
            PremiumPlan::monthly(28_561.0, 10),
            PremiumPlan::yearly(324_554.0, 10),
        ]
    }
}

/// Income, expected return and ages of the person buying the cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    /// Income left each year after living costs, before any premium
    pub disposable_yearly_income: f64,

    /// Expected annual return in percentage points
    pub expected_annual_return_pp: f64,

    pub current_age: i32,

    #[serde(default = "default_retirement_age")]
    pub retirement_age: i32,
}

fn default_retirement_age() -> i32 {
    DEFAULT_RETIREMENT_AGE
}

impl InvestorProfile {
    pub fn new(disposable_yearly_income: f64, expected_annual_return_pp: f64, current_age: i32) -> Self {
        Self {
            disposable_yearly_income,
            expected_annual_return_pp,
            current_age,
            retirement_age: DEFAULT_RETIREMENT_AGE,
        }
    }

    pub fn with_retirement_age(mut self, retirement_age: i32) -> Self {
        self.retirement_age = retirement_age;
        self
    }

    /// 24 lakh a year disposable, 10% returns, 25 years old
    pub fn reference() -> Self {
        Self::new(2_400_000.0, 10.0, 25)
    }

    /// Negative when the retirement age is already behind
    pub fn years_till_retirement(&self) -> i32 {
        self.retirement_age.saturating_sub(self.current_age)
    }
}
