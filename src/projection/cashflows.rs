//! Per-year output structures for retirement projections

use serde::{Deserialize, Serialize};

/// One contribution year of a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRow {
    /// 0-based year index counted from the current age
    pub year_index: i32,
    pub age: i32,

    /// Whether a premium was deducted this year
    pub premium_paid: bool,
    pub premium: f64,

    /// Income left to invest after the premium
    pub invested: f64,

    /// Years the contribution compounds until retirement (negative = discounted)
    pub years_to_grow: i32,
    pub growth_factor: f64,

    pub pre_tax_gains: f64,
    pub after_tax_value: f64,

    /// Wealth accumulated after adding this year
    pub running_wealth: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Projected wealth at retirement, net of any premium overrun
    pub wealth: f64,

    pub years_till_retirement: i32,

    /// Premium years falling after retirement
    pub overrun_years: i32,

    /// Premiums owed after retirement, deducted up front
    pub overrun_penalty: f64,

    /// Contribution years compounded over a negative horizon
    pub discounted_years: u32,

    /// Per-year rows (empty unless detailed output was requested)
    pub years: Vec<YearRow>,
}

impl ProjectionResult {
    pub fn new(years_till_retirement: i32) -> Self {
        Self {
            wealth: 0.0,
            years_till_retirement,
            overrun_years: 0,
            overrun_penalty: 0.0,
            discounted_years: 0,
            years: Vec::new(),
        }
    }

    /// Add a year row
    pub fn add_row(&mut self, row: YearRow) {
        self.years.push(row);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_invested: f64 = self.years.iter().map(|r| r.invested).sum();
        let premiums_before_retirement: f64 = self
            .years
            .iter()
            .filter(|r| r.premium_paid)
            .map(|r| r.premium)
            .sum();
        let total_after_tax_gains: f64 = self
            .years
            .iter()
            .map(|r| r.after_tax_value - r.invested)
            .sum();

        ProjectionSummary {
            total_years: self.years.len() as u32,
            total_invested,
            premiums_before_retirement,
            total_after_tax_gains,
            overrun_years: self.overrun_years,
            overrun_penalty: self.overrun_penalty,
            discounted_years: self.discounted_years,
            wealth: self.wealth,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub total_invested: f64,
    pub premiums_before_retirement: f64,
    pub total_after_tax_gains: f64,
    pub overrun_years: i32,
    pub overrun_penalty: f64,
    pub discounted_years: u32,
    pub wealth: f64,
}
