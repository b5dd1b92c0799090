//! Year-by-year retirement wealth projection

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::cashflows::{ProjectionResult, YearRow};
use crate::error::ProjectionError;
use crate::growth::{growth_factor, taxed_growth, RETIREMENT_GAINS_TAX_RATE_PP};
use crate::plan::InvestorProfile;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Flat tax rate on gains realised at retirement
    pub gains_tax_rate_pp: f64,

    /// Treatment of contributions made after the retirement age
    pub negative_horizon: NegativeHorizon,

    /// How strictly ages are checked
    pub age_policy: AgePolicy,

    /// Whether to keep per-year rows
    pub detailed_output: bool,
}

/// What happens to a contribution whose years-to-grow is negative.
///
/// Contribution years run from 0 to the retirement age itself, so for anyone
/// older than zero the later years fall after retirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeHorizon {
    /// Compound with the negative exponent, shrinking the contribution
    Discount,
    /// Count the contribution at face value
    Clamp,
}

/// Input checks applied to the investor's ages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgePolicy {
    /// Accept any ages; a non-positive retirement age projects no years
    Permissive,
    /// Reject negative ages and a retirement age below the current age
    Strict,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            gains_tax_rate_pp: RETIREMENT_GAINS_TAX_RATE_PP,
            negative_horizon: NegativeHorizon::Discount,
            age_policy: AgePolicy::Permissive,
            detailed_output: true,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project wealth at retirement for one premium schedule.
    ///
    /// Premiums still owed after retirement are deducted up front without
    /// growth. Every year's income, net of premium while premiums are being
    /// paid, then compounds until retirement and is taxed on its gains.
    pub fn project(
        &self,
        profile: &InvestorProfile,
        yearly_premium: f64,
        premium_paying_years: i32,
    ) -> Result<ProjectionResult, ProjectionError> {
        self.validate(profile, premium_paying_years)?;

        let years_till_retirement = profile.years_till_retirement();
        let mut result = ProjectionResult::new(years_till_retirement);

        if premium_paying_years > years_till_retirement {
            let overrun = premium_paying_years.saturating_sub(years_till_retirement);
            result.overrun_years = overrun;
            result.overrun_penalty = f64::from(overrun) * yearly_premium;
            result.wealth -= result.overrun_penalty;
            warn!(
                "premiums continue {} years past retirement, deducting {:.2}",
                overrun, result.overrun_penalty
            );
        }

        for year_index in 0..profile.retirement_age {
            let premium_paid = year_index < premium_paying_years;
            let invested = if premium_paid {
                profile.disposable_yearly_income - yearly_premium
            } else {
                profile.disposable_yearly_income
            };

            let years_to_grow = match self.config.negative_horizon {
                NegativeHorizon::Clamp => years_till_retirement.saturating_sub(year_index).max(0),
                NegativeHorizon::Discount => years_till_retirement.saturating_sub(year_index),
            };

            let (gains, after_tax_value) = taxed_growth(
                invested,
                profile.expected_annual_return_pp,
                years_to_grow,
                self.config.gains_tax_rate_pp,
            )?;
            result.wealth += after_tax_value;
            if years_to_grow < 0 {
                result.discounted_years += 1;
            }

            debug!(
                "year {}: invested {:.2} for {} years -> {:.2}",
                year_index, invested, years_to_grow, after_tax_value
            );

            if self.config.detailed_output {
                result.add_row(YearRow {
                    year_index,
                    age: profile.current_age.saturating_add(year_index),
                    premium_paid,
                    premium: if premium_paid { yearly_premium } else { 0.0 },
                    invested,
                    years_to_grow,
                    growth_factor: growth_factor(profile.expected_annual_return_pp, years_to_grow),
                    pre_tax_gains: gains,
                    after_tax_value,
                    running_wealth: result.wealth,
                });
            }
        }

        if result.discounted_years > 0 {
            warn!(
                "{} contribution years fall after retirement and were discounted",
                result.discounted_years
            );
        }

        Ok(result)
    }

    fn validate(&self, profile: &InvestorProfile, premium_paying_years: i32) -> Result<(), ProjectionError> {
        if premium_paying_years < 0 {
            return Err(ProjectionError::InvalidYears {
                field: "premium_paying_years",
                value: premium_paying_years,
            });
        }

        if self.config.age_policy == AgePolicy::Strict
            && (profile.current_age < 0 || profile.retirement_age < profile.current_age)
        {
            return Err(ProjectionError::InvalidAgeRange {
                current_age: profile.current_age,
                retirement_age: profile.retirement_age,
            });
        }

        Ok(())
    }
}

/// Projected wealth at retirement using the default configuration.
pub fn retirement_projection(
    disposable_yearly_income: f64,
    expected_annual_return_pp: f64,
    yearly_premium: f64,
    premium_paying_years: i32,
    current_age: i32,
    retirement_age: i32,
) -> Result<f64, ProjectionError> {
    let profile = InvestorProfile::new(disposable_yearly_income, expected_annual_return_pp, current_age)
        .with_retirement_age(retirement_age);
    let engine = ProjectionEngine::new(ProjectionConfig {
        detailed_output: false,
        ..ProjectionConfig::default()
    });
    engine
        .project(&profile, yearly_premium, premium_paying_years)
        .map(|result| result.wealth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{after_tax_return, DEFAULT_RETIREMENT_AGE};
    use approx::assert_relative_eq;

    fn small_profile() -> InvestorProfile {
        InvestorProfile::new(1_000.0, 10.0, 57)
    }

    #[test]
    fn test_projection_runs() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&small_profile(), 100.0, 3).unwrap();

        assert_eq!(result.years.len(), 60);
        assert_eq!(result.years_till_retirement, 3);
        assert_eq!(result.overrun_years, 0);
        assert_relative_eq!(result.wealth, 21_049.492748987614, max_relative = 1e-12);
    }

    #[test]
    fn test_clamped_horizon() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            negative_horizon: NegativeHorizon::Clamp,
            ..ProjectionConfig::default()
        });
        let result = engine.project(&small_profile(), 100.0, 3).unwrap();
        assert_relative_eq!(result.wealth, 60_190.365, max_relative = 1e-12);
        assert!(result.years.iter().all(|r| r.years_to_grow >= 0));
    }

    #[test]
    fn test_tax_rate_is_configurable() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            gains_tax_rate_pp: 0.0,
            ..ProjectionConfig::default()
        });
        let result = engine.project(&small_profile(), 100.0, 3).unwrap();
        assert_relative_eq!(result.wealth, 14_228.814998808952, max_relative = 1e-12);
    }

    #[test]
    fn test_no_premium_sums_full_income() {
        let wealth = retirement_projection(2_400_000.0, 10.0, 122_136.0, 0, 25, 60).unwrap();

        let expected: f64 = (0..DEFAULT_RETIREMENT_AGE)
            .map(|i| {
                let years = 35 - i;
                let (_, value) =
                    taxed_growth(2_400_000.0, 10.0, years, RETIREMENT_GAINS_TAX_RATE_PP).unwrap();
                value
            })
            .sum();

        assert_relative_eq!(wealth, expected, max_relative = 1e-12);
        assert_relative_eq!(wealth, 650_147_560.6714694, max_relative = 1e-12);
    }

    #[test]
    fn test_overrun_penalty_deducted_once() {
        // 60 paying years from 25 overruns retirement at 60 by 25 years
        let engine = ProjectionEngine::default();
        let profile = InvestorProfile::reference();
        let result = engine.project(&profile, 122_136.0, 60).unwrap();

        assert_eq!(result.overrun_years, 25);
        assert_relative_eq!(result.overrun_penalty, 25.0 * 122_136.0);
        assert_eq!(result.summary().overrun_years, 25);

        let first = &result.years[0];
        assert_relative_eq!(first.running_wealth, first.after_tax_value - result.overrun_penalty);
        assert!(result.years.iter().all(|r| r.premium_paid));
    }

    #[test]
    fn test_rows_follow_years_to_grow() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&InvestorProfile::reference(), 126_555.0, 35).unwrap();

        for (row, expected_years) in result.years.iter().zip((-24..=35).rev()) {
            assert_eq!(row.years_to_grow, expected_years);
        }
        let last = result.years.last().unwrap();
        assert_eq!(last.age, 84);
        assert!(!last.premium_paid);
        assert_relative_eq!(last.running_wealth, result.wealth);

        // A contribution made at retirement is worth exactly itself
        let at_retirement = &result.years[35];
        assert_eq!(at_retirement.years_to_grow, 0);
        assert_relative_eq!(
            at_retirement.after_tax_value,
            after_tax_return(2_400_000.0, 10.0, 0, 15.0).unwrap()
        );
    }

    #[test]
    fn test_summary() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&small_profile(), 100.0, 3).unwrap();
        let summary = result.summary();

        assert_eq!(summary.total_years, 60);
        assert_relative_eq!(summary.total_invested, 60_000.0 - 300.0);
        assert_relative_eq!(summary.premiums_before_retirement, 300.0);
        assert_eq!(summary.discounted_years, 56);
        assert_eq!(summary.overrun_years, 0);
        assert_relative_eq!(summary.wealth, result.wealth);
    }

    #[test]
    fn test_discounted_years_counted_without_rows() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            detailed_output: false,
            ..ProjectionConfig::default()
        });
        let result = engine.project(&InvestorProfile::reference(), 126_555.0, 35).unwrap();
        assert!(result.years.is_empty());
        assert_eq!(result.discounted_years, 24);
        assert_eq!(result.summary().discounted_years, 24);

        let clamped = ProjectionEngine::new(ProjectionConfig {
            negative_horizon: NegativeHorizon::Clamp,
            ..ProjectionConfig::default()
        });
        let result = clamped.project(&InvestorProfile::reference(), 126_555.0, 35).unwrap();
        assert_eq!(result.discounted_years, 0);
    }

    #[test]
    fn test_non_positive_retirement_age_applies_penalty_only() {
        let wealth = retirement_projection(1_000.0, 10.0, 100.0, 5, -3, -1).unwrap();
        assert_eq!(wealth, -300.0);
    }

    #[test]
    fn test_late_retirement_permissive() {
        // Already 70 with retirement at 60: every year is discounted
        let wealth = retirement_projection(2_400_000.0, 10.0, 100_000.0, 40, 70, 60).unwrap();
        assert_relative_eq!(wealth, 24_270_659.120057337, max_relative = 1e-12);
    }

    #[test]
    fn test_strict_ages() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            age_policy: AgePolicy::Strict,
            ..ProjectionConfig::default()
        });
        let late = InvestorProfile::new(1_000.0, 10.0, 70);
        let err = engine.project(&late, 100.0, 5).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::InvalidAgeRange { current_age: 70, retirement_age: 60 }
        );

        assert!(engine.project(&small_profile(), 100.0, 3).is_ok());
    }

    #[test]
    fn test_negative_paying_years_rejected() {
        let err = retirement_projection(1_000.0, 10.0, 100.0, -1, 25, 60).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidYears { field: "premium_paying_years", value: -1 }
        ));
    }

    #[test]
    fn test_overflow_propagates() {
        let err = retirement_projection(1_000.0, 1_000_000.0, 0.0, 0, 0, 120).unwrap_err();
        assert!(matches!(err, ProjectionError::NumericOverflow { .. }));
    }
}
