//! Term Compare CLI
//!
//! Projects wealth at retirement for a set of premium plans and ranks them.
//! Without `--plans` the six reference quotes are compared.

use anyhow::{Context, Result};
use clap::Parser;
use term_compare::plan::load_plans;
use term_compare::projection::{AgePolicy, NegativeHorizon};
use term_compare::{
    Comparison, InvestorProfile, PlanOutcome, PremiumPlan, ProjectionConfig, ScenarioRunner,
    DEFAULT_RETIREMENT_AGE, RETIREMENT_GAINS_TAX_RATE_PP,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "term-compare",
    about = "Compare term insurance premium plans by projected wealth at retirement"
)]
struct Cli {
    #[arg(long, default_value_t = 2_400_000.0, help = "Disposable yearly income before premiums")]
    income: f64,
    #[arg(long, default_value_t = 10.0, help = "Expected annual return in percent, e.g. 10")]
    return_pp: f64,
    #[arg(long, default_value_t = 25)]
    current_age: i32,
    #[arg(long, default_value_t = DEFAULT_RETIREMENT_AGE)]
    retirement_age: i32,
    #[arg(
        long,
        default_value_t = RETIREMENT_GAINS_TAX_RATE_PP,
        help = "Flat tax rate on gains at retirement, in percent"
    )]
    tax_pp: f64,
    #[arg(long, help = "Count contributions made after retirement at face value")]
    clamp_negative_horizon: bool,
    #[arg(long, help = "Reject a retirement age below the current age")]
    strict_ages: bool,
    #[arg(long, help = "CSV of plans: Label,Cadence,Installment,PremiumPayingYears")]
    plans: Option<PathBuf>,
    #[arg(long, help = "Print the comparison as JSON")]
    json: bool,
}

impl Cli {
    fn profile(&self) -> InvestorProfile {
        InvestorProfile::new(self.income, self.return_pp, self.current_age)
            .with_retirement_age(self.retirement_age)
    }

    fn config(&self) -> ProjectionConfig {
        ProjectionConfig {
            gains_tax_rate_pp: self.tax_pp,
            negative_horizon: if self.clamp_negative_horizon {
                NegativeHorizon::Clamp
            } else {
                NegativeHorizon::Discount
            },
            age_policy: if self.strict_ages { AgePolicy::Strict } else { AgePolicy::Permissive },
            detailed_output: false,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let plans = match &cli.plans {
        Some(path) => load_plans(path)
            .with_context(|| format!("failed to load plans from {}", path.display()))?,
        None => PremiumPlan::reference_plans(),
    };

    let runner = ScenarioRunner::new(cli.profile(), cli.config());
    let comparison = runner.compare(&plans).context("projection failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print_comparison(&comparison);
    }

    Ok(())
}

/// "<label> <wealth>" with the wealth at full precision
fn outcome_line(outcome: &PlanOutcome) -> String {
    format!("{} {}", outcome.label, outcome.wealth)
}

fn print_comparison(comparison: &Comparison) {
    for outcome in &comparison.outcomes {
        println!("{}", outcome_line(outcome));
    }

    let profile = &comparison.profile;
    println!();
    println!(
        "Income {:.0}/yr, return {}%, age {} -> retirement at {}",
        profile.disposable_yearly_income,
        profile.expected_annual_return_pp,
        profile.current_age,
        profile.retirement_age
    );
    println!(
        "{:>4} {:<24} {:>14} {:>6} {:>18} {:>16}",
        "Rank", "Plan", "Premium/yr", "Years", "Wealth", "Shortfall"
    );
    println!("{}", "-".repeat(87));

    for outcome in comparison.ranked() {
        println!(
            "{:>4} {:<24} {:>14.2} {:>6} {:>18.2} {:>16.2}",
            outcome.rank,
            outcome.label,
            outcome.yearly_premium,
            outcome.premium_paying_years,
            outcome.wealth,
            outcome.shortfall_to_best,
        );
    }
}
