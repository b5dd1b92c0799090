//! Write the year-by-year projection of one premium plan to CSV
//!
//! Usage: cargo run --bin year_breakdown -- --cadence monthly --installment 10178 --paying-years 60

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use term_compare::projection::{NegativeHorizon, ProjectionEngine};
use term_compare::{
    InvestorProfile, PaymentCadence, PremiumPlan, ProjectionConfig, DEFAULT_RETIREMENT_AGE,
};

#[derive(Parser, Debug)]
#[command(name = "year_breakdown", about = "Per-year retirement projection for one premium plan")]
struct Args {
    #[arg(long, default_value = "monthly", help = "monthly or yearly")]
    cadence: String,
    #[arg(long, help = "Premium per installment")]
    installment: f64,
    #[arg(long)]
    paying_years: i32,
    #[arg(long, default_value_t = 2_400_000.0)]
    income: f64,
    #[arg(long, default_value_t = 10.0)]
    return_pp: f64,
    #[arg(long, default_value_t = 25)]
    current_age: i32,
    #[arg(long, default_value_t = DEFAULT_RETIREMENT_AGE)]
    retirement_age: i32,
    #[arg(long)]
    clamp_negative_horizon: bool,
    #[arg(long, default_value = "year_breakdown.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let cadence = match args.cadence.to_ascii_lowercase().as_str() {
        "monthly" => PaymentCadence::Monthly,
        "yearly" | "annual" => PaymentCadence::Yearly,
        other => bail!("unknown cadence: {other}"),
    };
    let plan = PremiumPlan::new(cadence, args.installment, args.paying_years);
    let profile = InvestorProfile::new(args.income, args.return_pp, args.current_age)
        .with_retirement_age(args.retirement_age);

    let engine = ProjectionEngine::new(ProjectionConfig {
        negative_horizon: if args.clamp_negative_horizon {
            NegativeHorizon::Clamp
        } else {
            NegativeHorizon::Discount
        },
        detailed_output: true,
        ..ProjectionConfig::default()
    });
    let result = engine
        .project(&profile, plan.yearly_premium(), plan.premium_paying_years)
        .context("projection failed")?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for row in &result.years {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let summary = result.summary();
    println!("{}", plan.display_label(profile.current_age));
    println!("  Years projected:      {}", summary.total_years);
    println!("  Total invested:       {:.2}", summary.total_invested);
    println!("  Premiums pre-retire:  {:.2}", summary.premiums_before_retirement);
    println!("  Overrun years:        {}", summary.overrun_years);
    println!("  Overrun penalty:      {:.2}", summary.overrun_penalty);
    println!("  After-tax gains:      {:.2}", summary.total_after_tax_gains);
    println!("  Discounted years:     {}", summary.discounted_years);
    println!("  Wealth at retirement: {:.2}", summary.wealth);
    println!("\nRows written to {} in {:?}", args.output.display(), start.elapsed());

    Ok(())
}
