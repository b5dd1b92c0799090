//! Scenario runner for comparing premium plans
//!
//! Holds one investor profile and projection configuration, then evaluates
//! any number of premium plans against it. Plans are independent, so batches
//! run in parallel.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::plan::{InvestorProfile, PaymentCadence, PremiumPlan};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Projected outcome of one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub label: String,
    pub cadence: PaymentCadence,
    pub yearly_premium: f64,
    pub premium_paying_years: i32,
    pub wealth: f64,
    pub overrun_penalty: f64,

    /// 1 = most wealth at retirement
    pub rank: usize,

    /// Wealth given up compared with the best plan
    pub shortfall_to_best: f64,
}

/// Ranked comparison of several plans for the same investor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub profile: InvestorProfile,
    pub config: ProjectionConfig,

    /// Outcomes in input order
    pub outcomes: Vec<PlanOutcome>,
}

impl Comparison {
    /// Plan with the most wealth at retirement
    pub fn best(&self) -> Option<&PlanOutcome> {
        self.outcomes.iter().find(|o| o.rank == 1)
    }

    /// Outcomes ordered best first
    pub fn ranked(&self) -> Vec<&PlanOutcome> {
        let mut ranked: Vec<&PlanOutcome> = self.outcomes.iter().collect();
        ranked.sort_by_key(|o| o.rank);
        ranked
    }
}

/// Pre-configured runner for batch plan projections
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    profile: InvestorProfile,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(profile: InvestorProfile, config: ProjectionConfig) -> Self {
        Self {
            profile,
            engine: ProjectionEngine::new(config),
        }
    }

    /// Runner for the reference investor with default settings
    pub fn reference() -> Self {
        Self::new(InvestorProfile::reference(), ProjectionConfig::default())
    }

    pub fn profile(&self) -> &InvestorProfile {
        &self.profile
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection for the given plan
    pub fn run(&self, plan: &PremiumPlan) -> Result<ProjectionResult, ProjectionError> {
        let result = self
            .engine
            .project(&self.profile, plan.yearly_premium(), plan.premium_paying_years)?;
        info!(
            "{}: projected wealth {:.2}",
            plan.display_label(self.profile.current_age),
            result.wealth
        );
        Ok(result)
    }

    /// Run projections for multiple plans; results keep the input order
    pub fn run_batch(&self, plans: &[PremiumPlan]) -> Result<Vec<ProjectionResult>, ProjectionError> {
        plans.par_iter().map(|plan| self.run(plan)).collect()
    }

    /// Project every plan and rank them by wealth at retirement
    pub fn compare(&self, plans: &[PremiumPlan]) -> Result<Comparison, ProjectionError> {
        let results = self.run_batch(plans)?;

        let mut outcomes: Vec<PlanOutcome> = plans
            .iter()
            .zip(&results)
            .map(|(plan, result)| PlanOutcome {
                label: plan.display_label(self.profile.current_age),
                cadence: plan.cadence,
                yearly_premium: plan.yearly_premium(),
                premium_paying_years: plan.premium_paying_years,
                wealth: result.wealth,
                overrun_penalty: result.overrun_penalty,
                rank: 0,
                shortfall_to_best: 0.0,
            })
            .collect();

        let mut order: Vec<usize> = (0..outcomes.len()).collect();
        order.sort_by(|&a, &b| outcomes[b].wealth.total_cmp(&outcomes[a].wealth));

        let best_wealth = order.first().map(|&i| outcomes[i].wealth).unwrap_or(0.0);
        for (position, &index) in order.iter().enumerate() {
            let outcome = &mut outcomes[index];
            outcome.rank = position + 1;
            outcome.shortfall_to_best = best_wealth - outcome.wealth;
        }

        Ok(Comparison {
            profile: self.profile.clone(),
            config: self.engine.config().clone(),
            outcomes,
        })
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::reference()
    }
}
