//! Load premium plans from CSV
//!
//! Expected columns: `Label,Cadence,Installment,PremiumPayingYears`.
//! `Label` may be left empty.

use super::{PaymentCadence, PremiumPlan};
use crate::error::PlanError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Label")]
    label: Option<String>,
    #[serde(rename = "Cadence")]
    cadence: String,
    #[serde(rename = "Installment")]
    installment: f64,
    #[serde(rename = "PremiumPayingYears")]
    premium_paying_years: i32,
}

impl CsvRow {
    fn into_plan(self) -> Result<PremiumPlan, PlanError> {
        let cadence = match self.cadence.trim() {
            "Monthly" | "monthly" => PaymentCadence::Monthly,
            "Yearly" | "yearly" | "Annual" | "annual" => PaymentCadence::Yearly,
            other => return Err(PlanError::UnknownCadence(other.to_string())),
        };

        let label = self.label.filter(|l| !l.trim().is_empty());

        if self.premium_paying_years < 0 {
            return Err(PlanError::NegativePayingYears {
                label: label.unwrap_or_else(|| cadence.to_string()),
                years: self.premium_paying_years,
            });
        }

        Ok(PremiumPlan {
            label,
            cadence,
            installment: self.installment,
            premium_paying_years: self.premium_paying_years,
        })
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<PremiumPlan>, PlanError> {
    let reader = Reader::from_path(path)?;
    collect_plans(reader)
}

/// Load plans from any reader (e.g., string buffer, stdin)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PremiumPlan>, PlanError> {
    collect_plans(Reader::from_reader(reader))
}

fn collect_plans<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<PremiumPlan>, PlanError> {
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.into_plan()?);
    }

    log::debug!("loaded {} premium plans", plans.len());
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_plans_from_reader() {
        let data = "\
Label,Cadence,Installment,PremiumPayingYears
,Monthly,10178,60
Regular pay,Yearly,126555,35
";
        let plans = load_plans_from_reader(data.as_bytes()).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0], PremiumPlan::monthly(10_178.0, 60));
        assert_eq!(plans[1].label.as_deref(), Some("Regular pay"));
        assert_eq!(plans[1].cadence, PaymentCadence::Yearly);
        assert_eq!(plans[1].premium_paying_years, 35);
    }

    #[test]
    fn test_unknown_cadence() {
        let data = "Label,Cadence,Installment,PremiumPayingYears\nx,Weekly,10,5\n";
        let err = load_plans_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::UnknownCadence(ref c) if c == "Weekly"));
    }

    #[test]
    fn test_negative_paying_years() {
        let data = "Label,Cadence,Installment,PremiumPayingYears\nbad,Yearly,10,-2\n";
        let err = load_plans_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::NegativePayingYears { years: -2, .. }));
    }

    #[test]
    fn test_malformed_row() {
        let data = "Label,Cadence,Installment,PremiumPayingYears\nx,Yearly,lots,5\n";
        assert!(matches!(
            load_plans_from_reader(data.as_bytes()),
            Err(PlanError::Csv(_))
        ));
    }
}
