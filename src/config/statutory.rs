use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

/// Statutory default rates injected into the structure calculator.
///
/// These are the fallback percentages used when a PF/ESI component is
/// configured without an explicit rate, plus the ESI wage ceiling. Keeping
/// them here makes a jurisdictional change a config edit, not a code change.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// Employee provident fund rate, percent of basic
    pub pf_employee_percent: Decimal,
    /// Employer provident fund rate, percent of basic
    pub pf_employer_percent: Decimal,
    /// Employee state insurance rate, percent of gross
    pub esi_employee_percent: Decimal,
    /// Employer state insurance rate, percent of gross
    pub esi_employer_percent: Decimal,
    /// Monthly gross above which ESI does not apply
    pub esi_wage_ceiling: Decimal,
    /// Employer ESI rate assumed by the reporting rollup derivation.
    /// Reports derive employer ESI as employee_esi * (report / employee)
    /// rather than reading it, a documented approximation of the historical
    /// 0.75/4.75 split.
    pub esi_employer_report_percent: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        StatutoryRates {
            pf_employee_percent: Decimal::new(12, 0),
            pf_employer_percent: Decimal::new(13, 0),
            esi_employee_percent: Decimal::new(75, 2),
            esi_employer_percent: Decimal::new(325, 2),
            esi_wage_ceiling: Decimal::new(21_000, 0),
            esi_employer_report_percent: Decimal::new(475, 2),
        }
    }
}

fn rate_from_env(key: &str, default: Decimal) -> Result<Decimal> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<Decimal>()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}

impl StatutoryRates {
    pub fn from_env() -> Result<Self> {
        let defaults = StatutoryRates::default();
        Ok(StatutoryRates {
            pf_employee_percent: rate_from_env("PF_EMPLOYEE_PERCENT", defaults.pf_employee_percent)?,
            pf_employer_percent: rate_from_env("PF_EMPLOYER_PERCENT", defaults.pf_employer_percent)?,
            esi_employee_percent: rate_from_env(
                "ESI_EMPLOYEE_PERCENT",
                defaults.esi_employee_percent,
            )?,
            esi_employer_percent: rate_from_env(
                "ESI_EMPLOYER_PERCENT",
                defaults.esi_employer_percent,
            )?,
            esi_wage_ceiling: rate_from_env("ESI_WAGE_CEILING", defaults.esi_wage_ceiling)?,
            esi_employer_report_percent: rate_from_env(
                "ESI_EMPLOYER_REPORT_PERCENT",
                defaults.esi_employer_report_percent,
            )?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("PF_EMPLOYEE_PERCENT", self.pf_employee_percent),
            ("PF_EMPLOYER_PERCENT", self.pf_employer_percent),
            ("ESI_EMPLOYEE_PERCENT", self.esi_employee_percent),
            ("ESI_EMPLOYER_PERCENT", self.esi_employer_percent),
            ("ESI_WAGE_CEILING", self.esi_wage_ceiling),
            ("ESI_EMPLOYER_REPORT_PERCENT", self.esi_employer_report_percent),
        ];
        for (name, value) in rates {
            if value < Decimal::ZERO {
                return Err(AppError::Configuration(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }
        if self.esi_employee_percent == Decimal::ZERO {
            return Err(AppError::Configuration(
                "ESI_EMPLOYEE_PERCENT must be positive (employer ESI reporting derives from it)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
