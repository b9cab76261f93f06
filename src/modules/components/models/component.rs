use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Which side of the payslip a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(30)", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Adds to the employee's earnings
    Earning,
    /// Reduces the employee's net pay
    Deduction,
    /// Employer-side contribution; adds to CTC only
    EmployerContribution,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Earning => write!(f, "earning"),
            ComponentKind::Deduction => write!(f, "deduction"),
            ComponentKind::EmployerContribution => write!(f, "employer_contribution"),
        }
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "earning" => Ok(ComponentKind::Earning),
            "deduction" => Ok(ComponentKind::Deduction),
            "employer_contribution" => Ok(ComponentKind::EmployerContribution),
            _ => Err(format!("Invalid component kind: {}", s)),
        }
    }
}

/// How a component's amount is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(10)", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CalculationBasis {
    /// Percentage of the already-computed basic pay
    Basic,
    /// Percentage of the monthly gross
    Gross,
    /// The percentage field is itself an absolute amount
    Fixed,
}

impl std::fmt::Display for CalculationBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationBasis::Basic => write!(f, "basic"),
            CalculationBasis::Gross => write!(f, "gross"),
            CalculationBasis::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for CalculationBasis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(CalculationBasis::Basic),
            "gross" => Ok(CalculationBasis::Gross),
            "fixed" => Ok(CalculationBasis::Fixed),
            _ => Err(format!("Invalid calculation basis: {}", s)),
        }
    }
}

/// A configurable salary component rule, owned by the component master.
///
/// Breakdown line items copy the component's name and amount at computation
/// time, so later edits here never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ComponentDefinition {
    #[serde(skip_deserializing)]
    pub id: Option<String>,

    pub kind: ComponentKind,

    pub name: String,

    pub calculation_basis: CalculationBasis,

    /// Percentage of the basis, or the absolute amount when basis is `fixed`
    pub calculation_percentage: Decimal,

    /// Upper bound on the calculated amount; 0 means uncapped
    #[serde(default)]
    pub max_calculated_value: Decimal,
}

impl ComponentDefinition {
    pub fn new(
        kind: ComponentKind,
        name: String,
        calculation_basis: CalculationBasis,
        calculation_percentage: Decimal,
        max_calculated_value: Decimal,
    ) -> Result<Self> {
        let mut component = ComponentDefinition {
            id: Some(Uuid::new_v4().to_string()),
            kind,
            name,
            calculation_basis,
            calculation_percentage,
            max_calculated_value,
        };
        component.name = component.name.trim().to_string();
        component.validate()?;
        Ok(component)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Component name cannot be empty"));
        }
        if self.name.len() > 100 {
            return Err(AppError::validation(
                "Component name cannot exceed 100 characters",
            ));
        }
        if self.calculation_percentage < Decimal::ZERO {
            return Err(AppError::validation(
                "Calculation percentage cannot be negative",
            ));
        }
        if self.max_calculated_value < Decimal::ZERO {
            return Err(AppError::validation(
                "Max calculated value cannot be negative",
            ));
        }
        Ok(())
    }
}
