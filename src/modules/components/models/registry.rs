use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::component::{CalculationBasis, ComponentDefinition};

/// Statutory treatment a component receives, resolved once when the registry
/// is loaded. The calculator never scans component names at computation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRule {
    /// Generic basis resolution applies
    None,
    /// Provident fund: default rate applied to basic when none configured
    RetirementContribution,
    /// ESI: applies only under the wage ceiling, default rate on gross
    HealthInsurance,
}

impl SpecialRule {
    /// Classify a component by its configured name.
    ///
    /// "pf"/"provident" (but not voluntary PF) marks a retirement
    /// contribution; "esi" marks statutory health insurance.
    pub fn classify(name: &str) -> SpecialRule {
        let lowered = name.to_lowercase();
        if (lowered.contains("pf") || lowered.contains("provident")) && !lowered.contains("vol") {
            SpecialRule::RetirementContribution
        } else if lowered.contains("esi") {
            SpecialRule::HealthInsurance
        } else {
            SpecialRule::None
        }
    }
}

/// A component definition with its statutory classification pre-resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub id: String,
    pub name: String,
    pub basis: CalculationBasis,
    pub percentage: Decimal,
    pub cap: Decimal,
    pub rule: SpecialRule,
    pub is_basic: bool,
}

impl ResolvedComponent {
    pub fn from_definition(def: &ComponentDefinition) -> Self {
        ResolvedComponent {
            id: def.id.clone().unwrap_or_default(),
            name: def.name.clone(),
            basis: def.calculation_basis,
            percentage: def.calculation_percentage,
            cap: def.max_calculated_value,
            rule: SpecialRule::classify(&def.name),
            is_basic: def.name.to_lowercase().contains("basic"),
        }
    }
}

/// The full rule set the calculator runs against: earnings, deductions and
/// employer-side contributions, in master order. Rebuilt on every run from
/// the stored definitions, so master edits take effect on the next
/// computation without any invalidation logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentRegistry {
    pub earnings: Vec<ResolvedComponent>,
    pub deductions: Vec<ResolvedComponent>,
    pub employer_additions: Vec<ResolvedComponent>,
}

impl ComponentRegistry {
    pub fn new(
        earnings: &[ComponentDefinition],
        deductions: &[ComponentDefinition],
        employer_additions: &[ComponentDefinition],
    ) -> Self {
        ComponentRegistry {
            earnings: earnings.iter().map(ResolvedComponent::from_definition).collect(),
            deductions: deductions.iter().map(ResolvedComponent::from_definition).collect(),
            employer_additions: employer_additions
                .iter()
                .map(ResolvedComponent::from_definition)
                .collect(),
        }
    }

    /// The earnings component treated as basic pay; first name match wins.
    pub fn basic_component(&self) -> Option<&ResolvedComponent> {
        self.earnings.iter().find(|c| c.is_basic)
    }
}
