use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::core::money::{apply_cap, percent_of, round_rupees};
use crate::modules::components::models::{
    CalculationBasis, ComponentRegistry, ResolvedComponent, SpecialRule,
};
use crate::modules::structures::models::{
    DeductionLine, EarningLine, EmployerLine, StructureBreakdown,
};

/// Pure salary structure engine: one monthly gross figure plus the component
/// registry in, a fully itemized breakdown out.
///
/// Deterministic and side-effect free; it never fails. A malformed or absent
/// component entry contributes zero, which is a valid configuration outcome,
/// not an error. Evaluation order is fixed: basic pay first, then remaining
/// earnings, then deductions, then employer contributions — every downstream
/// rule reads the already-computed (and already-rounded) basic.
pub struct StructureCalculator<'a> {
    registry: &'a ComponentRegistry,
    rates: &'a StatutoryRates,
}

impl<'a> StructureCalculator<'a> {
    pub fn new(registry: &'a ComponentRegistry, rates: &'a StatutoryRates) -> Self {
        Self { registry, rates }
    }

    /// Compute the full breakdown for one monthly gross salary.
    ///
    /// Every line item is rounded to whole rupees at emission; totals are
    /// sums of those rounded lines. Components resolving to zero are dropped
    /// from the breakdown, with one exception: basic is always emitted when a
    /// basic component exists in the registry, even at zero.
    pub fn compute(&self, gross: Decimal) -> StructureBreakdown {
        let mut earnings: Vec<EarningLine> = Vec::new();

        // Step 1: basic pay. First earnings component named "basic" wins.
        let basic_index = self.registry.earnings.iter().position(|c| c.is_basic);
        let mut basic = Decimal::ZERO;
        if let Some(index) = basic_index {
            let component = &self.registry.earnings[index];
            if component.percentage > Decimal::ZERO {
                basic = round_rupees(apply_cap(
                    percent_of(gross, component.percentage),
                    component.cap,
                ));
            }
            earnings.push(EarningLine {
                component_id: component.id.clone(),
                name: component.name.clone(),
                amount: basic,
            });
        }

        // Step 2: remaining earnings, by basis.
        for (index, component) in self.registry.earnings.iter().enumerate() {
            if Some(index) == basic_index {
                continue;
            }
            let raw = self.resolve_basis(component, basic, gross, true);
            let amount = round_rupees(apply_cap(raw, component.cap));
            if amount > Decimal::ZERO {
                earnings.push(EarningLine {
                    component_id: component.id.clone(),
                    name: component.name.clone(),
                    amount,
                });
            }
        }

        // Step 3: deductions. Statutory rules take precedence over basis.
        let mut deductions: Vec<DeductionLine> = Vec::new();
        for component in &self.registry.deductions {
            let raw = self.statutory_amount(
                component,
                basic,
                gross,
                self.rates.pf_employee_percent,
                self.rates.esi_employee_percent,
            );
            let amount = round_rupees(apply_cap(raw, component.cap));
            if amount > Decimal::ZERO {
                deductions.push(DeductionLine {
                    component_id: component.id.clone(),
                    name: component.name.clone(),
                    amount,
                });
            }
        }

        // Step 4: employer-side contributions, mirroring step 3 with
        // employer default rates. These add to CTC only.
        let mut employer_additions: Vec<EmployerLine> = Vec::new();
        for component in &self.registry.employer_additions {
            let raw = self.statutory_amount(
                component,
                basic,
                gross,
                self.rates.pf_employer_percent,
                self.rates.esi_employer_percent,
            );
            let amount = round_rupees(apply_cap(raw, component.cap));
            if amount > Decimal::ZERO {
                employer_additions.push(EmployerLine {
                    component_id: component.id.clone(),
                    name: component.name.clone(),
                    amount,
                });
            }
        }

        let total_earnings: Decimal = earnings.iter().map(|line| line.amount).sum();
        let total_deductions: Decimal = deductions.iter().map(|line| line.amount).sum();
        let employer_total: Decimal = employer_additions.iter().map(|line| line.amount).sum();

        StructureBreakdown {
            monthly_gross: gross,
            basic_salary: basic,
            earnings,
            deductions,
            employer_additions,
            total_earnings,
            total_deductions,
            net_salary: total_earnings - total_deductions,
            ctc: gross + employer_total,
        }
    }

    /// Generic basis resolution. Fixed is only honored where the component
    /// type supports it; elsewhere it contributes zero.
    fn resolve_basis(
        &self,
        component: &ResolvedComponent,
        basic: Decimal,
        gross: Decimal,
        allow_fixed: bool,
    ) -> Decimal {
        match component.basis {
            CalculationBasis::Basic => percent_of(basic, component.percentage),
            CalculationBasis::Gross => percent_of(gross, component.percentage),
            CalculationBasis::Fixed => {
                if allow_fixed {
                    component.percentage
                } else {
                    Decimal::ZERO
                }
            }
        }
    }

    /// Deduction/contribution amount with statutory rules applied first:
    /// retirement contributions run on basic with a default rate fallback;
    /// health insurance runs on gross, only under the wage ceiling.
    fn statutory_amount(
        &self,
        component: &ResolvedComponent,
        basic: Decimal,
        gross: Decimal,
        default_pf_percent: Decimal,
        default_esi_percent: Decimal,
    ) -> Decimal {
        match component.rule {
            SpecialRule::RetirementContribution => {
                let rate = if component.percentage > Decimal::ZERO {
                    component.percentage
                } else {
                    default_pf_percent
                };
                percent_of(basic, rate)
            }
            SpecialRule::HealthInsurance => {
                if gross <= self.rates.esi_wage_ceiling {
                    let rate = if component.percentage > Decimal::ZERO {
                        component.percentage
                    } else {
                        default_esi_percent
                    };
                    percent_of(gross, rate)
                } else {
                    Decimal::ZERO
                }
            }
            SpecialRule::None => self.resolve_basis(component, basic, gross, false),
        }
    }
}
