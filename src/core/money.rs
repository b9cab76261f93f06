use rust_decimal::{Decimal, RoundingStrategy};

/// Payroll amounts are stored in whole rupees. Every breakdown line item is
/// rounded once, at computation time, and stored totals are sums of those
/// already-rounded lines (sums may drift from gross by rounding; the drift is
/// accepted, not corrected).
pub fn round_rupees(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage application: `base * percent / 100`, unrounded.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    base * percent / Decimal::ONE_HUNDRED
}

/// Clamp an amount to a cap when the cap is set (0 = uncapped).
pub fn apply_cap(amount: Decimal, cap: Decimal) -> Decimal {
    if cap > Decimal::ZERO && amount > cap {
        cap
    } else {
        amount
    }
}

/// Parse a spreadsheet cell into a positive monetary amount.
///
/// Import cells arrive as strings or numbers; commas and surrounding
/// whitespace are tolerated. Returns `None` for anything that is not a
/// strictly positive number.
pub fn parse_positive_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.parse::<Decimal>() {
        Ok(value) if value > Decimal::ZERO => Some(value),
        _ => None,
    }
}
