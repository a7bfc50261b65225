use crate::utils::number::{MoneyCents, cents_to_float, float_to_cents, round2};

/// Overtime hours count at time-and-a-half of the minimum rate.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Inputs in currency units (not cents).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinPayAdjustInput {
    pub regular_hours: f64,
    pub overtime_hours: f64,
    /// Wages already earned, before this adjustment.
    pub pay_amount: f64,
    pub tips: f64,
    pub tips_cash: f64,
    pub bonus: f64,
    pub min_pay_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinPayAdjustResult {
    pub tips: f64,
    pub tips_cash: f64,
    pub pay_amount: f64,
    pub minimum_pay: f64,
}

/// Top up reported tips so total pay meets the statutory minimum.
///
/// Cash tips close the gap first, never beyond what was received; any
/// remaining shortfall raises the reported credit-card tips.
pub fn apply_minimum_pay_adjustment(input: &MinPayAdjustInput) -> MinPayAdjustResult {
    let minimum_pay = input.min_pay_rate * input.regular_hours
        + OVERTIME_MULTIPLIER * input.min_pay_rate * input.overtime_hours;
    let hour_pay = input.pay_amount - input.tips - input.bonus;

    let tips_cash = (minimum_pay - input.pay_amount)
        .max(0.0)
        .min(input.tips_cash);
    let tips = input.tips.max(minimum_pay - hour_pay - tips_cash);
    let pay_amount = input.pay_amount.max(minimum_pay);

    MinPayAdjustResult {
        tips: round2(tips),
        tips_cash: round2(tips_cash),
        pay_amount: round2(pay_amount),
        minimum_pay: round2(minimum_pay),
    }
}

/// Cents-denominated inputs for [`apply_minimum_pay_adjustment_cents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinPayAdjustCents {
    pub pay_amount: MoneyCents,
    pub tips: MoneyCents,
    pub tips_cash: MoneyCents,
    pub bonus: MoneyCents,
    pub min_pay_rate: MoneyCents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinPayAdjustCentsResult {
    pub tips: MoneyCents,
    pub tips_cash: MoneyCents,
    pub pay_amount: MoneyCents,
    pub minimum_pay: MoneyCents,
}

/// Same adjustment for callers holding cents.
pub fn apply_minimum_pay_adjustment_cents(
    regular_hours: f64,
    overtime_hours: f64,
    amounts: &MinPayAdjustCents,
) -> MinPayAdjustCentsResult {
    let r = apply_minimum_pay_adjustment(&MinPayAdjustInput {
        regular_hours,
        overtime_hours,
        pay_amount: cents_to_float(amounts.pay_amount),
        tips: cents_to_float(amounts.tips),
        tips_cash: cents_to_float(amounts.tips_cash),
        bonus: cents_to_float(amounts.bonus),
        min_pay_rate: cents_to_float(amounts.min_pay_rate),
    });

    MinPayAdjustCentsResult {
        tips: float_to_cents(r.tips),
        tips_cash: float_to_cents(r.tips_cash),
        pay_amount: float_to_cents(r.pay_amount),
        minimum_pay: float_to_cents(r.minimum_pay),
    }
}
