use crate::model::role::RoleName;
use crate::utils::number::{MoneyCents, Ratio, clamp01, max0, round_cents};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeCalcInput<'a> {
    pub role_name: &'a RoleName,
    /// Entered cc tips; only used by pass-through roles.
    pub cc: MoneyCents,
    /// Entered cash tips; only used by pass-through roles.
    pub cash: MoneyCents,
    pub percent: Ratio,
    /// Credit-card pool left after Host and Bartender took theirs.
    pub cc_pool_after_others: MoneyCents,
    /// Cash pool left after Host and Bartender took theirs.
    pub cash_pool_after_others: MoneyCents,
    pub busser_percent: Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmployeeCalcResult {
    pub tips_cc: MoneyCents,
    pub tips_cash: MoneyCents,
}

/// One employee's cc/cash tip share for one role in one period.
///
/// Busser takes `pool * busserPercent * percent`, Server takes
/// `pool * (1 - busserPercent) * percent`, every other role passes its
/// entered `cc`/`cash` straight through.
pub fn calculate_employee(input: &EmployeeCalcInput<'_>) -> EmployeeCalcResult {
    let cc_pool = max0(input.cc_pool_after_others as f64);
    let cash_pool = max0(input.cash_pool_after_others as f64);
    let percent = clamp01(input.percent);
    let busser_percent = clamp01(input.busser_percent);

    match input.role_name {
        RoleName::Busser => EmployeeCalcResult {
            tips_cc: round_cents(cc_pool * busser_percent * percent),
            tips_cash: round_cents(cash_pool * busser_percent * percent),
        },
        RoleName::Server => {
            let server_share = 1.0 - busser_percent;
            EmployeeCalcResult {
                tips_cc: round_cents(cc_pool * server_share * percent),
                tips_cash: round_cents(cash_pool * server_share * percent),
            }
        }
        _ => EmployeeCalcResult {
            tips_cc: input.cc,
            tips_cash: input.cash,
        },
    }
}
