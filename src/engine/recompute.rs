use crate::calc::employee::{EmployeeCalcInput, calculate_employee};
use crate::model::affected::{ActualAffected, AffectedHint, EmployeeKey};
use crate::model::role::{ROLE_ORDER, RoleName};
use crate::model::snapshot::PayrollSnapshot;
use crate::utils::number::{MoneyCents, Ratio};

#[derive(Debug, Clone, Copy, Default)]
struct PeriodInputs {
    cc_tips: MoneyCents,
    cash_tips: MoneyCents,
    service_charge: MoneyCents,
    busser_percent: Ratio,
}

/// `(cc, cash)` left for Busser/Server after Host and Bartender, read from
/// the draft as it stands right now.
fn pools_after_priority_roles(
    draft: &PayrollSnapshot,
    period_id: &str,
    inputs: &PeriodInputs,
) -> (MoneyCents, MoneyCents) {
    let (bartender_cc, bartender_cash) = draft.role_totals(period_id, &RoleName::Bartender);
    let (host_cc, host_cash) = draft.role_totals(period_id, &RoleName::Host);
    let cc_pool = inputs
        .cc_tips
        .saturating_add(inputs.service_charge)
        .saturating_sub(bartender_cc)
        .saturating_sub(host_cc);
    let cash_pool = inputs
        .cash_tips
        .saturating_sub(bartender_cash)
        .saturating_sub(host_cash);
    (cc_pool.max(0), cash_pool.max(0))
}

/// Indices of employees of `role` to recompute in `period_id`.
///
/// With employee keys for the period, exactly the keyed rows. Without any,
/// every row of the role, provided the role is hinted (or no roles are).
fn candidates(draft: &PayrollSnapshot, hint: &AffectedHint, period_id: &str, role: &RoleName) -> Vec<usize> {
    let keyed = hint.has_employee_keys_for(period_id);
    let role_is_affected = hint.roles.is_empty() || hint.roles.contains(role);

    draft
        .employees
        .iter()
        .enumerate()
        .filter(|(_, e)| &e.role_name == role)
        .filter(|(_, e)| {
            if keyed {
                hint.employees
                    .contains(&EmployeeKey::new(period_id, &e.uid, &e.role_name))
            } else {
                role_is_affected
            }
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Re-derive tip shares for everything the hint points at, writing only
/// cells whose `(cc, cash)` actually changes.
///
/// Periods are processed one at a time and roles in [`ROLE_ORDER`], so the
/// Host and Bartender totals are settled before any pool is split. Returns
/// the cells that were written, which can reach beyond the hint.
pub fn recompute_affected(draft: &mut PayrollSnapshot, hint: &AffectedHint) -> ActualAffected {
    let mut actual = ActualAffected::default();

    for period_id in hint.working_periods() {
        let inputs = draft
            .periods
            .get(&period_id)
            .map(|p| PeriodInputs {
                cc_tips: p.cc_tips,
                cash_tips: p.cash_tips,
                service_charge: p.service_charge,
                busser_percent: p.busser_percent,
            })
            .unwrap_or_default();

        for role in &ROLE_ORDER {
            let rows = candidates(draft, hint, &period_id, role);
            if rows.is_empty() {
                continue;
            }

            let (cc_pool, cash_pool) = pools_after_priority_roles(draft, &period_id, &inputs);

            for idx in rows {
                let employee = &mut draft.employees[idx];
                let before = employee.cell(&period_id).copied();
                let current = before.unwrap_or_default();

                let result = calculate_employee(&EmployeeCalcInput {
                    role_name: role,
                    cc: current.cc,
                    cash: current.cash,
                    percent: current.percent,
                    cc_pool_after_others: cc_pool,
                    cash_pool_after_others: cash_pool,
                    busser_percent: inputs.busser_percent,
                });

                let unchanged = match before {
                    None => result.tips_cc == 0 && result.tips_cash == 0,
                    Some(c) => c.cc == result.tips_cc && c.cash == result.tips_cash,
                };
                if unchanged {
                    tracing::trace!(period_id = %period_id, uid = %employee.uid, role = %role, "No change");
                    continue;
                }

                let cell = employee.ensure_cell(&period_id);
                cell.cc = result.tips_cc;
                cell.cash = result.tips_cash;

                tracing::debug!(
                    period_id = %period_id,
                    uid = %employee.uid,
                    role = %role,
                    cc = result.tips_cc,
                    cash = result.tips_cash,
                    "Recomputed tip share"
                );
                actual.record_employee(EmployeeKey::new(&period_id, &employee.uid, role));
            }
        }
    }

    actual
}
