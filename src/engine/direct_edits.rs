use crate::model::affected::{ActualAffected, EmployeeKey};
use crate::model::change::{EmployeeField, NormalizedChange, PeriodField};
use crate::model::snapshot::{EmployeeCell, PayrollSnapshot, PeriodRecord};
use crate::utils::number::{clamp01, round_cents as cents};

fn write_period_field(p: &mut PeriodRecord, field: PeriodField, value: f64) {
    match field {
        PeriodField::Sales => p.sales = cents(value),
        PeriodField::CcTips => p.cc_tips = cents(value),
        PeriodField::CashTips => p.cash_tips = cents(value),
        PeriodField::ServiceCharge => p.service_charge = cents(value),
        PeriodField::BusserPercent => p.busser_percent = clamp01(value),
    }
}

fn write_cell_field(c: &mut EmployeeCell, field: EmployeeField, value: f64) {
    match field {
        EmployeeField::Hour => c.hour = value,
        EmployeeField::Cc => c.cc = cents(value),
        EmployeeField::Cash => c.cash = cents(value),
        EmployeeField::Percent => c.percent = clamp01(value),
    }
}

/// Write literal edits into `draft`, creating zeroed periods and cells on
/// first touch.
///
/// Returns the periods and cells whose stored value actually moved (or that
/// were created). Employee edits never mark their period. Edits naming an
/// employee row that is not in the snapshot are skipped.
pub fn apply_direct_edits(draft: &mut PayrollSnapshot, changes: &[NormalizedChange]) -> ActualAffected {
    let mut touched = ActualAffected::default();

    for change in changes {
        match change {
            NormalizedChange::Period {
                period_id,
                field,
                value,
            } => {
                let before = draft.periods.get(period_id).cloned();
                let period = draft.ensure_period(period_id);
                write_period_field(period, *field, *value);
                if before.as_ref() != Some(&*period) {
                    touched.periods.insert(period_id.clone());
                }
            }
            NormalizedChange::Employee {
                period_id,
                uid,
                role_name,
                field,
                value,
            } => {
                let Some(employee) = draft.employee_mut(uid, role_name) else {
                    tracing::debug!(
                        period_id = %period_id,
                        uid = %uid,
                        role = %role_name,
                        "Edit names an employee row that does not exist, skipping"
                    );
                    continue;
                };
                let before = employee.cell(period_id).copied();
                let cell = employee.ensure_cell(period_id);
                write_cell_field(cell, *field, *value);
                if before != Some(*cell) {
                    touched.employees.insert(EmployeeKey::new(period_id, uid, role_name));
                    touched.roles.insert(role_name.clone());
                }
            }
        }
    }

    touched
}
