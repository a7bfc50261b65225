use crate::model::change::{EmployeeField, NormalizedChange, PayrollChange};
use crate::utils::number::clamp01;

/// Canonicalize ids and clamp employee percents. Never drops or reorders.
pub fn normalize_changes(changes: &[PayrollChange]) -> Vec<NormalizedChange> {
    changes
        .iter()
        .map(|c| match c {
            PayrollChange::Period(p) => NormalizedChange::Period {
                period_id: p.period_id.canonical(),
                field: p.field,
                value: p.value.as_f64(),
            },
            PayrollChange::Employee(e) => {
                let value = e.value.as_f64();
                NormalizedChange::Employee {
                    period_id: e.period_id.canonical(),
                    uid: e.uid.canonical(),
                    role_name: e.role_name.clone(),
                    field: e.field,
                    value: if e.field == EmployeeField::Percent {
                        clamp01(value)
                    } else {
                        value
                    },
                }
            }
        })
        .collect()
}
