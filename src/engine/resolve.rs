use std::collections::BTreeSet;

use crate::model::affected::{AffectedHint, EmployeeKey};
use crate::model::change::NormalizedChange;
use crate::model::snapshot::PayrollSnapshot;

/// Add every Busser/Server in `period_id` that either already has a cell
/// there or is edited by this batch.
fn add_pooled_dependents(
    snapshot: &PayrollSnapshot,
    period_id: &str,
    named: &BTreeSet<EmployeeKey>,
    hint: &mut AffectedHint,
) {
    for e in snapshot.employees.iter().filter(|e| e.role_name.is_pooled()) {
        let key = EmployeeKey::new(period_id, &e.uid, &e.role_name);
        if e.cell(period_id).is_some() || named.contains(&key) {
            hint.roles.insert(e.role_name.clone());
            hint.employees.insert(key);
        }
    }
}

/// Conservative guess at what a batch of edits may force us to recompute.
///
/// Reads `snapshot` as it was before the edits were applied. The result is
/// only a hint: recompute widens it when a period arrives with no employee
/// keys at all.
pub fn resolve_dependencies(snapshot: &PayrollSnapshot, changes: &[NormalizedChange]) -> AffectedHint {
    let mut hint = AffectedHint::default();

    let named: BTreeSet<EmployeeKey> = changes
        .iter()
        .filter_map(|c| match c {
            NormalizedChange::Employee {
                period_id,
                uid,
                role_name,
                ..
            } => Some(EmployeeKey::new(period_id, uid, role_name)),
            NormalizedChange::Period { .. } => None,
        })
        .collect();

    for change in changes {
        let period_id = change.period_id();
        match change {
            NormalizedChange::Period { field, .. } => {
                hint.periods.insert(period_id.to_string());
                if field.is_pool_affecting() {
                    add_pooled_dependents(snapshot, period_id, &named, &mut hint);
                }
            }
            NormalizedChange::Employee { uid, role_name, .. } => {
                if snapshot.employee(uid, role_name).is_none() {
                    continue;
                }
                hint.employees.insert(EmployeeKey::new(period_id, uid, role_name));
                hint.roles.insert(role_name.clone());

                // Host/Bartender totals come out of the pool the others split.
                if role_name.is_priority() {
                    add_pooled_dependents(snapshot, period_id, &named, &mut hint);
                }
            }
        }
    }

    tracing::trace!(
        periods = hint.periods.len(),
        employees = hint.employees.len(),
        roles = hint.roles.len(),
        "Resolved dependency hint"
    );

    hint
}
