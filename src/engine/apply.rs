use serde::Serialize;

use crate::engine::diff::build_diff;
use crate::engine::direct_edits::apply_direct_edits;
use crate::engine::normalize::normalize_changes;
use crate::engine::recompute::recompute_affected;
use crate::engine::resolve::resolve_dependencies;
use crate::model::affected::ActualAffected;
use crate::model::change::PayrollChange;
use crate::model::diff::PayrollDiff;
use crate::model::snapshot::PayrollSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyResult {
    pub next: PayrollSnapshot,
    pub affected: ActualAffected,
    pub diff: PayrollDiff,
}

/// Drop cells that did not exist in `original`, were created during this
/// operation and ended up all-zero.
fn prune_created_zero_cells(original: &PayrollSnapshot, draft: &mut PayrollSnapshot, actual: &mut ActualAffected) {
    actual.employees.retain(|key| {
        let existed = original
            .employee(&key.uid, &key.role_name)
            .and_then(|e| e.cell(&key.period_id))
            .is_some();
        if existed {
            return true;
        }
        let Some(employee) = draft.employee_mut(&key.uid, &key.role_name) else {
            return true;
        };
        match employee.cell(&key.period_id) {
            Some(cell) if cell.is_zero() => {
                employee.by_period.remove(&key.period_id);
                tracing::debug!(key = %key, "Pruned empty cell");
                false
            }
            _ => true,
        }
    });
}

/// Apply a batch of edits to `snapshot` and recompute everything they affect.
///
/// The input is never mutated. The returned `affected` set holds what was
/// actually written, direct edits included, and the diff is built against it.
#[tracing::instrument(
    name = "apply_changes",
    skip(snapshot, changes),
    fields(changes = changes.len())
)]
pub fn apply_changes(snapshot: &PayrollSnapshot, changes: &[PayrollChange]) -> ApplyResult {
    if changes.is_empty() {
        return ApplyResult {
            next: snapshot.clone(),
            affected: ActualAffected::default(),
            diff: PayrollDiff::default(),
        };
    }

    let normalized = normalize_changes(changes);
    let mut draft = snapshot.clone();

    let mut actual = apply_direct_edits(&mut draft, &normalized);
    let hint = resolve_dependencies(snapshot, &normalized);
    actual.absorb(recompute_affected(&mut draft, &hint));

    prune_created_zero_cells(snapshot, &mut draft, &mut actual);
    draft.recompute_meta_totals();

    let diff = build_diff(snapshot, &draft, &actual);

    tracing::info!(
        periods = actual.periods.len(),
        employees = actual.employees.len(),
        period_diffs = diff.periods.len(),
        employee_diffs = diff.employees.len(),
        "Applied payroll changes"
    );

    ApplyResult {
        next: draft,
        affected: actual,
        diff,
    }
}
