pub mod calc;
pub mod engine;
pub mod model;
pub mod source;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use engine::apply::{ApplyResult, apply_changes};
pub use engine::diff::build_diff;
pub use engine::direct_edits::apply_direct_edits;
pub use engine::normalize::normalize_changes;
pub use engine::recompute::recompute_affected;
pub use engine::resolve::resolve_dependencies;
pub use model::affected::{ActualAffected, Affected, AffectedHint, EmployeeKey};
pub use model::change::{EmployeeField, NormalizedChange, PayrollChange, PeriodField};
pub use model::diff::PayrollDiff;
pub use model::role::{ROLE_ORDER, RoleName};
pub use model::snapshot::{EmployeeCell, EmployeeRecord, PayrollMeta, PayrollSnapshot, PeriodRecord};
