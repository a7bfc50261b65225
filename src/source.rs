use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::change::PayrollChange;
use crate::model::snapshot::PayrollSnapshot;
use crate::utils::number::clamp01;

/// Anything that can produce a [`PayrollSnapshot`] from external storage.
pub trait SnapshotSource {
    fn load(&self) -> Result<PayrollSnapshot>;
}

/// Snapshot stored as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonFileSource {
    fn load(&self) -> Result<PayrollSnapshot> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read snapshot {}", self.path.display()))?;
        let mut snapshot: PayrollSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse snapshot {}", self.path.display()))?;
        clamp_ratios(&mut snapshot);

        tracing::info!(
            path = %self.path.display(),
            periods = snapshot.periods.len(),
            employees = snapshot.employees.len(),
            "Loaded payroll snapshot"
        );
        Ok(snapshot)
    }
}

/// Stored ratios are trusted to be in `[0, 1]` by the engine.
fn clamp_ratios(snapshot: &mut PayrollSnapshot) {
    for p in snapshot.periods.values_mut() {
        p.busser_percent = clamp01(p.busser_percent);
    }
    for c in snapshot
        .employees
        .iter_mut()
        .flat_map(|e| e.by_period.values_mut())
    {
        c.percent = clamp01(c.percent);
    }
}

pub fn load_changes(path: &Path) -> Result<Vec<PayrollChange>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read changes {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse changes {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::role::RoleName;
    use crate::test_support::{P1, cell, employee, period, snapshot};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_clamps_ratios() {
        let mut s = snapshot(
            vec![period(P1, 100, 0)],
            vec![employee("1", RoleName::Server, &[(P1, cell(0, 0, 2.5))])],
        );
        s.ensure_period(P1).busser_percent = -1.0;
        let file = temp_json(&serde_json::to_string(&s).unwrap());

        let loaded = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(loaded.periods[P1].busser_percent, 0.0);
        assert_eq!(loaded.employees[0].cell(P1).unwrap().percent, 1.0);
    }

    #[test]
    fn missing_file_is_an_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let err = JsonFileSource::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }

    #[test]
    fn loads_changes_in_order() {
        let file = temp_json(
            r#"[
                { "kind": "period", "periodId": 1, "field": "sales", "value": 100 },
                { "kind": "employee", "periodId": 1, "uid": 7, "roleName": "Host",
                  "field": "cc", "value": 5 }
            ]"#,
        );
        let changes = load_changes(file.path()).unwrap();
        assert_eq!(changes.len(), 2);
        assert!(matches!(changes[0], PayrollChange::Period(_)));
    }

    #[test]
    fn malformed_changes_are_an_error() {
        let file = temp_json(r#"[{ "kind": "bogus" }]"#);
        assert!(load_changes(file.path()).is_err());
    }
}
