use std::collections::BTreeSet;
use std::str::FromStr;

use derive_more::{Deref, DerefMut, Display, From};
use serde::{Deserialize, Serialize};

use crate::model::role::RoleName;

/// One employee cell: `periodId:uid:roleName`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}:{}:{}", period_id, uid, role_name)]
#[serde(into = "String", try_from = "String")]
pub struct EmployeeKey {
    pub period_id: String,
    pub uid: String,
    pub role_name: RoleName,
}

impl EmployeeKey {
    pub fn new(period_id: &str, uid: &str, role_name: &RoleName) -> Self {
        Self {
            period_id: period_id.to_string(),
            uid: uid.to_string(),
            role_name: role_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "malformed employee key `{}`, expected periodId:uid:roleName", key)]
pub struct KeyParseError {
    pub key: String,
}

impl std::error::Error for KeyParseError {}

impl FromStr for EmployeeKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || KeyParseError { key: s.to_string() };
        let (period_id, rest) = s.split_once(':').ok_or_else(err)?;
        // role names may themselves contain ':'
        let (uid, role) = rest.split_once(':').ok_or_else(err)?;
        if period_id.is_empty() || uid.is_empty() {
            return Err(err());
        }
        Ok(Self {
            period_id: period_id.to_string(),
            uid: uid.to_string(),
            role_name: RoleName::from_name(role),
        })
    }
}

impl TryFrom<String> for EmployeeKey {
    type Error = KeyParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EmployeeKey> for String {
    fn from(key: EmployeeKey) -> Self {
        key.to_string()
    }
}

/// Periods, employee cells and roles touched by a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affected {
    pub periods: BTreeSet<String>,
    pub employees: BTreeSet<EmployeeKey>,
    pub roles: BTreeSet<RoleName>,
}

impl Affected {
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.employees.is_empty() && self.roles.is_empty()
    }

    pub fn has_employee_keys_for(&self, period_id: &str) -> bool {
        self.employees.iter().any(|k| k.period_id == period_id)
    }

    pub fn merge(&mut self, other: Affected) {
        self.periods.extend(other.periods);
        self.employees.extend(other.employees);
        self.roles.extend(other.roles);
    }
}

/// What the resolver thinks may need recomputing. May over- or under-shoot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffectedHint(pub Affected);

impl AffectedHint {
    /// Hinted periods plus every period named inside a hinted employee key.
    pub fn working_periods(&self) -> BTreeSet<String> {
        let mut out = self.periods.clone();
        out.extend(self.employees.iter().map(|k| k.period_id.clone()));
        out
    }
}

/// What was actually written. Drives the diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualAffected(pub Affected);

impl ActualAffected {
    /// Record a written employee cell together with its period and role.
    pub fn record_employee(&mut self, key: EmployeeKey) {
        self.periods.insert(key.period_id.clone());
        self.roles.insert(key.role_name.clone());
        self.employees.insert(key);
    }

    pub fn absorb(&mut self, other: ActualAffected) {
        self.0.merge(other.0);
    }
}
