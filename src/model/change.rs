use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::model::role::RoleName;
use crate::utils::number::num;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PeriodField {
    Sales,
    CcTips,
    CashTips,
    ServiceCharge,
    BusserPercent,
}

impl PeriodField {
    /// Fields that feed the Busser/Server tip pools or how they are split.
    pub fn is_pool_affecting(self) -> bool {
        matches!(
            self,
            PeriodField::CcTips
                | PeriodField::CashTips
                | PeriodField::ServiceCharge
                | PeriodField::BusserPercent
        )
    }
}

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EmployeeField {
    Hour,
    Cc,
    Cash,
    Percent,
}

/// Identifier as it arrives from a caller: string or bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawId {
    pub fn canonical(&self) -> String {
        match self {
            RawId::Int(i) => i.to_string(),
            RawId::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
            RawId::Float(f) => f.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        RawId::Text(s.to_string())
    }
}

impl From<String> for RawId {
    fn from(s: String) -> Self {
        RawId::Text(s)
    }
}

impl From<i64> for RawId {
    fn from(i: i64) -> Self {
        RawId::Int(i)
    }
}

/// Edited value: cents, hours or a ratio depending on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            RawValue::Number(n) if n.is_finite() => *n,
            RawValue::Number(_) => 0.0,
            RawValue::Text(s) => num(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodUpdate {
    pub period_id: RawId,
    pub field: PeriodField,
    pub value: RawValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub period_id: RawId,
    pub uid: RawId,
    pub role_name: RoleName,
    pub field: EmployeeField,
    pub value: RawValue,
}

/// A single user edit, as emitted by the editing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PayrollChange {
    Period(PeriodUpdate),
    Employee(EmployeeUpdate),
}

impl PayrollChange {
    pub fn period(period_id: impl Into<RawId>, field: PeriodField, value: f64) -> Self {
        PayrollChange::Period(PeriodUpdate {
            period_id: period_id.into(),
            field,
            value: value.into(),
        })
    }

    pub fn employee(
        period_id: impl Into<RawId>,
        uid: impl Into<RawId>,
        role_name: impl Into<RoleName>,
        field: EmployeeField,
        value: f64,
    ) -> Self {
        PayrollChange::Employee(EmployeeUpdate {
            period_id: period_id.into(),
            uid: uid.into(),
            role_name: role_name.into(),
            field,
            value: value.into(),
        })
    }
}

/// A change after identifier canonicalization and ratio clamping.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedChange {
    Period {
        period_id: String,
        field: PeriodField,
        value: f64,
    },
    Employee {
        period_id: String,
        uid: String,
        role_name: RoleName,
        field: EmployeeField,
        value: f64,
    },
}

impl NormalizedChange {
    pub fn period_id(&self) -> &str {
        match self {
            NormalizedChange::Period { period_id, .. } => period_id,
            NormalizedChange::Employee { period_id, .. } => period_id,
        }
    }
}
