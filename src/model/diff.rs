use serde::{Deserialize, Serialize};

use crate::model::change::{EmployeeField, PeriodField};
use crate::model::role::RoleName;
use crate::utils::number::MoneyCents;

/// A field value on either side of a diff. `None` means the record was absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Cents(MoneyCents),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodChangeDiff {
    pub period_id: String,
    pub field: PeriodField,
    pub before: Option<FieldValue>,
    pub after: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChangeDiff {
    pub period_id: String,
    pub uid: String,
    pub role_name: RoleName,
    pub field: EmployeeField,
    pub before: Option<FieldValue>,
    pub after: Option<FieldValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalChange {
    pub before: Option<MoneyCents>,
    pub after: Option<MoneyCents>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cash_tips: Option<TotalChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tips: Option<TotalChange>,
}

impl MetaDiff {
    pub fn is_empty(&self) -> bool {
        self.total_cash_tips.is_none() && self.total_tips.is_none()
    }
}

/// Field-level before/after records for everything an operation changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollDiff {
    pub periods: Vec<PeriodChangeDiff>,
    pub employees: Vec<EmployeeChangeDiff>,
    pub meta: MetaDiff,
}

impl PayrollDiff {
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.employees.is_empty() && self.meta.is_empty()
    }
}
