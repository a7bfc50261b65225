use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::role::RoleName;
use crate::utils::number::{MoneyCents, Ratio, sum_cents};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PayType {
    #[serde(rename = "hourly", alias = "HOURLY")]
    Hourly,
    #[serde(rename = "salaried", alias = "SALARY")]
    Salaried,
}

/// Audit log entry. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// 1 payroll, 2 period, 3 employee; 4 and 5 reserved.
    #[serde(rename = "type")]
    pub log_type: u8,
    pub timestamp: DateTime<Utc>,
    pub operator_name: String,
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollMeta {
    pub payroll_id: String,
    pub location_id: String,
    pub location_name: String,
    /// Statutory minimum, cents per hour.
    pub min_pay_rate: MoneyCents,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cash_tips: Option<MoneyCents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tips: Option<MoneyCents>,
}

/// One meal period (for example Monday lunch).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    pub id: String,
    #[serde(default)]
    pub sales: MoneyCents,
    #[serde(default)]
    pub cash_tips: MoneyCents,
    #[serde(default)]
    pub cc_tips: MoneyCents,
    #[serde(default)]
    pub service_charge: MoneyCents,
    #[serde(default)]
    pub busser_percent: Ratio,
}

impl PeriodRecord {
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCell {
    #[serde(default)]
    pub hour: f64,
    #[serde(default)]
    pub cc: MoneyCents,
    #[serde(default)]
    pub cash: MoneyCents,
    #[serde(default)]
    pub percent: Ratio,
}

impl EmployeeCell {
    pub fn is_zero(&self) -> bool {
        self.hour == 0.0 && self.cc == 0 && self.cash == 0 && self.percent == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub uid: String,
    pub role_id: String,
    pub role_name: RoleName,
    pub name: String,
    pub pay_rate: MoneyCents,
    pub pay_type: PayType,
    /// Sparse: a period only appears once something was written for it.
    #[serde(default)]
    pub by_period: BTreeMap<String, EmployeeCell>,
}

impl EmployeeRecord {
    pub fn cell(&self, period_id: &str) -> Option<&EmployeeCell> {
        self.by_period.get(period_id)
    }

    pub fn ensure_cell(&mut self, period_id: &str) -> &mut EmployeeCell {
        self.by_period.entry(period_id.to_string()).or_default()
    }

    pub fn is(&self, uid: &str, role_name: &RoleName) -> bool {
        self.uid == uid && &self.role_name == role_name
    }
}

/// Complete payroll state for one pay period.
///
/// Operations take `&PayrollSnapshot` and hand back a new one; the caller's
/// value is never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSnapshot {
    pub meta: PayrollMeta,
    #[serde(default)]
    pub periods: BTreeMap<String, PeriodRecord>,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl PayrollSnapshot {
    pub fn employee(&self, uid: &str, role_name: &RoleName) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.is(uid, role_name))
    }

    pub fn employee_mut(&mut self, uid: &str, role_name: &RoleName) -> Option<&mut EmployeeRecord> {
        self.employees.iter_mut().find(|e| e.is(uid, role_name))
    }

    pub fn ensure_period(&mut self, period_id: &str) -> &mut PeriodRecord {
        self.periods
            .entry(period_id.to_string())
            .or_insert_with(|| PeriodRecord::empty(period_id))
    }

    pub fn employees_with_role<'a>(
        &'a self,
        role: &'a RoleName,
    ) -> impl Iterator<Item = &'a EmployeeRecord> + 'a {
        self.employees.iter().filter(move |e| &e.role_name == role)
    }

    /// Sum of `(cc, cash)` over every cell of `role` in `period_id`.
    pub fn role_totals(&self, period_id: &str, role: &RoleName) -> (MoneyCents, MoneyCents) {
        self.employees_with_role(role)
            .filter_map(|e| e.cell(period_id))
            .fold((0, 0), |(cc, cash), c| {
                (cc.saturating_add(c.cc), cash.saturating_add(c.cash))
            })
    }

    /// `totalCashTips = Σ cashTips`, `totalTips = totalCashTips + Σ ccTips`.
    pub fn recompute_meta_totals(&mut self) {
        let cash = sum_cents(self.periods.values().map(|p| p.cash_tips));
        let cc = sum_cents(self.periods.values().map(|p| p.cc_tips));
        self.meta.total_cash_tips = Some(cash);
        self.meta.total_tips = Some(cash.saturating_add(cc));
    }
}
