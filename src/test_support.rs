//! Fixture builders shared by unit tests.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::model::role::RoleName;
use crate::model::snapshot::{
    EmployeeCell, EmployeeRecord, PayType, PayrollMeta, PayrollSnapshot, PeriodRecord,
};

pub(crate) const P1: &str = "1";
pub(crate) const P2: &str = "2";

pub(crate) fn period(id: &str, cc_tips: i64, cash_tips: i64) -> PeriodRecord {
    PeriodRecord {
        cc_tips,
        cash_tips,
        ..PeriodRecord::empty(id)
    }
}

pub(crate) fn cell(cc: i64, cash: i64, percent: f64) -> EmployeeCell {
    EmployeeCell {
        cc,
        cash,
        percent,
        ..EmployeeCell::default()
    }
}

pub(crate) fn employee(uid: &str, role: RoleName, cells: &[(&str, EmployeeCell)]) -> EmployeeRecord {
    EmployeeRecord {
        uid: uid.to_string(),
        role_id: format!("r-{role}"),
        role_name: role,
        name: format!("emp-{uid}"),
        pay_rate: 1500,
        pay_type: PayType::Hourly,
        by_period: cells
            .iter()
            .map(|(p, c)| ((*p).to_string(), *c))
            .collect(),
    }
}

pub(crate) fn snapshot(periods: Vec<PeriodRecord>, employees: Vec<EmployeeRecord>) -> PayrollSnapshot {
    PayrollSnapshot {
        meta: PayrollMeta {
            payroll_id: "pid".into(),
            location_id: "1".into(),
            location_name: "Newton".into(),
            min_pay_rate: 1500,
            start_date: Utc.with_ymd_and_hms(2025, 9, 22, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 9, 28, 23, 59, 59).unwrap(),
            total_cash_tips: None,
            total_tips: None,
        },
        periods: periods
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect::<BTreeMap<_, _>>(),
        employees,
        logs: Vec::new(),
    }
}
