#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use tippool::model::snapshot::PayType;
use tippool::{EmployeeCell, EmployeeRecord, PayrollMeta, PayrollSnapshot, PeriodRecord, RoleName};

pub fn make_period(id: &str, cc_tips: i64, cash_tips: i64, busser_percent: f64) -> PeriodRecord {
    PeriodRecord {
        cc_tips,
        cash_tips,
        busser_percent,
        ..PeriodRecord::empty(id)
    }
}

pub fn make_cell(cc: i64, cash: i64, percent: f64) -> EmployeeCell {
    EmployeeCell {
        cc,
        cash,
        percent,
        hour: 0.0,
    }
}

pub fn make_employee(uid: &str, role: RoleName, cells: &[(&str, EmployeeCell)]) -> EmployeeRecord {
    EmployeeRecord {
        uid: uid.to_string(),
        role_id: format!("role-{role}"),
        role_name: role,
        name: format!("Employee {uid}"),
        pay_rate: 1650,
        pay_type: PayType::Hourly,
        by_period: cells.iter().map(|(p, c)| ((*p).to_string(), *c)).collect(),
    }
}

pub fn make_snapshot(periods: Vec<PeriodRecord>, employees: Vec<EmployeeRecord>) -> PayrollSnapshot {
    PayrollSnapshot {
        meta: PayrollMeta {
            payroll_id: "payroll-2025-39".into(),
            location_id: "7".into(),
            location_name: "Harbor St".into(),
            min_pay_rate: 1650,
            start_date: Utc.with_ymd_and_hms(2025, 9, 22, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 9, 28, 23, 59, 59).unwrap(),
            total_cash_tips: None,
            total_tips: None,
        },
        periods: periods.into_iter().map(|p| (p.id.clone(), p)).collect::<BTreeMap<_, _>>(),
        employees,
        logs: Vec::new(),
    }
}

/// One lunch period with a Host, a Bartender, two Servers and a Busser.
pub fn lunch_snapshot() -> PayrollSnapshot {
    make_snapshot(
        vec![make_period("1", 10_000, 4_000, 0.2)],
        vec![
            make_employee("10", RoleName::Host, &[("1", make_cell(500, 0, 0.0))]),
            make_employee("11", RoleName::Bartender, &[("1", make_cell(1_500, 1_000, 0.0))]),
            make_employee("20", RoleName::Server, &[("1", make_cell(0, 0, 0.5))]),
            make_employee("21", RoleName::Server, &[("1", make_cell(0, 0, 0.5))]),
            make_employee("30", RoleName::Busser, &[("1", make_cell(0, 0, 1.0))]),
        ],
    )
}
