mod common;

use common::{lunch_snapshot, make_cell};
use tippool::model::diff::{FieldValue, TotalChange};
use tippool::{
    AffectedHint, EmployeeField, PayrollChange, PayrollSnapshot, PeriodField, apply_changes,
    recompute_affected,
};

fn keys(affected: &tippool::ActualAffected) -> Vec<String> {
    affected.employees.iter().map(ToString::to_string).collect()
}

/// Lunch snapshot after one pass, so every pooled cell holds its real share.
fn settled() -> PayrollSnapshot {
    apply_changes(
        &lunch_snapshot(),
        &[PayrollChange::period("1", PeriodField::Sales, 50_000.0)],
    )
    .next
}

#[test]
fn sales_edit_falls_back_to_recomputing_the_whole_period() {
    let out = apply_changes(
        &lunch_snapshot(),
        &[PayrollChange::period("1", PeriodField::Sales, 50_000.0)],
    );

    // cc pool 10000 - 1500 - 500 = 8000, cash pool 4000 - 1000 = 3000
    let s = &out.next;
    assert_eq!(s.employees[2].cell("1"), Some(&make_cell(3_200, 1_200, 0.5)));
    assert_eq!(s.employees[3].cell("1"), Some(&make_cell(3_200, 1_200, 0.5)));
    assert_eq!(s.employees[4].cell("1"), Some(&make_cell(1_600, 600, 1.0)));

    assert_eq!(keys(&out.affected), vec!["1:20:Server", "1:21:Server", "1:30:Busser"]);
    assert!(out.affected.periods.contains("1"));
    assert_eq!(out.diff.periods.len(), 1);
    assert_eq!(out.diff.periods[0].field, PeriodField::Sales);
    assert_eq!(out.diff.employees.len(), 6);
}

#[test]
fn cc_tips_edit_flows_into_pooled_roles_and_meta() {
    let before = settled();
    let out = apply_changes(&before, &[PayrollChange::period("1", PeriodField::CcTips, 12_000.0)]);

    assert_eq!(out.next.employees[2].cell("1"), Some(&make_cell(4_000, 1_200, 0.5)));
    assert_eq!(out.next.employees[4].cell("1"), Some(&make_cell(2_000, 600, 1.0)));

    // cash did not move, so only cc shows up per employee
    assert!(out.diff.employees.iter().all(|d| d.field == EmployeeField::Cc));
    assert_eq!(out.diff.employees.len(), 3);
    assert_eq!(
        out.diff.meta.total_tips,
        Some(TotalChange {
            before: Some(14_000),
            after: Some(16_000)
        })
    );
    assert_eq!(out.diff.meta.total_cash_tips, None);
}

#[test]
fn host_edit_cascades_through_the_pool() {
    let before = settled();
    let out = apply_changes(
        &before,
        &[PayrollChange::employee("1", "10", "Host", EmployeeField::Cc, 1_500.0)],
    );

    // cc pool 10000 - 1500 - 1500 = 7000
    assert_eq!(out.next.employees[0].cell("1"), Some(&make_cell(1_500, 0, 0.0)));
    assert_eq!(out.next.employees[2].cell("1"), Some(&make_cell(2_800, 1_200, 0.5)));
    assert_eq!(out.next.employees[4].cell("1"), Some(&make_cell(1_400, 600, 1.0)));
    assert_eq!(
        keys(&out.affected),
        vec!["1:10:Host", "1:20:Server", "1:21:Server", "1:30:Busser"]
    );
}

#[test]
fn server_percent_edit_touches_only_that_server() {
    let before = settled();
    let out = apply_changes(
        &before,
        &[PayrollChange::employee("1", "20", "Server", EmployeeField::Percent, 0.25)],
    );

    assert_eq!(out.next.employees[2].cell("1"), Some(&make_cell(1_600, 600, 0.25)));
    assert_eq!(out.next.employees[3], before.employees[3]);
    assert_eq!(keys(&out.affected), vec!["1:20:Server"]);
    assert!(out.diff.periods.is_empty());
}

#[test]
fn edit_for_missing_employee_changes_nothing() {
    let before = settled();
    let out = apply_changes(
        &before,
        &[PayrollChange::employee("1", "999", "Server", EmployeeField::Cc, 100.0)],
    );
    assert_eq!(out.next, before);
    assert!(out.affected.is_empty());
    assert!(out.diff.is_empty());
}

#[test]
fn reapplying_the_same_edit_is_a_no_op() {
    let change = [PayrollChange::period("1", PeriodField::CashTips, 5_000.0)];
    let first = apply_changes(&settled(), &change);
    assert!(!first.diff.is_empty());

    let second = apply_changes(&first.next, &change);
    assert_eq!(second.next, first.next);
    assert!(second.affected.is_empty());
    assert!(second.diff.is_empty());
}

#[test]
fn edit_into_unknown_period_creates_the_cell_lazily() {
    let before = settled();
    let out = apply_changes(
        &before,
        &[PayrollChange::employee("2", "20", "Server", EmployeeField::Percent, 1.0)],
    );

    assert_eq!(out.next.employees[2].cell("2"), Some(&make_cell(0, 0, 1.0)));
    assert!(!out.next.periods.contains_key("2"));
    assert_eq!(keys(&out.affected), vec!["2:20:Server"]);

    let percent = out
        .diff
        .employees
        .iter()
        .find(|d| d.field == EmployeeField::Percent)
        .unwrap();
    assert_eq!(percent.before, None);
    assert_eq!(percent.after, Some(FieldValue::Number(1.0)));
}

#[test]
fn result_serializes_with_string_keys() {
    let out = apply_changes(
        &settled(),
        &[PayrollChange::employee("1", "20", "Server", EmployeeField::Percent, 0.25)],
    );
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["affected"]["employees"][0], "1:20:Server");
    assert_eq!(json["diff"]["employees"][0]["roleName"], "Server");
    assert_eq!(json["next"]["meta"]["totalTips"], 14_000);
}

#[test]
fn changes_parse_from_json_and_apply() {
    let changes: Vec<PayrollChange> = serde_json::from_str(
        r#"[{ "kind": "period", "periodId": 1, "field": "ccTips", "value": "12000" }]"#,
    )
    .unwrap();
    let out = apply_changes(&settled(), &changes);
    assert_eq!(out.next.periods["1"].cc_tips, 12_000);
    assert_eq!(out.next.employees[2].cell("1").unwrap().cc, 4_000);
}

#[test]
fn busser_percent_edit_resplits_pool_alongside_employee_edits() {
    let out = apply_changes(
        &settled(),
        &[
            PayrollChange::period("1", PeriodField::BusserPercent, 0.5),
            PayrollChange::employee("1", "20", "Server", EmployeeField::Hour, 6.0),
        ],
    );

    // cc pool 8000, cash pool 3000, split half and half
    let s = &out.next;
    assert_eq!(s.employees[2].cell("1").unwrap().cc, 2_000);
    assert_eq!(s.employees[2].cell("1").unwrap().hour, 6.0);
    assert_eq!(s.employees[3].cell("1"), Some(&make_cell(2_000, 750, 0.5)));
    assert_eq!(s.employees[4].cell("1"), Some(&make_cell(4_000, 1_500, 1.0)));
    assert_eq!(keys(&out.affected), vec!["1:20:Server", "1:21:Server", "1:30:Busser"]);

    // nothing left for a full-period pass to fix
    let mut draft = out.next.clone();
    let mut whole_period = AffectedHint::default();
    whole_period.periods.insert("1".to_string());
    assert!(recompute_affected(&mut draft, &whole_period).is_empty());
    assert_eq!(draft, out.next);
}

#[test]
fn huge_amounts_saturate_instead_of_overflowing() {
    let out = apply_changes(
        &settled(),
        &[
            PayrollChange::period("1", PeriodField::CcTips, 9e18),
            PayrollChange::period("1", PeriodField::ServiceCharge, 9e18),
        ],
    );

    assert_eq!(out.next.periods["1"].cc_tips, 9_000_000_000_000_000_000);
    assert!(out.next.employees[2].cell("1").unwrap().cc > 0);
    assert!(out.next.employees[4].cell("1").unwrap().cc > 0);
    assert_eq!(out.next.meta.total_tips, Some(9_000_000_000_000_004_000));
}
