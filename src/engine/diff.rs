use strum::IntoEnumIterator;

use crate::model::affected::{Affected, EmployeeKey};
use crate::model::change::{EmployeeField, PeriodField};
use crate::model::diff::{
    EmployeeChangeDiff, FieldValue, MetaDiff, PayrollDiff, PeriodChangeDiff, TotalChange,
};
use crate::model::snapshot::{EmployeeCell, PayrollSnapshot, PeriodRecord};

fn period_value(p: &PeriodRecord, field: PeriodField) -> FieldValue {
    match field {
        PeriodField::Sales => FieldValue::Cents(p.sales),
        PeriodField::CcTips => FieldValue::Cents(p.cc_tips),
        PeriodField::CashTips => FieldValue::Cents(p.cash_tips),
        PeriodField::ServiceCharge => FieldValue::Cents(p.service_charge),
        PeriodField::BusserPercent => FieldValue::Number(p.busser_percent),
    }
}

fn cell_value(c: &EmployeeCell, field: EmployeeField) -> FieldValue {
    match field {
        EmployeeField::Hour => FieldValue::Number(c.hour),
        EmployeeField::Cc => FieldValue::Cents(c.cc),
        EmployeeField::Cash => FieldValue::Cents(c.cash),
        EmployeeField::Percent => FieldValue::Number(c.percent),
    }
}

fn lookup_cell<'a>(s: &'a PayrollSnapshot, key: &EmployeeKey) -> Option<&'a EmployeeCell> {
    s.employee(&key.uid, &key.role_name)?.cell(&key.period_id)
}

fn total_change(before: Option<i64>, after: Option<i64>) -> Option<TotalChange> {
    (before != after).then_some(TotalChange { before, after })
}

/// Field-level differences between `before` and `after`, restricted to the
/// periods and employee cells named in `affected`.
pub fn build_diff(before: &PayrollSnapshot, after: &PayrollSnapshot, affected: &Affected) -> PayrollDiff {
    if affected.is_empty() || std::ptr::eq(before, after) {
        return PayrollDiff::default();
    }

    let mut diff = PayrollDiff::default();

    for period_id in &affected.periods {
        let b = before.periods.get(period_id);
        let a = after.periods.get(period_id);
        for field in PeriodField::iter() {
            let bv = b.map(|p| period_value(p, field));
            let av = a.map(|p| period_value(p, field));
            if bv != av {
                diff.periods.push(PeriodChangeDiff {
                    period_id: period_id.clone(),
                    field,
                    before: bv,
                    after: av,
                });
            }
        }
    }

    for key in &affected.employees {
        let b = lookup_cell(before, key);
        let a = lookup_cell(after, key);
        for field in EmployeeField::iter() {
            let bv = b.map(|c| cell_value(c, field));
            let av = a.map(|c| cell_value(c, field));
            if bv != av {
                diff.employees.push(EmployeeChangeDiff {
                    period_id: key.period_id.clone(),
                    uid: key.uid.clone(),
                    role_name: key.role_name.clone(),
                    field,
                    before: bv,
                    after: av,
                });
            }
        }
    }

    diff.meta = MetaDiff {
        total_cash_tips: total_change(before.meta.total_cash_tips, after.meta.total_cash_tips),
        total_tips: total_change(before.meta.total_tips, after.meta.total_tips),
    };

    diff
}
