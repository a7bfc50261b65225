use std::collections::BTreeMap;

use crate::calc::minimum_pay::OVERTIME_MULTIPLIER;
use crate::model::shift::{Position, ShiftRecord, WorkRecord};
use crate::model::snapshot::PayType;
use crate::utils::number::{max0, round2};

pub const DEFAULT_WEEKLY_CAP: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoleWeeklyHours {
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

fn worked(hour: f64) -> f64 {
    if hour.is_nan() { 0.0 } else { max0(hour) }
}

/// Split a week of shifts into regular/overtime hours per role id.
///
/// The cap is shared across roles and consumed in clock-in order, so a
/// late shift in one role can be all overtime because earlier shifts in
/// other roles already used up the regular hours.
pub fn compute_weekly_overtime_by_role(
    records: &[ShiftRecord],
    weekly_cap: f64,
) -> BTreeMap<String, RoleWeeklyHours> {
    let mut sorted: Vec<&ShiftRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.clock_in.cmp(&b.clock_in));

    let mut result: BTreeMap<String, RoleWeeklyHours> = BTreeMap::new();
    let mut accumulated = 0.0;

    for r in sorted {
        let hours = worked(r.hour);
        let remaining_regular = max0(weekly_cap - accumulated);
        let to_regular = remaining_regular.min(hours);
        let to_overtime = hours - to_regular;

        let bucket = result.entry(r.role_id.clone()).or_default();
        bucket.regular_hours += to_regular;
        bucket.overtime_hours += to_overtime;

        accumulated += hours;
    }

    for bucket in result.values_mut() {
        bucket.regular_hours = round2(bucket.regular_hours);
        bucket.overtime_hours = round2(bucket.overtime_hours);
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyHoursPay {
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub foh_hours: f64,
    pub boh_hours: f64,
    pub foh_overtime_hours: f64,
    pub boh_overtime_hours: f64,
    /// Wages only; tips and bonus are not included.
    pub hour_pay: f64,
}

/// Weekly hours and hourly wages for one employee, split front/back of house.
///
/// Salaried rows are exempt: their hours are always regular (while still
/// consuming the cap) and the weekly salary is paid once, from the first
/// salaried row in date order. Spread-of-hours rows are skipped.
pub fn compute_weekly_overtime(records: &[WorkRecord], weekly_cap: f64) -> WeeklyHoursPay {
    let mut sorted: Vec<&WorkRecord> = records
        .iter()
        .filter(|r| r.position != Position::SpreadOfHours)
        .collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut out = WeeklyHoursPay::default();
    let mut accumulated = 0.0;
    let mut salary_paid = false;

    for r in sorted {
        let hours = worked(r.hour);

        let (to_regular, to_overtime) = match r.pay_type {
            PayType::Salaried => {
                if !salary_paid {
                    out.hour_pay += r.pay_rate;
                    salary_paid = true;
                }
                (hours, 0.0)
            }
            PayType::Hourly => {
                let to_regular = max0(weekly_cap - accumulated).min(hours);
                let to_overtime = hours - to_regular;
                out.hour_pay +=
                    to_regular * r.pay_rate + to_overtime * r.pay_rate * OVERTIME_MULTIPLIER;
                (to_regular, to_overtime)
            }
        };

        out.regular_hours += to_regular;
        out.overtime_hours += to_overtime;
        match r.position {
            Position::FrontOfHouse => {
                out.foh_hours += hours;
                out.foh_overtime_hours += to_overtime;
            }
            Position::BackOfHouse => {
                out.boh_hours += hours;
                out.boh_overtime_hours += to_overtime;
            }
            Position::SpreadOfHours => {}
        }

        accumulated += hours;
    }

    WeeklyHoursPay {
        regular_hours: round2(out.regular_hours),
        overtime_hours: round2(out.overtime_hours),
        foh_hours: round2(out.foh_hours),
        boh_hours: round2(out.boh_hours),
        foh_overtime_hours: round2(out.foh_overtime_hours),
        boh_overtime_hours: round2(out.boh_overtime_hours),
        hour_pay: round2(out.hour_pay),
    }
}
