use chrono::NaiveDate;

use crate::model::shift::WorkRecord;
use crate::model::snapshot::PayType;
use crate::utils::number::MoneyCents;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadOptions {
    /// Off for jurisdictions without a spread-of-hours rule.
    pub enabled: bool,
    pub threshold_hours: f64,
    /// Only pay spread when the time clock already reported extra hours.
    pub only_if_extra_hours_positive: bool,
    pub extra_hours_from_source: f64,
}

impl Default for SpreadOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_hours: 10.0,
            only_if_extra_hours_positive: true,
            extra_hours_from_source: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadDay {
    pub date: NaiveDate,
    pub hours: u32,
    pub pay: MoneyCents,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpreadResult {
    pub spread_hours: u32,
    pub spread_pay: MoneyCents,
    pub per_date: Vec<SpreadDay>,
}

/// One extra hour at the minimum rate for every long hourly shift.
pub fn compute_spread_of_hours(
    records: &[WorkRecord],
    min_pay_rate: MoneyCents,
    options: &SpreadOptions,
) -> SpreadResult {
    if !options.enabled {
        return SpreadResult::default();
    }
    if options.only_if_extra_hours_positive && options.extra_hours_from_source <= 0.0 {
        return SpreadResult::default();
    }

    let per_date: Vec<SpreadDay> = records
        .iter()
        .filter(|r| r.pay_type == PayType::Hourly && r.hour >= options.threshold_hours)
        .map(|r| SpreadDay {
            date: r.date,
            hours: 1,
            pay: min_pay_rate,
        })
        .collect();

    let spread_hours = per_date.len() as u32;
    SpreadResult {
        spread_hours,
        spread_pay: MoneyCents::from(spread_hours) * min_pay_rate,
        per_date,
    }
}
