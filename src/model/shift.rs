use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::snapshot::PayType;

/// A single clocked shift, as reported by the time clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub clock_in: NaiveDateTime,
    pub role_id: String,
    pub hour: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    FrontOfHouse,
    BackOfHouse,
    /// Virtual row used to carry spread-of-hours pay; never worked time.
    SpreadOfHours,
}

/// A day's worked hours with the pay terms they were earned under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub date: NaiveDate,
    pub hour: f64,
    /// Hourly rate, or the flat weekly amount for salaried rows.
    pub pay_rate: f64,
    pub pay_type: PayType,
    pub position: Position,
}
