use crate::model::snapshot::PeriodRecord;
use crate::utils::number::{MoneyCents, round4};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    /// Credit-card tips plus service charge.
    pub total_tips: MoneyCents,
    /// `total_tips / sales`, four decimals; 0 when there were no sales.
    pub tips_percent: f64,
}

pub fn calculate_period_totals(period: &PeriodRecord) -> PeriodTotals {
    let total_tips = period.cc_tips.saturating_add(period.service_charge);
    let tips_percent = if period.sales == 0 {
        0.0
    } else {
        round4(total_tips as f64 / period.sales as f64)
    };
    PeriodTotals {
        total_tips,
        tips_percent,
    }
}
