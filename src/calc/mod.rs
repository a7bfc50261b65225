//! Pure payroll formulas. No snapshot access, no logging.

pub mod employee;
pub mod minimum_pay;
pub mod overtime;
pub mod period;
pub mod spread;
