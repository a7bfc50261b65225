pub mod affected;
pub mod change;
pub mod diff;
pub mod role;
pub mod shift;
pub mod snapshot;
