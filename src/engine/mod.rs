//! Incremental recomputation: edits in, new snapshot plus diff out.

pub mod apply;
pub mod diff;
pub mod direct_edits;
pub mod normalize;
pub mod recompute;
pub mod resolve;
