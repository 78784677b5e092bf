//! Subnet planning logic.
//!
//! - [`planner`] - VLSM sizing and layout
//! - [`summary`] - totals and waste for a finished plan

mod planner;
mod summary;

// Re-export public functions
pub use planner::{plan, plan_with, validate, Placement, RESERVED_ADDRESSES};
pub use summary::{summarize, PlanSummary};
