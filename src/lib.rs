//! VLSM subnet planner.
//!
//! Splits an IPv4 network into subnets sized for requested host counts,
//! largest first.
//!
//! ```
//! use vlsm_planner::{plan, validate, SubnetRequest};
//!
//! assert!(validate("10.0.0.0/24"));
//! let subnets = plan(
//!     "10.0.0.0/24",
//!     &[SubnetRequest::new("A", 10), SubnetRequest::new("B", 20)],
//! )
//! .unwrap();
//! assert_eq!(subnets[0].name, "B");
//! assert_eq!(subnets[1].cidr(), "10.0.0.32/28");
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{Cidr, ErrorKind, SubnetAllocation, SubnetRequest, VlsmError};
pub use processing::{plan, plan_with, summarize, validate, Placement, PlanSummary};
