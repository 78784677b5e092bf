//! Planner input collection.
//!
//! - [`args`] - subnet requests from command line arguments
//! - [`file`] - JSON plan files

mod args;
mod file;

// Re-export public types and functions
pub use args::{default_subnet_name, parse_request_arg, parse_request_args};
pub use file::{parse_plan_json, read_plan_file, PlanFile};
