//! Domain models for VLSM planning.
//!
//! - [`ipv4`] functions - the address codec and [`Cidr`]
//! - [`SubnetRequest`] and [`SubnetAllocation`] - planner input and output
//! - [`VlsmError`] - typed error with an [`ErrorKind`]

mod error;
mod ipv4;
mod subnet;

// Re-export public types
pub use error::{ErrorKind, VlsmError};
pub use ipv4::{
    increment, ip_and, ip_not, ip_or, mask_from_prefix, next_power_of_two, octets_to_u32,
    parse_address, parse_cidr, u32_to_octets, Cidr, MAX_LENGTH,
};
pub use subnet::{SubnetAllocation, SubnetRequest};
