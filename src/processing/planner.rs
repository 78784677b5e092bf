//! VLSM subnet planning.
//!
//! Requests are sized to the smallest power-of-two block holding the hosts
//! plus network and broadcast, then laid out largest first from the base
//! address.

use crate::models::{
    increment, ip_and, ip_not, ip_or, mask_from_prefix, next_power_of_two, parse_cidr, ErrorKind,
    SubnetAllocation, SubnetRequest, VlsmError, MAX_LENGTH,
};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Addresses reserved in every block: network and broadcast.
pub const RESERVED_ADDRESSES: u64 = 2;

const FIRST_HOST_BITS: Ipv4Addr = Ipv4Addr::new(0, 0, 0, 1);
const LAST_HOST_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 254);

/// How the network address of a block is derived from the running cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Mask the cursor with the block mask. An unaligned base address is
    /// truncated backwards to the block boundary.
    #[default]
    Cursor,
    /// Round the cursor up to the next multiple of the block size first.
    Aligned,
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cursor" => Ok(Placement::Cursor),
            "aligned" => Ok(Placement::Aligned),
            other => Err(format!("Unknown placement '{other}', expected cursor or aligned")),
        }
    }
}

/// Return true if `cidr` is a well formed `address/prefix`.
pub fn validate(cidr: &str) -> bool {
    parse_cidr(cidr).is_ok()
}

/// Plan subnets for `requests` starting at the address of `base_cidr`.
///
/// A `base_cidr` that is not valid `address/prefix` text fails with
/// [`ErrorKind::InvalidAddress`].
///
/// The returned allocations are ordered by requested hosts, largest first.
/// Requests with equal host counts keep their input order.
///
/// # Examples
/// ```
/// use vlsm_planner::{plan, SubnetRequest};
/// let plan = plan("10.0.0.0/24", &[SubnetRequest::new("A", 10)]).unwrap();
/// assert_eq!(plan[0].cidr(), "10.0.0.0/28");
/// ```
pub fn plan(
    base_cidr: &str,
    requests: &[SubnetRequest],
) -> Result<Vec<SubnetAllocation>, VlsmError> {
    plan_with(base_cidr, requests, Placement::Cursor)
}

/// [`plan`] with an explicit [`Placement`] policy.
pub fn plan_with(
    base_cidr: &str,
    requests: &[SubnetRequest],
    placement: Placement,
) -> Result<Vec<SubnetAllocation>, VlsmError> {
    let (base_addr, _base_prefix) = parse_cidr(base_cidr)
        .map_err(|e| VlsmError::new(ErrorKind::InvalidAddress, e.message()))?;
    let hosts = validate_requests(requests)?;

    // sort_by is stable, equal host counts keep input order
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by(|&a, &b| hosts[b].cmp(&hosts[a]));

    let mut allocations = Vec::with_capacity(requests.len());
    let mut cursor = Some(base_addr);

    for index in order {
        let start = cursor.ok_or_else(VlsmError::exhausted)?;
        let allocation = allocate(&requests[index].name, hosts[index], start, placement)?;
        cursor = increment(allocation.broadcast_address).ok();
        allocations.push(allocation);
    }

    // Assignment order already is descending, this keeps presentation order
    // independent of it.
    allocations.sort_by(|a, b| b.requested_hosts.cmp(&a.requested_hosts));
    Ok(allocations)
}

fn validate_requests(requests: &[SubnetRequest]) -> Result<Vec<u64>, VlsmError> {
    requests
        .iter()
        .enumerate()
        .map(|(i, req)| {
            if req.name.trim().is_empty() {
                return Err(VlsmError::invalid_input(format!(
                    "Subnet #{} has an empty name",
                    i + 1
                )));
            }
            if req.hosts <= 0 {
                return Err(VlsmError::invalid_input(format!(
                    "Subnet '{}' must request a positive number of hosts, got {}",
                    req.name, req.hosts
                )));
            }
            Ok(req.hosts as u64)
        })
        .collect()
}

/// Size a block for `hosts` and place it at `cursor`.
fn allocate(
    name: &str,
    hosts: u64,
    cursor: Ipv4Addr,
    placement: Placement,
) -> Result<SubnetAllocation, VlsmError> {
    let too_large = || {
        VlsmError::new(
            ErrorKind::SubnetTooLarge,
            format!("Subnet '{name}' needs {hosts} hosts, more than an IPv4 network can hold"),
        )
    };

    let block_size = hosts
        .checked_add(RESERVED_ADDRESSES)
        .and_then(next_power_of_two)
        .ok_or_else(too_large)?;
    let host_bits = block_size.trailing_zeros() as u8;
    if host_bits > MAX_LENGTH {
        return Err(too_large());
    }
    let prefix = MAX_LENGTH - host_bits;
    let mask = mask_from_prefix(prefix)?;

    let start = match placement {
        Placement::Cursor => cursor,
        Placement::Aligned => align_up(cursor, block_size)?,
    };

    let network_address = ip_and(start, mask);
    let first_host = ip_or(network_address, FIRST_HOST_BITS);
    let broadcast_address = ip_or(network_address, ip_not(mask));
    let last_host = ip_and(broadcast_address, LAST_HOST_MASK);

    Ok(SubnetAllocation {
        name: name.to_string(),
        requested_hosts: hosts,
        max_usable_hosts: block_size - RESERVED_ADDRESSES,
        network_address,
        prefix,
        subnet_mask: mask,
        first_host,
        last_host,
        broadcast_address,
    })
}

/// Round `addr` up to a multiple of `block_size` (a power of two).
fn align_up(addr: Ipv4Addr, block_size: u64) -> Result<Ipv4Addr, VlsmError> {
    let value = u64::from(u32::from(addr));
    let aligned = (value + block_size - 1) & !(block_size - 1);
    u32::try_from(aligned)
        .map(Ipv4Addr::from)
        .map_err(|_| VlsmError::exhausted())
}
