//! Address usage statistics for a finished plan.

use crate::models::{Cidr, SubnetAllocation};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Totals over all allocations of one plan.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub base: Cidr,
    pub subnet_count: usize,
    pub requested_hosts: u64,
    pub usable_hosts: u64,
    /// Addresses covered by all blocks, network and broadcast included.
    pub allocated_addresses: u64,
    /// Usable addresses nobody asked for.
    pub wasted_hosts: u64,
    pub first_address: Option<Ipv4Addr>,
    pub last_address: Option<Ipv4Addr>,
    /// Every block lies inside the base network.
    pub fits_in_base: bool,
}

pub fn summarize(base: Cidr, allocations: &[SubnetAllocation]) -> PlanSummary {
    let requested_hosts: u64 = allocations.iter().map(|a| a.requested_hosts).sum();
    let usable_hosts: u64 = allocations.iter().map(|a| a.max_usable_hosts).sum();
    let allocated_addresses: u64 = allocations.iter().map(|a| a.block_size()).sum();

    PlanSummary {
        base,
        subnet_count: allocations.len(),
        requested_hosts,
        usable_hosts,
        allocated_addresses,
        wasted_hosts: usable_hosts.saturating_sub(requested_hosts),
        first_address: allocations.iter().map(|a| a.network_address).min(),
        last_address: allocations.iter().map(|a| a.broadcast_address).max(),
        fits_in_base: allocations
            .iter()
            .all(|a| base.contains(a.network_address) && base.contains(a.broadcast_address)),
    }
}

impl PlanSummary {
    /// Share of the base network covered by blocks, in percent.
    pub fn base_usage_percent(&self) -> f64 {
        self.allocated_addresses as f64 * 100.0 / self.base.size() as f64
    }
}
