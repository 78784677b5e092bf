//! Property tests for the address codec and the planner.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::net::Ipv4Addr;
use vlsm_planner::models::{mask_from_prefix, next_power_of_two, parse_address};
use vlsm_planner::{plan, SubnetRequest};

#[quickcheck]
fn parse_address_round_trips(octets: (u8, u8, u8, u8)) -> bool {
    let addr = Ipv4Addr::new(octets.0, octets.1, octets.2, octets.3);
    parse_address(&addr.to_string()) == Ok(addr)
}

#[quickcheck]
fn mask_has_prefix_leading_ones(prefix: u8) -> bool {
    let prefix = prefix % 33;
    let mask = u32::from(mask_from_prefix(prefix).unwrap());
    mask.leading_ones() == u32::from(prefix) && mask.count_ones() == u32::from(prefix)
}

#[quickcheck]
fn next_power_of_two_is_strictly_greater(n: u32) -> TestResult {
    if n == 0 {
        return TestResult::discard();
    }
    let n = u64::from(n);
    let p = next_power_of_two(n).unwrap();
    TestResult::from_bool(p.is_power_of_two() && p > n && p / 2 <= n)
}

#[quickcheck]
fn allocations_hold_block_invariants(base: u32, hosts: Vec<u16>) -> TestResult {
    let requests: Vec<SubnetRequest> = hosts
        .iter()
        .take(16)
        .enumerate()
        .map(|(i, h)| SubnetRequest::new(format!("S{i}"), i64::from(*h) + 1))
        .collect();

    let base = format!("{}/8", Ipv4Addr::from(base));
    let allocations = match plan(&base, &requests) {
        Ok(allocations) => allocations,
        // near the top of the address space
        Err(_) => return TestResult::discard(),
    };

    let ok = allocations.iter().all(|a| {
        let block = a.block_size();
        block.is_power_of_two()
            && block >= 4
            && a.max_usable_hosts >= a.requested_hosts
            && a.network_address <= a.first_host
            && a.first_host < a.last_host
            && a.last_host <= a.broadcast_address
            && u64::from(u32::from(a.broadcast_address) - u32::from(a.network_address)) + 1 == block
    });
    let ordered = allocations
        .windows(2)
        .all(|w| w[0].requested_hosts >= w[1].requested_hosts);

    TestResult::from_bool(ok && ordered && allocations.len() == requests.len())
}
