//! Subnet request and allocation records.

use serde::{Deserialize, Serialize, Serializer};
use std::net::Ipv4Addr;

/// One row of planner input: a named subnet and the usable hosts it needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRequest {
    /// Name of the subnet, must not be blank.
    pub name: String,
    /// Requested usable host addresses. Signed so that bad input survives
    /// deserialization and is rejected by the planner instead.
    pub hosts: i64,
}

impl SubnetRequest {
    pub fn new(name: impl Into<String>, hosts: i64) -> Self {
        SubnetRequest {
            name: name.into(),
            hosts,
        }
    }
}

/// A planned subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetAllocation {
    /// Name copied from the request.
    pub name: String,
    /// Hosts asked for.
    pub requested_hosts: u64,
    /// Usable hosts of the block (block size minus network and broadcast).
    pub max_usable_hosts: u64,
    pub network_address: Ipv4Addr,
    /// Prefix length, serialized as `"/N"`.
    #[serde(serialize_with = "serialize_suffix")]
    pub prefix: u8,
    pub subnet_mask: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
}

impl SubnetAllocation {
    /// Prefix in `/N` form.
    pub fn suffix(&self) -> String {
        format!("/{}", self.prefix)
    }

    /// Number of addresses in the block, reserved ones included.
    pub fn block_size(&self) -> u64 {
        self.max_usable_hosts + 2
    }

    /// Network address with its prefix, e.g. `10.0.0.32/28`.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network_address, self.prefix)
    }
}

fn serialize_suffix<S>(prefix: &u8, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&format_args!("/{prefix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubnetAllocation {
        SubnetAllocation {
            name: "B".to_string(),
            requested_hosts: 20,
            max_usable_hosts: 30,
            network_address: Ipv4Addr::new(10, 0, 0, 0),
            prefix: 27,
            subnet_mask: Ipv4Addr::new(255, 255, 255, 224),
            first_host: Ipv4Addr::new(10, 0, 0, 1),
            last_host: Ipv4Addr::new(10, 0, 0, 30),
            broadcast_address: Ipv4Addr::new(10, 0, 0, 31),
        }
    }

    #[test]
    fn test_allocation_helpers() {
        let a = sample();
        assert_eq!(a.suffix(), "/27");
        assert_eq!(a.block_size(), 32);
        assert_eq!(a.cidr(), "10.0.0.0/27");
    }

    #[test]
    fn test_allocation_serialize() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["prefix"], "/27");
        assert_eq!(json["network_address"], "10.0.0.0");
        assert_eq!(json["broadcast_address"], "10.0.0.31");
        assert_eq!(json["max_usable_hosts"], 30);
    }

    #[test]
    fn test_request_deserialize() {
        let req: SubnetRequest = serde_json::from_str(r#"{"name":"LAN","hosts":-3}"#).unwrap();
        assert_eq!(req, SubnetRequest::new("LAN", -3));
    }
}
