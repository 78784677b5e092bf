//! JSON output.

use crate::models::{Cidr, SubnetAllocation};
use crate::processing::PlanSummary;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize, Debug)]
struct PlanReport<'a> {
    network: Cidr,
    subnets: &'a [SubnetAllocation],
    summary: &'a PlanSummary,
}

/// Render the plan as a pretty printed JSON document.
pub fn render_json(
    allocations: &[SubnetAllocation],
    summary: &PlanSummary,
) -> Result<String, Box<dyn Error>> {
    let report = PlanReport {
        network: summary.base,
        subnets: allocations,
        summary,
    };
    let mut json =
        serde_json::to_string_pretty(&report).map_err(|e| format!("Error serializing JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetRequest;
    use crate::processing::{plan, summarize};

    #[test]
    fn test_render_json() {
        let allocations = plan("10.0.0.0/24", &[SubnetRequest::new("LAN", 50)]).unwrap();
        let summary = summarize(Cidr::new("10.0.0.0/24").unwrap(), &allocations);
        let json = render_json(&allocations, &summary).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["network"], "10.0.0.0/24");
        assert_eq!(value["subnets"][0]["name"], "LAN");
        assert_eq!(value["subnets"][0]["prefix"], "/26");
        assert_eq!(value["subnets"][0]["last_host"], "10.0.0.62");
        assert_eq!(value["summary"]["fits_in_base"], true);
        assert_eq!(value["summary"]["allocated_addresses"], 64);
    }
}
