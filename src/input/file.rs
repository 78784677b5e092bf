//! JSON plan files.

use crate::models::SubnetRequest;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Base network and subnet rows read from a plan file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    /// Base network in `address/prefix` form. Kept as text, the planner
    /// validates it.
    #[serde(default)]
    pub network: Option<String>,
    pub subnets: Vec<SubnetRequest>,
}

/// Parse a plan file from a JSON string.
///
/// Errors name the JSON path that failed, e.g. `subnets[1].hosts`.
pub fn parse_plan_json(json: &str) -> Result<PlanFile, Box<dyn Error>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let plan: PlanFile = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| format!("Error parsing plan JSON at '{}': {}", e.path(), e.inner()))?;
    Ok(plan)
}

/// Read a plan file from disk.
pub fn read_plan_file(file: &str) -> Result<PlanFile, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Plan file does not exist: {file}").into());
    }
    log::info!("Reading plan file: {file}");
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading plan file {file}: {e}"))?;
    let plan = parse_plan_json(&json)?;
    log::debug!(
        "Plan file {file}: network={:?} subnets={}",
        plan.network,
        plan.subnets.len()
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_json() {
        let plan = parse_plan_json(
            r#"{"network":"10.0.0.0/24","subnets":[{"name":"A","hosts":10},{"name":"B","hosts":20}]}"#,
        )
        .unwrap();
        assert_eq!(plan.network.as_deref(), Some("10.0.0.0/24"));
        assert_eq!(plan.subnets.len(), 2);
        assert_eq!(plan.subnets[1], SubnetRequest::new("B", 20));
    }

    #[test]
    fn test_parse_plan_json_without_network() {
        let plan = parse_plan_json(r#"{"subnets":[]}"#).unwrap();
        assert_eq!(plan.network, None);
    }

    #[test]
    fn test_parse_plan_json_error_path() {
        let err = parse_plan_json(
            r#"{"network":"10.0.0.0/24","subnets":[{"name":"A","hosts":10},{"name":"B","hosts":"x"}]}"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("subnets[1].hosts"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_read_plan_file_fixture() {
        let plan = read_plan_file("tests/data/plan_example.json").expect("Error reading plan file");
        assert_eq!(plan.network.as_deref(), Some("10.0.0.0/24"));
        assert_eq!(plan.subnets.len(), 3);
    }

    #[test]
    fn test_read_plan_file_missing() {
        let err = read_plan_file("tests/data/does_not_exist.json").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
