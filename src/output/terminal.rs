//! Terminal table output.

use crate::models::SubnetAllocation;
use crate::processing::PlanSummary;
use colored::Colorize;
use itertools::Itertools;

/// Column titles of the allocation table.
pub const TABLE_HEADERS: [&str; 9] = [
    "Subnet",
    "REQ",
    "MAX",
    "Network",
    "SUFF",
    "Subnet mask",
    "First host",
    "Last host",
    "Broadcast",
];

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string().replace('"', "\"\""));
    format!("{quoted:>width$}")
}

/// Cell texts of one allocation, in [`TABLE_HEADERS`] order.
pub fn table_cells(a: &SubnetAllocation) -> [String; 9] {
    [
        a.name.clone(),
        a.requested_hosts.to_string(),
        a.max_usable_hosts.to_string(),
        a.network_address.to_string(),
        a.suffix(),
        a.subnet_mask.to_string(),
        a.first_host.to_string(),
        a.last_host.to_string(),
        a.broadcast_address.to_string(),
    ]
}

/// Render allocations as an aligned table followed by a summary line.
pub fn render_table(allocations: &[SubnetAllocation], summary: &PlanSummary) -> String {
    let rows: Vec<[String; 9]> = allocations.iter().map(table_cells).collect();

    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = TABLE_HEADERS
        .iter()
        .zip(widths.iter().copied())
        .map(|(h, w)| format!("{h:<w$}").bold().to_string())
        .join("  ");
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).join("  "));
    out.push('\n');

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter().copied())
            .enumerate()
            .map(|(i, (cell, w))| match i {
                // counts read better right aligned
                1 | 2 => format!("{cell:>w$}"),
                3 => format!("{cell:<w$}").green().to_string(),
                _ => format!("{cell:<w$}"),
            })
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&summary_line(summary));
    out.push('\n');
    if !summary.fits_in_base {
        out.push_str(&format!(
            "{} plan extends beyond base network {}\n",
            "WARNING".on_red(),
            summary.base
        ));
    }
    out
}

fn summary_line(summary: &PlanSummary) -> String {
    format!(
        "{count} subnets, {req} hosts requested, {usable} usable ({wasted} unused), {alloc}/{size} addresses of {base} ({pct:.1}%)",
        count = summary.subnet_count,
        req = summary.requested_hosts,
        usable = summary.usable_hosts,
        wasted = summary.wasted_hosts,
        alloc = summary.allocated_addresses,
        size = summary.base.size(),
        base = summary.base,
        pct = summary.base_usage_percent(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cidr, SubnetRequest};
    use crate::processing::{plan, summarize};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_field_escapes_quotes() {
        assert_eq!(format_field("a\"b", 0), "\"a\"\"b\"");
    }

    #[test]
    fn test_render_table() {
        let reqs = vec![SubnetRequest::new("A", 10), SubnetRequest::new("B", 20)];
        let allocations = plan("10.0.0.0/24", &reqs).unwrap();
        let summary = summarize(Cidr::new("10.0.0.0/24").unwrap(), &allocations);

        let table = render_table(&allocations, &summary);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("Subnet mask"));
        assert!(lines[2].starts_with('B'));
        assert!(lines[2].contains("10.0.0.0"));
        assert!(lines[2].contains("/27"));
        assert!(lines[2].contains("255.255.255.224"));
        assert!(lines[3].starts_with('A'));
        assert!(lines[3].contains("10.0.0.47"));
        assert!(table.contains("2 subnets, 30 hosts requested"));
        assert!(!table.contains("WARNING"));
    }

    #[test]
    fn test_render_table_warns_outside_base() {
        let allocations = plan("10.0.0.0/29", &[SubnetRequest::new("A", 10)]).unwrap();
        let summary = summarize(Cidr::new("10.0.0.0/29").unwrap(), &allocations);
        assert!(render_table(&allocations, &summary).contains("beyond base network"));
    }
}
