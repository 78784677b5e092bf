//! CSV output formatting for allocations.

use super::terminal::{format_field, table_cells, TABLE_HEADERS};
use crate::models::SubnetAllocation;
use itertools::Itertools;

/// Minimum width of each CSV column, in [`TABLE_HEADERS`] order.
const COLUMN_WIDTHS: [usize; 9] = [12, 6, 6, 17, 6, 17, 17, 17, 17];

/// Render allocations as CSV with a header row.
pub fn render_csv(allocations: &[SubnetAllocation]) -> String {
    log::debug!("render_csv() rows={}", allocations.len());

    let mut out = csv_line(TABLE_HEADERS.iter());
    for allocation in allocations {
        out.push_str(&csv_line(table_cells(allocation).iter()));
    }
    out
}

fn csv_line<T: ToString>(cells: impl Iterator<Item = T>) -> String {
    let mut line = cells
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| format_field(cell, width))
        .join(",");
    line.push('\n');
    line
}
