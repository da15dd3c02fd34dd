//! Terminal output utilities.
//!
//! Renders networks as quoted, right-aligned columns.

use crate::models::Network;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

const CNT_WIDTH: usize = 6;
const NET_WIDTH: usize = 24;
const MASK_WIDTH: usize = 18;

/// Column header matching [`render_row`].
pub fn render_header() -> String {
    [
        format_field("cnt", CNT_WIDTH),
        format_field("network", NET_WIDTH),
        format_field("netmask", MASK_WIDTH),
        format_field("canonical", 12),
    ]
    .join(",")
}

/// One row: index, network, netmask and whether the host bits are clear.
pub fn render_row(i: usize, nt: &Network) -> String {
    let netmask = nt
        .mask()
        .netmask()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "None".to_string());
    [
        format_field(i, CNT_WIDTH),
        format_field(nt, NET_WIDTH),
        format_field(netmask, MASK_WIDTH),
        format_field(nt.is_canonical(), 12),
    ]
    .join(",")
}

/// All rows of a network list, one per line, numbered from 1.
pub fn render_table(nets: &[Network]) -> String {
    nets.iter()
        .enumerate()
        .map(|(i, nt)| render_row(i + 1, nt))
        .join("\n")
}
