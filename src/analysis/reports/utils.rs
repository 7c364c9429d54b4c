//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::AppResult;
use crate::types::Cluster;
use crate::utils::units::format_duration_us;
use serde::Serialize;

/// Width of section underlines in console output
pub const RULE_WIDTH: usize = 40;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use logic_capture_analyser::analysis::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Section heading followed by a dashed rule
pub fn section_header(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(RULE_WIDTH))
}

/// One cluster line, e.g. `  ~104.2us (37 occurrences)`
pub fn format_cluster(cluster: &Cluster) -> String {
    format!(
        "  ~{} ({} occurrences)\n",
        format_duration_us(cluster.center_us),
        cluster.count
    )
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| crate::errors::AppError::InvalidData(format!("JSON export failed: {}", e)))
}
