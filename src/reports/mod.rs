//! Reports module for the asset registry
//!
//! Printable inventory summaries: status breakdowns with flagged assets,
//! and per-department asset counts.

pub mod asset_status;
pub mod department_summary;

pub use asset_status::{AssetStatusReport, ReportRow, StatusCounts};
pub use department_summary::{DepartmentEntry, DepartmentSummaryReport};

/// Quote a CSV field when it contains separators or quotes
pub(crate) fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::escape_csv;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("has, comma"), "\"has, comma\"");
        assert_eq!(escape_csv("has \"quote\""), "\"has \"\"quote\"\"\"");
    }
}
