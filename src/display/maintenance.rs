//! Maintenance display formatting
//!
//! Formats maintenance records for terminal output.

use crate::services::maintenance::MaintenanceRow;

/// Format a list of maintenance records as a table
pub fn format_maintenance_list(rows: &[MaintenanceRow]) -> String {
    if rows.is_empty() {
        return "No maintenance records found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20}  {:<10}  {:<14}  {:<16}  {}\n",
        "Asset", "Date", "Type", "Technician", "Remarks"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for row in rows {
        output.push_str(&format_maintenance_row(row));
        output.push('\n');
    }

    output
}

/// Format a single maintenance record (table row)
pub fn format_maintenance_row(row: &MaintenanceRow) -> String {
    let record = &row.record;
    let asset_name = row.asset_name.as_deref().unwrap_or("Unknown");
    let remarks = if record.remarks.is_empty() {
        "—"
    } else {
        &record.remarks
    };

    format!(
        "{}  {}  {}  {}  {}",
        truncate(asset_name, 20),
        record.maintenance_date.format("%Y-%m-%d"),
        truncate(&record.kind, 14),
        truncate(&record.technician, 16),
        remarks
    )
}

/// Format maintenance history for a single asset
pub fn format_maintenance_history(asset_name: &str, rows: &[MaintenanceRow]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Asset: {}\n", asset_name));
    output.push_str(&format!("Maintenance records: {}\n\n", rows.len()));

    if rows.is_empty() {
        return output;
    }

    output.push_str(&format!(
        "{:<10}  {:<14}  {:<16}  {}\n",
        "Date", "Type", "Technician", "Remarks"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for row in rows {
        let record = &row.record;
        let remarks = if record.remarks.is_empty() {
            "—"
        } else {
            &record.remarks
        };
        output.push_str(&format!(
            "{}  {}  {}  {}\n",
            record.maintenance_date.format("%Y-%m-%d"),
            truncate(&record.kind, 14),
            truncate(&record.technician, 16),
            remarks
        ));
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetId, MaintenanceRecord};
    use chrono::NaiveDate;

    fn create_test_row(asset_name: Option<&str>, remarks: &str) -> MaintenanceRow {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut record = MaintenanceRecord::new(AssetId::new(), date, "Repair", "J. Smith");
        record.remarks = remarks.to_string();
        MaintenanceRow {
            record,
            asset_name: asset_name.map(String::from),
        }
    }

    #[test]
    fn test_format_maintenance_list() {
        let rows = vec![
            create_test_row(Some("Microscope"), "Replaced lens"),
            create_test_row(None, ""),
        ];

        let output = format_maintenance_list(&rows);
        assert!(output.contains("Microscope"));
        assert!(output.contains("Replaced lens"));
        assert!(output.contains("Unknown"));
        assert!(output.contains("—"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_maintenance_list(&[]);
        assert!(output.contains("No maintenance records found"));
    }

    #[test]
    fn test_format_maintenance_history() {
        let rows = vec![create_test_row(Some("Centrifuge"), "Annual inspection")];
        let output = format_maintenance_history("Centrifuge", &rows);

        assert!(output.contains("Asset: Centrifuge"));
        assert!(output.contains("Maintenance records: 1"));
        assert!(output.contains("Annual inspection"));
    }
}
