//! Asset display formatting
//!
//! Formats assets for terminal output in table and detail views.

use crate::services::asset::AssetRow;

/// Format a list of assets as a table
pub fn format_asset_list(rows: &[AssetRow]) -> String {
    if rows.is_empty() {
        return "No assets found.".to_string();
    }

    // Calculate column widths
    let name_width = rows
        .iter()
        .map(|r| r.asset.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<16}  {:<16}  {:<16}  {:<10}  {}\n",
        "Name",
        "Category",
        "Serial Number",
        "Department",
        "Purchased",
        "Status",
        name_width = name_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:-<16}  {:-<16}  {:-<16}  {:-<10}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    // Asset rows
    for row in rows {
        let department = row.department_name.as_deref().unwrap_or("N/A");
        output.push_str(&format!(
            "{:<name_width$}  {}  {}  {}  {}  {}\n",
            row.asset.name,
            truncate(&row.asset.category, 16),
            truncate(&row.asset.serial_number, 16),
            truncate(department, 16),
            row.asset.purchase_date.format("%Y-%m-%d"),
            row.asset.status,
            name_width = name_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} assets\n", rows.len()));

    output
}

/// Format a single asset's details
pub fn format_asset_details(row: &AssetRow) -> String {
    let asset = &row.asset;

    let mut output = String::new();

    output.push_str(&format!("Asset: {}\n", asset.name));
    output.push_str(&format!("  ID:            {}\n", asset.id));
    output.push_str(&format!("  Category:      {}\n", asset.category));
    output.push_str(&format!("  Serial Number: {}\n", asset.serial_number));
    output.push_str(&format!(
        "  Department:    {}\n",
        row.department_name.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!(
        "  Purchased:     {}\n",
        asset.purchase_date.format("%Y-%m-%d")
    ));
    output.push_str(&format!("  Status:        {}\n", asset.status));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        asset.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        asset.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

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
    use crate::models::{Asset, AssetStatus};
    use chrono::NaiveDate;

    fn create_test_row(name: &str, department: Option<&str>) -> AssetRow {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        AssetRow {
            asset: Asset::new(name, "Lab Equipment", "SN-001", date),
            department_name: department.map(String::from),
        }
    }

    #[test]
    fn test_format_asset_list() {
        let rows = vec![
            create_test_row("Microscope", Some("Biology")),
            create_test_row("Projector", None),
        ];

        let output = format_asset_list(&rows);
        assert!(output.contains("Microscope"));
        assert!(output.contains("Biology"));
        assert!(output.contains("N/A"));
        assert!(output.contains("Total: 2 assets"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_asset_list(&[]);
        assert!(output.contains("No assets found"));
    }

    #[test]
    fn test_format_asset_details() {
        let mut row = create_test_row("Centrifuge", Some("Chemistry"));
        row.asset.status = AssetStatus::InRepair;

        let output = format_asset_details(&row);
        assert!(output.contains("Asset: Centrifuge"));
        assert!(output.contains("Chemistry"));
        assert!(output.contains("2024-03-15"));
        assert!(output.contains("In Repair"));
    }
}
