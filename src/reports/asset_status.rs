//! Asset Status Report
//!
//! Inventory summary grouped by tracking status, with a flagged-assets
//! section for anything that is missing, transferred, or in repair.

use crate::error::{CampusError, CampusResult};
use crate::models::AssetStatus;
use crate::services::AssetService;
use crate::storage::Storage;
use chrono::NaiveDate;
use std::io::Write;

use super::escape_csv;

/// One printable line of the report
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub name: String,
    pub category: String,
    pub serial_number: String,
    /// Department name; None renders as "N/A"
    pub department: Option<String>,
    pub status: AssetStatus,
}

/// Inventory counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub missing: usize,
    pub transferred: usize,
    pub in_repair: usize,
}

impl StatusCounts {
    /// Assets whose status needs attention
    pub fn flagged(&self) -> usize {
        self.missing + self.transferred + self.in_repair
    }
}

/// Asset Status Report
#[derive(Debug, Clone)]
pub struct AssetStatusReport {
    /// Date the report was generated
    pub generated_on: NaiveDate,
    /// Counts by status
    pub counts: StatusCounts,
    /// All assets, ordered by status then name
    pub rows: Vec<ReportRow>,
}

impl AssetStatusReport {
    /// Generate the report from the current inventory
    pub fn generate(storage: &Storage) -> CampusResult<Self> {
        let service = AssetService::new(storage);

        let mut rows: Vec<ReportRow> = service
            .list_rows("", None)?
            .into_iter()
            .map(|row| ReportRow {
                name: row.asset.name,
                category: row.asset.category,
                serial_number: row.asset.serial_number,
                department: row.department_name,
                status: row.asset.status,
            })
            .collect();

        // Rows arrive name-sorted; a stable sort groups them by status
        rows.sort_by_key(|row| row.status.as_str());

        let mut counts = StatusCounts {
            total: rows.len(),
            ..StatusCounts::default()
        };
        for row in &rows {
            match row.status {
                AssetStatus::Active => counts.active += 1,
                AssetStatus::Missing => counts.missing += 1,
                AssetStatus::Transferred => counts.transferred += 1,
                AssetStatus::InRepair => counts.in_repair += 1,
            }
        }

        Ok(Self {
            generated_on: chrono::Utc::now().date_naive(),
            counts,
            rows,
        })
    }

    /// Rows whose status needs attention
    pub fn flagged_rows(&self) -> Vec<&ReportRow> {
        self.rows.iter().filter(|r| r.status.is_flagged()).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Asset Status Report: {}\n", self.generated_on));
        output.push_str(&"=".repeat(92));
        output.push('\n');
        output.push_str(&format!("Total Assets: {}\n", self.counts.total));
        output.push_str(&format!("Active: {}\n", self.counts.active));
        output.push_str(&format!("Missing: {}\n", self.counts.missing));
        output.push_str(&format!("Transferred: {}\n", self.counts.transferred));
        output.push_str(&format!("In Repair: {}\n", self.counts.in_repair));
        output.push_str(&format!("Flagged: {}\n", self.counts.flagged()));

        let flagged = self.flagged_rows();
        if !flagged.is_empty() {
            output.push_str("\nFLAGGED ASSETS\n");
            output.push_str(&"-".repeat(92));
            output.push('\n');
            for row in flagged {
                output.push_str(&Self::format_row(row));
            }
        }

        output.push_str("\nALL ASSETS\n");
        output.push_str(&format!(
            "{:<30} {:<18} {:<16} {:<18} {:<12}\n",
            "Name", "Category", "Serial Number", "Department", "Status"
        ));
        output.push_str(&"-".repeat(92));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No assets found\n");
        } else {
            for row in &self.rows {
                output.push_str(&Self::format_row(row));
            }
        }

        output
    }

    fn format_row(row: &ReportRow) -> String {
        format!(
            "{:<30} {:<18} {:<16} {:<18} {:<12}\n",
            row.name,
            row.category,
            row.serial_number,
            row.department.as_deref().unwrap_or("N/A"),
            row.status
        )
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CampusResult<()> {
        writeln!(writer, "Name,Category,Serial Number,Department,Status")
            .map_err(|e| CampusError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{}",
                escape_csv(&row.name),
                escape_csv(&row.category),
                escape_csv(&row.serial_number),
                escape_csv(row.department.as_deref().unwrap_or("N/A")),
                row.status.as_str()
            )
            .map_err(|e| CampusError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
