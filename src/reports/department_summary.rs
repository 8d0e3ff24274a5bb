//! Department Summary Report
//!
//! Asset counts per department, the dashboard's "assets by department"
//! view in printable form.

use crate::error::{CampusError, CampusResult};
use crate::services::DepartmentService;
use crate::storage::Storage;
use chrono::NaiveDate;
use std::io::Write;

use super::escape_csv;

/// One department line of the report
#[derive(Debug, Clone)]
pub struct DepartmentEntry {
    pub name: String,
    pub asset_count: usize,
}

/// Department Summary Report
#[derive(Debug, Clone)]
pub struct DepartmentSummaryReport {
    /// Date the report was generated
    pub generated_on: NaiveDate,
    /// Departments sorted by name
    pub entries: Vec<DepartmentEntry>,
    /// Assets not assigned to any department
    pub unassigned: usize,
    /// Total number of assets in the inventory
    pub total_assets: usize,
}

impl DepartmentSummaryReport {
    /// Generate the report from the current inventory
    pub fn generate(storage: &Storage) -> CampusResult<Self> {
        let service = DepartmentService::new(storage);

        let entries: Vec<DepartmentEntry> = service
            .list_with_counts()?
            .into_iter()
            .map(|summary| DepartmentEntry {
                name: summary.department.name,
                asset_count: summary.asset_count,
            })
            .collect();

        let assets = storage.assets.get_all()?;
        let unassigned = assets.iter().filter(|a| a.department_id.is_none()).count();

        Ok(Self {
            generated_on: chrono::Utc::now().date_naive(),
            entries,
            unassigned,
            total_assets: assets.len(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Assets by Department: {}\n", self.generated_on));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No departments found. Create a department to get started.\n");
        } else {
            for entry in &self.entries {
                output.push_str(&format!("{:<38} {:>10}\n", entry.name, entry.asset_count));
            }
        }

        if self.unassigned > 0 {
            output.push_str(&format!("{:<38} {:>10}\n", "(unassigned)", self.unassigned));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<38} {:>10}\n", "Total", self.total_assets));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CampusResult<()> {
        writeln!(writer, "Department,Asset Count")
            .map_err(|e| CampusError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(writer, "{},{}", escape_csv(&entry.name), entry.asset_count)
                .map_err(|e| CampusError::Export(e.to_string()))?;
        }

        if self.unassigned > 0 {
            writeln!(writer, "(unassigned),{}", self.unassigned)
                .map_err(|e| CampusError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::models::{Asset, Department};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_counts_per_department() {
        let (_temp_dir, storage) = create_test_storage();

        let physics = Department::new("Physics");
        let arts = Department::new("Arts");
        storage.departments.upsert(physics.clone()).unwrap();
        storage.departments.upsert(arts.clone()).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for (i, dept) in [Some(physics.id), Some(physics.id), None].iter().enumerate() {
            let mut asset = Asset::new(format!("Asset {}", i), "Misc", format!("SN-{}", i), date);
            asset.assign_department(*dept);
            storage.assets.upsert(asset).unwrap();
        }

        let report = DepartmentSummaryReport::generate(&storage).unwrap();

        assert_eq!(report.total_assets, 3);
        assert_eq!(report.unassigned, 1);
        assert_eq!(report.entries.len(), 2);

        // Sorted by name: Arts first
        assert_eq!(report.entries[0].name, "Arts");
        assert_eq!(report.entries[0].asset_count, 0);
        assert_eq!(report.entries[1].name, "Physics");
        assert_eq!(report.entries[1].asset_count, 2);
    }

    #[test]
    fn test_terminal_format_empty() {
        let (_temp_dir, storage) = create_test_storage();

        let report = DepartmentSummaryReport::generate(&storage).unwrap();
        let text = report.format_terminal();

        assert!(text.contains("No departments found"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn test_csv_export() {
        let (_temp_dir, storage) = create_test_storage();

        let dept = Department::new("Estates");
        storage.departments.upsert(dept).unwrap();

        let report = DepartmentSummaryReport::generate(&storage).unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Department,Asset Count\n"));
        assert!(csv.contains("Estates,0"));
    }
}
