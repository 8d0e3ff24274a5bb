//! CSV Export functionality
//!
//! Exports asset, department, and maintenance data to CSV format.

use crate::error::CampusResult;
use crate::storage::Storage;
use std::io::Write;

/// Export all assets to CSV
pub fn export_assets_csv<W: Write>(storage: &Storage, writer: &mut W) -> CampusResult<()> {
    // Build department lookup
    let departments = storage.departments.get_all()?;
    let department_names: std::collections::HashMap<_, _> = departments
        .iter()
        .map(|d| (d.id, d.name.clone()))
        .collect();

    // Write header
    writeln!(
        writer,
        "ID,Name,Category,Serial Number,Department,Purchase Date,Status"
    )
    .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;

    let assets = storage.assets.get_all()?;

    for asset in assets {
        let department_name = asset
            .department_id
            .and_then(|id| department_names.get(&id).cloned())
            .unwrap_or_else(|| "N/A".to_string());

        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            asset.id,
            escape_csv(&asset.name),
            escape_csv(&asset.category),
            escape_csv(&asset.serial_number),
            escape_csv(&department_name),
            asset.purchase_date,
            asset.status.as_str()
        )
        .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all departments to CSV
pub fn export_departments_csv<W: Write>(storage: &Storage, writer: &mut W) -> CampusResult<()> {
    writeln!(writer, "ID,Name,Description,Asset Count")
        .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;

    let departments = storage.departments.get_all()?;

    for dept in departments {
        let asset_count = storage.assets.get_by_department(dept.id)?.len();

        writeln!(
            writer,
            "{},{},{},{}",
            dept.id,
            escape_csv(&dept.name),
            escape_csv(&dept.description),
            asset_count
        )
        .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all maintenance records to CSV
pub fn export_maintenance_csv<W: Write>(storage: &Storage, writer: &mut W) -> CampusResult<()> {
    // Build asset lookup
    let assets = storage.assets.get_all()?;
    let asset_names: std::collections::HashMap<_, _> =
        assets.iter().map(|a| (a.id, a.name.clone())).collect();

    writeln!(writer, "ID,Date,Asset,Type,Technician,Remarks")
        .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;

    let records = storage.maintenance.get_all()?;

    for record in records {
        let asset_name = asset_names
            .get(&record.asset_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        writeln!(
            writer,
            "{},{},{},{},{},{}",
            record.id,
            record.maintenance_date,
            escape_csv(&asset_name),
            escape_csv(&record.kind),
            escape_csv(&record.technician),
            escape_csv(&record.remarks)
        )
        .map_err(|e| crate::error::CampusError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CampusPaths;
    use crate::models::{Asset, AssetStatus, Department, MaintenanceRecord};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CampusPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_assets_csv() {
        let (_temp_dir, storage) = create_test_storage();

        let dept = Department::new("Music");
        storage.departments.upsert(dept.clone()).unwrap();
        storage.departments.save().unwrap();

        let mut asset = Asset::new(
            "Grand Piano",
            "Instruments",
            "GP-01",
            NaiveDate::from_ymd_opt(2018, 4, 2).unwrap(),
        );
        asset.department_id = Some(dept.id);
        asset.status = AssetStatus::InRepair;
        storage.assets.upsert(asset).unwrap();
        storage.assets.save().unwrap();

        let mut output = Vec::new();
        export_assets_csv(&storage, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Name,Category,Serial Number,Department,Purchase Date,Status"
        );
        assert!(lines[1].contains("Grand Piano"));
        assert!(lines[1].contains("Music"));
        assert!(lines[1].ends_with("in_repair"));
    }

    #[test]
    fn test_export_assets_csv_unassigned() {
        let (_temp_dir, storage) = create_test_storage();

        let asset = Asset::new(
            "Cart",
            "Facilities",
            "CT-9",
            NaiveDate::from_ymd_opt(2023, 7, 7).unwrap(),
        );
        storage.assets.upsert(asset).unwrap();
        storage.assets.save().unwrap();

        let mut output = Vec::new();
        export_assets_csv(&storage, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains(",N/A,"));
    }

    #[test]
    fn test_export_maintenance_csv() {
        let (_temp_dir, storage) = create_test_storage();

        let asset = Asset::new(
            "3D Printer",
            "Workshop",
            "3DP-5",
            NaiveDate::from_ymd_opt(2022, 2, 14).unwrap(),
        );
        storage.assets.upsert(asset.clone()).unwrap();
        storage.assets.save().unwrap();

        let record = MaintenanceRecord::new(
            asset.id,
            NaiveDate::from_ymd_opt(2024, 3, 30).unwrap(),
            "Nozzle replacement",
            "K. Saito",
        );
        storage.maintenance.upsert(record).unwrap();
        storage.maintenance.save().unwrap();

        let mut output = Vec::new();
        export_maintenance_csv(&storage, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Date,Asset,Type,Technician,Remarks");
        assert!(lines[1].contains("3D Printer"));
        assert!(lines[1].contains("Nozzle replacement"));
    }

    #[test]
    fn test_export_departments_csv_counts() {
        let (_temp_dir, storage) = create_test_storage();

        let dept = Department::new("Biology");
        storage.departments.upsert(dept.clone()).unwrap();
        storage.departments.save().unwrap();

        for i in 0..2 {
            let mut asset = Asset::new(
                format!("Microscope {}", i),
                "Lab Equipment",
                format!("MIC-{}", i),
                NaiveDate::from_ymd_opt(2021, 10, 5).unwrap(),
            );
            asset.department_id = Some(dept.id);
            storage.assets.upsert(asset).unwrap();
        }
        storage.assets.save().unwrap();

        let mut output = Vec::new();
        export_departments_csv(&storage, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(",2"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }
}
