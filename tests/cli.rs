//! End-to-end CLI tests
//!
//! Drives the campus binary against a temporary data directory using the
//! CAMPUS_ASSETS_DATA_DIR override, so no test touches the real config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn campus(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("campus").unwrap();
    cmd.env("CAMPUS_ASSETS_DATA_DIR", data_dir.path());
    cmd
}

fn seed_department(data_dir: &TempDir, name: &str) {
    campus(data_dir)
        .args(["department", "create", name])
        .assert()
        .success();
}

fn seed_asset(data_dir: &TempDir, name: &str, serial: &str) {
    campus(data_dir)
        .args([
            "asset", "create", name, "--category", "Lab Equipment", "--serial", serial, "--date",
            "2024-01-15",
        ])
        .assert()
        .success();
}

#[test]
fn test_init_creates_layout() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("departments.json").exists());
    assert!(dir.path().join("data").join("assets.json").exists());
    assert!(dir.path().join("data").join("maintenance.json").exists());
}

#[test]
fn test_department_create_and_list() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args(["department", "create", "Physics", "--description", "Science wing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created department: Physics"));

    campus(&dir)
        .args(["department", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics"))
        .stdout(predicate::str::contains("Science wing"));
}

#[test]
fn test_duplicate_department_rejected() {
    let dir = TempDir::new().unwrap();
    seed_department(&dir, "Physics");

    campus(&dir)
        .args(["department", "create", "Physics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_asset_create_and_show() {
    let dir = TempDir::new().unwrap();
    seed_department(&dir, "Biology");

    campus(&dir)
        .args([
            "asset",
            "create",
            "Microscope",
            "--category",
            "Lab Equipment",
            "--serial",
            "MIC-001",
            "--department",
            "Biology",
            "--date",
            "2024-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created asset: Microscope"));

    // Show resolves by serial number
    campus(&dir)
        .args(["asset", "show", "MIC-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asset: Microscope"))
        .stdout(predicate::str::contains("Biology"))
        .stdout(predicate::str::contains("2024-01-15"));
}

#[test]
fn test_asset_create_with_unknown_department_fails() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args([
            "asset", "create", "Cart", "--category", "Furniture", "--serial", "CRT-1",
            "--department", "Nowhere",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Department not found"));
}

#[test]
fn test_asset_status_change() {
    let dir = TempDir::new().unwrap();
    seed_asset(&dir, "Projector", "PRJ-01");

    campus(&dir)
        .args(["asset", "status", "PRJ-01", "in_repair"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now In Repair"));

    campus(&dir)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In Repair"));
}

#[test]
fn test_asset_delete_requires_force() {
    let dir = TempDir::new().unwrap();
    seed_asset(&dir, "Old Printer", "PRN-9");

    // Without --force nothing is deleted
    campus(&dir)
        .args(["asset", "delete", "PRN-9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    campus(&dir)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Printer"));

    // With --force the asset goes away
    campus(&dir)
        .args(["asset", "delete", "PRN-9", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted asset: Old Printer"));

    campus(&dir)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found"));
}

#[test]
fn test_maintenance_add_and_list() {
    let dir = TempDir::new().unwrap();
    seed_asset(&dir, "Centrifuge", "CF-11");

    campus(&dir)
        .args([
            "maintenance",
            "add",
            "CF-11",
            "--kind",
            "Calibration",
            "--technician",
            "M. Okafor",
            "--date",
            "2024-02-14",
            "--remarks",
            "Annual calibration",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Calibration for Centrifuge"));

    campus(&dir)
        .args(["maintenance", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Centrifuge"))
        .stdout(predicate::str::contains("Calibration"));

    // Per-asset history view
    campus(&dir)
        .args(["maintenance", "list", "--asset", "CF-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asset: Centrifuge"))
        .stdout(predicate::str::contains("M. Okafor"));
}

#[test]
fn test_department_delete_detaches_assets() {
    let dir = TempDir::new().unwrap();
    seed_department(&dir, "Chemistry");

    campus(&dir)
        .args([
            "asset", "create", "Burner", "--category", "Lab Equipment", "--serial", "BRN-2",
            "--department", "Chemistry",
        ])
        .assert()
        .success();

    campus(&dir)
        .args(["department", "delete", "Chemistry", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted department: Chemistry"));

    // The asset survives, unassigned
    campus(&dir)
        .args(["asset", "show", "BRN-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_report_status() {
    let dir = TempDir::new().unwrap();
    seed_asset(&dir, "Router", "RTR-5");

    campus(&dir)
        .args(["asset", "status", "RTR-5", "missing"])
        .assert()
        .success();

    campus(&dir)
        .args(["report", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asset Status Report"))
        .stdout(predicate::str::contains("FLAGGED ASSETS"))
        .stdout(predicate::str::contains("Router"));
}

#[test]
fn test_export_and_restore_roundtrip() {
    let dir = TempDir::new().unwrap();
    seed_department(&dir, "Library");
    seed_asset(&dir, "Book Scanner", "BS-44");

    let backup = dir.path().join("backup.json");
    campus(&dir)
        .args(["export", "all"])
        .arg(&backup)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full database exported"));

    // Restore into a fresh data directory
    let dir2 = TempDir::new().unwrap();

    // Without --force the restore only previews
    campus(&dir2)
        .args(["import", "restore"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("restore replaces ALL current data"));

    campus(&dir2)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found"));

    campus(&dir2)
        .args(["import", "restore"])
        .arg(&backup)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restore complete"));

    campus(&dir2)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Scanner"));

    campus(&dir2)
        .args(["department", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library"));
}

#[test]
fn test_csv_import_with_preview() {
    let dir = TempDir::new().unwrap();

    let csv_path = dir.path().join("inventory.csv");
    std::fs::write(
        &csv_path,
        "Name,Category,Serial Number,Department,Purchase Date,Status\n\
         Dell Latitude,Laptop,SN-100,Physics,2023-04-01,active\n\
         Bench,Furniture,SN-200,,2022-01-15,active\n",
    )
    .unwrap();

    // Dry run imports nothing
    campus(&dir)
        .args(["import", "csv"])
        .arg(&csv_path)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: nothing imported"));

    campus(&dir)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found"));

    // Real import, creating the Physics department on the fly
    campus(&dir)
        .args(["import", "csv"])
        .arg(&csv_path)
        .arg("--create-departments")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import Complete"))
        .stdout(predicate::str::contains("Imported:    2"));

    campus(&dir)
        .args(["department", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics"));
}

#[test]
fn test_audit_records_changes() {
    let dir = TempDir::new().unwrap();
    seed_department(&dir, "Facilities");
    seed_asset(&dir, "Floor Buffer", "FB-3");

    campus(&dir)
        .args(["asset", "delete", "FB-3", "--force"])
        .assert()
        .success();

    campus(&dir)
        .args(["audit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE"))
        .stdout(predicate::str::contains("Floor Buffer"));

    campus(&dir)
        .args(["audit", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("audit.log"));
}
