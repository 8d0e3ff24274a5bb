//! CLI commands for data import
//!
//! Handles importing assets from CSV files with automatic column mapping
//! detection and duplicate checking, plus full-database restore from a
//! JSON or YAML export.

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{CampusError, CampusResult};
use crate::export::{json, yaml};
use crate::services::{ColumnMapping, ImportService, ImportStatus};
use crate::storage::Storage;

/// Restore file format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RestoreFormat {
    /// JSON export file
    Json,
    /// YAML export file
    Yaml,
}

/// Import subcommands
#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Import assets from a CSV file
    Csv {
        /// Path to CSV file
        file: PathBuf,

        /// Date format for the purchase date column (strftime)
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,

        /// Treat the first row as data instead of a header
        #[arg(long)]
        no_header: bool,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,

        /// Create departments named in the file that do not exist yet
        #[arg(long)]
        create_departments: bool,

        /// Show the preview without importing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace the entire database with a previous export
    Restore {
        /// Path to the export file
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: RestoreFormat,

        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Handle an import command
pub fn handle_import_command(storage: &Storage, cmd: ImportCommands) -> CampusResult<()> {
    match cmd {
        ImportCommands::Csv {
            file,
            date_format,
            no_header,
            delimiter,
            create_departments,
            dry_run,
        } => handle_csv_import(
            storage,
            &file,
            &date_format,
            no_header,
            delimiter,
            create_departments,
            dry_run,
        ),
        ImportCommands::Restore {
            file,
            format,
            force,
        } => handle_restore(storage, &file, format, force),
    }
}

/// Handle CSV asset import
fn handle_csv_import(
    storage: &Storage,
    file: &Path,
    date_format: &str,
    no_header: bool,
    delimiter: char,
    create_departments: bool,
    dry_run: bool,
) -> CampusResult<()> {
    let import_service = ImportService::new(storage);

    if !file.exists() {
        return Err(CampusError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(!no_header)
        .delimiter(delimiter as u8)
        .from_path(file)
        .map_err(|e| CampusError::Import(format!("Failed to open file: {}", e)))?;

    // Detect the column layout from the header row when there is one
    let mapping = if no_header {
        ColumnMapping::new()
    } else {
        let headers = reader
            .headers()
            .map_err(|e| CampusError::Import(format!("Failed to read CSV header: {}", e)))?
            .clone();
        import_service.detect_mapping_from_headers(&headers)
    };
    let mapping = mapping
        .with_date_format(date_format)
        .with_header(!no_header)
        .with_delimiter(delimiter);

    // Parse the CSV
    let parsed = import_service.parse_csv_from_reader(&mut reader, &mapping)?;

    if parsed.is_empty() {
        println!("No assets found in CSV file.");
        return Ok(());
    }

    // Generate preview
    let preview = import_service.generate_preview(&parsed)?;

    // Show preview summary
    let new_count = preview
        .iter()
        .filter(|e| e.status == ImportStatus::New)
        .count();
    let dup_count = preview
        .iter()
        .filter(|e| e.status == ImportStatus::Duplicate)
        .count();
    let err_count = preview
        .iter()
        .filter(|e| matches!(e.status, ImportStatus::Error(_)))
        .count();

    println!("Import Preview for '{}'", file.display());
    println!("{}", "=".repeat(40));
    println!("  New assets:         {}", new_count);
    println!("  Duplicates (skip):  {}", dup_count);
    println!("  Errors:             {}", err_count);
    println!();

    if new_count == 0 {
        println!("No new assets to import.");
        return Ok(());
    }

    // Show first few new assets
    println!("First assets to import:");
    for entry in preview
        .iter()
        .filter(|e| e.status == ImportStatus::New)
        .take(5)
    {
        println!(
            "  {} {} ({})",
            entry.asset.purchase_date, entry.asset.name, entry.asset.serial_number
        );
    }
    if new_count > 5 {
        println!("  ... and {} more", new_count - 5);
    }
    println!();

    if dry_run {
        println!("Dry run: nothing imported.");
        return Ok(());
    }

    // Perform import
    let result = import_service.import_from_preview(&preview, create_departments)?;

    println!("Import Complete!");
    println!("  Imported:    {}", result.imported);
    println!("  Skipped:     {}", result.duplicates_skipped);
    if result.departments_created > 0 {
        println!("  Departments: {} created", result.departments_created);
    }
    if !result.error_messages.is_empty() {
        println!("  Errors:      {}", result.errors);
        let mut messages: Vec<_> = result.error_messages.iter().collect();
        messages.sort_by_key(|(row, _)| **row);
        for (row, msg) in messages {
            println!("    Row {}: {}", row + 1, msg);
        }
    }

    Ok(())
}

/// Handle full-database restore
fn handle_restore(
    storage: &Storage,
    file: &Path,
    format: RestoreFormat,
    force: bool,
) -> CampusResult<()> {
    if !file.exists() {
        return Err(CampusError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let content = std::fs::read_to_string(file)
        .map_err(|e| CampusError::Import(format!("Failed to read file: {}", e)))?;

    // Parsing also validates schema version and referential integrity
    let export = match format {
        RestoreFormat::Json => json::import_from_json(&content)?,
        RestoreFormat::Yaml => yaml::import_from_yaml(&content)?,
    };

    println!("Restore from: {}", file.display());
    println!("  Exported at:         {}", export.exported_at.format("%Y-%m-%d %H:%M UTC"));
    println!("  Departments:         {}", export.departments.len());
    println!("  Assets:              {}", export.assets.len());
    println!("  Maintenance records: {}", export.maintenance.len());
    println!();

    if !force {
        println!("WARNING: restore replaces ALL current data.");
        println!("To proceed, run again with --force flag:");
        println!("  campus import restore {} --force", file.display());
        return Ok(());
    }

    storage.departments.replace_all(export.departments)?;
    storage.assets.replace_all(export.assets)?;
    storage.maintenance.replace_all(export.maintenance)?;
    storage.save_all()?;

    println!("Restore complete!");

    Ok(())
}
