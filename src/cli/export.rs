//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use crate::error::{CampusError, CampusResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (assets only)
    Csv,
    /// JSON format (full database)
    Json,
    /// YAML format (full database, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export assets to CSV
    Assets {
        /// Output file path
        output: PathBuf,
    },

    /// Export departments to CSV
    Departments {
        /// Output file path
        output: PathBuf,
    },

    /// Export maintenance records to CSV
    Maintenance {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> CampusResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, output, format, pretty),
        ExportCommands::Assets { output } => handle_export_assets(storage, output),
        ExportCommands::Departments { output } => handle_export_departments(storage, output),
        ExportCommands::Maintenance { output } => handle_export_maintenance(storage, output),
        ExportCommands::Info => handle_export_info(storage),
    }
}

/// Handle full export
fn handle_export_all(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> CampusResult<()> {
    let file = create_output_file(&output)?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            // For CSV, export assets as the primary data
            csv::export_assets_csv(storage, &mut writer)?;
            println!("Assets exported to: {}", output.display());
            println!("Note: CSV format exports assets only. Use JSON or YAML for full database export.");
        }
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer, pretty)?;
            println!("Full database exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut writer)?;
            println!("Full database exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Handle assets export
fn handle_export_assets(storage: &Storage, output: PathBuf) -> CampusResult<()> {
    let file = create_output_file(&output)?;
    let mut writer = BufWriter::new(file);

    csv::export_assets_csv(storage, &mut writer)?;

    let count = storage.assets.get_all()?.len();
    println!("Exported {} assets to: {}", count, output.display());

    Ok(())
}

/// Handle departments export
fn handle_export_departments(storage: &Storage, output: PathBuf) -> CampusResult<()> {
    let file = create_output_file(&output)?;
    let mut writer = BufWriter::new(file);

    csv::export_departments_csv(storage, &mut writer)?;

    let count = storage.departments.get_all()?.len();
    println!("Exported {} departments to: {}", count, output.display());

    Ok(())
}

/// Handle maintenance export
fn handle_export_maintenance(storage: &Storage, output: PathBuf) -> CampusResult<()> {
    let file = create_output_file(&output)?;
    let mut writer = BufWriter::new(file);

    csv::export_maintenance_csv(storage, &mut writer)?;

    let count = storage.maintenance.get_all()?.len();
    println!(
        "Exported {} maintenance records to: {}",
        count,
        output.display()
    );

    Ok(())
}

/// Show export information
fn handle_export_info(storage: &Storage) -> CampusResult<()> {
    let export = json::FullExport::from_storage(storage)?;

    println!("Export Information");
    println!("==================\n");

    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!();

    println!("Data Summary:");
    println!("  Departments:         {}", export.metadata.department_count);
    println!("  Assets:              {}", export.metadata.asset_count);
    println!("  Maintenance records: {}", export.metadata.maintenance_count);
    println!();

    if let Some(earliest) = &export.metadata.earliest_purchase {
        println!("Earliest purchase date:  {}", earliest);
    }
    if let Some(latest) = &export.metadata.latest_maintenance {
        println!("Latest maintenance date: {}", latest);
    }

    println!("\nAvailable Export Formats:");
    println!("  csv  - CSV format (assets, departments, or maintenance)");
    println!("  json - JSON format (full database, machine-readable)");
    println!("  yaml - YAML format (full database, human-readable)");

    println!("\nExamples:");
    println!("  campus export all backup.json --format json --pretty");
    println!("  campus export assets assets.csv");
    println!("  campus export maintenance history.csv");

    Ok(())
}

fn create_output_file(output: &PathBuf) -> CampusResult<File> {
    File::create(output).map_err(|e| {
        CampusError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })
}
