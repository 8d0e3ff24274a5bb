//! CLI commands for reports
//!
//! Provides commands for generating and exporting asset reports.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{CampusError, CampusResult};
use crate::reports::{AssetStatusReport, DepartmentSummaryReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate an asset status report
    #[command(alias = "assets")]
    Status {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only flagged assets (missing, transferred, in repair)
        #[arg(long)]
        flagged: bool,
    },

    /// Generate a per-department summary report
    #[command(alias = "dept")]
    Departments {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> CampusResult<()> {
    match cmd {
        ReportCommands::Status { output, flagged } => handle_status_report(storage, output, flagged),
        ReportCommands::Departments { output } => handle_department_report(storage, output),
    }
}

/// Handle asset status report
fn handle_status_report(
    storage: &Storage,
    output: Option<PathBuf>,
    flagged: bool,
) -> CampusResult<()> {
    let report = AssetStatusReport::generate(storage)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            CampusError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Asset status report exported to: {}", path.display());
    } else if flagged {
        let rows = report.flagged_rows();
        if rows.is_empty() {
            println!("No flagged assets. Everything is active.");
            return Ok(());
        }

        println!("Flagged Assets ({})\n", rows.len());
        println!("{:<30} {:<16} {}", "Name", "Serial Number", "Status");
        println!("{}", "-".repeat(60));
        for row in rows {
            println!("{:<30} {:<16} {}", row.name, row.serial_number, row.status);
        }
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle department summary report
fn handle_department_report(storage: &Storage, output: Option<PathBuf>) -> CampusResult<()> {
    let report = DepartmentSummaryReport::generate(storage)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            CampusError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Department report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}
