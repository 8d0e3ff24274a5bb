//! Maintenance CLI commands
//!
//! Implements CLI commands for recording and reviewing maintenance activity.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::maintenance::{format_maintenance_history, format_maintenance_list};
use crate::error::{CampusError, CampusResult};
use crate::models::MaintenanceId;
use crate::services::{AssetService, MaintenanceRow, MaintenanceService};
use crate::storage::Storage;

/// Maintenance subcommands
#[derive(Subcommand)]
pub enum MaintenanceCommands {
    /// Record maintenance activity for an asset
    Add {
        /// Serial number or asset ID
        asset: String,
        /// Kind of work performed (e.g., "Repair", "Calibration")
        #[arg(short, long)]
        kind: String,
        /// Technician who performed the work
        #[arg(short, long)]
        technician: String,
        /// Date of the work (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Additional remarks
        #[arg(short, long, default_value = "")]
        remarks: String,
    },
    /// List maintenance records
    List {
        /// Show only the history for one asset
        #[arg(short, long)]
        asset: Option<String>,
    },
    /// Delete a maintenance record
    Delete {
        /// Maintenance record ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a maintenance command
pub fn handle_maintenance_command(storage: &Storage, cmd: MaintenanceCommands) -> CampusResult<()> {
    let service = MaintenanceService::new(storage);
    let asset_service = AssetService::new(storage);

    match cmd {
        MaintenanceCommands::Add {
            asset,
            kind,
            technician,
            date,
            remarks,
        } => {
            let found = asset_service
                .find(&asset)?
                .ok_or_else(|| CampusError::asset_not_found(&asset))?;

            let maintenance_date = match date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                    CampusError::Validation(format!(
                        "Invalid date format: '{}'. Use YYYY-MM-DD",
                        s
                    ))
                })?,
                None => chrono::Utc::now().date_naive(),
            };

            let record = service.create(found.id, maintenance_date, &kind, &technician, &remarks)?;

            println!("Recorded {} for {}", record.kind, found.name);
            println!("  Date:       {}", record.maintenance_date);
            println!("  Technician: {}", record.technician);
            if !record.remarks.is_empty() {
                println!("  Remarks:    {}", record.remarks);
            }
            println!("  ID:         {}", record.id);
        }

        MaintenanceCommands::List { asset } => match asset {
            Some(ident) => {
                let found = asset_service
                    .find(&ident)?
                    .ok_or_else(|| CampusError::asset_not_found(&ident))?;

                let rows: Vec<MaintenanceRow> = service
                    .list_for_asset(found.id)?
                    .into_iter()
                    .map(|record| MaintenanceRow {
                        record,
                        asset_name: Some(found.name.clone()),
                    })
                    .collect();
                print!("{}", format_maintenance_history(&found.name, &rows));
            }
            None => {
                let rows = service.list_rows()?;
                print!("{}", format_maintenance_list(&rows));
            }
        },

        MaintenanceCommands::Delete { id, force } => {
            let record_id = id
                .parse::<MaintenanceId>()
                .map_err(|_| CampusError::maintenance_not_found(&id))?;
            let record = service
                .get(record_id)?
                .ok_or_else(|| CampusError::maintenance_not_found(&id))?;

            if !force {
                println!("About to delete maintenance record:");
                println!("  Date:       {}", record.maintenance_date);
                println!("  Kind:       {}", record.kind);
                println!("  Technician: {}", record.technician);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(record_id)?;
            println!(
                "Deleted maintenance record: {} ({})",
                deleted.kind, deleted.maintenance_date
            );
        }
    }

    Ok(())
}
