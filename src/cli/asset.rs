//! Asset CLI commands
//!
//! Implements CLI commands for asset management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::asset::{format_asset_details, format_asset_list};
use crate::error::{CampusError, CampusResult};
use crate::models::{AssetStatus, DepartmentId};
use crate::services::{AssetRow, AssetService, DepartmentService};
use crate::storage::Storage;

/// Asset subcommands
#[derive(Subcommand)]
pub enum AssetCommands {
    /// Register a new asset
    Create {
        /// Asset name
        name: String,
        /// Category (e.g., "Lab Equipment", "Furniture")
        #[arg(short, long)]
        category: String,
        /// Serial number (must be unique)
        #[arg(short, long)]
        serial: String,
        /// Department name or ID to assign to
        #[arg(short, long)]
        department: Option<String>,
        /// Purchase date (YYYY-MM-DD, defaults to today)
        #[arg(short = 'p', long)]
        date: Option<String>,
        /// Tracking status (active, missing, transferred, in_repair)
        #[arg(long, default_value = "active")]
        status: String,
    },
    /// List assets
    List {
        /// Search by name or serial number
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by department name or ID
        #[arg(short, long)]
        department: Option<String>,
    },
    /// Show asset details
    Show {
        /// Serial number or asset ID
        asset: String,
    },
    /// Edit an asset
    Edit {
        /// Serial number or asset ID
        asset: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New serial number
        #[arg(long)]
        serial: Option<String>,
        /// New purchase date (YYYY-MM-DD)
        #[arg(short = 'p', long)]
        date: Option<String>,
    },
    /// Change an asset's tracking status
    Status {
        /// Serial number or asset ID
        asset: String,
        /// New status (active, missing, transferred, in_repair)
        status: String,
    },
    /// Assign an asset to a department
    Assign {
        /// Serial number or asset ID
        asset: String,
        /// Department name or ID
        department: Option<String>,
        /// Clear the current assignment
        #[arg(long, conflicts_with = "department")]
        unassign: bool,
    },
    /// Delete an asset and its maintenance history
    Delete {
        /// Serial number or asset ID
        asset: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an asset command
pub fn handle_asset_command(storage: &Storage, cmd: AssetCommands) -> CampusResult<()> {
    let service = AssetService::new(storage);

    match cmd {
        AssetCommands::Create {
            name,
            category,
            serial,
            department,
            date,
            status,
        } => {
            let status = AssetStatus::parse(&status).ok_or_else(|| {
                CampusError::Validation(format!(
                    "Invalid status: '{}'. Valid statuses: active, missing, transferred, in_repair",
                    status
                ))
            })?;

            let purchase_date = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Utc::now().date_naive(),
            };

            let department_id = match department {
                Some(ident) => Some(resolve_department(storage, &ident)?),
                None => None,
            };

            let asset = service.create(
                &name,
                &category,
                &serial,
                department_id,
                purchase_date,
                status,
            )?;

            println!("Created asset: {}", asset.name);
            println!("  Category:      {}", asset.category);
            println!("  Serial Number: {}", asset.serial_number);
            println!("  Purchased:     {}", asset.purchase_date);
            println!("  Status:        {}", asset.status);
            println!("  ID:            {}", asset.id);
        }

        AssetCommands::List { search, department } => {
            let department_id = match department {
                Some(ident) => Some(resolve_department(storage, &ident)?),
                None => None,
            };

            let rows = service.list_rows(search.as_deref().unwrap_or(""), department_id)?;
            print!("{}", format_asset_list(&rows));
        }

        AssetCommands::Show { asset } => {
            let found = service
                .find(&asset)?
                .ok_or_else(|| CampusError::asset_not_found(&asset))?;

            let department_name = match found.department_id {
                Some(dept_id) => storage.departments.get(dept_id)?.map(|d| d.name),
                None => None,
            };
            let row = AssetRow {
                asset: found,
                department_name,
            };
            print!("{}", format_asset_details(&row));
        }

        AssetCommands::Edit {
            asset,
            name,
            category,
            serial,
            date,
        } => {
            let found = service
                .find(&asset)?
                .ok_or_else(|| CampusError::asset_not_found(&asset))?;

            if name.is_none() && category.is_none() && serial.is_none() && date.is_none() {
                println!("No changes specified. Use --name, --category, --serial, or --date.");
                return Ok(());
            }

            let purchase_date = date.map(|s| parse_date(&s)).transpose()?;

            let updated = service.update(
                found.id,
                name.as_deref(),
                category.as_deref(),
                serial.as_deref(),
                None,
                purchase_date,
                None,
            )?;
            println!("Updated asset: {}", updated.name);
        }

        AssetCommands::Status { asset, status } => {
            let found = service
                .find(&asset)?
                .ok_or_else(|| CampusError::asset_not_found(&asset))?;

            let status = AssetStatus::parse(&status).ok_or_else(|| {
                CampusError::Validation(format!(
                    "Invalid status: '{}'. Valid statuses: active, missing, transferred, in_repair",
                    status
                ))
            })?;

            let updated = service.set_status(found.id, status)?;
            println!("Asset '{}' is now {}", updated.name, updated.status);
        }

        AssetCommands::Assign {
            asset,
            department,
            unassign,
        } => {
            let found = service
                .find(&asset)?
                .ok_or_else(|| CampusError::asset_not_found(&asset))?;

            if unassign {
                let updated =
                    service.update(found.id, None, None, None, Some(None), None, None)?;
                println!("Asset '{}' is now unassigned", updated.name);
                return Ok(());
            }

            let ident = department.ok_or_else(|| {
                CampusError::Validation(
                    "Specify a department name or ID, or use --unassign".into(),
                )
            })?;
            let dept_id = resolve_department(storage, &ident)?;
            let dept_name = storage
                .departments
                .get(dept_id)?
                .map(|d| d.name)
                .unwrap_or_else(|| ident.clone());

            let updated =
                service.update(found.id, None, None, None, Some(Some(dept_id)), None, None)?;
            println!("Assigned '{}' to {}", updated.name, dept_name);
        }

        AssetCommands::Delete { asset, force } => {
            let found = service
                .find(&asset)?
                .ok_or_else(|| CampusError::asset_not_found(&asset))?;

            let history_count = storage.maintenance.get_by_asset(found.id)?.len();

            if !force {
                println!("About to delete asset:");
                println!("  Name:          {}", found.name);
                println!("  Serial Number: {}", found.serial_number);
                if history_count > 0 {
                    println!("  {} maintenance record(s) will also be deleted", history_count);
                }
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!(
                "Deleted asset: {} ({})",
                deleted.name, deleted.serial_number
            );
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date argument
fn parse_date(s: &str) -> CampusResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        CampusError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Resolve a department argument to its ID
fn resolve_department(storage: &Storage, identifier: &str) -> CampusResult<DepartmentId> {
    DepartmentService::new(storage)
        .find(identifier)?
        .map(|d| d.id)
        .ok_or_else(|| CampusError::department_not_found(identifier))
}
