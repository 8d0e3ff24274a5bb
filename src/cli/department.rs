//! Department CLI commands
//!
//! Implements CLI commands for department management.

use clap::Subcommand;

use crate::display::department::{format_department_details, format_department_list};
use crate::error::{CampusError, CampusResult};
use crate::services::{DepartmentService, DepartmentSummary};
use crate::storage::Storage;

/// Department subcommands
#[derive(Subcommand)]
pub enum DepartmentCommands {
    /// Create a new department
    Create {
        /// Department name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all departments
    List,
    /// Show department details
    Show {
        /// Department name or ID
        department: String,
    },
    /// Edit a department
    Edit {
        /// Department name or ID
        department: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a department
    Delete {
        /// Department name or ID
        department: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a department command
pub fn handle_department_command(storage: &Storage, cmd: DepartmentCommands) -> CampusResult<()> {
    let service = DepartmentService::new(storage);

    match cmd {
        DepartmentCommands::Create { name, description } => {
            let department = service.create(&name, &description)?;

            println!("Created department: {}", department.name);
            if !department.description.is_empty() {
                println!("  Description: {}", department.description);
            }
            println!("  ID: {}", department.id);
        }

        DepartmentCommands::List => {
            let summaries = service.list_with_counts()?;
            print!("{}", format_department_list(&summaries));
        }

        DepartmentCommands::Show { department } => {
            let found = service
                .find(&department)?
                .ok_or_else(|| CampusError::department_not_found(&department))?;

            let asset_count = service.asset_count(found.id)?;
            let summary = DepartmentSummary {
                department: found,
                asset_count,
            };
            print!("{}", format_department_details(&summary));
        }

        DepartmentCommands::Edit {
            department,
            name,
            description,
        } => {
            let found = service
                .find(&department)?
                .ok_or_else(|| CampusError::department_not_found(&department))?;

            if name.is_none() && description.is_none() {
                println!("No changes specified. Use --name or --description.");
                return Ok(());
            }

            let updated = service.update(found.id, name.as_deref(), description.as_deref())?;
            println!("Updated department: {}", updated.name);
        }

        DepartmentCommands::Delete { department, force } => {
            let found = service
                .find(&department)?
                .ok_or_else(|| CampusError::department_not_found(&department))?;

            let asset_count = service.asset_count(found.id)?;

            if !force {
                println!("About to delete department: {}", found.name);
                if asset_count > 0 {
                    println!("  {} assigned asset(s) will become unassigned", asset_count);
                }
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!("Deleted department: {}", deleted.name);
            if asset_count > 0 {
                println!("  {} asset(s) left unassigned", asset_count);
            }
        }
    }

    Ok(())
}
