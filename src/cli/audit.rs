//! Audit log CLI commands
//!
//! Provides commands for reviewing the change history.

use clap::Subcommand;

use crate::error::CampusResult;
use crate::storage::Storage;

/// Audit subcommands
#[derive(Subcommand)]
pub enum AuditCommands {
    /// Show recent audit log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Show every entry
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },
    /// Show the audit log file location
    Path,
}

/// Handle an audit command
pub fn handle_audit_command(storage: &Storage, cmd: AuditCommands) -> CampusResult<()> {
    let logger = storage.audit();

    match cmd {
        AuditCommands::List { limit, all } => {
            if !logger.exists() {
                println!("No audit log entries yet.");
                return Ok(());
            }

            let entries = if all {
                logger.read_all()?
            } else {
                logger.read_recent(limit)?
            };

            if entries.is_empty() {
                println!("No audit log entries yet.");
                return Ok(());
            }

            let total = logger.entry_count()?;
            println!("Audit Log ({} of {} entries)\n", entries.len(), total);

            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }

        AuditCommands::Path => {
            println!("{}", logger.path().display());
        }
    }

    Ok(())
}
