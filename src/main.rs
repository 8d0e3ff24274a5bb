use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use campus_assets_cli::cli::{
    handle_asset_command, handle_audit_command, handle_department_command, handle_export_command,
    handle_import_command, handle_maintenance_command, handle_report_command,
};
use campus_assets_cli::config::{paths::CampusPaths, settings::Settings};
use campus_assets_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "Terminal-based university asset management",
    long_about = "campus-assets-cli tracks the physical assets of a university: \
                  which department each asset belongs to, its tracking status, \
                  and the maintenance work done on it, all from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Department management commands
    #[command(subcommand, alias = "dept")]
    Department(campus_assets_cli::cli::DepartmentCommands),

    /// Asset management commands
    #[command(subcommand)]
    Asset(campus_assets_cli::cli::AssetCommands),

    /// Maintenance history commands
    #[command(subcommand, alias = "maint")]
    Maintenance(campus_assets_cli::cli::MaintenanceCommands),

    /// Report generation commands
    #[command(subcommand)]
    Report(campus_assets_cli::cli::ReportCommands),

    /// Export data to CSV, JSON, or YAML
    #[command(subcommand)]
    Export(campus_assets_cli::cli::ExportCommands),

    /// Import assets from CSV or restore a full export
    #[command(subcommand)]
    Import(campus_assets_cli::cli::ImportCommands),

    /// Review the change history
    #[command(subcommand)]
    Audit(campus_assets_cli::cli::AuditCommands),

    /// Initialize the asset registry
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CampusPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; shared so TUI workers can run deletes off-thread
    let storage = Arc::new(Storage::new(paths.clone())?);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            campus_assets_cli::tui::run_tui(Arc::clone(&storage), settings, paths)?;
        }
        Some(Commands::Department(cmd)) => {
            handle_department_command(&storage, cmd)?;
        }
        Some(Commands::Asset(cmd)) => {
            handle_asset_command(&storage, cmd)?;
        }
        Some(Commands::Maintenance(cmd)) => {
            handle_maintenance_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import(cmd)) => {
            handle_import_command(&storage, cmd)?;
        }
        Some(Commands::Audit(cmd)) => {
            handle_audit_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!(
                "Initializing campus-assets at: {}",
                paths.base_dir().display()
            );
            campus_assets_cli::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  campus department create \"Physics\"");
            println!("  campus asset create \"Microscope\" --category \"Lab Equipment\" --serial MIC-001");
            println!("  campus tui");
        }
        Some(Commands::Config) => {
            println!("campus-assets Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  University name:      {}", settings.university_name);
            println!("  Date format:          {}", settings.date_format);
            println!("  Notification seconds: {}", settings.notification_seconds);
        }
        None => {
            println!("campus-assets - University asset management");
            println!();
            println!("Run 'campus --help' for usage information.");
            println!("Run 'campus tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
