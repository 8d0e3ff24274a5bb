//! campus-assets-cli - Terminal-based university asset management
//!
//! This library provides the core functionality for the campus-assets
//! application. It tracks the physical assets of a university, which
//! department each one belongs to, and the maintenance work done on them,
//! for users who prefer CLI and TUI interfaces.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (departments, assets, maintenance records)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Asset and department reports
//! - `export`: CSV/JSON/YAML export and restore
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_assets_cli::config::{paths::CampusPaths, settings::Settings};
//!
//! let paths = CampusPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::CampusError;
