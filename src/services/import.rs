//! CSV Import service
//!
//! Provides functionality for importing assets from CSV files, including
//! column mapping, date parsing, duplicate detection, and batch import.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::CampusResult;
use crate::models::AssetStatus;
use crate::services::{AssetService, DepartmentService};
use crate::storage::Storage;
use csv::{Reader, StringRecord};

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the asset name column
    pub name_column: usize,
    /// Index of the category column
    pub category_column: usize,
    /// Index of the serial number column
    pub serial_column: usize,
    /// Index of the department name column
    pub department_column: Option<usize>,
    /// Index of the purchase date column; rows default to today without one
    pub purchase_date_column: Option<usize>,
    /// Index of the status column
    pub status_column: Option<usize>,
    /// Date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name_column: 0,
            category_column: 1,
            serial_column: 2,
            department_column: Some(3),
            purchase_date_column: Some(4),
            status_column: Some(5),
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }
}

impl ColumnMapping {
    /// Create a new column mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for files produced by the asset report CSV export
    /// (Name, Category, Serial Number, Department, Status - no date)
    pub fn report_csv() -> Self {
        Self {
            name_column: 0,
            category_column: 1,
            serial_column: 2,
            department_column: Some(3),
            purchase_date_column: None,
            status_column: Some(4),
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether first row is header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A parsed row from the CSV before import
#[derive(Debug, Clone)]
pub struct ParsedAsset {
    /// Asset name
    pub name: String,
    /// Category
    pub category: String,
    /// Serial number, the natural key for duplicate detection
    pub serial_number: String,
    /// Department name; None when blank or "N/A"
    pub department: Option<String>,
    /// Purchase date
    pub purchase_date: NaiveDate,
    /// Tracking status
    pub status: AssetStatus,
    /// Original row number in CSV (0-indexed, excluding header)
    pub row_number: usize,
}

/// Status of an asset row for import preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    /// Asset will be imported
    New,
    /// Serial number already exists; row will be skipped
    Duplicate,
    /// Row has an error and cannot be imported
    Error(String),
}

/// Preview entry for import review
#[derive(Debug, Clone)]
pub struct ImportPreviewEntry {
    /// The parsed asset
    pub asset: ParsedAsset,
    /// Import status
    pub status: ImportStatus,
    /// Matching existing asset ID (for duplicates)
    pub existing_id: Option<String>,
}

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Number of assets imported
    pub imported: usize,
    /// Number of duplicates skipped
    pub duplicates_skipped: usize,
    /// Number of rows with errors
    pub errors: usize,
    /// Number of departments created on the fly
    pub departments_created: usize,
    /// IDs of imported assets
    pub imported_ids: Vec<String>,
    /// Error messages by row
    pub error_messages: HashMap<usize, String>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse a CSV from a reader into asset rows
    pub fn parse_csv_from_reader<R: std::io::Read>(
        &self,
        reader: &mut Reader<R>,
        mapping: &ColumnMapping,
    ) -> CampusResult<Vec<Result<ParsedAsset, String>>> {
        let mut results = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    results.push(Err(format!("Error reading CSV record: {}", e)));
                    continue;
                }
            };
            let result = self.parse_record(&record, idx, mapping);
            results.push(result);
        }
        Ok(results)
    }

    /// Parse a single CSV record
    fn parse_record(
        &self,
        record: &StringRecord,
        row_number: usize,
        mapping: &ColumnMapping,
    ) -> Result<ParsedAsset, String> {
        let name = record
            .get(mapping.name_column)
            .ok_or_else(|| "Missing name column".to_string())?
            .trim()
            .to_string();
        if name.is_empty() {
            return Err("Asset name is empty".to_string());
        }

        let category = record
            .get(mapping.category_column)
            .ok_or_else(|| "Missing category column".to_string())?
            .trim()
            .to_string();
        if category.is_empty() {
            return Err("Category is empty".to_string());
        }

        let serial_number = record
            .get(mapping.serial_column)
            .ok_or_else(|| "Missing serial number column".to_string())?
            .trim()
            .to_string();
        if serial_number.is_empty() {
            return Err("Serial number is empty".to_string());
        }

        // Blank and "N/A" both mean unassigned
        let department = mapping
            .department_column
            .and_then(|col| record.get(col))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("n/a"))
            .map(|s| s.to_string());

        let purchase_date = match mapping.purchase_date_column {
            Some(col) => {
                let date_str = record
                    .get(col)
                    .ok_or_else(|| "Missing purchase date column".to_string())?
                    .trim();
                self.parse_date(date_str, &mapping.date_format)?
            }
            None => chrono::Utc::now().date_naive(),
        };

        let status = match mapping.status_column.and_then(|col| record.get(col)) {
            Some(s) if !s.trim().is_empty() => AssetStatus::parse(s.trim())
                .ok_or_else(|| format!("Unknown status: '{}'", s.trim()))?,
            _ => AssetStatus::Active,
        };

        Ok(ParsedAsset {
            name,
            category,
            serial_number,
            department,
            purchase_date,
            status,
            row_number,
        })
    }

    /// Parse a date string using multiple format attempts
    fn parse_date(&self, s: &str, primary_format: &str) -> Result<NaiveDate, String> {
        // Try primary format first
        if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
            return Ok(date);
        }

        // Try common alternative formats
        let formats = [
            "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
            "%d-%m-%Y",
        ];

        for format in formats {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(date);
            }
        }

        Err(format!("Could not parse date: '{}'", s))
    }

    /// Detect column mapping from CSV header record
    pub fn detect_mapping_from_headers(&self, headers: &StringRecord) -> ColumnMapping {
        let mut mapping = ColumnMapping {
            department_column: None,
            purchase_date_column: None,
            status_column: None,
            ..ColumnMapping::new()
        };

        for (idx, header) in headers.iter().enumerate() {
            let h = header.to_lowercase();
            let h = h.trim();

            // "serial number" also contains "name", so check it first
            if h.contains("serial") {
                mapping.serial_column = idx;
            } else if h.contains("department") {
                mapping.department_column = Some(idx);
            } else if h.contains("category") || h.contains("type") {
                mapping.category_column = idx;
            } else if h.contains("purchase") || h.contains("date") {
                mapping.purchase_date_column = Some(idx);
            } else if h.contains("status") {
                mapping.status_column = Some(idx);
            } else if h.contains("name") || h.contains("description") {
                mapping.name_column = idx;
            }
        }

        mapping
    }

    /// Generate an import preview, checking serial numbers for duplicates
    pub fn generate_preview(
        &self,
        parsed: &[Result<ParsedAsset, String>],
    ) -> CampusResult<Vec<ImportPreviewEntry>> {
        let mut preview = Vec::with_capacity(parsed.len());

        // Existing serial numbers for duplicate checking
        let existing_assets = self.storage.assets.get_all()?;
        let existing_serials: HashMap<String, String> = existing_assets
            .iter()
            .map(|a| (a.serial_number.to_lowercase(), a.id.to_string()))
            .collect();

        for result in parsed {
            match result {
                Ok(asset) => {
                    let existing_id = existing_serials
                        .get(&asset.serial_number.to_lowercase())
                        .cloned();
                    let status = if existing_id.is_some() {
                        ImportStatus::Duplicate
                    } else {
                        ImportStatus::New
                    };

                    preview.push(ImportPreviewEntry {
                        asset: asset.clone(),
                        status,
                        existing_id,
                    });
                }
                Err(e) => {
                    preview.push(ImportPreviewEntry {
                        asset: ParsedAsset {
                            name: String::new(),
                            category: String::new(),
                            serial_number: String::new(),
                            department: None,
                            purchase_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
                            status: AssetStatus::Active,
                            row_number: 0,
                        },
                        status: ImportStatus::Error(e.clone()),
                        existing_id: None,
                    });
                }
            }
        }

        Ok(preview)
    }

    /// Import assets from a preview
    ///
    /// When `create_missing_departments` is set, department names that do
    /// not exist yet are created; otherwise those assets import unassigned.
    pub fn import_from_preview(
        &self,
        preview: &[ImportPreviewEntry],
        create_missing_departments: bool,
    ) -> CampusResult<ImportResult> {
        let asset_service = AssetService::new(self.storage);
        let department_service = DepartmentService::new(self.storage);

        let mut result = ImportResult {
            imported: 0,
            duplicates_skipped: 0,
            errors: 0,
            departments_created: 0,
            imported_ids: Vec::new(),
            error_messages: HashMap::new(),
        };

        for entry in preview {
            match &entry.status {
                ImportStatus::New => {
                    let department_id = match &entry.asset.department {
                        Some(dept_name) => {
                            match department_service.get_by_name(dept_name)? {
                                Some(dept) => Some(dept.id),
                                None if create_missing_departments => {
                                    let dept = department_service.create(dept_name, "")?;
                                    result.departments_created += 1;
                                    Some(dept.id)
                                }
                                None => None,
                            }
                        }
                        None => None,
                    };

                    match asset_service.create(
                        &entry.asset.name,
                        &entry.asset.category,
                        &entry.asset.serial_number,
                        department_id,
                        entry.asset.purchase_date,
                        entry.asset.status,
                    ) {
                        Ok(asset) => {
                            result.imported += 1;
                            result.imported_ids.push(asset.id.to_string());
                        }
                        Err(e) => {
                            result.errors += 1;
                            result
                                .error_messages
                                .insert(entry.asset.row_number, e.to_string());
                        }
                    }
                }
                ImportStatus::Duplicate => {
                    result.duplicates_skipped += 1;
                }
                ImportStatus::Error(e) => {
                    result.errors += 1;
                    result
                        .error_messages
                        .insert(entry.asset.row_number, e.clone());
                }
            }
        }

        Ok(result)
    }
}
