//! Department display formatting
//!
//! Formats departments for terminal output in table and detail views.

use crate::services::department::DepartmentSummary;

/// Format a list of departments with asset counts as a table
pub fn format_department_list(summaries: &[DepartmentSummary]) -> String {
    if summaries.is_empty() {
        return "No departments found.".to_string();
    }

    // Calculate column widths
    let name_width = summaries
        .iter()
        .map(|s| s.department.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<40}  {:>6}\n",
        "Name",
        "Description",
        "Assets",
        name_width = name_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:-<40}  {:->6}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    // Department rows
    for summary in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:<40}  {:>6}\n",
            summary.department.name,
            truncate(&summary.department.description, 40),
            summary.asset_count,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single department's details
pub fn format_department_details(summary: &DepartmentSummary) -> String {
    let department = &summary.department;

    let mut output = String::new();

    output.push_str(&format!("Department: {}\n", department.name));
    output.push_str(&format!("  ID:          {}\n", department.id));
    if !department.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", department.description));
    }
    output.push_str(&format!("  Assets:      {}\n", summary.asset_count));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        department.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        department.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn create_test_summary(name: &str, description: &str, asset_count: usize) -> DepartmentSummary {
        DepartmentSummary {
            department: Department::with_description(name, description),
            asset_count,
        }
    }

    #[test]
    fn test_format_department_list() {
        let summaries = vec![
            create_test_summary("Physics", "Physics department", 12),
            create_test_summary("Chemistry", "Chemistry labs", 8),
        ];

        let output = format_department_list(&summaries);
        assert!(output.contains("Physics"));
        assert!(output.contains("Chemistry"));
        assert!(output.contains("12"));
        assert!(output.contains("Assets"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_department_list(&[]);
        assert!(output.contains("No departments found"));
    }

    #[test]
    fn test_format_department_details() {
        let summary = create_test_summary("Biology", "Life sciences", 3);
        let output = format_department_details(&summary);

        assert!(output.contains("Department: Biology"));
        assert!(output.contains("Life sciences"));
        assert!(output.contains("Assets:      3"));
        assert!(output.contains("Created:"));
    }

    #[test]
    fn test_details_omits_empty_description() {
        let summary = DepartmentSummary {
            department: Department::new("Mathematics"),
            asset_count: 0,
        };
        let output = format_department_details(&summary);
        assert!(!output.contains("Description:"));
    }
}
