/// Workbook rendering
///
/// This module handles:
/// - Converting the parsed report into the sheet row grid
/// - Serializing the grid into an xlsx container in memory
use crate::error::ConvertError;
use crate::model::{Priority, Report};
use crate::paths::display_source_path;
use rust_xlsxwriter::Workbook;

/// Title of the single sheet in the output workbook.
pub const SHEET_NAME: &str = "PMD Violations";

/// Fixed column titles, row 0 of every workbook produced.
pub const HEADER: [&str; 8] = [
    "Source file",
    "Begin line",
    "End line",
    "Begin column",
    "End column",
    "Category",
    "Priority",
    "Description",
];

/// One data row of the violations sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub source_file: String,
    pub begin_line: String,
    pub end_line: String,
    pub begin_column: String,
    pub end_column: String,
    /// `"<ruleset> -> <rule>"`, verbatim from the report attributes
    pub category: String,
    pub priority: &'static str,
    pub description: String,
}

impl SheetRow {
    /// Cell values in column order, matching `HEADER`.
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.source_file,
            &self.begin_line,
            &self.end_line,
            &self.begin_column,
            &self.end_column,
            &self.category,
            self.priority,
            &self.description,
        ]
    }
}

/// Build the data rows for a report, file-major then violation-minor.
///
/// This is where the raw `priority` attribute is interpreted; a value
/// outside the 1-5 scale fails the whole conversion.
pub fn build_rows(report: &Report) -> Result<Vec<SheetRow>, ConvertError> {
    let mut rows = Vec::with_capacity(report.violation_count());
    for file in &report.files {
        let source_file = display_source_path(&file.path);
        for violation in &file.violations {
            let priority = Priority::from_attr(&violation.priority)?;
            rows.push(SheetRow {
                source_file: source_file.to_string(),
                begin_line: violation.begin_line.clone(),
                end_line: violation.end_line.clone(),
                begin_column: violation.begin_column.clone(),
                end_column: violation.end_column.clone(),
                category: format!("{} -> {}", violation.ruleset, violation.rule),
                priority: priority.name(),
                description: violation.description.clone(),
            });
        }
    }
    Ok(rows)
}

/// Serialize the row grid into xlsx bytes.
///
/// The workbook holds a single sheet named `PMD Violations`: the header
/// row, one row per violation, then a column auto-fit pass over whatever
/// was written. Row heights stay at the library default (automatic).
pub fn render_workbook(rows: &[SheetRow]) -> Result<Vec<u8>, ConvertError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, cell) in row.cells().iter().enumerate() {
            sheet.write_string(i as u32 + 1, col as u16, *cell)?;
        }
    }
    sheet.autofit();

    Ok(workbook.save_to_buffer()?)
}
