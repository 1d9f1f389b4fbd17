/// Core data structures for parsed PMD reports
///
/// This module defines the report model produced by parsing and consumed
/// by workbook rendering. Nothing here is mutated after construction.
use crate::error::ConvertError;

/// A parsed PMD report: a sequence of file entries in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub files: Vec<FileEntry>,
}

impl Report {
    /// Total violations across all files.
    ///
    /// The finished sheet always has exactly one more row than this
    /// (the header).
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }
}

/// One `file` element from the report.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// Raw `name` attribute, the original on-disk path. Display
    /// normalization happens at row-build time.
    pub path: String,

    /// Violations nested under this file, in document order
    pub violations: Vec<Violation>,
}

/// One `violation` element.
///
/// Line and column attributes are carried as opaque text, exactly as they
/// appear in the report. `priority` stays raw here too and is only
/// interpreted when rows are built.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub begin_line: String,
    pub end_line: String,
    pub begin_column: String,
    pub end_column: String,
    pub ruleset: String,
    pub rule: String,
    pub priority: String,
    /// Already cleaned: no newlines, single spaces, trimmed
    pub description: String,
}

/// PMD severity scale, 1 (most severe) to 5 (least severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    MediumHigh,
    Medium,
    MediumLow,
    Low,
}

impl Priority {
    /// Interpret a `priority` attribute. Only the exact strings "1"
    /// through "5" are recognized; anything else (out of range,
    /// non-numeric, missing) is an `InvalidPriority` error.
    pub fn from_attr(text: &str) -> Result<Self, ConvertError> {
        match text {
            "1" => Ok(Priority::High),
            "2" => Ok(Priority::MediumHigh),
            "3" => Ok(Priority::Medium),
            "4" => Ok(Priority::MediumLow),
            "5" => Ok(Priority::Low),
            other => Err(ConvertError::InvalidPriority(other.to_string())),
        }
    }

    /// Human-readable name, PMD convention.
    pub fn name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::MediumHigh => "Medium High",
            Priority::Medium => "Medium",
            Priority::MediumLow => "Medium Low",
            Priority::Low => "Low",
        }
    }
}
