//! Error types for report conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the conversion pipeline itself.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The report is not well-formed XML
    #[error("malformed PMD report: {0}")]
    Parse(#[from] roxmltree::Error),

    /// A violation carried a priority outside the PMD 1-5 scale
    #[error("violation priority {0:?} is outside the PMD 1-5 range")]
    InvalidPriority(String),

    /// The workbook could not be assembled or serialized
    #[error("failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// The report could not be read or the workbook could not be written
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from the build-integration entry point.
///
/// A missing report is a hard failure here, unlike the silent no-op of
/// `convert` when handed a nonexistent path directly.
#[derive(Error, Debug)]
pub enum PluginError {
    /// `pmd.xml` was not found in the build output directory
    #[error("pmd.xml not found in {} directory", .dir.display())]
    ReportNotFound { dir: PathBuf },

    /// The report exists but conversion failed; the cause is preserved
    #[error("cannot convert PMD file: {0}")]
    Conversion(#[source] ConvertError),
}
