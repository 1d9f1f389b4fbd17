/// Report conversion pipeline
///
/// This module handles:
/// - The low-level `convert` routine (read, parse, render, write)
/// - The build-integration entry point over a build output directory
/// - Atomic replacement of the output file
use crate::error::{ConvertError, PluginError};
use crate::parse;
use crate::workbook;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Report filename expected inside a build output directory.
pub const REPORT_FILE: &str = "pmd.xml";

/// Workbook filename written next to the report.
pub const WORKBOOK_FILE: &str = "pmd.xlsx";

/// Convert the PMD report at `input` into a workbook at `output`.
///
/// A nonexistent input is a silent no-op: nothing is created and an
/// existing file at `output` is left untouched. Otherwise the report is
/// read and rendered entirely in memory before any byte is written, so
/// passing the same path for both arguments is safe.
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    if !input.exists() {
        debug!("{} does not exist, nothing to convert", input.display());
        return Ok(());
    }

    let xml = fs::read_to_string(input)?;
    let report = parse::parse_report(&xml)?;
    let rows = workbook::build_rows(&report)?;
    let bytes = workbook::render_workbook(&rows)?;
    write_replacing(output, &bytes)?;

    debug!("wrote {} sheet rows to {}", rows.len() + 1, output.display());
    Ok(())
}

/// Write `bytes` through a temp file in the destination directory, then
/// rename over `path`. A failed write never leaves a partial workbook at
/// the output path.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| ConvertError::Io(e.error))?;
    Ok(())
}

/// Build-step entry point: convert `<dir>/pmd.xml` to `<dir>/pmd.xlsx`.
///
/// Unlike `convert`, a missing report here is a hard failure; the build
/// requested a conversion that cannot happen.
pub fn convert_build_dir(dir: &Path) -> Result<(), PluginError> {
    let input = dir.join(REPORT_FILE);
    let output = dir.join(WORKBOOK_FILE);

    if !input.exists() {
        return Err(PluginError::ReportNotFound { dir: dir.to_path_buf() });
    }

    convert(&input, &output).map_err(PluginError::Conversion)
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
