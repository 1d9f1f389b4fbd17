/// PMD report parsing
///
/// This module handles:
/// - Parsing the report XML into the `Report` model
/// - Walking `file` and `violation` elements in document order
/// - Cleaning violation descriptions for single-cell display
use crate::error::ConvertError;
use crate::model::{FileEntry, Report, Violation};
use log::debug;
use roxmltree::{Document, Node};

/// Parse a PMD report document into the in-memory model.
///
/// `file` elements are picked up anywhere in the document, not just as
/// children of the root, and each file's violations are collected from
/// any nesting depth beneath it. Missing attributes read as empty
/// strings, matching the DOM contract PMD tooling has always relied on.
pub fn parse_report(xml: &str) -> Result<Report, ConvertError> {
    let doc = Document::parse(xml)?;

    let files: Vec<FileEntry> = doc
        .descendants()
        .filter(|n| n.has_tag_name("file"))
        .map(|file| FileEntry {
            path: file.attribute("name").unwrap_or("").to_string(),
            violations: file
                .descendants()
                .filter(|n| n.has_tag_name("violation"))
                .map(read_violation)
                .collect(),
        })
        .collect();

    let report = Report { files };
    debug!(
        "parsed report: {} files, {} violations",
        report.files.len(),
        report.violation_count()
    );
    Ok(report)
}

fn read_violation(node: Node<'_, '_>) -> Violation {
    let attr = |name: &str| node.attribute(name).unwrap_or("").to_string();
    Violation {
        begin_line: attr("beginline"),
        end_line: attr("endline"),
        begin_column: attr("begincolumn"),
        end_column: attr("endcolumn"),
        ruleset: attr("ruleset"),
        rule: attr("rule"),
        priority: attr("priority"),
        description: clean_description(&text_content(node)),
    }
}

/// Concatenated text of the element and all its descendants.
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants().filter(|n| n.is_text()).filter_map(|n| n.text()).collect()
}

/// Normalize a violation description to a single display line.
///
/// Newlines (`\n` and `\r`) are dropped, runs of spaces collapse to one,
/// and the result is trimmed. Idempotent: cleaning a clean string is a
/// no-op.
pub fn clean_description(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut prev_space = false;
    for c in raw.chars() {
        match c {
            '\n' | '\r' => {}
            ' ' => {
                if !prev_space {
                    cleaned.push(' ');
                }
                prev_space = true;
            }
            other => {
                cleaned.push(other);
                prev_space = false;
            }
        }
    }
    cleaned.trim().to_string()
}
