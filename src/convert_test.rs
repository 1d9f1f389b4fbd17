/// Tests for the conversion pipeline
#[cfg(test)]
mod tests {
    use crate::convert::{REPORT_FILE, WORKBOOK_FILE, convert, convert_build_dir};
    use crate::error::{ConvertError, PluginError};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<pmd version="6.55.0">
    <file name="/p/src/main/java/com/x/A.java">
        <violation beginline="3" endline="7" begincolumn="1" endcolumn="20"
                   rule="EmptyCatchBlock" ruleset="Error Prone" priority="3">
            Avoid empty
            catch blocks
        </violation>
    </file>
</pmd>
"#;

    fn assert_is_workbook(path: &Path) {
        let bytes = fs::read(path).unwrap();
        assert!(bytes.len() > 2, "workbook at {} should not be empty", path.display());
        assert_eq!(&bytes[..2], b"PK", "workbook at {} should be a zip container", path.display());
    }

    #[test]
    fn missing_input_is_a_silent_noop() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.xml");
        let output = dir.path().join("out.xlsx");

        convert(&input, &output).unwrap();

        assert!(!output.exists(), "no output should appear for a missing input");
    }

    #[test]
    fn missing_input_leaves_existing_output_untouched() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.xml");
        let output = dir.path().join("out.xlsx");
        fs::write(&output, b"previous contents").unwrap();

        convert(&input, &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"previous contents");
    }

    #[test]
    fn converts_report_to_workbook() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.xml");
        let output = dir.path().join("report.xlsx");
        fs::write(&input, REPORT).unwrap();

        convert(&input, &output).unwrap();

        assert_is_workbook(&output);
        // The input is read-only to the pipeline
        assert_eq!(fs::read_to_string(&input).unwrap(), REPORT);
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.xml");
        let output = dir.path().join("report.xlsx");
        fs::write(&input, REPORT).unwrap();
        fs::write(&output, b"stale").unwrap();

        convert(&input, &output).unwrap();

        assert_is_workbook(&output);
    }

    #[test]
    fn same_path_for_input_and_output_is_safe() {
        // Standalone mode reuses pmd.xml as both ends of the pipeline.
        // Parsing and rendering finish in memory before the write starts.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(REPORT_FILE);
        fs::write(&path, REPORT).unwrap();

        convert(&path, &path).unwrap();

        assert_is_workbook(&path);
    }

    #[test]
    fn malformed_report_fails_without_touching_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.xml");
        let output = dir.path().join("report.xlsx");
        fs::write(&input, "<pmd><file></pmd>").unwrap();

        let err = convert(&input, &output);

        assert!(matches!(err, Err(ConvertError::Parse(_))));
        assert!(!output.exists(), "failed conversion must not leave partial output");
    }

    #[test]
    fn invalid_priority_fails_without_touching_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.xml");
        let output = dir.path().join("report.xlsx");
        let report = REPORT.replace("priority=\"3\"", "priority=\"9\"");
        fs::write(&input, report).unwrap();

        let err = convert(&input, &output);

        assert!(matches!(err, Err(ConvertError::InvalidPriority(ref v)) if v == "9"));
        assert!(!output.exists());
    }

    #[test]
    fn build_dir_without_report_is_a_hard_failure() {
        let dir = TempDir::new().unwrap();

        let err = convert_build_dir(dir.path());

        assert!(
            matches!(err, Err(PluginError::ReportNotFound { dir: ref d }) if d.as_path() == dir.path())
        );
    }

    #[test]
    fn build_dir_conversion_writes_sibling_workbook() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(REPORT_FILE), REPORT).unwrap();

        convert_build_dir(dir.path()).unwrap();

        assert_is_workbook(&dir.path().join(WORKBOOK_FILE));
    }

    #[test]
    fn build_dir_conversion_failure_wraps_the_cause() {
        use std::error::Error;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(REPORT_FILE), "not xml at all <").unwrap();

        let err = convert_build_dir(dir.path()).unwrap_err();

        assert!(matches!(err, PluginError::Conversion(_)));
        assert!(err.source().is_some(), "conversion failure should carry its cause");
        assert!(!dir.path().join(WORKBOOK_FILE).exists());
    }
}
