//! Reading radiology reports from disk

use crate::error::{RadparseError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of report files picked up by default
pub const DEFAULT_EXTENSION: &str = "txt";

/// One report read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// Path the report was read from
    pub path: PathBuf,

    /// Full report text
    pub text: String,
}

/// Lists report files directly inside `directory`
///
/// Only regular, non-hidden files whose extension is exactly `extension`
/// are returned, the same set a `*.txt` glob picks up. The list is sorted
/// by path so that row order does not depend on the filesystem's listing
/// order.
pub fn collect_report_files(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(RadparseError::NotADirectory(
            directory.display().to_string(),
        ));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        // Dotfiles are skipped, as shell globs do
        let is_hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        let is_report = !is_hidden && path.extension().is_some_and(|ext| ext == extension);
        if is_report {
            files.push(path);
        } else {
            debug!("Ignoring {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Reads one report
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so every
/// file yields a report. Line endings are normalized to `\n`.
pub fn read_report(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(normalize_newlines(text))
}

/// Converts `\r\n` and lone `\r` line endings to `\n`
///
/// Block markers such as `"\n\nFINDINGS:\n\n"` only match LF text.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads every report file in `directory`, in sorted path order
pub fn read_reports(directory: &Path, extension: &str) -> Result<Vec<ReportFile>> {
    collect_report_files(directory, extension)?
        .into_iter()
        .map(|path| {
            let text = read_report(&path)?;
            Ok(ReportFile { path, text })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ReportExtractor;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_collect_report_files_filters_extension() {
        let temp_dir = TempDir::new().unwrap();

        File::create(temp_dir.path().join("b.txt")).unwrap();
        File::create(temp_dir.path().join("a.txt")).unwrap();
        File::create(temp_dir.path().join("c.TXT")).unwrap(); // uppercase
        File::create(temp_dir.path().join("d.csv")).unwrap();
        File::create(temp_dir.path().join("noext")).unwrap();
        File::create(temp_dir.path().join(".hidden.txt")).unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let files = collect_report_files(temp_dir.path(), DEFAULT_EXTENSION).unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_collect_report_files_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("one.rpt")).unwrap();
        File::create(temp_dir.path().join("two.txt")).unwrap();

        let files = collect_report_files(temp_dir.path(), "rpt").unwrap();
        assert_eq!(files, vec![temp_dir.path().join("one.rpt")]);
    }

    #[test]
    fn test_collect_report_files_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.txt");
        File::create(&file_path).unwrap();

        let err = collect_report_files(&file_path, DEFAULT_EXTENSION).unwrap_err();
        assert!(matches!(err, RadparseError::NotADirectory(_)));

        let missing = temp_dir.path().join("missing");
        assert!(collect_report_files(&missing, DEFAULT_EXTENSION).is_err());
    }

    #[test]
    fn test_read_reports_in_sorted_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("2.txt"), "second").unwrap();
        fs::write(temp_dir.path().join("1.txt"), "first").unwrap();

        let reports = read_reports(temp_dir.path(), DEFAULT_EXTENSION).unwrap();

        let texts: Vec<&str> = reports.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(reports[0].path, temp_dir.path().join("1.txt"));
    }

    #[test]
    fn test_read_report_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"caf\xe9 **DATE<[**").unwrap();

        let text = read_report(&file_path).unwrap();
        assert_eq!(text, "caf\u{FFFD} **DATE<[**");
    }

    #[test]
    fn test_read_report_crlf_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let report = "CT **DATE<[**2020 CLINICAL INFORMATION: pain TECHNIQUE: axial \
COMPARISON: none\n\nFINDINGS:\n\nclear\n\nIMPRESSION:\n\nnormal \
Report Electronically Signed: Dr. X\n";
        fs::write(
            temp_dir.path().join("crlf.txt"),
            report.replace('\n', "\r\n"),
        )
        .unwrap();
        fs::write(temp_dir.path().join("cr.txt"), report.replace('\n', "\r")).unwrap();

        let reports = read_reports(temp_dir.path(), DEFAULT_EXTENSION).unwrap();
        assert_eq!(reports.len(), 2);

        for report_file in &reports {
            assert_eq!(report_file.text, report);

            let record = ReportExtractor::extract(&report_file.text);
            assert_eq!(record.comparison, "none");
            assert_eq!(record.findings, "clear");
            assert_eq!(record.impression, "normal");
            assert_eq!(record.elec_sig, "Dr. X");
        }
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd".to_string()), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("\r\n\r\n".to_string()), "\n\n");
        assert_eq!(normalize_newlines("plain".to_string()), "plain");
    }

    #[test]
    fn test_read_reports_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let reports = read_reports(temp_dir.path(), DEFAULT_EXTENSION).unwrap();
        assert!(reports.is_empty());
    }
}
