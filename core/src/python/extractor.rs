//! Python functions for extraction and corpus assembly

use pyo3::prelude::*;

use super::errors::convert_error;
use super::record::PyFieldRecord;
use super::utils::path_to_pathbuf;
use crate::types::Field;

/// Extract fields from one report
///
/// Args:
///     text: Full report text
///
/// Returns:
///     FieldRecord: Extracted fields (never raises)
///
/// Example:
///     >>> from radparse import extract_report
///     >>> record = extract_report(open("note.txt").read())
///     >>> print(record.impression)
#[pyfunction]
#[pyo3(name = "extract_report")]
pub fn py_extract_report(text: &str) -> PyFieldRecord {
    crate::api::ReportExtractor::extract(text).into()
}

/// Extract fields from each report, preserving input order
///
/// Args:
///     texts: List of report texts
///
/// Returns:
///     list[FieldRecord]: One record per input text
#[pyfunction]
#[pyo3(name = "assemble_corpus")]
pub fn py_assemble_corpus(texts: Vec<String>) -> Vec<PyFieldRecord> {
    crate::corpus::assemble(&texts)
        .into_rows()
        .into_iter()
        .map(PyFieldRecord::from)
        .collect()
}

/// Read every report in a directory and extract its fields
///
/// Args:
///     directory: Directory containing reports (str or pathlib.Path)
///     extension: Extension of report files (default: "txt")
///
/// Returns:
///     list[FieldRecord]: One record per file, in sorted path order
///
/// Raises:
///     ReportIOError: If the directory or a report cannot be read
#[pyfunction]
#[pyo3(name = "read_corpus", signature = (directory, extension = "txt"))]
pub fn py_read_corpus(
    directory: &Bound<'_, PyAny>,
    extension: &str,
) -> PyResult<Vec<PyFieldRecord>> {
    let directory = path_to_pathbuf(directory)?;
    let reports = crate::source::read_reports(&directory, extension).map_err(convert_error)?;
    Ok(crate::corpus::assemble(reports.iter().map(|r| r.text.as_str()))
        .into_rows()
        .into_iter()
        .map(PyFieldRecord::from)
        .collect())
}

/// Column names in table order
#[pyfunction]
#[pyo3(name = "column_names")]
pub fn py_column_names() -> Vec<&'static str> {
    Field::ALL.iter().map(|field| field.column_name()).collect()
}
