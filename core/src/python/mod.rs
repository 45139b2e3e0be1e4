//! Python bindings for radparse
//!
//! This module provides PyO3 bindings enabling Python users to extract
//! radiology report fields and build corpora for pandas.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod extractor;
mod record;
mod utils;

pub use errors::*;
pub use extractor::*;
pub use record::*;

/// Python module definition
#[pymodule]
fn _radparse(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "RadparseError",
        py.get_type_bound::<errors::PyRadparseError>(),
    )?;
    m.add(
        "ReportIOError",
        py.get_type_bound::<errors::PyReportIOError>(),
    )?;

    m.add_class::<PyFieldRecord>()?;

    m.add_function(wrap_pyfunction!(py_extract_report, m)?)?;
    m.add_function(wrap_pyfunction!(py_assemble_corpus, m)?)?;
    m.add_function(wrap_pyfunction!(py_read_corpus, m)?)?;
    m.add_function(wrap_pyfunction!(py_column_names, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
