//! Python exception types for radparse
//!
//! Field extraction never raises; these exceptions only surface from
//! reading reports off disk.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

use crate::error::RadparseError;

// Base exception
create_exception!(
    radparse,
    PyRadparseError,
    PyException,
    "Base exception for all radparse errors"
);

create_exception!(
    radparse,
    PyReportIOError,
    PyRadparseError,
    "Report directory or file could not be read"
);

/// Convert Rust RadparseError to appropriate Python exception
pub fn convert_error(err: RadparseError) -> PyErr {
    match err {
        RadparseError::NotADirectory(path) => {
            PyReportIOError::new_err(format!("Not a directory: {}", path))
        }
        RadparseError::IoError(e) => PyReportIOError::new_err(format!("IO error: {}", e)),
        RadparseError::CsvError(msg) => PyRadparseError::new_err(msg),
        RadparseError::JsonError(msg) => PyRadparseError::new_err(msg),
    }
}
