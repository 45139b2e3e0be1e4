//! Utility functions for Python bindings conversions

use pyo3::prelude::*;
use std::path::PathBuf;

/// Converts a Python path-like object (str or pathlib.Path) to PathBuf
pub fn path_to_pathbuf(path: &Bound<'_, PyAny>) -> PyResult<PathBuf> {
    if let Ok(s) = path.extract::<String>() {
        return Ok(PathBuf::from(s));
    }

    // pathlib.Path and other os.PathLike objects
    if let Ok(fspath) = path.call_method0("__fspath__") {
        let path_str: String = fspath.extract()?;
        return Ok(PathBuf::from(path_str));
    }

    Err(pyo3::exceptions::PyTypeError::new_err(
        "Path must be a string or path-like object",
    ))
}
