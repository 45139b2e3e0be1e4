//! Python wrapper for FieldRecord

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::types::{Field, FieldRecord};

/// Extracted fields of one radiology report
///
/// Every attribute is a string; sections whose markers were not found
/// are empty strings.
#[pyclass(name = "FieldRecord", module = "radparse")]
#[derive(Clone)]
pub struct PyFieldRecord {
    pub(crate) inner: FieldRecord,
}

impl From<FieldRecord> for PyFieldRecord {
    fn from(inner: FieldRecord) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyFieldRecord {
    #[getter]
    fn scan_type(&self) -> String {
        self.inner.scan_type.clone()
    }

    #[getter]
    fn scan_date(&self) -> String {
        self.inner.scan_date.clone()
    }

    #[getter]
    fn clin_info(&self) -> String {
        self.inner.clin_info.clone()
    }

    #[getter]
    fn technique(&self) -> String {
        self.inner.technique.clone()
    }

    #[getter]
    fn comparison(&self) -> String {
        self.inner.comparison.clone()
    }

    #[getter]
    fn findings(&self) -> String {
        self.inner.findings.clone()
    }

    #[getter]
    fn impression(&self) -> String {
        self.inner.impression.clone()
    }

    #[getter]
    fn elec_sig(&self) -> String {
        self.inner.elec_sig.clone()
    }

    #[getter]
    fn raw_text(&self) -> String {
        self.inner.raw_text.clone()
    }

    /// Convert to a dict keyed by column name
    ///
    /// Keys follow table column order, so a list of these dicts can be
    /// handed straight to ``pandas.DataFrame``.
    ///
    /// Example:
    ///     >>> import pandas as pd
    ///     >>> from radparse import assemble_corpus
    ///     >>> df = pd.DataFrame([r.to_dict() for r in assemble_corpus(texts)])
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for field in Field::ALL {
            dict.set_item(field.column_name(), self.inner.get(field))?;
        }
        Ok(dict)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "FieldRecord(scan_type={:?}, scan_date={:?}, populated={})",
            self.inner.scan_type,
            self.inner.scan_date,
            self.inner.populated_count()
        )
    }
}
