//! Core type definitions for extracted radiology reports
//!
//! This module provides the fundamental types used throughout the radparse library:
//! - [`Field`]: The nine named columns, in table order
//! - [`FieldRecord`]: Extracted fields of one report
//! - [`FieldStatus`]: Whether a field's markers were located
//! - [`FieldDiagnostics`]: Per-field statuses for one report

mod field;
mod record;
mod status;

pub use field::{Field, FIELD_COUNT};
pub use record::FieldRecord;
pub use status::{FieldDiagnostics, FieldStatus};
