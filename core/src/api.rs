use crate::extraction::PLAN;
use crate::types::{FieldDiagnostics, FieldRecord};

/// Main extractor for radiology report fields
///
/// Slices a free-text report into its nine named columns using fixed
/// section markers. Extraction is total: a report with missing or
/// malformed markers yields empty strings for the affected fields.
///
/// # Example
///
/// ```
/// use radparse_core::ReportExtractor;
///
/// let text = "CT CHEST **DATE<[**2020-01-02]** CLINICAL INFORMATION: Cough. \
///             TECHNIQUE: Axial. COMPARISON: None.\n\nFINDINGS:\n\nClear lungs.\
///             \n\nIMPRESSION:\n\nNormal. Report Electronically Signed: Dr. X";
///
/// let record = ReportExtractor::extract(text);
///
/// assert_eq!(record.scan_type, "CT CHEST");
/// assert_eq!(record.clin_info, "Cough.");
/// assert_eq!(record.findings, "Clear lungs.");
/// assert_eq!(record.elec_sig, "Dr. X");
/// assert_eq!(record.raw_text, text);
/// ```
pub struct ReportExtractor;

impl ReportExtractor {
    /// Extracts all fields from a report
    pub fn extract(text: &str) -> FieldRecord {
        FieldRecord::from_columns(PLAN.map(|(_, rule)| rule.value(text).to_string()))
    }

    /// Reports, per field, whether its markers were located
    ///
    /// The returned statuses follow the same plan as [`extract`](Self::extract),
    /// so an empty field in the record can be told apart as
    /// `MarkerMissing` or `EmptySpan`.
    pub fn inspect(text: &str) -> FieldDiagnostics {
        FieldDiagnostics::new(PLAN.map(|(_, rule)| rule.status(text)))
    }

    /// Extracts all fields together with their diagnostics
    pub fn extract_with_diagnostics(text: &str) -> (FieldRecord, FieldDiagnostics) {
        (Self::extract(text), Self::inspect(text))
    }
}
