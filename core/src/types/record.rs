use super::field::{Field, FIELD_COUNT};

/// Extracted fields of one radiology report
///
/// Every record carries all nine columns. A section whose markers could
/// not be located is stored as an empty string, so a record never has an
/// absent field. `raw_text` always holds the unmodified report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "PascalCase"))]
pub struct FieldRecord {
    /// Exam description preceding the date marker
    pub scan_type: String,

    /// Text following the date marker, up to the clinical information
    pub scan_date: String,

    /// Clinical information / indication
    pub clin_info: String,

    /// Technique description
    pub technique: String,

    /// Prior studies used for comparison
    pub comparison: String,

    /// Findings section
    pub findings: String,

    /// Impression section
    pub impression: String,

    /// Electronic signature line
    pub elec_sig: String,

    /// Full unmodified report text
    pub raw_text: String,
}

impl FieldRecord {
    /// Builds a record from values given in [`Field::ALL`] order
    pub fn from_columns(values: [String; FIELD_COUNT]) -> Self {
        let [
            scan_type,
            scan_date,
            clin_info,
            technique,
            comparison,
            findings,
            impression,
            elec_sig,
            raw_text,
        ] = values;
        Self {
            scan_type,
            scan_date,
            clin_info,
            technique,
            comparison,
            findings,
            impression,
            elec_sig,
            raw_text,
        }
    }

    /// Returns the value stored for `field`
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ScanType => &self.scan_type,
            Field::ScanDate => &self.scan_date,
            Field::ClinInfo => &self.clin_info,
            Field::Technique => &self.technique,
            Field::Comparison => &self.comparison,
            Field::Findings => &self.findings,
            Field::Impression => &self.impression,
            Field::ElecSig => &self.elec_sig,
            Field::RawText => &self.raw_text,
        }
    }

    /// Returns all values in column order
    pub fn values(&self) -> [&str; FIELD_COUNT] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Number of extracted sections (everything but `RawText`) that are non-empty
    pub fn populated_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| **field != Field::RawText)
            .filter(|field| !self.get(**field).is_empty())
            .count()
    }

    /// Checks if every extracted section is non-empty
    pub fn is_fully_populated(&self) -> bool {
        self.populated_count() == FIELD_COUNT - 1
    }
}
