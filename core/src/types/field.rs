use std::fmt;

/// Number of columns in every extracted record
pub const FIELD_COUNT: usize = 9;

/// Named column of an extracted radiology report
///
/// Variants are declared in table column order; [`Field::ALL`] is the
/// canonical ordering used by records, corpora and CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum Field {
    ScanType,
    ScanDate,
    ClinInfo,
    Technique,
    Comparison,
    Findings,
    Impression,
    ElecSig,
    RawText,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::ScanType,
        Field::ScanDate,
        Field::ClinInfo,
        Field::Technique,
        Field::Comparison,
        Field::Findings,
        Field::Impression,
        Field::ElecSig,
        Field::RawText,
    ];

    /// Returns the column header name
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::ScanType => "ScanType",
            Field::ScanDate => "ScanDate",
            Field::ClinInfo => "ClinInfo",
            Field::Technique => "Technique",
            Field::Comparison => "Comparison",
            Field::Findings => "Findings",
            Field::Impression => "Impression",
            Field::ElecSig => "ElecSig",
            Field::RawText => "RawText",
        }
    }

    /// Returns the zero-based column position
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a field from its column name (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.column_name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_column_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert_eq!(Field::ALL.first(), Some(&Field::ScanType));
        assert_eq!(Field::ALL.last(), Some(&Field::RawText));
    }

    #[test]
    fn test_column_names() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.column_name()).collect();
        assert_eq!(
            names,
            vec![
                "ScanType",
                "ScanDate",
                "ClinInfo",
                "Technique",
                "Comparison",
                "Findings",
                "Impression",
                "ElecSig",
                "RawText",
            ]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Field::from_str("findings"), Some(Field::Findings));
        assert_eq!(Field::from_str(" ElecSig "), Some(Field::ElecSig));
        assert_eq!(Field::from_str("Impressions"), None);
        assert_eq!(Field::from_str(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Field::ClinInfo.to_string(), "ClinInfo");
    }
}
