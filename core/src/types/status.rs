use super::field::{Field, FIELD_COUNT};
use std::fmt;

/// Outcome of locating one field's markers
///
/// Kept apart from [`FieldRecord`](super::FieldRecord): a record stores an
/// empty string for both `MarkerMissing` and `EmptySpan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum FieldStatus {
    /// Markers located and a span was sliced out
    Found,
    /// A start or end marker does not occur in the text
    MarkerMissing,
    /// Markers located but only whitespace (or nothing) lies between them
    EmptySpan,
}

impl FieldStatus {
    /// Returns whether a span was sliced out
    pub fn is_found(&self) -> bool {
        matches!(self, FieldStatus::Found)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            FieldStatus::Found => "found",
            FieldStatus::MarkerMissing => "marker missing",
            FieldStatus::EmptySpan => "empty span",
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Per-field marker diagnostics for one report, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDiagnostics {
    statuses: [FieldStatus; FIELD_COUNT],
}

impl FieldDiagnostics {
    /// Creates diagnostics from statuses given in [`Field::ALL`] order
    pub fn new(statuses: [FieldStatus; FIELD_COUNT]) -> Self {
        Self { statuses }
    }

    /// Returns the status of `field`
    pub fn get(&self, field: Field) -> FieldStatus {
        self.statuses[field.index()]
    }

    /// Iterates `(field, status)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldStatus)> + '_ {
        Field::ALL.iter().copied().zip(self.statuses.iter().copied())
    }

    /// Fields whose markers could not be located
    pub fn missing_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, status)| *status == FieldStatus::MarkerMissing)
            .map(|(field, _)| field)
            .collect()
    }

    /// Checks if every field was found
    pub fn all_found(&self) -> bool {
        self.statuses.iter().all(FieldStatus::is_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let mut statuses = [FieldStatus::Found; FIELD_COUNT];
        statuses[Field::Technique.index()] = FieldStatus::MarkerMissing;
        statuses[Field::ElecSig.index()] = FieldStatus::EmptySpan;
        let diagnostics = FieldDiagnostics::new(statuses);

        assert_eq!(diagnostics.missing_fields(), vec![Field::Technique]);
        assert_eq!(diagnostics.get(Field::ElecSig), FieldStatus::EmptySpan);
        assert!(!diagnostics.all_found());
    }

    #[test]
    fn test_iter_column_order() {
        let diagnostics = FieldDiagnostics::new([FieldStatus::Found; FIELD_COUNT]);
        let fields: Vec<Field> = diagnostics.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert!(diagnostics.all_found());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FieldStatus::MarkerMissing.to_string(), "marker missing");
        assert!(FieldStatus::Found.is_found());
        assert!(!FieldStatus::EmptySpan.is_found());
    }
}
