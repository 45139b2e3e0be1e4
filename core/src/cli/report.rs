use crate::types::{Field, FieldDiagnostics, FieldRecord};
use std::fmt;

/// Text report formatter for an extracted radiology report
pub struct TextReport<'a> {
    record: &'a FieldRecord,
    diagnostics: &'a FieldDiagnostics,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(record: &'a FieldRecord, diagnostics: &'a FieldDiagnostics) -> Self {
        Self {
            record,
            diagnostics,
        }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Radiology Report Fields")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;

        for (field, status) in self.diagnostics.iter() {
            if field == Field::RawText {
                continue;
            }
            let value = self.record.get(field);
            if status.is_found() {
                writeln!(f, "{:<12}{}", format!("{}:", field), value)?;
            } else {
                writeln!(f, "{:<12}({})", format!("{}:", field), status)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Summary")?;
        writeln!(f, "-------")?;
        writeln!(
            f,
            "Populated:  {}/{}",
            self.record.populated_count(),
            Field::ALL.len() - 1
        )?;
        writeln!(f, "Characters: {}", self.record.raw_text.chars().count())?;

        Ok(())
    }
}
