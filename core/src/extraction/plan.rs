use super::markers::{
    CLINICAL_INFORMATION, COMPARISON, COMPARISON_INLINE, DATE_OPEN, DATE_PREFIX, FINDINGS_BLOCK,
    IMPRESSION_BLOCK, SIGNATURE, SIGNATURE_PREFIX, TECHNIQUE, TECHNIQUE_INLINE,
};
use super::primitives::{slice_after, slice_before, slice_between, Slice};
use crate::types::{Field, FieldStatus, FIELD_COUNT};

/// Slicing rule used to derive one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text before the first occurrence of a marker
    Before(&'static str),
    /// Text between the first `start` and the last `end`
    Between {
        start: &'static str,
        end: &'static str,
    },
    /// Text after the first occurrence of a marker
    After(&'static str),
    /// The whole report, untouched
    Identity,
}

/// Field extraction plan, indexed by [`Field::index`]
pub const PLAN: [(Field, Rule); FIELD_COUNT] = [
    (Field::ScanType, Rule::Before(DATE_PREFIX)),
    (
        Field::ScanDate,
        Rule::Between {
            start: DATE_OPEN,
            end: CLINICAL_INFORMATION,
        },
    ),
    (
        Field::ClinInfo,
        Rule::Between {
            start: CLINICAL_INFORMATION,
            end: TECHNIQUE_INLINE,
        },
    ),
    (
        Field::Technique,
        Rule::Between {
            start: TECHNIQUE,
            end: COMPARISON_INLINE,
        },
    ),
    (
        Field::Comparison,
        Rule::Between {
            start: COMPARISON,
            end: FINDINGS_BLOCK,
        },
    ),
    (
        Field::Findings,
        Rule::Between {
            start: FINDINGS_BLOCK,
            end: IMPRESSION_BLOCK,
        },
    ),
    (
        Field::Impression,
        Rule::Between {
            start: IMPRESSION_BLOCK,
            end: SIGNATURE,
        },
    ),
    (Field::ElecSig, Rule::After(SIGNATURE_PREFIX)),
    (Field::RawText, Rule::Identity),
];

/// Characters stripped from both ends of a sliced section
///
/// Unicode whitespace plus the ASCII file, group, record and unit
/// separators (`\x1c`..=`\x1f`), which `char::is_whitespace` leaves alone.
pub fn is_section_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trims section padding from both ends
pub fn trim_section(s: &str) -> &str {
    s.trim_matches(is_section_padding)
}

/// Returns the rule used to derive `field`
pub fn rule_for(field: Field) -> Rule {
    PLAN[field.index()].1
}

impl Rule {
    /// Applies the rule to a report without trimming
    pub fn apply<'a>(&self, text: &'a str) -> Slice<'a> {
        match *self {
            Rule::Before(marker) => slice_before(text, marker),
            Rule::Between { start, end } => slice_between(text, start, end),
            Rule::After(marker) => slice_after(text, marker),
            Rule::Identity => Slice::Found(text),
        }
    }

    /// Applies the rule and returns the field value
    ///
    /// Sliced sections are trimmed with [`trim_section`]. `Identity`
    /// returns the report verbatim.
    pub fn value<'a>(&self, text: &'a str) -> &'a str {
        match self {
            Rule::Identity => text,
            _ => trim_section(self.apply(text).as_str()),
        }
    }

    /// Classifies the outcome of applying the rule
    ///
    /// A span holding only section padding counts as `EmptySpan`.
    pub fn status(&self, text: &str) -> FieldStatus {
        if matches!(self, Rule::Identity) {
            return FieldStatus::Found;
        }
        match self.apply(text) {
            Slice::Missing => FieldStatus::MarkerMissing,
            Slice::Empty => FieldStatus::EmptySpan,
            Slice::Found(s) if trim_section(s).is_empty() => FieldStatus::EmptySpan,
            Slice::Found(_) => FieldStatus::Found,
        }
    }
}
