use crate::api::ReportExtractor;
use crate::types::{Field, FieldRecord, FIELD_COUNT};
use log::debug;

/// Table of extracted reports, one row per input document
///
/// Rows keep the order in which documents were supplied. The column
/// schema is fixed to [`Field::ALL`] and is available even when the
/// corpus has no rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Corpus {
    rows: Vec<FieldRecord>,
}

impl Corpus {
    /// Column names in table order
    pub fn columns(&self) -> [&'static str; FIELD_COUNT] {
        Field::ALL.map(|field| field.column_name())
    }

    /// All rows in input order
    pub fn rows(&self) -> &[FieldRecord] {
        &self.rows
    }

    /// Row at `index`, if any
    pub fn get(&self, index: usize) -> Option<&FieldRecord> {
        self.rows.get(index)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the corpus has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in input order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRecord> {
        self.rows.iter()
    }

    /// Consumes the corpus, returning its rows
    pub fn into_rows(self) -> Vec<FieldRecord> {
        self.rows
    }

    /// Counts rows and non-empty values per column
    pub fn summary(&self) -> CorpusSummary {
        let mut populated = [0usize; FIELD_COUNT];
        for record in &self.rows {
            for (count, value) in populated.iter_mut().zip(record.values()) {
                if !value.is_empty() {
                    *count += 1;
                }
            }
        }
        CorpusSummary {
            rows: self.rows.len(),
            populated,
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a FieldRecord;
    type IntoIter = std::slice::Iter<'a, FieldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Row and per-column fill counts for a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSummary {
    /// Number of rows
    pub rows: usize,

    /// Non-empty values per column, indexed by [`Field::index`]
    pub populated: [usize; FIELD_COUNT],
}

impl CorpusSummary {
    /// Non-empty values in the column for `field`
    pub fn populated(&self, field: Field) -> usize {
        self.populated[field.index()]
    }
}

/// Extracts every document and collects the records into a corpus
///
/// Rows are produced in the order the documents are yielded; nothing is
/// reordered, merged or dropped.
///
/// # Example
///
/// ```
/// use radparse_core::assemble;
///
/// let corpus = assemble(["XR **DATE<[**1", "CT **DATE<[**2"]);
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.rows()[1].scan_type, "CT");
///
/// let empty = assemble(Vec::<String>::new());
/// assert!(empty.is_empty());
/// assert_eq!(empty.columns().len(), 9);
/// ```
pub fn assemble<I, S>(documents: I) -> Corpus
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rows: Vec<FieldRecord> = documents
        .into_iter()
        .map(|doc| ReportExtractor::extract(doc.as_ref()))
        .collect();
    debug!("Assembled corpus with {} rows", rows.len());
    Corpus { rows }
}
