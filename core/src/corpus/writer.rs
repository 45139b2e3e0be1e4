use super::assembler::Corpus;
use crate::error::Result;
use csv::Writer;
use log::{debug, info};
use std::io;
use std::path::Path;

impl Corpus {
    /// Writes the corpus as CSV
    ///
    /// The header is an empty index column followed by the nine column
    /// names. Each row starts with its zero-based position. Values holding
    /// commas, quotes or line breaks are quoted.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(std::iter::once("").chain(self.columns()))?;
        for (index, record) in self.iter().enumerate() {
            let index = index.to_string();
            csv_writer.write_record(std::iter::once(index.as_str()).chain(record.values()))?;
        }

        csv_writer.flush()?;
        debug!("Wrote {} CSV rows", self.len());
        Ok(())
    }

    /// Writes the corpus as CSV to a file, replacing it if present
    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))?;
        info!("Wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }

    /// Renders the corpus as a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
