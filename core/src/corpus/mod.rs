//! Corpus assembly and table output
//!
//! Drives the field extractor over an ordered collection of reports and
//! serializes the resulting table.

mod assembler;
mod writer;

pub use assembler::{assemble, Corpus, CorpusSummary};
