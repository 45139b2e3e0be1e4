pub mod api;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod extraction;
pub mod source;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use api::ReportExtractor;
pub use cli::report::TextReport;
pub use corpus::{assemble, Corpus, CorpusSummary};
pub use error::{RadparseError, Result};
pub use types::*;
