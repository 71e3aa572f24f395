/*!
# IO utilities

Dataset loading and report saving.
!*/
pub mod reader;
pub mod writer;

pub use reader::{Dataset, DatasetOptions, LangColumn, Sample, Schema};
pub use writer::{write_csv, write_empty_csv, write_lines};
