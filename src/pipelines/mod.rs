//! Pipelines.
//!
//! Each batch job of the tool is a pipeline: it loads its inputs,
//! runs to completion and writes its reports.
//! The module provides a light [pipeline::Pipeline] trait that every job implements.
pub mod errors;
pub mod forms;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod reannotation;
pub mod report;
pub mod tokens;

pub use errors::ErrorDetection;
pub use forms::{FormTask, FormsPipeline};
pub use pipeline::Pipeline;
pub use reannotation::Reannotation;
pub use report::ErrorReport;
pub use tokens::TokenStats;
