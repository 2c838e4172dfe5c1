pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod report;
pub mod searcher;

pub use crate::domain::model::{ReportArtifacts, SearchResult, UniversityRecord};
pub use crate::domain::ports::{ConfigProvider, FailurePolicy, Pipeline, SearchProvider, Storage};
pub use crate::utils::error::Result;
