use crate::domain::model::{ReportArtifacts, SearchResult, UniversityRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Any search failure aborts the run before anything is written.
    Abort,
    /// Record the university as not found and keep going.
    Skip,
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn region(&self) -> &str;
    fn max_results(&self) -> usize;
    fn max_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn request_delay(&self) -> Duration;
    fn failure_policy(&self) -> FailurePolicy;
}

/// External text search. Implementations signal throttling with `RseError::RateLimited`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn text(&self, query: &str, region: &str, max_results: usize)
        -> Result<Vec<SearchResult>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<UniversityRecord>>;
    async fn transform(&self, records: Vec<UniversityRecord>) -> Result<ReportArtifacts>;
    async fn load(&self, artifacts: ReportArtifacts) -> Result<String>;
}
