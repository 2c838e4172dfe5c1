use crate::core::classifier::extract_rse_info;
use crate::core::report::{self, HTML_FILENAME, JSON_FILENAME};
use crate::core::searcher::{RetryPolicy, Searcher};
use crate::core::{ConfigProvider, FailurePolicy, Pipeline, SearchProvider, Storage};
use crate::data::ReferenceData;
use crate::domain::model::{ReportArtifacts, UniversityRecord};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::path::Path;

/// How a university's record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Known,
    Searched,
}

pub struct RsePipeline<S: Storage, C: ConfigProvider, P: SearchProvider> {
    storage: S,
    config: C,
    provider: P,
    reference: ReferenceData,
    report_date: Option<NaiveDate>,
}

impl<S: Storage, C: ConfigProvider, P: SearchProvider> RsePipeline<S, C, P> {
    pub fn new(storage: S, config: C, provider: P, reference: ReferenceData) -> Self {
        Self {
            storage,
            config,
            provider,
            reference,
            report_date: None,
        }
    }

    /// Pins the "last checked" date instead of using today's date.
    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = Some(date);
        self
    }

    pub fn plan(&self, university: &str) -> Lookup {
        if self.reference.override_for(university).is_some() {
            Lookup::Known
        } else {
            Lookup::Searched
        }
    }

    /// Which universities would be answered from overrides and which searched.
    pub fn lookup_plan(&self) -> Vec<(String, Lookup)> {
        self.reference
            .universities()
            .iter()
            .map(|u| (u.clone(), self.plan(u)))
            .collect()
    }

    fn searcher(&self) -> Searcher<'_, P> {
        Searcher::new(
            &self.provider,
            &self.reference,
            self.config.region(),
            self.config.max_results(),
            RetryPolicy {
                max_attempts: self.config.max_attempts(),
                cooldown: self.config.retry_delay(),
            },
        )
    }

    pub async fn get_rse_info(&self, university: &str) -> Result<UniversityRecord> {
        if let Some(known) = self.reference.override_for(university) {
            tracing::info!("Found {} in known RSE groups", university);
            return Ok(UniversityRecord::found(university, known.href.clone()));
        }

        let results = self.searcher().search_for_rse_info(university).await?;
        Ok(match extract_rse_info(&results) {
            Some(hit) => UniversityRecord::found(university, hit.href.clone()),
            None => UniversityRecord::not_found(university),
        })
    }

    /// Re-renders the report from a dataset written by an earlier run.
    pub async fn read_records(&self) -> Result<Vec<UniversityRecord>> {
        let data = self.storage.read_file(JSON_FILENAME).await?;
        report::from_json(&data)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, P: SearchProvider> Pipeline for RsePipeline<S, C, P> {
    async fn extract(&self) -> Result<Vec<UniversityRecord>> {
        let universities = self.reference.universities();
        let mut records = Vec::with_capacity(universities.len());

        for (i, university) in universities.iter().enumerate() {
            tracing::info!("Scanning university: {}", university);

            let record = match self.get_rse_info(university).await {
                Ok(record) => record,
                Err(e) if self.config.failure_policy() == FailurePolicy::Skip => {
                    tracing::warn!("⚠️ Skipping {} after search failure: {}", university, e);
                    UniversityRecord::not_found(university.as_str())
                }
                Err(e) => return Err(e),
            };

            tracing::info!("{}: {}", university, record.has_rse);
            records.push(record);

            // 對搜尋引擎保持禮貌
            if i + 1 < universities.len() {
                tokio::time::sleep(self.config.request_delay()).await;
            }
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<UniversityRecord>) -> Result<ReportArtifacts> {
        let date = self
            .report_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let json_output = report::to_json(&records)?;
        let html_output = report::render_html(&records, date);

        Ok(ReportArtifacts {
            records,
            json_output,
            html_output,
        })
    }

    async fn load(&self, artifacts: ReportArtifacts) -> Result<String> {
        tracing::debug!(
            "Writing {} ({} bytes) and {} ({} bytes)",
            JSON_FILENAME,
            artifacts.json_output.len(),
            HTML_FILENAME,
            artifacts.html_output.len()
        );

        self.storage
            .write_file(JSON_FILENAME, artifacts.json_output.as_bytes())
            .await?;
        self.storage
            .write_file(HTML_FILENAME, artifacts.html_output.as_bytes())
            .await?;

        Ok(Path::new(self.config.output_path())
            .display()
            .to_string())
    }
}
