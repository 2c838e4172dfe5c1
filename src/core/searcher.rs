use crate::data::ReferenceData;
use crate::domain::model::SearchResult;
use crate::domain::ports::SearchProvider;
use crate::utils::error::{Result, RseError};
use std::time::Duration;

pub const QUERY_SUFFIX: &str = "research software engineering";
pub const TARGET_DOMAIN: &str = ".edu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    pub cooldown: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            cooldown: Duration::from_secs(60),
        }
    }
}

pub fn build_query(university: &str) -> String {
    format!("{} {}", university, QUERY_SUFFIX)
}

/// Keeps `.edu` results that are not known false positives, in provider order.
pub fn filter_results(results: Vec<SearchResult>, reference: &ReferenceData) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|r| r.href.contains(TARGET_DOMAIN) && !reference.is_excluded(&r.href))
        .collect()
}

pub struct Searcher<'a, P: SearchProvider> {
    provider: &'a P,
    reference: &'a ReferenceData,
    region: String,
    max_results: usize,
    retry: RetryPolicy,
}

impl<'a, P: SearchProvider> Searcher<'a, P> {
    pub fn new(
        provider: &'a P,
        reference: &'a ReferenceData,
        region: impl Into<String>,
        max_results: usize,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            reference,
            region: region.into(),
            max_results,
            retry,
        }
    }

    pub async fn search_for_rse_info(&self, university: &str) -> Result<Vec<SearchResult>> {
        let query = build_query(university);
        tracing::info!("Searching for RSE info with query: {}", query);

        let results = self.search_with_retry(&query).await?;
        let filtered = filter_results(results, self.reference);

        tracing::info!(
            "Found {} potential matches for {}",
            filtered.len(),
            university
        );
        Ok(filtered)
    }

    async fn search_with_retry(&self, query: &str) -> Result<Vec<SearchResult>> {
        let mut attempt = 1;
        loop {
            match self
                .provider
                .text(query, &self.region, self.max_results)
                .await
            {
                Ok(results) => return Ok(results),
                Err(e) if e.is_retryable() => {
                    if attempt >= self.retry.max_attempts {
                        tracing::error!("❌ Rate limit exceeded after {} attempts", attempt);
                        return Err(RseError::RateLimitExhausted {
                            query: query.to_string(),
                            attempts: attempt,
                        });
                    }
                    tracing::warn!(
                        "Rate limit exceeded. Retrying in {} seconds... (attempt {}/{})",
                        self.retry.cooldown.as_secs(),
                        attempt,
                        self.retry.max_attempts
                    );
                    tokio::time::sleep(self.retry.cooldown).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Replays scripted responses and records when each call happened.
    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<Vec<SearchResult>>>>,
        calls: Mutex<Vec<Instant>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<Vec<SearchResult>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_times(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchProvider for ScriptedProvider {
        async fn text(&self, _query: &str, _region: &str, _max: usize) -> Result<Vec<SearchResult>> {
            self.calls.lock().unwrap().push(Instant::now());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(RseError::RateLimited))
        }
    }

    fn result(href: &str, body: &str) -> SearchResult {
        SearchResult {
            title: href.to_string(),
            body: body.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_build_query() {
        assert_eq!(
            build_query("Rice University"),
            "Rice University research software engineering"
        );
    }

    #[test]
    fn test_filter_drops_excluded_and_non_edu() {
        let reference = ReferenceData::builtin();
        let results = vec![
            result("https://rse.example.com/team", "Our RSE team"),
            result("https://people.cs.umass.edu/~brun/", "research software engineer"),
            result("https://rse.example.edu/", "Our RSE group"),
            result("https://news.example.org/rse", "rse department"),
        ];

        let filtered = filter_results(results, &reference);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].href, "https://rse.example.edu/");
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_exhaustion_makes_three_attempts() {
        let provider = ScriptedProvider::new(vec![]);
        let reference = ReferenceData::builtin();
        let searcher =
            Searcher::new(&provider, &reference, "us-en", 10, RetryPolicy::default());

        let err = searcher.search_for_rse_info("Rice University").await.unwrap_err();

        assert!(matches!(
            err,
            RseError::RateLimitExhausted { attempts: 3, .. }
        ));
        let calls = provider.call_times();
        assert_eq!(calls.len(), 3);
        assert!(calls[1] - calls[0] >= Duration::from_secs(60));
        assert!(calls[2] - calls[1] >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_rate_limit() {
        let provider = ScriptedProvider::new(vec![
            Err(RseError::RateLimited),
            Ok(vec![result("https://rse.rice.edu/", "Rice RSE group")]),
        ]);
        let reference = ReferenceData::builtin();
        let searcher =
            Searcher::new(&provider, &reference, "us-en", 10, RetryPolicy::default());

        let results = searcher.search_for_rse_info("Rice University").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(provider.call_times().len(), 2);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let provider = ScriptedProvider::new(vec![Err(RseError::SearchFailed {
            status: 500,
            message: "Internal Server Error".to_string(),
        })]);
        let reference = ReferenceData::builtin();
        let searcher =
            Searcher::new(&provider, &reference, "us-en", 10, RetryPolicy::default());

        let err = searcher.search_for_rse_info("Rice University").await.unwrap_err();

        assert!(matches!(err, RseError::SearchFailed { status: 500, .. }));
        assert_eq!(provider.call_times().len(), 1);
    }
}
