use crate::domain::model::SearchResult;
use crate::domain::ports::SearchProvider;
use crate::utils::error::{Result, RseError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Text search against the DuckDuckGo HTML frontend.
pub struct DuckDuckGo {
    client: Client,
    endpoint: String,
}

impl DuckDuckGo {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGo {
    async fn text(&self, query: &str, region: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        tracing::debug!("Making search request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("kl", region)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        // DDG 被限流時會回 202 或 403
        if is_rate_limit_status(status) {
            return Err(RseError::RateLimited);
        }
        if !status.is_success() {
            return Err(RseError::SearchFailed {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        parse_results(&body, max_results)
    }
}

fn is_rate_limit_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::ACCEPTED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    )
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| RseError::ParseError {
        message: format!("invalid selector '{}': {}", css, e),
    })
}

fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a results page, skipping ads, in page order.
pub fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let result_sel = selector("div.result")?;
    let title_sel = selector("a.result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let mut results = Vec::new();
    for block in document.select(&result_sel) {
        if block.value().classes().any(|c| c == "result--ad") {
            continue;
        }

        let Some(anchor) = block.select(&title_sel).next() else {
            continue;
        };
        let Some(raw_href) = anchor.value().attr("href") else {
            continue;
        };

        let body = block.select(&snippet_sel).next().map(text_of).unwrap_or_default();

        results.push(SearchResult {
            title: text_of(anchor),
            body,
            href: unwrap_redirect(raw_href),
        });

        if results.len() >= max_results {
            break;
        }
    }

    Ok(results)
}

/// Turns `//duckduckgo.com/l/?uddg=<target>` into `<target>`; other links pass through.
pub fn unwrap_redirect(href: &str) -> String {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    match Url::parse(&absolute) {
        Ok(url) if url.path() == "/l/" => url
            .query_pairs()
            .find(|(k, _)| k == "uddg")
            .map(|(_, v)| v.into_owned())
            .unwrap_or(absolute),
        _ => absolute,
    }
}
