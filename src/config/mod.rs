pub mod cli;
pub mod toml_config;

use crate::adapters::duckduckgo::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, FailurePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "has-rse")]
#[command(about = "Checks which R1 universities have a Research Software Engineering group")]
pub struct CliConfig {
    #[arg(long, default_value = "build")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub search_endpoint: String,

    #[arg(long, default_value = "us-en")]
    pub region: String,

    #[arg(long, default_value = "10")]
    pub max_results: usize,

    #[arg(long, default_value = "3", help = "Total search attempts when rate limited")]
    pub max_attempts: u32,

    #[arg(long, default_value = "60")]
    pub retry_delay_secs: u64,

    #[arg(long, default_value = "100", help = "Pause between universities")]
    pub request_delay_ms: u64,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Record failed searches as 'no RSE group' instead of aborting")]
    pub skip_failed: bool,

    #[arg(long, short, help = "TOML configuration file; replaces the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Show what would be searched without touching the network")]
    pub dry_run: bool,

    #[arg(long, help = "Re-render index.html from an existing universities.json")]
    pub render_only: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn max_results(&self) -> usize {
        self.max_results
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    fn failure_policy(&self) -> FailurePolicy {
        if self.skip_failed {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("search_endpoint", &self.search_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("region", &self.region)?;
        validation::validate_positive_number("max_results", self.max_results, 1)?;
        validation::validate_positive_number("max_attempts", self.max_attempts as usize, 1)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs as usize, 1)?;
        Ok(())
    }
}
