use crate::adapters::duckduckgo::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, FailurePolicy};
use crate::data::ReferenceData;
use crate::domain::model::KnownOverride;
use crate::utils::error::{Result, RseError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
    /// Hand-verified groups added on top of the built-in list.
    #[serde(default)]
    pub overrides: Vec<KnownOverride>,
    #[serde(default)]
    pub extra_exclusions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_region")]
    pub region: String,
    pub max_results: Option<usize>,
    pub max_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
    pub request_delay_ms: Option<u64>,
    pub timeout_seconds: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            region: default_region(),
            max_results: None,
            max_attempts: None,
            retry_delay_seconds: None,
            request_delay_ms: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    /// "abort" (default) or "skip"
    pub on_search_failure: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_region() -> String {
    "us-en".to_string()
}

fn default_output_path() -> String {
    "build".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| RseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.search.timeout_seconds.unwrap_or(30))
    }

    /// Built-in reference data extended with this file's overrides and exclusions.
    pub fn reference_data(&self) -> ReferenceData {
        ReferenceData::builtin().extend(self.overrides.clone(), self.extra_exclusions.clone())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("search.endpoint", &self.search.endpoint)?;
        validation::validate_non_empty_string("search.region", &self.search.region)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_positive_number("search.max_results", self.max_results(), 1)?;
        validation::validate_positive_number(
            "search.max_attempts",
            self.max_attempts() as usize,
            1,
        )?;
        if let Some(timeout) = self.search.timeout_seconds {
            validation::validate_positive_number("search.timeout_seconds", timeout as usize, 1)?;
        }

        if let Some(policy) = self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_search_failure.as_deref())
        {
            validation::validate_one_of(
                "error_handling.on_search_failure",
                policy,
                &["abort", "skip"],
            )?;
        }

        let builtin = ReferenceData::builtin();
        for o in &self.overrides {
            if !builtin.contains_university(&o.name) {
                return Err(RseError::InvalidConfigValueError {
                    field: "overrides.name".to_string(),
                    value: o.name.clone(),
                    reason: "Not in the R1 university list".to_string(),
                });
            }
            // Overrides always publish a group; a "no group" entry would be shown as found.
            if !o.has_rse {
                return Err(RseError::InvalidConfigValueError {
                    field: "overrides.has_rse".to_string(),
                    value: o.name.clone(),
                    reason: "Overrides can only confirm a group; remove the entry instead"
                        .to_string(),
                });
            }
            validation::validate_url("overrides.href", &o.href)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn region(&self) -> &str {
        &self.search.region
    }

    fn max_results(&self) -> usize {
        self.search.max_results.unwrap_or(10)
    }

    fn max_attempts(&self) -> u32 {
        self.search.max_attempts.unwrap_or(3)
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.search.retry_delay_seconds.unwrap_or(60))
    }

    fn request_delay(&self) -> Duration {
        Duration::from_millis(self.search.request_delay_ms.unwrap_or(100))
    }

    fn failure_policy(&self) -> FailurePolicy {
        match self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_search_failure.as_deref())
        {
            Some("skip") => FailurePolicy::Skip,
            _ => FailurePolicy::Abort,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.search.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.output_path(), "build");
        assert_eq!(config.max_results(), 10);
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(60));
        assert_eq!(config.failure_policy(), FailurePolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
extra_exclusions = ["https://news.rice.edu/rse-story"]

[search]
endpoint = "http://localhost:9000/html/"
region = "uk-en"
max_results = 5
retry_delay_seconds = 5

[output]
path = "./site"

[error_handling]
on_search_failure = "skip"

[[overrides]]
name = "Rice University"
href = "https://rse.rice.edu/"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.region(), "uk-en");
        assert_eq!(config.max_results(), 5);
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
        assert_eq!(config.failure_policy(), FailurePolicy::Skip);

        let reference = config.reference_data();
        let rice = reference.override_for("Rice University").unwrap();
        assert!(rice.has_rse);
        assert_eq!(rice.href, "https://rse.rice.edu/");
        assert!(reference.override_for("Stanford University").is_some());
        assert!(reference.is_excluded("https://news.rice.edu/rse-story"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HAS_RSE_TEST_OUTPUT", "/tmp/has-rse-site");

        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "${HAS_RSE_TEST_OUTPUT}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_path(), "/tmp/has-rse-site");

        std::env::remove_var("HAS_RSE_TEST_OUTPUT");
    }

    #[test]
    fn test_unknown_override_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[[overrides]]
name = "Miskatonic University"
href = "https://rse.miskatonic.edu/"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_override_without_group_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[[overrides]]
name = "Yale University"
has_rse = false
href = "https://www.yale.edu/"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            RseError::InvalidConfigValueError { ref field, .. } if field == "overrides.has_rse"
        ));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[search]
timeout_seconds = 0
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_failure_policy() {
        let config = TomlConfig::from_toml_str(
            r#"
[error_handling]
on_search_failure = "retry"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[search]\nregion = \"us-en\"\nmax_results = 7\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.max_results(), 7);
    }
}
