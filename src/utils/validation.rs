use crate::utils::error::{Result, RseError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> RseError {
    RseError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Search endpoints and override links must be absolute http(s) URLs.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Expected one of: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("search.endpoint", "https://html.duckduckgo.com/html/").is_ok());
        assert!(validate_url("search.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("search.endpoint", "").is_err());
        assert!(validate_url("search.endpoint", "invalid-url").is_err());
        assert!(validate_url("search.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_error_names_field_and_value() {
        let err = validate_positive_number("search.max_attempts", 0, 1).unwrap_err();
        match err {
            RseError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "search.max_attempts");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(validate_positive_number("search.max_attempts", 3, 1).is_ok());
    }

    #[test]
    fn test_validate_one_of() {
        let allowed = ["abort", "skip"];
        assert!(validate_one_of("error_handling.on_search_failure", "skip", &allowed).is_ok());
        assert!(validate_one_of("error_handling.on_search_failure", "retry", &allowed).is_err());
    }

    #[test]
    fn test_validate_path_and_strings() {
        assert!(validate_path("output.path", "build").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bu\0ild").is_err());
        assert!(validate_non_empty_string("search.region", "  ").is_err());
    }
}
