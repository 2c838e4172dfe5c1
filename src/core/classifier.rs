use crate::domain::model::SearchResult;

pub const RSE_KEYWORDS: &[&str] = &[
    "research software engineer",
    "rse group",
    "rse team",
    "rse department",
];

pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "personal",
    "research software engineering workshop",
    "full time",
];

/// Whether a snippet looks like it describes an RSE group.
pub fn is_rse_snippet(body: &str) -> bool {
    let body = body.to_lowercase();
    RSE_KEYWORDS.iter().any(|k| body.contains(k))
        && !EXCLUDE_KEYWORDS.iter().any(|k| body.contains(k))
}

/// First result, in provider order, whose snippet qualifies. No scoring.
pub fn extract_rse_info(results: &[SearchResult]) -> Option<&SearchResult> {
    let found = results.iter().find(|r| is_rse_snippet(&r.body));
    if let Some(result) = found {
        tracing::info!("Found potential RSE info in: {}", result.title);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, body: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            body: body.to_string(),
            href: format!("https://{}.example.edu/", title.to_lowercase()),
        }
    }

    #[test]
    fn test_first_qualifying_result_wins() {
        let results = vec![
            result("A", "Campus news and events"),
            result("B", "Meet our RSE team"),
            result("C", "We hire a research software engineer"),
        ];

        assert_eq!(extract_rse_info(&results).unwrap().title, "B");
    }

    #[test]
    fn test_no_inclusion_keyword_is_no_match() {
        let results = vec![
            result("A", "Research computing services"),
            result("B", "Software engineering degree"),
        ];

        assert!(extract_rse_info(&results).is_none());
    }

    #[test]
    fn test_exclusion_keyword_vetoes_match() {
        let results = vec![
            result("A", "Personal homepage of a research software engineer"),
            result("B", "Research Software Engineering Workshop with the RSE group"),
            result("C", "Research software engineer, full time position"),
        ];

        assert!(extract_rse_info(&results).is_none());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(is_rse_snippet("The RSE Department supports faculty"));
        assert!(is_rse_snippet("RESEARCH SOFTWARE ENGINEERS at the library"));
        assert!(!is_rse_snippet(""));
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_rse_info(&[]).is_none());
    }
}
