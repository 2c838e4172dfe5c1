use serde::{Deserialize, Serialize};

/// One row of the published dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub name: String,
    pub has_rse: bool,
    pub link: String,
}

impl UniversityRecord {
    pub fn found(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_rse: true,
            link: link.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_rse: false,
            link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    /// Snippet text shown under the title.
    pub body: String,
    pub href: String,
}

/// A university whose RSE group was verified by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownOverride {
    pub name: String,
    #[serde(default = "default_has_rse")]
    pub has_rse: bool,
    pub href: String,
}

fn default_has_rse() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub records: Vec<UniversityRecord>,
    pub json_output: String,
    pub html_output: String,
}

impl ReportArtifacts {
    pub fn rse_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_rse).count()
    }
}
