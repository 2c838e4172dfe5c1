//! Reference data the scan runs against: the university list, hand-verified
//! overrides and URLs known to be false positives.

pub mod universities;

use crate::domain::model::KnownOverride;
use std::collections::{HashMap, HashSet};

pub use universities::R1_UNIVERSITIES;

/// (name, href) pairs verified by hand.
pub const KNOWN_RSE_GROUPS: &[(&str, &str)] = &[
    ("Arizona State University", "https://rse.asu.edu/"),
    ("Stanford University", "https://uit.stanford.edu/service/rse"),
];

// Pages that mention the trigger words but are not an RSE group.
pub const EXCLUDED_URLS: &[&str] = &[
    "https://ospo.gwu.edu/research-software-engineering-workshop",
    "https://huit.harvard.edu/embedded-research-software-engineering",
    "https://sites.northwestern.edu/researchcomputing/2019/10/07/supporting-research-software-and-research-software-engineers/",
    "https://experts.illinois.edu/en/publications/what-do-we-not-know-about-research-software-engineering",
    "https://people.cs.umass.edu/~brun/",
    "https://research.nd.edu/news-and-events/news/building-a-career-path-for-research-software-engineers/",
    "https://experts.illinois.edu/en/publications/research-software-engineering-in-2030",
    "https://www.vanderbilt.edu/accre/accre-staff/",
    "https://career.clemson.edu/jobs/ibm-software-engineer-ai-powered-automation-intern-2025/",
    "https://www.cs.wisc.edu/2023/08/22/research-software-engineer-full-time/",
    "https://experts.illinois.edu/en/publications/the-four-pillars-of-research-software-engineering",
];

/// Immutable inputs of a scan, built once at start-up.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    universities: Vec<String>,
    overrides: HashMap<String, KnownOverride>,
    exclusions: HashSet<String>,
}

impl ReferenceData {
    pub fn new(
        universities: Vec<String>,
        overrides: Vec<KnownOverride>,
        exclusions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            universities,
            overrides: overrides
                .into_iter()
                .map(|o| (o.name.clone(), o))
                .collect(),
            exclusions: exclusions.into_iter().collect(),
        }
    }

    pub fn builtin() -> Self {
        let overrides = KNOWN_RSE_GROUPS
            .iter()
            .map(|(name, href)| KnownOverride {
                name: name.to_string(),
                has_rse: true,
                href: href.to_string(),
            })
            .collect();

        Self::new(
            R1_UNIVERSITIES.iter().map(|u| u.to_string()).collect(),
            overrides,
            EXCLUDED_URLS.iter().map(|u| u.to_string()),
        )
    }

    /// Adds overrides and exclusions on top of the current set. A later
    /// override for the same university replaces the earlier one.
    pub fn extend(
        mut self,
        overrides: impl IntoIterator<Item = KnownOverride>,
        exclusions: impl IntoIterator<Item = String>,
    ) -> Self {
        for o in overrides {
            self.overrides.insert(o.name.clone(), o);
        }
        self.exclusions.extend(exclusions);
        self
    }

    pub fn universities(&self) -> &[String] {
        &self.universities
    }

    pub fn contains_university(&self, name: &str) -> bool {
        self.universities.iter().any(|u| u == name)
    }

    pub fn override_for(&self, university: &str) -> Option<&KnownOverride> {
        self.overrides.get(university)
    }

    pub fn is_excluded(&self, href: &str) -> bool {
        self.exclusions.contains(href)
    }
}
