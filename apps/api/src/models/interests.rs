use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a user wants to work. Values outside the three known modes are
/// kept verbatim so they round-trip, and simply never match a career path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkplacePreference {
    Remote,
    Hybrid,
    Onsite,
    Other(String),
}

impl WorkplacePreference {
    pub fn as_str(&self) -> &str {
        match self {
            WorkplacePreference::Remote => "remote",
            WorkplacePreference::Hybrid => "hybrid",
            WorkplacePreference::Onsite => "onsite",
            WorkplacePreference::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WorkplacePreference::Other(_))
    }
}

impl From<String> for WorkplacePreference {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "remote" => WorkplacePreference::Remote,
            "hybrid" => WorkplacePreference::Hybrid,
            "onsite" => WorkplacePreference::Onsite,
            _ => WorkplacePreference::Other(raw),
        }
    }
}

impl From<WorkplacePreference> for String {
    fn from(pref: WorkplacePreference) -> Self {
        match pref {
            WorkplacePreference::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WorkplacePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferences submitted by the interests form. Read-only for a matching run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInterests {
    pub domain: String,
    /// Comma-separated free text.
    pub skills: String,
    pub workplace_preference: WorkplacePreference,
    pub salary_expectation: f64,
    pub desired_position: String,
}

impl UserInterests {
    /// Skills and domain joined the way the vectorizer consumes them.
    pub fn combined_text(&self) -> String {
        format!("{},{}", self.skills, self.domain)
    }
}

/// A saved preferences record, keyed by user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredInterests {
    pub user_id: Uuid,
    pub interests: UserInterests,
    pub saved_at: DateTime<Utc>,
}
