//! Skill gap — which of a career path's required skills the user already covers.

use serde::{Deserialize, Serialize};

use crate::matching::vectorizer::{keyword_matches, tokenize};
use crate::models::career::CareerPath;
use crate::models::interests::UserInterests;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub path_id: String,
    pub title: String,
    pub covered: Vec<String>,
    pub missing: Vec<String>,
    /// covered / required, 0.0 when the path lists no skills.
    pub coverage: f64,
}

/// Splits a path's required skills into covered and missing, using the same
/// tokenization and bidirectional substring rule as the vectorizer.
pub fn skill_gap(interests: &UserInterests, path: &CareerPath) -> SkillGapReport {
    let tokens = tokenize(&interests.combined_text());

    let (covered, missing): (Vec<String>, Vec<String>) = path
        .skills
        .iter()
        .cloned()
        .partition(|skill| tokens.iter().any(|token| keyword_matches(token, skill)));

    let coverage = if path.skills.is_empty() {
        0.0
    } else {
        covered.len() as f64 / path.skills.len() as f64
    };

    SkillGapReport {
        path_id: path.id.clone(),
        title: path.title.clone(),
        covered,
        missing,
        coverage,
    }
}
