use serde::{Deserialize, Serialize, Serializer};

use crate::models::interests::WorkplacePreference;

/// A labelled group of representative skill keywords.
/// The position of a category in the catalog is its vector component index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Inclusive annual salary band for a career path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn contains(&self, salary: f64) -> bool {
        self.min <= salary && salary <= self.max
    }
}

/// A reference career archetype that user interests are scored against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
    pub workplace_types: Vec<WorkplacePreference>,
    pub salary_range: SalaryRange,
    pub positions: Vec<String>,
    /// One component per skill category, in catalog order.
    pub vector: Vec<f64>,
}

/// JSON has no infinities: a salary ratio against a zero expectation would
/// otherwise serialize as `null`. Saturates to the largest finite value.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let finite = if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    };
    serializer.serialize_f64(finite)
}

/// Raw per-signal values that went into a final score, before weighting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(serialize_with = "serialize_finite")]
    pub similarity: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub workplace_match: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub salary_match: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub position_match: f64,
}

/// A career path plus its weighted match score for one ranking run.
///
/// `similarity_score` is not guaranteed to stay within [0, 1]: the salary
/// signal is a ratio and grows with the distance outside the band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCareerPath {
    #[serde(flatten)]
    pub path: CareerPath,
    #[serde(serialize_with = "serialize_finite")]
    pub similarity_score: f64,
    pub breakdown: ScoreBreakdown,
}
