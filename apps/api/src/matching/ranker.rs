//! Match Ranker — blends skill similarity with workplace, salary and position
//! signals into one score per career path, sorted best first.
//!
//! Default backend: `CosineCareerMatcher`. `AppState` holds an
//! `Arc<dyn CareerMatcher>` so handlers never depend on the concrete scorer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::matching::similarity::{cosine_similarity, SimilarityError};
use crate::matching::vectorizer::vectorize;
use crate::models::career::{CareerPath, ScoreBreakdown, ScoredCareerPath, SkillCategory};
use crate::models::interests::UserInterests;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchWeights {
    pub similarity: f64,
    pub workplace: f64,
    pub salary: f64,
    pub position: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            similarity: 0.6,
            workplace: 0.15,
            salary: 0.15,
            position: 0.1,
        }
    }
}

/// Score awarded when a desired position overlaps one of the path's positions.
pub const POSITION_MATCH_SCORE: f64 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks every career path in a catalog against a set of user interests.
pub trait CareerMatcher: Send + Sync {
    fn rank(
        &self,
        interests: &UserInterests,
        catalog: &Catalog,
    ) -> Result<Vec<ScoredCareerPath>, SimilarityError>;
}

/// Cosine similarity over skill-category vectors plus weighted heuristics.
#[derive(Debug, Clone, Default)]
pub struct CosineCareerMatcher {
    pub weights: MatchWeights,
}

impl CareerMatcher for CosineCareerMatcher {
    fn rank(
        &self,
        interests: &UserInterests,
        catalog: &Catalog,
    ) -> Result<Vec<ScoredCareerPath>, SimilarityError> {
        find_matching_career_paths(
            interests,
            &catalog.career_paths,
            &catalog.categories,
            &self.weights,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core ranking algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores every reference path and returns them sorted by score, descending.
///
/// The output always has one entry per input path. Ties keep input order.
/// Fails only when a path vector and the category table disagree on dimension.
pub fn find_matching_career_paths(
    interests: &UserInterests,
    reference_paths: &[CareerPath],
    categories: &[SkillCategory],
    weights: &MatchWeights,
) -> Result<Vec<ScoredCareerPath>, SimilarityError> {
    // Path-independent, so computed once.
    let user_vector = vectorize(&interests.combined_text(), categories);

    let mut results = reference_paths
        .iter()
        .map(|path| score_path(interests, &user_vector, path, weights))
        .collect::<Result<Vec<_>, _>>()?;

    // Stable: equal scores keep catalog order.
    results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));

    if let Some(top) = results.first() {
        debug!(
            top_path = %top.path.id,
            score = top.similarity_score,
            candidates = results.len(),
            "ranked career paths"
        );
    }

    Ok(results)
}

fn score_path(
    interests: &UserInterests,
    user_vector: &[f64],
    path: &CareerPath,
    weights: &MatchWeights,
) -> Result<ScoredCareerPath, SimilarityError> {
    let breakdown = ScoreBreakdown {
        similarity: cosine_similarity(user_vector, &path.vector)?,
        workplace_match: workplace_match(interests, path),
        salary_match: salary_match(interests.salary_expectation, path),
        position_match: position_match(&interests.desired_position, path),
    };

    let final_score = breakdown.similarity * weights.similarity
        + breakdown.workplace_match * weights.workplace
        + breakdown.salary_match * weights.salary
        + breakdown.position_match * weights.position;

    Ok(ScoredCareerPath {
        path: path.clone(),
        similarity_score: final_score,
        breakdown,
    })
}

fn workplace_match(interests: &UserInterests, path: &CareerPath) -> f64 {
    if path.workplace_types.contains(&interests.workplace_preference) {
        1.0
    } else {
        0.0
    }
}

/// 1.0 inside the band; otherwise the ratio of the farther bound to the nearer
/// one, which is above 1.0 for positive salaries. Not clamped.
fn salary_match(expectation: f64, path: &CareerPath) -> f64 {
    let range = path.salary_range;
    if range.contains(expectation) {
        1.0
    } else if expectation < range.min {
        range.min / expectation
    } else {
        expectation / range.max
    }
}

fn position_match(desired: &str, path: &CareerPath) -> f64 {
    let desired = desired.to_lowercase();
    let overlaps = path.positions.iter().any(|position| {
        let position = position.to_lowercase();
        desired.contains(&position) || position.contains(&desired)
    });
    if overlaps {
        POSITION_MATCH_SCORE
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
