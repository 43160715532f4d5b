//! Vectorizer — maps comma-separated skill text onto one component per skill category.

use crate::models::career::SkillCategory;

/// Lower-cases, splits on commas, trims, and drops empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Bidirectional, case-insensitive substring match.
/// `token` must already be lower-cased (as produced by `tokenize`).
pub fn keyword_matches(token: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    keyword.contains(token) || token.contains(&keyword)
}

/// Converts skill text into a vector with one component per category, in order.
///
/// Component `i` = (number of tokens matching any keyword of category `i`) /
/// (keyword count of category `i`), or 0 for a category without keywords.
/// Components are not clamped.
pub fn vectorize(skills_text: &str, categories: &[SkillCategory]) -> Vec<f64> {
    let tokens = tokenize(skills_text);

    categories
        .iter()
        .map(|category| {
            if category.keywords.is_empty() {
                return 0.0;
            }
            let match_count = tokens
                .iter()
                .filter(|token| {
                    category
                        .keywords
                        .iter()
                        .any(|keyword| keyword_matches(token, keyword))
                })
                .count();
            match_count as f64 / category.keywords.len() as f64
        })
        .collect()
}
