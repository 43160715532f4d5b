//! Reference data: skill categories and career paths.
//!
//! Loaded once at startup (embedded defaults or a JSON file), validated, and
//! then shared read-only behind an `Arc`.

pub mod defaults;
pub mod loader;

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::vectorizer::vectorize;
use crate::models::career::{CareerPath, SkillCategory};

pub use defaults::default_catalog;
pub use loader::load_catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no skill categories")]
    NoCategories,

    #[error("career path '{id}' has a {actual}-component vector, expected {expected}")]
    VectorDimension {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("career path '{id}' has salary min {min} above max {max}")]
    SalaryRange { id: String, min: f64, max: f64 },

    #[error("duplicate career path id '{0}'")]
    DuplicateId(String),
}

/// Where career path reference vectors come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorSource {
    /// Hand-authored vectors shipped with the catalog.
    #[default]
    Authored,
    /// Recomputed from each path's `skills` through the vectorizer.
    Derived,
}

impl FromStr for VectorSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "authored" => Ok(VectorSource::Authored),
            "derived" => Ok(VectorSource::Derived),
            other => Err(format!(
                "unknown vector source '{other}' (expected 'authored' or 'derived')"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Order defines vector component order.
    pub categories: Vec<SkillCategory>,
    pub career_paths: Vec<CareerPath>,
}

impl Catalog {
    /// Vector dimension shared by every path and every vectorized input.
    pub fn dimension(&self) -> usize {
        self.categories.len()
    }

    pub fn find_path(&self, id: &str) -> Option<&CareerPath> {
        self.career_paths.iter().find(|p| p.id == id)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }

        let expected = self.dimension();
        let mut seen = HashSet::new();

        for path in &self.career_paths {
            if !seen.insert(path.id.as_str()) {
                return Err(CatalogError::DuplicateId(path.id.clone()));
            }
            if path.vector.len() != expected {
                return Err(CatalogError::VectorDimension {
                    id: path.id.clone(),
                    expected,
                    actual: path.vector.len(),
                });
            }
            if path.salary_range.min > path.salary_range.max {
                return Err(CatalogError::SalaryRange {
                    id: path.id.clone(),
                    min: path.salary_range.min,
                    max: path.salary_range.max,
                });
            }
        }

        Ok(())
    }

    /// Applies the vector source. `Derived` overwrites every path vector with
    /// the vectorized `skills` list; this changes scores relative to `Authored`.
    pub fn with_vector_source(mut self, source: VectorSource) -> Self {
        if source == VectorSource::Derived {
            for path in &mut self.career_paths {
                path.vector = vectorize(&path.skills.join(","), &self.categories);
            }
        }
        self
    }
}
