use serde::Serialize;

use crate::models::interests::UserInterests;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

const MIN_SKILLS_LEN: usize = 3;

/// Form rules applied before a preferences record is saved.
///
/// - domain, desired position: non-empty after trimming
/// - skills: at least 3 characters
/// - workplace preference: remote, hybrid or onsite
/// - salary expectation: finite and > 0
pub fn validate_interests(interests: &UserInterests) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if interests.domain.trim().is_empty() {
        errors.push(FieldError {
            field: "domain",
            message: "Please select a domain of interest".to_string(),
        });
    }

    if interests.skills.trim().chars().count() < MIN_SKILLS_LEN {
        errors.push(FieldError {
            field: "skills",
            message: "Please enter at least one skill".to_string(),
        });
    }

    if !interests.workplace_preference.is_known() {
        errors.push(FieldError {
            field: "workplacePreference",
            message: format!(
                "Unknown workplace preference '{}' (expected remote, hybrid or onsite)",
                interests.workplace_preference
            ),
        });
    }

    if !interests.salary_expectation.is_finite() || interests.salary_expectation <= 0.0 {
        errors.push(FieldError {
            field: "salaryExpectation",
            message: "Salary expectation must be a positive number".to_string(),
        });
    }

    if interests.desired_position.trim().is_empty() {
        errors.push(FieldError {
            field: "desiredPosition",
            message: "Please enter your desired position".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
