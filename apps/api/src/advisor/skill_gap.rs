//! Skill-Gap Matcher — partitions a role's required skills into matched and
//! missing against the caller's declared skills.
//!
//! Comparison is trim + lowercase on both sides; output preserves catalog
//! casing and catalog order. Pure function of the input and the skill catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::skills;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Declared skills arrive either as a list or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

impl SkillsInput {
    /// The shape the boundary rejects as "not provided".
    /// An empty *list* is accepted and simply matches nothing.
    pub fn is_absent(&self) -> bool {
        match self {
            SkillsInput::Text(text) => text.is_empty(),
            SkillsInput::List(_) => false,
        }
    }
}

/// Result of a skill-gap analysis, serialized as the response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub target_role: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub suggested_learning_order: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Matching algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Runs the matcher for `target_role` against the declared skills.
///
/// The role name is trimmed for catalog lookup but echoed back as received.
/// Unknown roles are a hard error carrying the full list of valid roles.
pub fn analyze(
    target_role: &str,
    current_skills: &SkillsInput,
) -> Result<SkillGapReport, AppError> {
    let required =
        skills::required_skills(target_role.trim()).ok_or_else(|| AppError::UnknownRole {
            available_roles: skills::role_names(),
        })?;

    let declared = normalize(current_skills);

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for &skill in required {
        if declared.iter().any(|d| *d == skill.to_lowercase()) {
            matched_skills.push(skill.to_string());
        } else {
            missing_skills.push(skill.to_string());
        }
    }

    let recommendations = build_recommendations(&matched_skills, &missing_skills);

    // Known skills first, then the gap.
    let mut suggested_learning_order = matched_skills.clone();
    suggested_learning_order.extend(missing_skills.iter().cloned());

    Ok(SkillGapReport {
        target_role: target_role.to_string(),
        matched_skills,
        missing_skills,
        recommendations,
        suggested_learning_order,
    })
}

/// Flattens either input shape into trimmed, lower-cased skill names.
/// Comparison form only; responses keep catalog casing.
fn normalize(input: &SkillsInput) -> Vec<String> {
    let parts: Vec<&str> = match input {
        SkillsInput::List(items) => items.iter().map(String::as_str).collect(),
        SkillsInput::Text(text) => text.split(',').collect(),
    };
    parts.iter().map(|s| s.trim().to_lowercase()).collect()
}

/// Builds 1–2 recommendation sentences: a focus-area sentence when anything
/// is missing (else a congratulation), plus a keep-practicing sentence when
/// anything matched.
fn build_recommendations(matched: &[String], missing: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if missing.is_empty() {
        recommendations.push("You already cover most of the required skills.".to_string());
    } else {
        recommendations.push(format!(
            "You should focus on learning: {}.",
            missing.join(", ")
        ));
    }

    if !matched.is_empty() {
        recommendations.push(format!(
            "Keep practicing: {} with small real-world projects.",
            matched.join(", ")
        ));
    }

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
