//! Axum route handlers for the advisor endpoints.
//!
//! Validation happens here at the boundary; the matcher and resolver below
//! are pure and cannot fail on validated input.

use axum::Json;
use serde::Deserialize;

use crate::advisor::roadmap::{self, ResolvedRoadmap};
use crate::advisor::skill_gap::{self, SkillGapReport, SkillsInput};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub current_skills: Option<SkillsInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[serde(default)]
    pub target_role: Option<String>,
}

/// POST /api/skill-gap
///
/// Rejects absent/empty parameters before any matching runs; unknown roles
/// come back 404 with the valid role list.
pub async fn handle_skill_gap(
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    let target_role = request.target_role.as_deref().unwrap_or_default();
    let current_skills = request
        .current_skills
        .filter(|skills| !skills.is_absent());

    let (target_role, current_skills) = match (target_role, &current_skills) {
        ("", _) | (_, None) => {
            return Err(AppError::MissingParameter(
                "targetRole and currentSkills are required".to_string(),
            ))
        }
        (role, Some(skills)) => (role, skills),
    };

    Ok(Json(skill_gap::analyze(target_role, current_skills)?))
}

/// POST /api/roadmap
///
/// Unknown roles are not an error here: the resolver substitutes the generic
/// roadmap. Contrast with the skill-gap endpoint's hard 404.
pub async fn handle_roadmap(
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<ResolvedRoadmap>, AppError> {
    let target_role = request
        .target_role
        .as_deref()
        .filter(|role| !role.is_empty())
        .ok_or_else(|| AppError::MissingParameter("targetRole is required".to_string()))?;

    Ok(Json(roadmap::resolve(target_role)))
}
