//! Roadmap Resolver — returns a role's catalog roadmap, or the fixed generic
//! fallback when the role is unknown.
//!
//! Deliberately never rejects an unknown role; only the skill-gap matcher is
//! strict about catalog membership.

use serde::Serialize;

use crate::catalog::roadmaps::{self, PhaseSpec};

/// One phase of a learning roadmap as sent over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub items: Vec<String>,
}

impl From<&PhaseSpec> for RoadmapPhase {
    fn from(spec: &PhaseSpec) -> Self {
        RoadmapPhase {
            phase: spec.phase.to_string(),
            items: spec.items.iter().map(|item| (*item).to_string()).collect(),
        }
    }
}

/// A resolved roadmap: the trimmed role name plus its ordered phases.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRoadmap {
    pub target_role: String,
    pub phases: Vec<RoadmapPhase>,
}

/// Resolves the roadmap for `target_role` (trimmed first).
pub fn resolve(target_role: &str) -> ResolvedRoadmap {
    let role = target_role.trim();
    let phases = roadmaps::roadmap_for(role).unwrap_or(roadmaps::GENERIC_ROADMAP);
    ResolvedRoadmap {
        target_role: role.to_string(),
        phases: phases.iter().map(RoadmapPhase::from).collect(),
    }
}
