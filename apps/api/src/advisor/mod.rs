// Advisor: skill-gap matching and roadmap resolution over the static catalogs.
// Both operations are pure functions of their input plus catalog data; the
// handlers only add boundary validation.

pub mod handlers;
pub mod roadmap;
pub mod skill_gap;
