//! Skill Catalog — the required-skill list for each supported role.

/// Required skills per role, in catalog order.
const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "Frontend Developer",
        &["HTML", "CSS", "JavaScript", "React", "Git"],
    ),
    (
        "Backend Developer",
        &["Java", "Spring Boot", "SQL", "APIs", "Git"],
    ),
    (
        "Data Analyst",
        &["Excel", "SQL", "Python", "Dashboards", "Statistics"],
    ),
];

/// Looks up the required skills for an exact (pre-trimmed) role name.
pub fn required_skills(role: &str) -> Option<&'static [&'static str]> {
    ROLE_SKILLS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, skills)| *skills)
}

/// Every role name the catalog knows, in catalog order.
/// Returned to callers as the `availableRoles` recovery hint.
pub fn role_names() -> Vec<String> {
    ROLE_SKILLS
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect()
}
