//! Roadmap Catalog — the phased learning roadmap for each supported role,
//! plus the generic fallback served for roles the catalog does not know.

/// A static roadmap phase: a time-boxed label and its ordered action items.
#[derive(Debug)]
pub struct PhaseSpec {
    pub phase: &'static str,
    pub items: &'static [&'static str],
}

const ROLE_ROADMAPS: &[(&str, &[PhaseSpec])] = &[
    (
        "Backend Developer",
        &[
            PhaseSpec {
                phase: "Phase 1 (1–2 months)",
                items: &[
                    "Learn Java basics",
                    "Understand OOP concepts",
                    "Practice Git basics",
                ],
            },
            PhaseSpec {
                phase: "Phase 2 (2 months)",
                items: &[
                    "Learn Spring Boot fundamentals",
                    "Practice SQL queries (joins, group by)",
                    "Build simple REST APIs",
                ],
            },
            PhaseSpec {
                phase: "Phase 3 (1–2 months)",
                items: &[
                    "Learn deployment basics",
                    "Build 2–3 backend projects",
                    "Revise core Java + Spring concepts",
                ],
            },
        ],
    ),
    (
        "Frontend Developer",
        &[
            PhaseSpec {
                phase: "Phase 1 (1–2 months)",
                items: &[
                    "HTML & CSS fundamentals",
                    "Basic JavaScript",
                    "Build simple static pages",
                ],
            },
            PhaseSpec {
                phase: "Phase 2 (2 months)",
                items: &[
                    "Learn React basics (components, props, state)",
                    "Use Git & GitHub",
                    "Build a small React project",
                ],
            },
            PhaseSpec {
                phase: "Phase 3 (1–2 months)",
                items: &[
                    "Learn React Router and API calls",
                    "Deploy a React app",
                    "Improve UI and performance slightly",
                ],
            },
        ],
    ),
    (
        "Data Analyst",
        &[
            PhaseSpec {
                phase: "Phase 1 (1–2 months)",
                items: &[
                    "Excel basics (formulas, charts)",
                    "Descriptive statistics",
                    "Basic SQL (select, where)",
                ],
            },
            PhaseSpec {
                phase: "Phase 2 (2 months)",
                items: &[
                    "Learn Python (Pandas, NumPy)",
                    "SQL joins and aggregation",
                    "Build simple dashboards",
                ],
            },
            PhaseSpec {
                phase: "Phase 3 (1–2 months)",
                items: &[
                    "Work on case studies",
                    "Create 2–3 portfolio projects",
                    "Practice presenting insights",
                ],
            },
        ],
    ),
];

/// Served verbatim for any role without a catalog roadmap.
pub const GENERIC_ROADMAP: &[PhaseSpec] = &[
    PhaseSpec {
        phase: "Phase 1 (1–2 months)",
        items: &[
            "Strengthen programming fundamentals",
            "Learn Git and version control",
        ],
    },
    PhaseSpec {
        phase: "Phase 2 (2 months)",
        items: &[
            "Learn core tools/technologies for the role",
            "Build 1–2 mini projects",
        ],
    },
    PhaseSpec {
        phase: "Phase 3 (1–2 months)",
        items: &[
            "Build a bigger project",
            "Prepare for interviews and revise concepts",
        ],
    },
];

/// Looks up the roadmap for an exact (pre-trimmed) role name.
pub fn roadmap_for(role: &str) -> Option<&'static [PhaseSpec]> {
    ROLE_ROADMAPS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, phases)| *phases)
}
