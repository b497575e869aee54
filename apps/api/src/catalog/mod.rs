// Static lookup tables: role → required skills, role → learning roadmap.
// Read-only for the process lifetime; catalog order is load-bearing (it drives
// match-result ordering and the availableRoles hint).

pub mod roadmaps;
pub mod skills;
