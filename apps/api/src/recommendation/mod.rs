// Recommendation engine: value → job/course selection with deterministic
// fallbacks, curation planning, and job-board affinity ranking.
// No I/O here: callers pass in already-fetched catalogs and records.

pub mod affinity;
pub mod curation;
pub mod fallback;
pub mod handlers;
pub mod selector;
pub mod templates;
