//! Curation planner: pairs values with courses ahead of message generation.
//!
//! The external generation step writes a reason message for each candidate
//! and persists the result as curated records. This module only decides
//! the pairs, deterministically, so re-planning the same input is stable.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ValueCatalog;
use crate::models::opportunity::Opportunity;
use crate::models::recommendation::RecommendationRecord;

/// Only the first few positive values are curated per request.
pub const MAX_CURATED_VALUES: usize = 5;

/// Courses paired with each value.
pub const COURSES_PER_VALUE: usize = 2;

/// Step between the starting offsets of consecutive value ids.
const VALUE_OFFSET_STRIDE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationCandidate {
    pub candidate_id: u32,
    pub value_id: u32,
    pub value_name: String,
    pub course_id: String,
    pub course_title: String,
}

/// Plans value/course pairs for values that have no existing records.
///
/// For each value the walk starts at `value_id * 3` and wraps around the
/// catalog. A course not yet used by any value is preferred; a course
/// already given to an earlier value is only taken as the first pick or
/// on the final step. If the walk still comes up short, the remaining
/// slots are filled from the start of the catalog.
pub fn plan_curation(
    selected_value_ids: &[u32],
    courses: &[Opportunity],
    existing: &[RecommendationRecord],
    catalog: &ValueCatalog,
) -> Vec<CurationCandidate> {
    if courses.is_empty() {
        return Vec::new();
    }

    let already_curated: HashSet<u32> = existing.iter().map(|r| r.value_id).collect();
    let mut used_anywhere: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();
    let mut next_id = 0u32;

    for value in catalog
        .positive_cards(selected_value_ids)
        .into_iter()
        .take(MAX_CURATED_VALUES)
    {
        if already_curated.contains(&value.id) {
            debug!("Value {} already has recommendations; skipping", value.id);
            continue;
        }

        let mut used_here: HashSet<&str> = HashSet::new();
        let mut chosen: Vec<&Opportunity> = Vec::new();
        let start = value.id as usize * VALUE_OFFSET_STRIDE;

        for step in 0..courses.len() {
            if chosen.len() >= COURSES_PER_VALUE {
                break;
            }
            let course = &courses[(start + step) % courses.len()];
            if used_here.contains(course.id.as_str()) {
                continue;
            }
            let preferred = !used_anywhere.contains(course.id.as_str());
            if preferred || chosen.is_empty() || step + 1 == courses.len() {
                used_here.insert(course.id.as_str());
                used_anywhere.insert(course.id.as_str());
                chosen.push(course);
            }
        }

        for course in courses {
            if chosen.len() >= COURSES_PER_VALUE {
                break;
            }
            if used_here.insert(course.id.as_str()) {
                chosen.push(course);
            }
        }

        for course in chosen {
            candidates.push(CurationCandidate {
                candidate_id: next_id,
                value_id: value.id,
                value_name: value.name.clone(),
                course_id: course.id.clone(),
                course_title: course.title.clone(),
            });
            next_id += 1;
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;
    use crate::recommendation::selector::test_support::{courses, curated};

    #[test]
    fn test_two_courses_per_positive_value() {
        let catalog = small_catalog();
        let plan = plan_curation(&[3, 7, 5], &courses(6), &[], &catalog);

        assert_eq!(plan.len(), 4);
        assert!(plan.iter().all(|c| c.value_id != 7));
        let ids: Vec<u32> = plan.iter().map(|c| c.candidate_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_walk_starts_at_value_offset() {
        let catalog = small_catalog();
        // value 3 -> start offset 9 % 6 = 3
        let plan = plan_curation(&[3], &courses(6), &[], &catalog);
        let picked: Vec<&str> = plan.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(picked, vec!["c3", "c4"]);
    }

    #[test]
    fn test_prefers_courses_unused_by_earlier_values() {
        let catalog = small_catalog();
        // value 3 starts at 9 % 6 = 3, value 5 at 15 % 6 = 3 as well
        let plan = plan_curation(&[3, 5], &courses(6), &[], &catalog);
        let for_five: Vec<&str> = plan
            .iter()
            .filter(|c| c.value_id == 5)
            .map(|c| c.course_id.as_str())
            .collect();
        // c3 may be reused as first pick, then the walk prefers unused c5
        assert_eq!(for_five, vec!["c3", "c5"]);
    }

    #[test]
    fn test_skips_values_with_existing_records() {
        let catalog = small_catalog();
        let existing = vec![curated("r1", 3, "c0")];
        let plan = plan_curation(&[3, 5], &courses(4), &existing, &catalog);
        assert!(plan.iter().all(|c| c.value_id == 5));
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_caps_number_of_values() {
        let catalog = ValueCatalog::builtin().unwrap();
        let plan = plan_curation(&[1, 2, 3, 4, 5, 6, 7], &courses(20), &[], &catalog);
        let values: HashSet<u32> = plan.iter().map(|c| c.value_id).collect();
        assert_eq!(values.len(), MAX_CURATED_VALUES);
        assert!(!values.contains(&6));
    }

    #[test]
    fn test_single_course_catalog() {
        let catalog = small_catalog();
        let plan = plan_curation(&[3, 5], &courses(1), &[], &catalog);
        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|c| c.course_id == "c0"));
    }

    #[test]
    fn test_empty_course_catalog() {
        let catalog = small_catalog();
        assert!(plan_curation(&[3], &[], &[], &catalog).is_empty());
    }
}
