//! Recommendation Selector: picks jobs and courses for a user's values.
//!
//! Pure and synchronous. Curated records win when they still resolve;
//! otherwise each value gets deterministic fallback picks. An opportunity
//! is claimed by the first value that reaches it and never appears twice
//! across the job and course lists.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ValueCatalog;
use crate::models::opportunity::{Company, Opportunity, OpportunityKind};
use crate::models::recommendation::{RecommendationOrigin, RecommendationRecord};
use crate::models::value::ValueCard;
use crate::recommendation::fallback::{
    fallback_record_id, fallback_seed, seeded_index, FALLBACK_SLOTS,
};
use crate::recommendation::templates::{value_reason, FALLBACK_REASON};

/// Jobs shown to the user; courses are left uncapped for the graph.
pub const JOB_DISPLAY_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub jobs: Vec<Opportunity>,
    pub courses: Vec<Opportunity>,
}

/// Records chosen for one value, split by catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecommendations {
    pub value_id: u32,
    pub value_name: String,
    pub courses: Vec<RecommendationRecord>,
    pub jobs: Vec<RecommendationRecord>,
}

/// Per-value records in the order the values were resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub values: Vec<ValueRecommendations>,
}

impl RecommendationSet {
    /// Course records for a value; empty for values that were not selected.
    pub fn recommendations_for(&self, value_id: u32) -> &[RecommendationRecord] {
        self.find(value_id).map(|v| v.courses.as_slice()).unwrap_or(&[])
    }

    fn find(&self, value_id: u32) -> Option<&ValueRecommendations> {
        self.values.iter().find(|v| v.value_id == value_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub result: RecommendationResult,
    pub recommendations: RecommendationSet,
}

/// Selects recommendations for `user_value_ids`.
///
/// Algorithm:
/// 1. Resolve ids to positive cards (shadow and unknown ids dropped)
/// 2. Per value, keep curated records whose `course_id` resolves in the
///    course or job catalog; stale ones are dropped
/// 3. Claim resolved opportunities in stored order, first claim wins
/// 4. No resolvable curated record → up to `FALLBACK_SLOTS` seeded picks
///    from each catalog
/// 5. Premium / featured jobs first (stable), capped at `JOB_DISPLAY_LIMIT`
pub fn get_recommendations(
    user_value_ids: &[u32],
    jobs: &[Opportunity],
    courses: &[Opportunity],
    companies: &[Company],
    curated: &[RecommendationRecord],
    catalog: &ValueCatalog,
) -> RecommendationOutcome {
    let values = catalog.positive_cards(user_value_ids);
    if values.is_empty() {
        return RecommendationOutcome::default();
    }

    let course_index = index_by_id(courses);
    let job_index = index_by_id(jobs);

    let mut claimed: HashSet<&str> = HashSet::new();
    let mut picked_jobs: Vec<&Opportunity> = Vec::new();
    let mut picked_courses: Vec<&Opportunity> = Vec::new();
    let mut set = RecommendationSet::default();

    for value in values {
        let mut entry = ValueRecommendations {
            value_id: value.id,
            value_name: value.name.clone(),
            courses: Vec::new(),
            jobs: Vec::new(),
        };

        let resolved: Vec<(&RecommendationRecord, OpportunityKind, &Opportunity)> = curated
            .iter()
            .filter(|rec| rec.value_id == value.id)
            .filter_map(|rec| {
                let hit = course_index
                    .get(rec.course_id.as_str())
                    .map(|opp| (OpportunityKind::Course, *opp))
                    .or_else(|| {
                        job_index
                            .get(rec.course_id.as_str())
                            .map(|opp| (OpportunityKind::Job, *opp))
                    });
                if hit.is_none() {
                    debug!(
                        "Dropping stale recommendation {} (value {}, opportunity {})",
                        rec.id, rec.value_id, rec.course_id
                    );
                }
                hit.map(|(kind, opp)| (rec, kind, opp))
            })
            .collect();

        if resolved.is_empty() {
            for (kind, pool) in [(OpportunityKind::Course, courses), (OpportunityKind::Job, jobs)] {
                for slot in 0..FALLBACK_SLOTS {
                    let Some(opp) = pick_fallback(value.id, kind, slot, pool, &claimed) else {
                        break;
                    };
                    claimed.insert(opp.id.as_str());
                    let record = RecommendationRecord {
                        id: fallback_record_id(value.id, kind, slot),
                        value_id: value.id,
                        course_id: opp.id.clone(),
                        reason_message: Some(FALLBACK_REASON.to_string()),
                        origin: RecommendationOrigin::Fallback,
                        created_at: None,
                    };
                    push_pick(kind, opp, record, &mut entry, &mut picked_jobs, &mut picked_courses);
                }
            }
        } else {
            for (rec, kind, opp) in resolved {
                if !claimed.insert(opp.id.as_str()) {
                    debug!(
                        "Opportunity {} already claimed; skipping for value {}",
                        opp.id, value.id
                    );
                    continue;
                }
                let record = with_reason(rec, value);
                push_pick(kind, opp, record, &mut entry, &mut picked_jobs, &mut picked_courses);
            }
        }

        set.values.push(entry);
    }

    let premium: HashSet<&str> = companies
        .iter()
        .filter(|c| c.is_premium)
        .map(|c| c.id.as_str())
        .collect();
    // sort_by_key is stable: priority jobs first, input order otherwise
    picked_jobs.sort_by_key(|job| !is_priority(job, &premium));

    RecommendationOutcome {
        result: RecommendationResult {
            jobs: picked_jobs
                .into_iter()
                .take(JOB_DISPLAY_LIMIT)
                .cloned()
                .collect(),
            courses: picked_courses.into_iter().cloned().collect(),
        },
        recommendations: set,
    }
}

/// First occurrence wins when a catalog repeats an id.
fn index_by_id(catalog: &[Opportunity]) -> HashMap<&str, &Opportunity> {
    let mut index = HashMap::with_capacity(catalog.len());
    for opp in catalog {
        index.entry(opp.id.as_str()).or_insert(opp);
    }
    index
}

/// Seeded offset into `pool`, probing forward past already-claimed entries.
fn pick_fallback<'a>(
    value_id: u32,
    kind: OpportunityKind,
    slot: usize,
    pool: &'a [Opportunity],
    claimed: &HashSet<&str>,
) -> Option<&'a Opportunity> {
    let start = seeded_index(fallback_seed(value_id, kind, slot), pool.len())?;
    (0..pool.len())
        .map(|step| &pool[(start + step) % pool.len()])
        .find(|opp| !claimed.contains(opp.id.as_str()))
}

fn with_reason(rec: &RecommendationRecord, value: &ValueCard) -> RecommendationRecord {
    let mut record = rec.clone();
    if record.reason().is_none() {
        record.reason_message = Some(value_reason(&value.name));
    }
    record
}

fn push_pick<'a>(
    kind: OpportunityKind,
    opp: &'a Opportunity,
    record: RecommendationRecord,
    entry: &mut ValueRecommendations,
    picked_jobs: &mut Vec<&'a Opportunity>,
    picked_courses: &mut Vec<&'a Opportunity>,
) {
    match kind {
        OpportunityKind::Course => {
            picked_courses.push(opp);
            entry.courses.push(record);
        }
        OpportunityKind::Job => {
            picked_jobs.push(opp);
            entry.jobs.push(record);
        }
    }
}

fn is_priority(job: &Opportunity, premium: &HashSet<&str>) -> bool {
    job.is_featured
        || job
            .company_id
            .as_deref()
            .map(|id| premium.contains(id))
            .unwrap_or(false)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn opp(id: &str, title: &str) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            title: title.to_string(),
            tags: vec![],
            company_id: None,
            is_featured: false,
        }
    }

    pub fn curated(id: &str, value_id: u32, course_id: &str) -> RecommendationRecord {
        RecommendationRecord {
            id: id.to_string(),
            value_id,
            course_id: course_id.to_string(),
            reason_message: Some(format!("Because of value {value_id}")),
            origin: RecommendationOrigin::Curated,
            created_at: None,
        }
    }

    pub fn courses(n: usize) -> Vec<Opportunity> {
        (0..n)
            .map(|i| opp(&format!("c{i}"), &format!("Course {i}")))
            .collect()
    }
}
