//! Job affinity: scores the job board against a user's public values and
//! strongest diagnosis category.

use serde::{Deserialize, Serialize};

use crate::diagnosis::radar::{top_category, DiagnosisScores};
use crate::models::opportunity::Opportunity;
use crate::models::value::ValueCategory;

/// Points per public value name found in a job's tags.
pub const VALUE_TAG_POINTS: u32 = 50;
/// Points when the title matches the top category's keywords.
pub const CATEGORY_TITLE_POINTS: u32 = 20;
pub const AFFINITY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    pub job: Opportunity,
    pub score: u32,
}

/// Lowercase title keywords that signal a fit for each category.
fn category_keywords(category: ValueCategory) -> &'static [&'static str] {
    match category {
        ValueCategory::Thinking => &["dx", "planning", "creative", "企画", "クリエイティブ"],
        ValueCategory::Action => &["sales", "management", "営業", "マネジメント"],
        ValueCategory::Integrity => &["engineer", "manufacturing", "エンジニア", "製造"],
        ValueCategory::Empathy => &["service", "medical", "welfare", "サービス", "医療", "福祉"],
        ValueCategory::Stability => &[],
    }
}

/// Ranks jobs by affinity, highest first, ties in input order.
///
/// When no job scores above zero the first `AFFINITY_LIMIT` jobs are
/// returned unscored so the board is never empty.
pub fn rank_jobs_by_affinity(
    jobs: &[Opportunity],
    public_value_names: &[String],
    scores: &DiagnosisScores,
) -> Vec<ScoredJob> {
    let keywords = top_category(scores).map(category_keywords).unwrap_or(&[]);

    let mut scored: Vec<ScoredJob> = jobs
        .iter()
        .map(|job| ScoredJob {
            score: score_job(job, public_value_names, keywords),
            job: job.clone(),
        })
        .filter(|s| s.score > 0)
        .collect();

    if scored.is_empty() {
        return jobs
            .iter()
            .take(AFFINITY_LIMIT)
            .map(|job| ScoredJob {
                job: job.clone(),
                score: 0,
            })
            .collect();
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(AFFINITY_LIMIT);
    scored
}

fn score_job(job: &Opportunity, public_value_names: &[String], keywords: &[&str]) -> u32 {
    let tag_hits = public_value_names
        .iter()
        .filter(|name| job.tags.iter().any(|t| t == *name))
        .count() as u32;

    let title = job.title.to_lowercase();
    let title_hit = keywords.iter().any(|kw| title.contains(kw));

    tag_hits * VALUE_TAG_POINTS + if title_hit { CATEGORY_TITLE_POINTS } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::selector::test_support::opp;

    fn tagged(id: &str, title: &str, tags: &[&str]) -> Opportunity {
        let mut job = opp(id, title);
        job.tags = tags.iter().map(|t| t.to_string()).collect();
        job
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_value_tags_outweigh_title_keywords() {
        let jobs = vec![
            tagged("j1", "Sales Manager", &[]),
            tagged("j2", "Warehouse Staff", &["Curiosity"]),
        ];
        let scores = DiagnosisScores::from([("B".to_string(), 80.0)]);

        let ranked = rank_jobs_by_affinity(&jobs, &names(&["Curiosity"]), &scores);

        assert_eq!(ranked[0].job.id, "j2");
        assert_eq!(ranked[0].score, VALUE_TAG_POINTS);
        assert_eq!(ranked[1].score, CATEGORY_TITLE_POINTS);
    }

    #[test]
    fn test_multiple_value_tags_accumulate() {
        let jobs = vec![tagged("j1", "Planner", &["Drive", "Curiosity"])];
        let ranked =
            rank_jobs_by_affinity(&jobs, &names(&["Curiosity", "Drive"]), &DiagnosisScores::new());
        assert_eq!(ranked[0].score, 2 * VALUE_TAG_POINTS);
    }

    #[test]
    fn test_unscored_jobs_excluded_when_any_match() {
        let jobs = vec![
            tagged("j1", "Cook", &[]),
            tagged("j2", "Nurse", &["Empathy"]),
        ];
        let ranked = rank_jobs_by_affinity(&jobs, &names(&["Empathy"]), &DiagnosisScores::new());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].job.id, "j2");
    }

    #[test]
    fn test_no_matches_returns_first_jobs_unscored() {
        let jobs: Vec<Opportunity> = (0..25).map(|i| opp(&format!("j{i}"), "Job")).collect();
        let ranked = rank_jobs_by_affinity(&jobs, &[], &DiagnosisScores::new());
        assert_eq!(ranked.len(), AFFINITY_LIMIT);
        assert!(ranked.iter().all(|s| s.score == 0));
        assert_eq!(ranked[0].job.id, "j0");
    }

    #[test]
    fn test_japanese_title_keywords_match() {
        let jobs = vec![tagged("j1", "法人営業", &[])];
        let scores = DiagnosisScores::from([("B".to_string(), 90.0)]);
        let ranked = rank_jobs_by_affinity(&jobs, &[], &scores);
        assert_eq!(ranked[0].score, CATEGORY_TITLE_POINTS);
    }
}
