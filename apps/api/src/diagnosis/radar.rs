//! Category Scorer: turns category scores into radar chart points.
//!
//! `compute_radar_data` is the chart-facing contract: one point per category,
//! always in `ValueCategory::ALL` order, values clamped into 0–100.
//! `aggregate_answers` produces those scores from raw 1–5 question answers.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::ValueCatalog;
use crate::models::value::ValueCategory;

pub const RADAR_MIN: f64 = 0.0;
pub const RADAR_MAX: f64 = 100.0;

/// Likert answer bounds and the value assumed for unanswered categories.
pub const ANSWER_MIN: f64 = 1.0;
pub const ANSWER_MAX: f64 = 5.0;
pub const NEUTRAL_ANSWER: f64 = 3.0;

/// Category key → accumulated score. Keys are `"A"`..`"E"` (or slugs).
/// Ordered so serialized scores are stable.
pub type DiagnosisScores = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRadarPoint {
    pub subject: String,
    pub key: String,
    pub value: u8,
}

/// Emits one radar point per fixed category. Missing keys read as 0;
/// negative and NaN scores clamp to 0, anything above 100 to 100.
pub fn compute_radar_data(scores: &DiagnosisScores) -> Vec<CategoryRadarPoint> {
    let mut by_category: BTreeMap<ValueCategory, f64> = BTreeMap::new();
    for (raw_key, raw_value) in scores {
        if let Some(category) = ValueCategory::from_key(raw_key) {
            // "A" and "thinking" may both be present; the larger one wins.
            let slot = by_category.entry(category).or_insert(RADAR_MIN);
            let value = sanitize_score(*raw_value);
            if value > *slot {
                *slot = value;
            }
        }
    }

    ValueCategory::ALL
        .iter()
        .map(|category| {
            let value = by_category.get(category).copied().unwrap_or(RADAR_MIN);
            CategoryRadarPoint {
                subject: category.display_name().to_string(),
                key: category.key().to_string(),
                value: value.round() as u8,
            }
        })
        .collect()
}

fn sanitize_score(raw: f64) -> f64 {
    if raw.is_nan() {
        RADAR_MIN
    } else {
        raw.clamp(RADAR_MIN, RADAR_MAX)
    }
}

/// Averages 1–5 answers per category and rescales to 0–100.
///
/// Each answer is clamped into the Likert range; non-finite answers and
/// answers to unknown questions are ignored. A category with no answers
/// scores as the neutral midpoint (50).
pub fn aggregate_answers(answers: &HashMap<u32, f64>, catalog: &ValueCatalog) -> DiagnosisScores {
    let mut totals: BTreeMap<ValueCategory, (f64, u32)> = BTreeMap::new();

    for question in catalog.questions() {
        let Some(answer) = answers.get(&question.id).copied() else {
            continue;
        };
        if !answer.is_finite() {
            continue;
        }
        let entry = totals.entry(question.category).or_insert((0.0, 0));
        entry.0 += answer.clamp(ANSWER_MIN, ANSWER_MAX);
        entry.1 += 1;
    }

    ValueCategory::ALL
        .iter()
        .map(|category| {
            let avg = match totals.get(category) {
                Some((total, count)) if *count > 0 => total / *count as f64,
                _ => NEUTRAL_ANSWER,
            };
            let normalized = (avg - ANSWER_MIN) / (ANSWER_MAX - ANSWER_MIN) * RADAR_MAX;
            (category.key().to_string(), normalized.round())
        })
        .collect()
}

/// The category with the highest score; ties go to the earlier category.
pub fn top_category(scores: &DiagnosisScores) -> Option<ValueCategory> {
    let points = compute_radar_data(scores);
    let mut best: Option<(ValueCategory, u8)> = None;
    for (category, point) in ValueCategory::ALL.iter().zip(points.iter()) {
        match best {
            Some((_, value)) if value >= point.value => {}
            _ => best = Some((*category, point.value)),
        }
    }
    best.filter(|(_, value)| *value > 0).map(|(category, _)| category)
}
