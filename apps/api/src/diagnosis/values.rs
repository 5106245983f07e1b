//! Value derivation: which value cards a diagnosis unlocks, and the
//! user's public "core values" set.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::catalog::ValueCatalog;
use crate::diagnosis::radar::{ANSWER_MAX, ANSWER_MIN, NEUTRAL_ANSWER};
use crate::models::value::ValueCard;

/// Number of most-decisive questions whose value pairs get unlocked.
pub const TOP_QUESTION_COUNT: usize = 5;

/// Maximum number of positive values a user can show on their profile.
pub const MAX_PUBLIC_VALUES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublicValueError {
    #[error("Value card {0} does not exist")]
    UnknownValue(u32),

    #[error("Value card {0} is a shadow value and cannot be made public")]
    ShadowValue(u32),

    #[error("At most {MAX_PUBLIC_VALUES} public values are allowed")]
    LimitReached,
}

/// Picks the unlocked values from raw 1–5 answers.
///
/// Questions are ranked by how far the answer sits from neutral (missing
/// answers count as neutral, others are clamped into 1–5 first); ties keep
/// catalog order. For each of the top
/// questions both the positive card and its shadow are emitted, so the
/// result is `[pos, neg, pos, neg, ...]`.
pub fn derive_selected_values(answers: &HashMap<u32, f64>, catalog: &ValueCatalog) -> Vec<u32> {
    let mut ranked: Vec<(usize, f64)> = catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(pos, q)| {
            let answer = answers
                .get(&q.id)
                .copied()
                .filter(|a| a.is_finite())
                .map(|a| a.clamp(ANSWER_MIN, ANSWER_MAX))
                .unwrap_or(NEUTRAL_ANSWER);
            (pos, (answer - NEUTRAL_ANSWER).abs())
        })
        .collect();

    // sort_by is stable, so equal deviations keep catalog order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(TOP_QUESTION_COUNT)
        .flat_map(|(pos, _)| {
            let q = &catalog.questions()[pos];
            [q.positive_value_id, q.negative_value_id]
        })
        .collect()
}

/// Appends the shadow partner of every selected positive value that is
/// missing it. Records written before shadows were tracked lack them.
pub fn repair_value_pairs(selected: &[u32], catalog: &ValueCatalog) -> Vec<u32> {
    let mut repaired = selected.to_vec();
    let mut present: HashSet<u32> = selected.iter().copied().collect();

    for q in catalog.questions() {
        if present.contains(&q.positive_value_id) && !present.contains(&q.negative_value_id) {
            repaired.push(q.negative_value_id);
            present.insert(q.negative_value_id);
        }
    }

    repaired
}

/// Brings a stored selection back to a full set of pairs.
///
/// Missing shadows are repaired first; if fewer than the expected number of
/// values remain and answers are available, the selection is re-derived.
pub fn restore_selected_values(
    stored: &[u32],
    answers: &HashMap<u32, f64>,
    catalog: &ValueCatalog,
) -> Vec<u32> {
    let repaired = repair_value_pairs(stored, catalog);
    if repaired.len() < TOP_QUESTION_COUNT * 2 && !answers.is_empty() {
        return derive_selected_values(answers, catalog);
    }
    repaired
}

/// Adds `value_id` to the public set, or removes it if already present.
pub fn toggle_public_value(
    current: &[u32],
    value_id: u32,
    catalog: &ValueCatalog,
) -> Result<Vec<u32>, PublicValueError> {
    if current.contains(&value_id) {
        return Ok(current.iter().copied().filter(|id| *id != value_id).collect());
    }

    let card = catalog
        .card(value_id)
        .ok_or(PublicValueError::UnknownValue(value_id))?;
    if !card.is_positive() {
        return Err(PublicValueError::ShadowValue(value_id));
    }
    if current.len() >= MAX_PUBLIC_VALUES {
        return Err(PublicValueError::LimitReached);
    }

    let mut updated = current.to_vec();
    updated.push(value_id);
    Ok(updated)
}

/// Cards for the given public ids, in catalog order.
pub fn public_value_cards<'a>(public_ids: &[u32], catalog: &'a ValueCatalog) -> Vec<&'a ValueCard> {
    catalog
        .cards()
        .iter()
        .filter(|card| public_ids.contains(&card.id))
        .collect()
}
