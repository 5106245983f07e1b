use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOrigin {
    /// Produced by the external generation step and persisted.
    #[default]
    Curated,
    /// Synthesized in-memory for a value with no usable curated record.
    Fallback,
}

/// Links a value card to one recommended opportunity.
///
/// `course_id` may point into either the course or the job catalog; the
/// column name is kept from the persisted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: String,
    pub value_id: u32,
    pub course_id: String,
    #[serde(default)]
    pub reason_message: Option<String>,
    #[serde(default)]
    pub origin: RecommendationOrigin,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RecommendationRecord {
    /// The stored reason, treating blank strings as missing.
    pub fn reason(&self) -> Option<&str> {
        self.reason_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_row_defaults_to_curated() {
        let record: RecommendationRecord = serde_json::from_str(
            r#"{"id": "r1", "value_id": 3, "course_id": "c1", "created_at": "2025-11-02T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.origin, RecommendationOrigin::Curated);
        assert!(record.reason_message.is_none());
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_blank_reason_treated_as_missing() {
        let record = RecommendationRecord {
            id: "r1".to_string(),
            value_id: 1,
            course_id: "c1".to_string(),
            reason_message: Some("   ".to_string()),
            origin: RecommendationOrigin::Curated,
            created_at: None,
        };
        assert_eq!(record.reason(), None);
    }
}
