use serde::{Deserialize, Serialize};

/// Whether a value card describes a trait to grow toward or one to watch out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    /// "Shadow" side of a trait. Never recommended toward.
    Negative,
}

impl Polarity {
    pub fn is_positive(self) -> bool {
        matches!(self, Polarity::Positive)
    }
}

/// Fixed aptitude categories. Declaration order is the radar chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueCategory {
    #[serde(rename = "A", alias = "thinking")]
    Thinking,
    #[serde(rename = "B", alias = "action")]
    Action,
    #[serde(rename = "C", alias = "integrity")]
    Integrity,
    #[serde(rename = "D", alias = "empathy")]
    Empathy,
    #[serde(rename = "E", alias = "stability")]
    Stability,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 5] = [
        ValueCategory::Thinking,
        ValueCategory::Action,
        ValueCategory::Integrity,
        ValueCategory::Empathy,
        ValueCategory::Stability,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ValueCategory::Thinking => "A",
            ValueCategory::Action => "B",
            ValueCategory::Integrity => "C",
            ValueCategory::Empathy => "D",
            ValueCategory::Stability => "E",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ValueCategory::Thinking => "thinking",
            ValueCategory::Action => "action",
            ValueCategory::Integrity => "integrity",
            ValueCategory::Empathy => "empathy",
            ValueCategory::Stability => "stability",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ValueCategory::Thinking => "Thinking & Creativity",
            ValueCategory::Action => "Action & Passion",
            ValueCategory::Integrity => "Integrity & Follow-through",
            ValueCategory::Empathy => "Empathy & Relationships",
            ValueCategory::Stability => "Stability & Prudence",
        }
    }

    /// Accepts either the single-letter key or the slug, case-insensitively.
    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(raw) || c.slug().eq_ignore_ascii_case(raw))
    }
}

/// A named trait a user can unlock during diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCard {
    pub id: u32,
    pub name: String,
    pub polarity: Polarity,
    #[serde(default)]
    pub categories: Vec<ValueCategory>,
    #[serde(default)]
    pub description: String,
    /// Opposite-polarity partner card, if any.
    #[serde(default)]
    pub pair_id: Option<u32>,
}

impl ValueCard {
    pub fn is_positive(&self) -> bool {
        self.polarity.is_positive()
    }
}

/// A single Likert question (1 = strongly disagree, 5 = strongly agree).
///
/// High answers unlock `positive_value_id`, low answers its shadow
/// `negative_value_id`; both are surfaced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisQuestion {
    pub id: u32,
    pub category: ValueCategory,
    pub text: String,
    pub positive_value_id: u32,
    pub negative_value_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_fixed() {
        let keys: Vec<&str> = ValueCategory::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_from_key_accepts_key_and_slug() {
        assert_eq!(ValueCategory::from_key("a"), Some(ValueCategory::Thinking));
        assert_eq!(ValueCategory::from_key("Empathy"), Some(ValueCategory::Empathy));
        assert_eq!(ValueCategory::from_key(" E "), Some(ValueCategory::Stability));
        assert_eq!(ValueCategory::from_key("Z"), None);
    }

    #[test]
    fn test_category_serializes_as_key() {
        let json = serde_json::to_string(&ValueCategory::Integrity).unwrap();
        assert_eq!(json, "\"C\"");
        let parsed: ValueCategory = serde_json::from_str("\"action\"").unwrap();
        assert_eq!(parsed, ValueCategory::Action);
    }

    #[test]
    fn test_polarity_deserializes_snake_case() {
        let card: ValueCard = serde_json::from_str(
            r#"{"id": 9, "name": "Stubborn", "polarity": "negative"}"#,
        )
        .unwrap();
        assert!(!card.is_positive());
        assert!(card.categories.is_empty());
        assert_eq!(card.pair_id, None);
    }
}
