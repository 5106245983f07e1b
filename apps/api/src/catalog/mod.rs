//! Value Card Catalog: the immutable registry of value cards and diagnosis questions.
//!
//! Loaded once at startup (built-in set, or a JSON override file) and shared
//! as `Arc<ValueCatalog>`. Every consumer takes the catalog as a parameter so
//! tests can hand in a small fixture instead.

pub mod builtin;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::value::{DiagnosisQuestion, Polarity, ValueCard};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate value card id {0}")]
    DuplicateId(u32),

    #[error("Duplicate {polarity:?} value card name '{name}'")]
    DuplicateName { name: String, polarity: Polarity },

    #[error("Value card {card_id} pairs with unknown card {pair_id}")]
    DanglingPair { card_id: u32, pair_id: u32 },

    #[error("Duplicate diagnosis question id {0}")]
    DuplicateQuestion(u32),

    #[error("Question {question_id} references card {value_id} which is missing or has the wrong polarity")]
    QuestionValue { question_id: u32, value_id: u32 },

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a catalog override file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    cards: Vec<ValueCard>,
    #[serde(default)]
    questions: Vec<DiagnosisQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueCatalog {
    cards: Vec<ValueCard>,
    questions: Vec<DiagnosisQuestion>,
    #[serde(skip)]
    index: HashMap<u32, usize>,
}

impl ValueCatalog {
    /// Builds a catalog, rejecting duplicate ids, duplicate names within a
    /// polarity, dangling pair links and questions pointing at the wrong card.
    pub fn new(
        cards: Vec<ValueCard>,
        questions: Vec<DiagnosisQuestion>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(cards.len());
        let mut names: HashSet<(Polarity, &str)> = HashSet::new();

        for (pos, card) in cards.iter().enumerate() {
            if index.insert(card.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(card.id));
            }
            if !names.insert((card.polarity, card.name.as_str())) {
                return Err(CatalogError::DuplicateName {
                    name: card.name.clone(),
                    polarity: card.polarity,
                });
            }
        }

        for card in &cards {
            if let Some(pair_id) = card.pair_id {
                if !index.contains_key(&pair_id) {
                    return Err(CatalogError::DanglingPair {
                        card_id: card.id,
                        pair_id,
                    });
                }
            }
        }

        let mut question_ids = HashSet::new();
        for q in &questions {
            if !question_ids.insert(q.id) {
                return Err(CatalogError::DuplicateQuestion(q.id));
            }
            let expected = [
                (q.positive_value_id, Polarity::Positive),
                (q.negative_value_id, Polarity::Negative),
            ];
            for (value_id, polarity) in expected {
                let ok = index
                    .get(&value_id)
                    .map(|&pos| cards[pos].polarity == polarity)
                    .unwrap_or(false);
                if !ok {
                    return Err(CatalogError::QuestionValue {
                        question_id: q.id,
                        value_id,
                    });
                }
            }
        }

        Ok(Self {
            cards,
            questions,
            index,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::builtin_cards(), builtin::builtin_questions())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.cards, file.questions)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn card(&self, id: u32) -> Option<&ValueCard> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    /// All cards, in catalog order.
    pub fn cards(&self) -> &[ValueCard] {
        &self.cards
    }

    pub fn questions(&self) -> &[DiagnosisQuestion] {
        &self.questions
    }

    /// Resolves ids to positive cards, keeping input order. Unknown ids,
    /// shadow cards and repeated ids are dropped.
    pub fn positive_cards(&self, ids: &[u32]) -> Vec<&ValueCard> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| self.card(*id))
            .filter(|card| card.is_positive())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::models::value::ValueCategory;

    pub fn card(id: u32, name: &str, polarity: Polarity) -> ValueCard {
        ValueCard {
            id,
            name: name.to_string(),
            polarity,
            categories: vec![ValueCategory::Thinking],
            description: String::new(),
            pair_id: None,
        }
    }

    /// Small catalog: 3 and 5 positive, 7 negative (shadow of 3), 8 positive.
    pub fn small_catalog() -> ValueCatalog {
        let mut c3 = card(3, "Curiosity", Polarity::Positive);
        c3.pair_id = Some(7);
        let mut c7 = card(7, "Distraction", Polarity::Negative);
        c7.pair_id = Some(3);
        let mut c5 = card(5, "Drive", Polarity::Positive);
        c5.categories = vec![ValueCategory::Action];
        let mut c8 = card(8, "Empathy", Polarity::Positive);
        c8.categories = vec![ValueCategory::Empathy];

        let questions = vec![DiagnosisQuestion {
            id: 1,
            category: ValueCategory::Thinking,
            text: "I enjoy exploring ideas.".to_string(),
            positive_value_id: 3,
            negative_value_id: 7,
        }];

        ValueCatalog::new(vec![c3, c5, c7, c8], questions).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ValueCatalog::builtin().unwrap();
        assert_eq!(catalog.cards().len(), 40);
        assert_eq!(catalog.questions().len(), 20);
        assert!(catalog.card(1).unwrap().is_positive());
        assert!(!catalog.card(101).unwrap().is_positive());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let cards = vec![
            card(1, "Curiosity", Polarity::Positive),
            card(1, "Drive", Polarity::Positive),
        ];
        assert!(matches!(
            ValueCatalog::new(cards, vec![]),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_same_name_allowed_across_polarity() {
        let cards = vec![
            card(1, "Independence", Polarity::Positive),
            card(2, "Independence", Polarity::Negative),
        ];
        assert!(ValueCatalog::new(cards, vec![]).is_ok());
    }

    #[test]
    fn test_duplicate_name_within_polarity_rejected() {
        let cards = vec![
            card(1, "Drive", Polarity::Positive),
            card(2, "Drive", Polarity::Positive),
        ];
        assert!(matches!(
            ValueCatalog::new(cards, vec![]),
            Err(CatalogError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_dangling_pair_rejected() {
        let mut c = card(1, "Drive", Polarity::Positive);
        c.pair_id = Some(99);
        assert!(matches!(
            ValueCatalog::new(vec![c], vec![]),
            Err(CatalogError::DanglingPair {
                card_id: 1,
                pair_id: 99
            })
        ));
    }

    #[test]
    fn test_question_with_swapped_polarity_rejected() {
        let cards = vec![
            card(1, "Drive", Polarity::Positive),
            card(2, "Impatience", Polarity::Negative),
        ];
        let question = DiagnosisQuestion {
            id: 1,
            category: crate::models::value::ValueCategory::Action,
            text: "q".to_string(),
            positive_value_id: 2,
            negative_value_id: 1,
        };
        assert!(matches!(
            ValueCatalog::new(cards, vec![question]),
            Err(CatalogError::QuestionValue { question_id: 1, .. })
        ));
    }

    #[test]
    fn test_positive_cards_filters_and_keeps_order() {
        let catalog = small_catalog();
        let resolved: Vec<u32> = catalog
            .positive_cards(&[8, 7, 42, 3, 8])
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(resolved, vec![8, 3]);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"cards": [{{"id": 1, "name": "Drive", "polarity": "positive", "categories": ["B"]}}]}}"#
        )
        .unwrap();

        let catalog = ValueCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.cards().len(), 1);
        assert!(catalog.questions().is_empty());
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = ValueCatalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ValueCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
