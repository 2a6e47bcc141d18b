//! Question - Trivia Question Data

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::domain::category::Category;
use crate::error::{Error, Result};

/// A trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Deck-assigned id, ascending
    #[serde(default)]
    pub id: u64,
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Category; uncategorized questions render with an empty icon slot
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    /// Difficulty score, 1 (easiest) to 5
    pub difficulty: u8,
}

impl Question {
    /// Validate user-supplied fields before the question enters the deck.
    ///
    /// Question and answer text must be non-blank and difficulty must fall
    /// within the 1..=5 range. Category is optional.
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(Error::Invalid {
                message: "question text is required".to_string(),
            });
        }
        if self.answer.trim().is_empty() {
            return Err(Error::Invalid {
                message: "answer text is required".to_string(),
            });
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(Error::Invalid {
                message: format!(
                    "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"
                ),
            });
        }
        Ok(())
    }
}

/// Deserialize a category from its display string, mapping unknown or
/// missing values to `None` instead of failing the deck load.
fn lenient_category<'de, D>(deserializer: D) -> std::result::Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Category::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: 1,
            question: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            category: Some(Category::History),
            difficulty: 1,
        }
    }

    #[test]
    fn test_validate_accepts_complete_question() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut q = sample();
        q.question = "   ".to_string();
        assert!(q.validate().is_err());

        let mut q = sample();
        q.answer = String::new();
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_difficulty() {
        let mut q = sample();
        q.difficulty = 0;
        assert!(q.validate().is_err());
        q.difficulty = 6;
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_missing_category() {
        let mut q = sample();
        q.category = None;
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_deserialize_unknown_category_degrades_to_none() {
        let q: Question = serde_json::from_str(
            r#"{"question": "q", "answer": "a", "category": "Astrology", "difficulty": 2}"#,
        )
        .expect("deserialization failed");
        assert_eq!(q.category, None);
        assert_eq!(q.id, 0);
    }

    #[test]
    fn test_deserialize_known_category() {
        let q: Question = serde_json::from_str(
            r#"{"id": 7, "question": "q", "answer": "a", "category": "science", "difficulty": 4}"#,
        )
        .expect("deserialization failed");
        assert_eq!(q.category, Some(Category::Science));
    }

    #[test]
    fn test_serialize_category_as_display_string() {
        let json = serde_json::to_string(&sample()).expect("serialization failed");
        assert!(json.contains(r#""category":"History""#));
    }
}
