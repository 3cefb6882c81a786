use serde::{Deserialize, Serialize};

use crate::errors::{Result, TriviaError};

/// A stored trivia question
///
/// The id is assigned by the store on insert; none of the fields change
/// afterwards. `category` refers to a [`Category`](super::Category) id but
/// is not checked against the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl Question {
    /// Map to the public record returned by every listing
    pub fn format(&self) -> FormattedQuestion {
        FormattedQuestion {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Public record of a question as sent to callers
///
/// Kept apart from [`Question`] so the wire shape stays fixed when the
/// stored row gains columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<&Question> for FormattedQuestion {
    fn from(question: &Question) -> Self {
        question.format()
    }
}

/// Insert payload for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Check the text fields before the payload reaches a store
    ///
    /// # Errors
    /// * `InvalidQuestionField` - question or answer text is blank
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(TriviaError::invalid_question(
                "question",
                "cannot be empty or whitespace-only",
            ));
        }
        if self.answer.trim().is_empty() {
            return Err(TriviaError::invalid_question(
                "answer",
                "cannot be empty or whitespace-only",
            ));
        }
        Ok(())
    }

    /// Materialize with a store-assigned id
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_copies_public_fields() {
        let q = NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", 1, 3)
            .into_question(21);
        let formatted = q.format();

        assert_eq!(formatted.id, 21);
        assert_eq!(formatted.question, "Who discovered penicillin?");
        assert_eq!(formatted.answer, "Alexander Fleming");
        assert_eq!(formatted.category, 1);
        assert_eq!(formatted.difficulty, 3);
    }

    #[test]
    fn test_validate_rejects_blank_question() {
        let result = NewQuestion::new("   ", "answer", 1, 1).validate();
        match result {
            Err(TriviaError::InvalidQuestionField { field, .. }) => assert_eq!(field, "question"),
            other => panic!("Expected InvalidQuestionField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_answer() {
        let result = NewQuestion::new("question", "", 1, 1).validate();
        assert!(matches!(
            result,
            Err(TriviaError::InvalidQuestionField { ref field, .. }) if field == "answer"
        ));
    }

    #[test]
    fn test_formatted_question_json_shape() {
        let q = NewQuestion::new("Q", "A", 4, 2).into_question(9);
        let json = serde_json::to_value(q.format()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "question": "Q",
                "answer": "A",
                "category": 4,
                "difficulty": 2
            })
        );
    }
}
