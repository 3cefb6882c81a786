//! Request body parsing
//!
//! Bodies are read as `serde_json::Value` first so that shape problems map
//! to the right status: unreadable JSON is a 400, a create payload with a
//! bad field is a 422, a quiz payload with a bad field is a 400.

use serde_json::{Map, Value};
use trivia_core::errors::{Result, TriviaError};
use trivia_core::{CategoryFilter, NewQuestion};

/// Parse raw bytes as JSON
pub fn parse_json(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| TriviaError::MalformedBody {
        reason: e.to_string(),
    })
}

/// What a POST to `/questions` asks for
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionsPost {
    Search(String),
    Create(NewQuestion),
}

/// Dispatch on a `searchTerm` with visible text; anything else is a create
pub fn questions_post(body: &Value) -> Result<QuestionsPost> {
    if let Some(term) = body.get("searchTerm").and_then(Value::as_str) {
        if !term.trim().is_empty() {
            return Ok(QuestionsPost::Search(term.to_string()));
        }
    }

    let obj = body
        .as_object()
        .ok_or_else(|| TriviaError::invalid_question("body", "must be a JSON object"))?;

    let question = NewQuestion::new(
        required_text(obj, "question")?,
        required_text(obj, "answer")?,
        required_int(obj, "category")?,
        required_int(obj, "difficulty")?,
    );
    question.validate()?;
    Ok(QuestionsPost::Create(question))
}

fn required_text(obj: &Map<String, Value>, field: &str) -> Result<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(TriviaError::invalid_question(field, "must be a string")),
        None => Err(TriviaError::invalid_question(field, "is required")),
    }
}

fn required_int(obj: &Map<String, Value>, field: &str) -> Result<i64> {
    match obj.get(field) {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| TriviaError::invalid_question(field, "must be an integer")),
        None => Err(TriviaError::invalid_question(field, "is required")),
    }
}

/// Parsed POST `/quizzes` body
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRequest {
    pub previous: Vec<i64>,
    /// The caller's `quiz_category` object, echoed back unchanged
    pub category: Value,
    pub filter: CategoryFilter,
}

/// Read `previous_questions` and `quiz_category`
///
/// Ids may arrive as integers or numeric strings. A missing or null
/// `previous_questions` means nothing has been served yet.
pub fn quiz_request(body: &Value) -> Result<QuizRequest> {
    let category = body
        .get("quiz_category")
        .filter(|v| v.is_object())
        .cloned()
        .ok_or_else(|| TriviaError::invalid_quiz("quiz_category", "must be an object"))?;
    let category_id = category
        .get("id")
        .and_then(loose_id)
        .ok_or_else(|| TriviaError::invalid_quiz("quiz_category.id", "must be an integer"))?;

    let previous = match body.get("previous_questions") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                loose_id(item).ok_or_else(|| {
                    TriviaError::invalid_quiz("previous_questions", "must hold question ids")
                })
            })
            .collect::<Result<Vec<i64>>>()?,
        Some(_) => {
            return Err(TriviaError::invalid_quiz(
                "previous_questions",
                "must be an array",
            ))
        }
    };

    Ok(QuizRequest {
        previous,
        category,
        filter: CategoryFilter::from_id(category_id),
    })
}

fn loose_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_json_is_malformed() {
        assert!(matches!(
            parse_json(b"question=1"),
            Err(TriviaError::MalformedBody { .. })
        ));
    }

    #[test]
    fn test_search_term_wins() {
        let body = json!({"searchTerm": "title", "question": "ignored"});
        assert_eq!(
            questions_post(&body).unwrap(),
            QuestionsPost::Search("title".to_string())
        );
    }

    #[test]
    fn test_empty_search_term_falls_through_to_create() {
        let body = json!({"searchTerm": "", "question": "Q", "answer": "A", "category": 1, "difficulty": 1});
        assert!(matches!(
            questions_post(&body).unwrap(),
            QuestionsPost::Create(_)
        ));
    }

    #[test]
    fn test_blank_search_term_is_not_a_search() {
        let body = json!({"searchTerm": " \t ", "question": "Q", "answer": "A", "category": 1, "difficulty": 1});
        assert!(matches!(
            questions_post(&body).unwrap(),
            QuestionsPost::Create(_)
        ));

        let bare = json!({"searchTerm": "   "});
        assert!(matches!(
            questions_post(&bare),
            Err(TriviaError::InvalidQuestionField { .. })
        ));
    }

    #[test]
    fn test_create_rejects_string_difficulty() {
        let body = json!({"question": "Q", "answer": "A", "category": 1, "difficulty": "hard"});
        match questions_post(&body) {
            Err(TriviaError::InvalidQuestionField { field, .. }) => assert_eq!(field, "difficulty"),
            other => panic!("Expected InvalidQuestionField, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_fractional_category() {
        let body = json!({"question": "Q", "answer": "A", "category": 1.5, "difficulty": 1});
        assert!(questions_post(&body).is_err());
    }

    #[test]
    fn test_quiz_accepts_string_ids() {
        let body = json!({"previous_questions": ["3", 4], "quiz_category": {"type": "Art", "id": "2"}});
        let req = quiz_request(&body).unwrap();
        assert_eq!(req.previous, vec![3, 4]);
        assert_eq!(req.filter, CategoryFilter::Only(2));
        assert_eq!(req.category["type"], "Art");
    }

    #[test]
    fn test_quiz_zero_means_all() {
        let body = json!({"quiz_category": {"type": "click", "id": 0}});
        let req = quiz_request(&body).unwrap();
        assert_eq!(req.filter, CategoryFilter::All);
        assert!(req.previous.is_empty());
    }

    #[test]
    fn test_quiz_missing_category_is_invalid() {
        let body = json!({"previous_questions": []});
        assert!(matches!(
            quiz_request(&body),
            Err(TriviaError::InvalidQuizField { .. })
        ));
    }

    #[test]
    fn test_quiz_bad_previous_element_is_invalid() {
        let body = json!({"previous_questions": [{"id": 1}], "quiz_category": {"id": 0}});
        assert!(quiz_request(&body).is_err());
    }
}
