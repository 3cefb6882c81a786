//! Typed results returned by engine operations.

use std::collections::BTreeMap;

use serde::Serialize;
use trivia_core::{Category, FormattedQuestion};

/// One page of the full question listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: usize,
    /// `{id: label}` for every category
    pub categories: BTreeMap<i64, String>,
}

/// One page of search matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub questions: Vec<FormattedQuestion>,
    /// Count of all matches, not just this page
    pub total_questions: usize,
}

/// Every question in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: usize,
    pub current_category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub categories: BTreeMap<i64, String>,
}

/// Next quiz question, `None` once the pool is exhausted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub question: Option<FormattedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedQuestion {
    pub created: i64,
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedQuestion {
    pub deleted: i64,
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: usize,
}
