//! Quiz selection
//!
//! Picks the next quiz question uniformly at random from the eligible
//! pool: questions matching the category filter that the session has not
//! been served yet. The pool is rebuilt from scratch on every call.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Question;

/// Category id callers send to mean "any category"
pub const ALL_CATEGORIES: i64 = 0;

/// Which categories are eligible for the next question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i64),
}

impl CategoryFilter {
    /// Interpret a wire category id, `0` meaning all categories
    pub fn from_id(id: i64) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    pub fn category_id(&self) -> i64 {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => *id,
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => question.category == *id,
        }
    }
}

/// Outcome of a quiz draw
#[derive(Debug, Clone, PartialEq)]
pub enum QuizSelection {
    Selected(Question),
    /// Every eligible question has already been served
    Exhausted,
}

impl QuizSelection {
    pub fn question(&self) -> Option<&Question> {
        match self {
            QuizSelection::Selected(q) => Some(q),
            QuizSelection::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizSelection::Exhausted)
    }
}

/// Questions matching `filter` whose id is not in `previous`
///
/// Duplicates in `previous` are harmless.
pub fn eligible_pool<'a>(
    questions: &'a [Question],
    filter: CategoryFilter,
    previous: &[i64],
) -> Vec<&'a Question> {
    let served: HashSet<i64> = previous.iter().copied().collect();
    questions
        .iter()
        .filter(|q| filter.matches(q) && !served.contains(&q.id))
        .collect()
}

/// Draw one question from the eligible pool
///
/// Each eligible question has probability 1/|pool|. An empty pool gives
/// [`QuizSelection::Exhausted`].
pub fn select_question<R: Rng + ?Sized>(
    questions: &[Question],
    filter: CategoryFilter,
    previous: &[i64],
    rng: &mut R,
) -> QuizSelection {
    let pool = eligible_pool(questions, filter, previous);
    match pool.choose(rng) {
        Some(question) => QuizSelection::Selected((*question).clone()),
        None => QuizSelection::Exhausted,
    }
}
