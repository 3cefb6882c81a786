//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for reads. It takes the
//! store by shared reference and never writes.

#![allow(clippy::result_large_err)]

use rand::Rng;
use trivia_core::errors::TriviaError;
use trivia_core::model::categories_by_id;
use trivia_core::{paginate, select_question, Category, CategoryFilter, QuestionStore, QuizSelection};

use super::results::{CategoryListing, CategoryQuestions, QuestionPage, QuizResult, SearchPage};
use super::{run_op, Result};

/// Read-only queries supported by the engine
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// One page of all questions; an empty page is an error
    ListQuestions { page: usize },
    /// One page of case-insensitive substring matches
    SearchQuestions { term: String, page: usize },
    /// Every question in a category that must exist
    QuestionsByCategory { category_id: i64 },
    ListCategories,
    /// Draw a question not in `previous` from the filtered pool
    NextQuizQuestion {
        previous: Vec<i64>,
        filter: CategoryFilter,
    },
}

#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    Questions(QuestionPage),
    Search(SearchPage),
    ByCategory(CategoryQuestions),
    Categories(CategoryListing),
    Quiz(QuizResult),
}

/// Apply a read-only engine query using the thread-local RNG
///
/// # Errors
///
/// * `NotFound` - empty listing page, unknown category, or no categories
/// * store faults pass through with their own kind
pub fn apply_engine_query<S>(query: EngineQuery, store: &S) -> Result<EngineQueryResult>
where
    S: QuestionStore + ?Sized,
{
    apply_engine_query_with_rng(query, store, &mut rand::thread_rng())
}

/// Apply a read-only engine query with an explicit RNG for quiz draws
///
/// # Errors
///
/// See [`apply_engine_query`].
pub fn apply_engine_query_with_rng<S, R>(
    query: EngineQuery,
    store: &S,
    rng: &mut R,
) -> Result<EngineQueryResult>
where
    S: QuestionStore + ?Sized,
    R: Rng + ?Sized,
{
    match query {
        EngineQuery::ListQuestions { page } => run_op("list_questions", || {
            let all = store.list_questions()?;
            let questions = paginate(&all, page);
            if questions.is_empty() {
                return Err(TriviaError::PageEmpty { page }.into());
            }
            let categories = categories_by_id(&store.list_categories()?);

            tracing::debug!(page, result_len = questions.len(), "page served");
            Ok(EngineQueryResult::Questions(QuestionPage {
                questions,
                total_questions: all.len(),
                categories,
            }))
        }),

        EngineQuery::SearchQuestions { term, page } => run_op("search_questions", || {
            let matches = store.search_questions(&term)?;

            tracing::debug!(page, result_len = matches.len(), "search matched");
            Ok(EngineQueryResult::Search(SearchPage {
                questions: paginate(&matches, page),
                total_questions: matches.len(),
            }))
        }),

        EngineQuery::QuestionsByCategory { category_id } => {
            run_op("questions_by_category", || {
                let current_category: Category = store
                    .get_category(category_id)?
                    .ok_or(TriviaError::CategoryNotFound { category_id })?;
                let matches = store.questions_by_category(category_id)?;

                Ok(EngineQueryResult::ByCategory(CategoryQuestions {
                    questions: matches.iter().map(|q| q.format()).collect(),
                    total_questions: matches.len(),
                    current_category,
                }))
            })
        }

        EngineQuery::ListCategories => run_op("list_categories", || {
            let categories = store.list_categories()?;
            if categories.is_empty() {
                return Err(TriviaError::NoCategories.into());
            }
            Ok(EngineQueryResult::Categories(CategoryListing {
                categories: categories_by_id(&categories),
            }))
        }),

        EngineQuery::NextQuizQuestion { previous, filter } => run_op("next_quiz_question", || {
            let candidates = match filter {
                CategoryFilter::All => store.list_questions()?,
                CategoryFilter::Only(id) => store.questions_by_category(id)?,
            };

            let selection = select_question(&candidates, filter, &previous, rng);
            tracing::debug!(
                category_id = filter.category_id(),
                pool_len = candidates.len(),
                exhausted = selection.is_exhausted(),
                "quiz draw"
            );

            Ok(EngineQueryResult::Quiz(QuizResult {
                question: match selection {
                    QuizSelection::Selected(q) => Some(q.format()),
                    QuizSelection::Exhausted => None,
                },
            }))
        }),
    }
}
