use crate::errors::ExError;
use crate::model::{Category, NewQuestion, Question};
use crate::queries::{filter_by_category, filter_by_text};

/// Result type for storage calls
pub type StoreResult<T> = std::result::Result<T, ExError>;

/// Storage collaborator for questions and categories
///
/// Listings are ordered by id ascending. Implementations own the data;
/// callers only receive copies that live for one request.
pub trait QuestionStore {
    /// All questions, id ascending
    fn list_questions(&self) -> StoreResult<Vec<Question>>;

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Insert a question and return its new id
    fn insert_question(&mut self, question: &NewQuestion) -> StoreResult<i64>;

    /// Remove a question; `false` when no row had that id
    fn delete_question(&mut self, id: i64) -> StoreResult<bool>;

    fn count_questions(&self) -> StoreResult<usize> {
        Ok(self.list_questions()?.len())
    }

    /// Questions referencing `category_id`, id ascending
    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        Ok(filter_by_category(self.list_questions()?, category_id))
    }

    /// Questions whose text contains `term` case-insensitively, id ascending
    fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        Ok(filter_by_text(self.list_questions()?, term))
    }

    /// All categories, id ascending
    fn list_categories(&self) -> StoreResult<Vec<Category>>;

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Insert or relabel a category
    fn insert_category(&mut self, category: &Category) -> StoreResult<()>;
}
