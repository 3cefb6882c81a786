use std::collections::BTreeMap;

use super::store::{QuestionStore, StoreResult};
use crate::model::{Category, NewQuestion, Question};

/// In-memory store for questions and categories
///
/// BTreeMap keeps the id ordering the trait requires. Ids are never
/// reused after a delete. Not thread-safe on its own; wrap it in a lock
/// to share it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    last_id: i64,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from fixtures, keeping the fixture ids
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let mut store = Self::new();
        for category in categories {
            store.categories.insert(category.id, category);
        }
        for question in questions {
            store.last_id = store.last_id.max(question.id);
            store.questions.insert(question.id, question);
        }
        store
    }
}

impl QuestionStore for MemoryStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn insert_question(&mut self, question: &NewQuestion) -> StoreResult<i64> {
        self.last_id += 1;
        let id = self.last_id;
        self.questions.insert(id, question.clone().into_question(id));
        Ok(id)
    }

    fn delete_question(&mut self, id: i64) -> StoreResult<bool> {
        Ok(self.questions.remove(&id).is_some())
    }

    fn count_questions(&self) -> StoreResult<usize> {
        Ok(self.questions.len())
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    fn insert_category(&mut self, category: &Category) -> StoreResult<()> {
        self.categories.insert(category.id, category.clone());
        Ok(())
    }
}
