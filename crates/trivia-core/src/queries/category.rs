use crate::model::Question;

/// Keep questions that reference `category_id`, preserving order
///
/// An id nobody references yields an empty vector.
pub fn filter_by_category(questions: Vec<Question>, category_id: i64) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| q.category == category_id)
        .collect()
}
