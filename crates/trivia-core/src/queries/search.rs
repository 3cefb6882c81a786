use crate::model::Question;

/// Case-insensitive containment check against a lowercased needle
pub fn matches_text(question: &Question, needle_lower: &str) -> bool {
    question.question.to_lowercase().contains(needle_lower)
}

/// Keep questions whose text contains `term`, ignoring case
///
/// Input order is preserved. No tokenization or ranking.
pub fn filter_by_text(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| matches_text(q, &needle))
        .collect()
}
