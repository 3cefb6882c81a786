use crate::model::{FormattedQuestion, Question};

/// Fixed page size for every paginated listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse a `page` query value
///
/// Pages are 1-indexed. A missing, non-numeric, zero or negative value
/// falls back to the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .and_then(|page| usize::try_from(page).ok())
        .unwrap_or(1)
}

/// Half-open index range `[start, end)` covered by a page
///
/// Page 0 is treated as page 1.
pub fn page_bounds(page: usize) -> (usize, usize) {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    (start, start.saturating_add(QUESTIONS_PER_PAGE))
}

/// Format the questions falling on `page`
///
/// A page past the end yields an empty vector; whether that is an error is
/// up to the caller.
pub fn paginate(questions: &[Question], page: usize) -> Vec<FormattedQuestion> {
    let (start, end) = page_bounds(page);
    if start >= questions.len() {
        return Vec::new();
    }
    questions[start..end.min(questions.len())]
        .iter()
        .map(Question::format)
        .collect()
}
