//! Request-scoped views over an ordered question sequence
//!
//! All functions here are pure: they take transient copies loaded from a
//! store and never fail.

pub mod category;
pub mod pagination;
pub mod search;

pub use category::filter_by_category;
pub use pagination::{page_bounds, paginate, parse_page, QUESTIONS_PER_PAGE};
pub use search::{filter_by_text, matches_text};
