pub mod category;
pub mod question;

pub use category::{categories_by_id, Category};
pub use question::{FormattedQuestion, NewQuestion, Question};
