//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import

use serde::{Deserialize, Serialize};
use trivia_core::{Category, NewQuestion};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Categories, keyed by their caller-visible id
    #[serde(default)]
    pub categories: Vec<SeedCategory>,

    /// Questions, inserted in file order
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategory {
    pub id: i64,

    #[serde(rename = "type")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<&SeedCategory> for Category {
    fn from(seed: &SeedCategory) -> Self {
        Category::new(seed.id, seed.label.clone())
    }
}

impl From<&SeedQuestion> for NewQuestion {
    fn from(seed: &SeedQuestion) -> Self {
        NewQuestion::new(
            seed.question.clone(),
            seed.answer.clone(),
            seed.category,
            seed.difficulty,
        )
    }
}
