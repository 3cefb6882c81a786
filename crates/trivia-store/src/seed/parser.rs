//! Seed parser with validation
//!
//! Parses YAML and validates schema version, category id uniqueness and
//! non-empty text

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use trivia_core::NewQuestion;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut ids = HashSet::new();
    for category in &seed.categories {
        if !ids.insert(category.id) {
            return Err(seed_validation(&format!(
                "Duplicate category id {}",
                category.id
            )));
        }
        if category.label.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Category {} has an empty type",
                category.id
            )));
        }
    }

    for (index, question) in seed.questions.iter().enumerate() {
        NewQuestion::from(question)
            .validate()
            .map_err(|e| seed_validation(&format!("Question #{}: {}", index + 1, e)))?;
    }

    Ok(())
}
