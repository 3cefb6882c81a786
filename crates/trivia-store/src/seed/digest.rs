//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use crate::seed::format_v0::SeedV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
///
/// Categories are sorted by id. Questions keep file order because that
/// order decides the ids they receive.
#[derive(Debug, Serialize)]
struct CanonicalSeed<'a> {
    schema_version: u32,
    categories: Vec<(i64, &'a str)>,
    questions: Vec<(&'a str, &'a str, i64, i64)>,
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation
pub fn compute_seed_digest(seed: &SeedV0) -> String {
    let mut categories: Vec<(i64, &str)> = seed
        .categories
        .iter()
        .map(|c| (c.id, c.label.as_str()))
        .collect();
    categories.sort();

    let canonical = CanonicalSeed {
        schema_version: seed.schema_version,
        categories,
        questions: seed
            .questions
            .iter()
            .map(|q| (q.question.as_str(), q.answer.as_str(), q.category, q.difficulty))
            .collect(),
    };

    // Tuples of strings and integers always serialize
    let json = serde_json::to_string(&canonical).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}
