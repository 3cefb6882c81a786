//! Seed importer orchestration
//!
//! Parses, validates and writes a seed inside a single transaction. A
//! failure part way leaves the database untouched. Applied seeds are
//! recorded by digest in `seed_imports`; importing the same content again
//! writes nothing.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::{insert_question_row, upsert_category_row};
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parse_seed_file, parse_seed_str};
use rusqlite::{Connection, OptionalExtension, Transaction};
use std::path::Path;
use std::time::Instant;
use trivia_core::{log_op_end, log_op_error, log_op_start, Category, NewQuestion};

/// Outcome of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub questions: usize,
    /// SHA256 of the canonical seed
    pub digest: String,
    /// The digest was already recorded, so nothing was written
    pub already_applied: bool,
}

/// Import a seed file into the database
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<ImportSummary> {
    let seed = parse_seed_file(path)?;
    write_seed(&seed, conn)
}

/// Import seed YAML held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<ImportSummary> {
    let seed = parse_seed_str(content)?;
    write_seed(&seed, conn)
}

fn write_seed(seed: &SeedV0, conn: &mut Connection) -> Result<ImportSummary> {
    let start = Instant::now();
    log_op_start!("seed_import", categories = seed.categories.len());

    let result = write_seed_tx(seed, conn);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(summary) => {
            log_op_end!(
                "seed_import",
                duration_ms = duration_ms,
                categories = summary.categories,
                questions = summary.questions,
                already_applied = summary.already_applied
            );
        }
        Err(err) => {
            log_op_error!("seed_import", err.clone(), duration_ms = duration_ms);
        }
    }

    result
}

fn write_seed_tx(seed: &SeedV0, conn: &mut Connection) -> Result<ImportSummary> {
    let digest = compute_seed_digest(seed);
    let tx = conn.transaction().map_err(from_rusqlite)?;

    if is_recorded(&tx, &digest)? {
        tracing::debug!(digest = %digest, "seed already imported");
        return Ok(ImportSummary {
            categories: seed.categories.len(),
            questions: seed.questions.len(),
            digest,
            already_applied: true,
        });
    }

    for category in &seed.categories {
        upsert_category_row(&tx, &Category::from(category))?;
    }

    for question in &seed.questions {
        insert_question_row(&tx, &NewQuestion::from(question))?;
    }

    tx.execute(
        "INSERT INTO seed_imports (digest, imported_at, categories, questions) VALUES (?, ?, ?, ?)",
        rusqlite::params![
            digest,
            chrono::Utc::now().timestamp(),
            seed.categories.len() as i64,
            seed.questions.len() as i64
        ],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(ImportSummary {
        categories: seed.categories.len(),
        questions: seed.questions.len(),
        digest,
        already_applied: false,
    })
}

fn is_recorded(tx: &Transaction<'_>, digest: &str) -> Result<bool> {
    let found: Option<i64> = tx
        .query_row(
            "SELECT 1 FROM seed_imports WHERE digest = ?",
            [digest],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}
