//! SQLite repository implementation
//!
//! `SqliteStore` owns one connection with migrations applied. Row helpers
//! take a plain `&Connection` so the seed importer can call them on a
//! transaction.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use trivia_core::{Category, NewQuestion, Question, QuestionStore, StoreResult};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Durable question store backed by SQLite
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn, true)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn, false)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

/// Insert a question row and return the assigned id
pub fn insert_question_row(conn: &Connection, question: &NewQuestion) -> Result<i64> {
    conn.execute(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            question.question,
            question.answer,
            question.category,
            question.difficulty,
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(conn.last_insert_rowid())
}

/// Insert a category, or relabel it when the id already exists
pub fn upsert_category_row(conn: &Connection, category: &Category) -> Result<()> {
    conn.execute(
        "INSERT INTO categories (id, type) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET type = excluded.type",
        rusqlite::params![category.id, category.kind],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn query_questions(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Question>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, question_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

impl QuestionStore for SqliteStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        query_questions(
            &self.conn,
            &format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS),
            [],
        )
    }

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
                [id],
                question_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn insert_question(&mut self, question: &NewQuestion) -> StoreResult<i64> {
        insert_question_row(&self.conn, question)
    }

    fn delete_question(&mut self, id: i64) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    fn count_questions(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        query_questions(
            &self.conn,
            &format!(
                "SELECT {} FROM questions WHERE category = ?1 ORDER BY id",
                QUESTION_COLUMNS
            ),
            [category_id],
        )
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], category_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        self.conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                [id],
                category_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn insert_category(&mut self, category: &Category) -> StoreResult<()> {
        upsert_category_row(&self.conn, category)
    }
}
