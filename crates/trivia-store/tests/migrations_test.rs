// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = trivia_store::migrations::apply_migrations(&mut conn);
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    let tables = get_table_names(&conn);
    for expected in [
        "categories",
        "questions",
        "schema_version",
        "seed_imports",
        "sqlite_sequence",
    ] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    trivia_store::migrations::apply_migrations(&mut conn).unwrap();
    trivia_store::migrations::apply_migrations(&mut conn).unwrap();

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 2, "Each migration is recorded once");
}

#[test]
fn test_checksum_is_recorded() {
    let mut conn = setup_test_db();
    trivia_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = '001_initial_schema'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(checksum.len(), 64);
}

#[test]
fn test_tampered_checksum_is_rejected() {
    let mut conn = setup_test_db();
    trivia_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    let err = trivia_store::migrations::apply_migrations(&mut conn).unwrap_err();
    assert!(err.to_string().contains("Checksum mismatch"));
    assert_eq!(err.op(), Some("migration_checksum"));
}

#[test]
fn test_reopening_file_database_keeps_rows() {
    use trivia_core::{NewQuestion, QuestionStore};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.db");

    {
        let mut store = trivia_store::SqliteStore::open(&path).unwrap();
        store
            .insert_question(&NewQuestion::new("Q?", "A", 1, 1))
            .unwrap();
    }

    let store = trivia_store::SqliteStore::open(&path).unwrap();
    assert_eq!(store.count_questions().unwrap(), 1);
}
