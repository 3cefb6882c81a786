use std::path::PathBuf;

use trivia_store::SqliteStore;

/// In-memory SQLite store loaded with the workspace sample seed
pub fn seeded_store() -> SqliteStore {
    let seed = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("seeds")
        .join("trivia.yaml");
    let mut store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    trivia_store::import_seed(&seed, store.conn_mut()).expect("Sample seed should import");
    store
}
