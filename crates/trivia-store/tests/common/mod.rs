use std::path::PathBuf;

use trivia_store::SqliteStore;

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// The sample seed shipped at the workspace root
#[allow(dead_code)]
pub fn sample_seed() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("seeds")
        .join("trivia.yaml")
}

/// In-memory store loaded with the sample seed
#[allow(dead_code)]
pub fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    trivia_store::import_seed(&sample_seed(), store.conn_mut()).expect("Sample seed should import");
    store
}
