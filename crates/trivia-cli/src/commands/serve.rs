//! HTTP server command
//!
//! Usage: trivia serve [--host H] [--port P] [--seed PATH]

use clap::Args;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use trivia_api::AppState;
use trivia_store::SqliteStore;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "TRIVIA_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, env = "TRIVIA_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seed file imported before the server starts
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

pub fn execute(args: ServeArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SqliteStore::open(db)?;

    if let Some(seed) = &args.seed {
        let summary = trivia_store::import_seed(seed, store.conn_mut())?;
        tracing::info!(
            seed = %seed.display(),
            categories = summary.categories,
            questions = summary.questions,
            digest = %summary.digest,
            already_applied = summary.already_applied,
            "seed imported"
        );
    }

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!(db = %db.display(), %addr, "starting trivia api");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(trivia_api::serve(addr, AppState::new(store)))?;

    Ok(())
}
