//! Seed import command
//!
//! Usage: trivia seed import <PATH>

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use trivia_store::SqliteStore;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, db),
    }
}

fn execute_import(args: ImportArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SqliteStore::open(db)?;

    let seed_files = if args.path.is_dir() {
        // Sorted for a deterministic id assignment
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        let summary = trivia_store::import_seed(&seed_file, store.conn_mut())?;
        if summary.already_applied {
            println!(
                "Skipped {} (already imported, digest: {})",
                seed_file.display(),
                summary.digest
            );
            continue;
        }
        println!(
            "Imported {} ({} categories, {} questions, digest: {})",
            seed_file.display(),
            summary.categories,
            summary.questions,
            summary.digest
        );
    }

    Ok(())
}
