//! Trivia CLI
//!
//! Serves the trivia HTTP API and manages its SQLite database

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia - question bank and quiz API", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "TRIVIA_DB", default_value = ".trivia/trivia.db")]
    db: PathBuf,

    /// Log output: pretty or json
    #[arg(long, global = true, env = "TRIVIA_LOG_FORMAT", default_value = "pretty")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Inspect stored questions
    Questions(commands::questions::QuestionsArgs),
}

fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging_facility::init(cli.log_format);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &cli.db),
        Commands::Seed(args) => commands::seed::execute(args, &cli.db),
        Commands::Questions(args) => commands::questions::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
