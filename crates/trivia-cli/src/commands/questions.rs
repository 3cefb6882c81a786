//! Question inspection commands
//!
//! Usage:
//!   trivia questions list [--page N]
//!   trivia questions search <TERM> [--page N]

use clap::{Args, Subcommand};
use std::path::Path;
use trivia_core::FormattedQuestion;
use trivia_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use trivia_store::SqliteStore;

#[derive(Debug, Args)]
pub struct QuestionsArgs {
    #[command(subcommand)]
    pub command: QuestionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum QuestionsCommand {
    /// Print one page of questions
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print questions containing a term, ignoring case
    Search {
        term: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

pub fn execute(args: QuestionsArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(db)?;

    let query = match args.command {
        QuestionsCommand::List { page } => EngineQuery::ListQuestions { page },
        QuestionsCommand::Search { term, page } => EngineQuery::SearchQuestions { term, page },
    };

    let (questions, total) = match apply_engine_query(query, &store)? {
        EngineQueryResult::Questions(page) => (page.questions, page.total_questions),
        EngineQueryResult::Search(page) => (page.questions, page.total_questions),
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    };

    for q in &questions {
        print_question(q);
    }
    println!("{} of {} questions", questions.len(), total);

    Ok(())
}

fn print_question(q: &FormattedQuestion) {
    println!(
        "[{}] (category {}, difficulty {}) {} -> {}",
        q.id, q.category, q.difficulty, q.question, q.answer
    );
}
