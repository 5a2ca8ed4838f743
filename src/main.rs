// Quick Rater: rate random (item, question) pairs from the terminal

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use quick_rater::prompt::PromptGenerator;
use quick_rater::session::Session;
use quick_rater::storage::{QuestionSummary, Storage};
use quick_rater::ui;

#[derive(Parser, Debug)]
#[command(name = "quick-rater", about = "Rate random items from the terminal", version)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = "./data.db")]
    db: PathBuf,

    /// Append logs to this file (filter with RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start rating (the default)
    Rate,

    /// Create the tables if they do not exist yet
    Init,

    /// Add an item to rate
    AddElement {
        title: String,
        /// Longer description shown under the title
        #[arg(long)]
        details: Option<String>,
    },

    /// Add a question to ask about items
    AddQuestion {
        text: String,
        /// Yes/no question instead of a 1-5 rating
        #[arg(long)]
        binary: bool,
    },

    /// Stop asking about an item, keeping its answers
    RetireElement { id: i64 },

    /// Stop asking a question, keeping its answers
    RetireQuestion { id: i64 },

    /// Answer counts and averages per question
    Stats,
}

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    // The TUI owns the terminal, so logs only ever go to a file
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open log file {:?}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn rate(storage: Storage) -> anyhow::Result<()> {
    let catalog = storage
        .load_catalog()
        .context("could not start session (run `quick-rater init` and add elements and questions first)")?;

    let mut session = Session::new(storage, PromptGenerator::new(catalog));
    let res = ui::run(&mut session);
    let answered = session.answered();
    session.close()?;
    res.context("terminal error")?;

    println!("Saved {} answer(s). Bye!", answered);
    Ok(())
}

fn print_stats(summaries: &[QuestionSummary]) {
    if summaries.is_empty() {
        println!("No active questions.");
        return;
    }
    println!("{:>4}  {:>7}  {:>7}  question", "id", "answers", "mean");
    for s in summaries {
        let mean = match (s.mean, s.is_binary) {
            (None, _) => "-".to_string(),
            (Some(mean), true) => format!("{:.0}% yes", mean / 5.0 * 100.0),
            (Some(mean), false) => format!("{:.2}", mean),
        };
        println!("{:>4}  {:>7}  {:>7}  {}", s.question_id, s.answers, mean, s.text);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let storage = Storage::open(&cli.db)?;

    match cli.command.unwrap_or(Command::Rate) {
        Command::Rate => return rate(storage),
        Command::Init => {
            storage.init_schema()?;
            println!("Database ready at {}", cli.db.display());
        }
        Command::AddElement { title, details } => {
            let id = storage.add_element(&title, details.as_deref())?;
            println!("Added element {}", id);
        }
        Command::AddQuestion { text, binary } => {
            let id = storage.add_question(&text, binary)?;
            println!("Added question {}", id);
        }
        Command::RetireElement { id } => {
            if !storage.set_element_active(id, false)? {
                anyhow::bail!("no element with id {}", id);
            }
            info!("retired element {}", id);
        }
        Command::RetireQuestion { id } => {
            if !storage.set_question_active(id, false)? {
                anyhow::bail!("no question with id {}", id);
            }
            info!("retired question {}", id);
        }
        Command::Stats => print_stats(&storage.question_summaries()?),
    }

    storage.close()?;
    Ok(())
}
