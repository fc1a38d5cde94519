mod app;

use anyhow::Context;
use app::App;
use clap::{Parser, Subcommand};
use leetcode_review::{Config, ItemRef, NewItem, QualityRating};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lcreview",
    version,
    about = "Spaced-repetition review scheduling for LeetCode questions"
)]
struct Cli {
    /// SQLite database file (defaults to $LEETCODE_REVIEW_DB, then ./leetcode.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database schema if it does not exist
    Init,

    /// Drop all stored data and start over
    Reset {
        /// Required, the reset cannot be undone
        #[arg(long)]
        force: bool,
    },

    /// Add a question to the directory
    AddItem {
        /// Question title
        title: String,
        /// URL slug, e.g. two-sum
        #[arg(long)]
        slug: String,
        /// Difficulty label (Easy, Medium, Hard)
        #[arg(long)]
        difficulty: String,
        /// Question number shown on the site
        #[arg(long)]
        frontend_id: Option<String>,
        /// Acceptance rate in percent
        #[arg(long)]
        ac_rate: Option<f64>,
    },

    /// Import questions from a JSON file
    Import {
        /// Array of questions or a saved problemsetQuestionList response
        file: PathBuf,
    },

    /// List questions with their next review date
    Items,

    /// Record an attempt and schedule the next review
    RecordAttempt {
        /// Question id or slug
        item: String,
        /// How hard the attempt felt: HARD, MEDIUM or EASY
        #[arg(long, value_parser = parse_rating)]
        rating: QualityRating,
    },

    /// Count questions due for review
    Due {
        /// Also list the due questions
        #[arg(long)]
        list: bool,
    },

    /// Show every attempt of a question
    History {
        /// Question id or slug
        item: String,
    },

    /// Write a question's review history to a JSON file
    Export {
        /// Question id or slug
        item: String,
        /// Output file
        output: PathBuf,
    },
}

fn parse_rating(value: &str) -> Result<QualityRating, String> {
    value.parse().map_err(|e: leetcode_review::ReviewError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_args(cli.db);
    let conn = config.open_database().with_context(|| {
        format!(
            "failed to open database '{}'",
            config.database_path.display()
        )
    })?;
    let mut app = App::new(conn);

    match cli.command {
        Command::Init => app.init(&config),
        Command::Reset { force } => app.reset(force),
        Command::AddItem {
            title,
            slug,
            difficulty,
            frontend_id,
            ac_rate,
        } => app.add_item(&NewItem {
            title,
            title_slug: slug,
            difficulty,
            frontend_id,
            ac_rate,
            solutions: Vec::new(),
        }),
        Command::Import { file } => app.import(&file),
        Command::Items => app.items(),
        Command::RecordAttempt { item, rating } => {
            app.record_attempt(&ItemRef::from(item.as_str()), rating)
        }
        Command::Due { list } => app.due(list),
        Command::History { item } => app.history(&ItemRef::from(item.as_str())),
        Command::Export { item, output } => app.export(&ItemRef::from(item.as_str()), &output),
    }
}
