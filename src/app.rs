//! Command handlers for the CLI.
//! Each handler runs one operation against the database and prints the result.

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use leetcode_review::database::db;
use leetcode_review::export::json::{export_history_to_path, read_items_json};
use leetcode_review::scheduler;
use leetcode_review::{Config, Item, ItemRef, NewItem, QualityRating, ReviewRecord};
use rusqlite::Connection;
use std::path::Path;

pub struct App {
    conn: Connection,
}

/// Formats a timestamp as YYYY-MM-DD HH:MM UTC
fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn describe(item: &Item) -> String {
    match &item.frontend_id {
        Some(number) => format!("{}. {} ({})", number, item.title, item.title_slug),
        None => format!("{} ({})", item.title, item.title_slug),
    }
}

impl App {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn init(&self, config: &Config) -> anyhow::Result<()> {
        println!("Database ready at {}", config.database_path.display());
        Ok(())
    }

    pub fn reset(&self, force: bool) -> anyhow::Result<()> {
        if !force {
            bail!("reset deletes every question, attempt and solution; pass --force to confirm");
        }
        db::drop_and_init(&self.conn)?;
        println!("Dropped and reinitialized the database.");
        Ok(())
    }

    pub fn add_item(&self, item: &NewItem) -> anyhow::Result<()> {
        let id = db::add_item(item, &self.conn)?;
        println!("Question #{} '{}' added.", id, item.title);
        Ok(())
    }

    pub fn import(&mut self, path: &Path) -> anyhow::Result<()> {
        let items = read_items_json(path)
            .with_context(|| format!("failed to read questions from '{}'", path.display()))?;
        let summary = db::import_items(&items, &mut self.conn)?;
        println!(
            "Imported {} new questions ({} already present, {} skipped), {} new solutions.",
            summary.items,
            items.len() - summary.items - summary.conflicts,
            summary.conflicts,
            summary.solutions
        );
        Ok(())
    }

    pub fn items(&self) -> anyhow::Result<()> {
        let items = db::list_items(&self.conn)?;
        if items.is_empty() {
            println!("No questions yet. Add some with `add-item` or `import`.");
            return Ok(());
        }

        for (item, record) in items {
            let next = match record {
                Some(record) => format!("next review {}", format_time(record.next_review_at())),
                None => "never attempted".to_string(),
            };
            println!("#{:<5} [{}] {} - {}", item.id, item.difficulty, describe(&item), next);
        }
        Ok(())
    }

    pub fn record_attempt(&mut self, item_ref: &ItemRef, rating: QualityRating) -> anyhow::Result<()> {
        let item = db::find_item(item_ref, &self.conn)?;
        let record = scheduler::record_attempt(&mut self.conn, item.id, rating)?;

        println!("Recorded {} attempt for {}.", rating, describe(&item));
        println!(
            "Easiness {:.2}, repetition {}, interval {} day(s).",
            record.easiness_factor(),
            record.repetition_number(),
            record.interval()
        );
        println!("Next review scheduled for {}.", format_time(record.next_review_at()));
        Ok(())
    }

    pub fn due(&self, list: bool) -> anyhow::Result<()> {
        let now = Utc::now();
        let count = db::count_due(now, &self.conn)?;
        println!("{} question(s) due for review.", count);

        if list {
            for (item, record) in db::due_items(now, &self.conn)? {
                println!(
                    "  {} - due since {}",
                    describe(&item),
                    format_time(record.next_review_at())
                );
            }
        }
        Ok(())
    }

    pub fn history(&self, item_ref: &ItemRef) -> anyhow::Result<()> {
        let item = db::find_item(item_ref, &self.conn)?;
        let records = db::history(item.id, &self.conn)?;

        println!("{}", describe(&item));
        if records.is_empty() {
            println!("  no attempts recorded");
        }
        for record in &records {
            print_record(record);
        }

        let solutions = db::solutions_for(item.id, &self.conn)?;
        if !solutions.is_empty() {
            println!("Solutions ({}):", solutions.len());
            for solution in &solutions {
                println!(
                    "  {} - {}",
                    solution.author_name.as_deref().unwrap_or("anonymous"),
                    solution.summary
                );
            }
        }
        Ok(())
    }

    pub fn export(&self, item_ref: &ItemRef, output: &Path) -> anyhow::Result<()> {
        let item = db::find_item(item_ref, &self.conn)?;
        let records = db::history(item.id, &self.conn)?;
        export_history_to_path(&records, output)
            .with_context(|| format!("failed to write '{}'", output.display()))?;
        println!(
            "Exported {} attempt(s) of '{}' to {}",
            records.len(),
            item.title,
            output.display()
        );
        Ok(())
    }
}

fn print_record(record: &ReviewRecord) {
    println!(
        "  {}  {:<6}  ef {:.2}  rep {:<2}  interval {:>3}d  next {}",
        format_time(record.attempted_at()),
        record.quality_rating(),
        record.easiness_factor(),
        record.repetition_number(),
        record.interval(),
        format_time(record.next_review_at())
    );
}
