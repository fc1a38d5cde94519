//! Database operations for the review tracker
//!
//! Handles SQLite database initialization, the question directory with its
//! saved solutions, and the append-only log of review attempts that SM-2
//! scheduling reads from.
//! Timestamps are stored as Unix seconds (UTC).

use crate::error::{Result, ReviewError};
use crate::models::{
    Item, ItemRef, NewItem, NewSolution, QualityRating, ReviewRecord, ReviewState, Solution,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL UNIQUE,
        title_slug TEXT NOT NULL UNIQUE,
        difficulty TEXT NOT NULL,
        frontend_id TEXT,
        ac_rate REAL
    );

    CREATE TABLE IF NOT EXISTS attempts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_id INTEGER NOT NULL,
        easiness_factor REAL NOT NULL DEFAULT 2.5,
        interval_days INTEGER NOT NULL DEFAULT 0,
        repetition_number INTEGER NOT NULL DEFAULT 0,
        quality_rating TEXT NOT NULL CHECK (quality_rating IN ('HARD', 'MEDIUM', 'EASY')),
        attempted_at INTEGER NOT NULL,
        next_review_at INTEGER NOT NULL,
        FOREIGN KEY (question_id) REFERENCES questions(id) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_attempts_question
        ON attempts (question_id, attempted_at DESC);

    CREATE TABLE IF NOT EXISTS solutions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_id INTEGER NOT NULL,
        summary TEXT NOT NULL,
        content TEXT NOT NULL,
        author_name TEXT,
        created_at TEXT,
        updated_at TEXT,
        FOREIGN KEY (question_id) REFERENCES questions(id) ON DELETE CASCADE
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_solutions_unique
        ON solutions (question_id, summary, IFNULL(author_name, ''));
";

/// Outcome of a bulk question import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Questions that were not in the directory before.
    pub items: usize,
    /// Solutions that were not stored before.
    pub solutions: usize,
    /// Questions skipped because their title belongs to another slug.
    pub conflicts: usize,
}

/// Attempts that are the most recent one for their question.
const LATEST_ATTEMPTS: &str = "
    SELECT a.* FROM attempts a
    WHERE a.id = (
        SELECT b.id FROM attempts b
        WHERE b.question_id = a.question_id
        ORDER BY b.attempted_at DESC, b.id DESC
        LIMIT 1
    )
";

/// Opens (or creates) the SQLite database at `path` and ensures the schema exists.
pub fn init_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    debug!("Opened database at {}", path.display());
    Ok(conn)
}

/// Creates tables and indexes if they are missing. Safe to call repeatedly.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Drops every table and recreates an empty schema.
pub fn drop_and_init(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS attempts;
         DROP TABLE IF EXISTS solutions;
         DROP TABLE IF EXISTS questions;",
    )?;
    init_schema(conn)?;
    info!("Database dropped and reinitialized");
    Ok(())
}

/// Adds a question and its solutions to the directory and returns its id.
///
/// If a question with the same slug already exists it's kept as is and its id is
/// returned. A title already used under a different slug is an `ItemConflict`.
pub fn add_item(item: &NewItem, conn: &Connection) -> Result<i64> {
    let id = insert_item(item, conn)?;
    insert_solutions(id, &item.solutions, conn)?;
    Ok(id)
}

/// Inserts many questions and their solutions in one transaction.
///
/// Title conflicts are skipped and counted rather than aborting the import.
pub fn import_items(items: &[NewItem], conn: &mut Connection) -> Result<ImportSummary> {
    let tx = conn.transaction()?;
    let mut summary = ImportSummary::default();

    for item in items {
        let existed = find_item(&ItemRef::Slug(item.title_slug.clone()), &tx).is_ok();
        let id = match insert_item(item, &tx) {
            Ok(id) => id,
            Err(ReviewError::ItemConflict(reason)) => {
                warn!("Skipping question: {}", reason);
                summary.conflicts += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        if !existed {
            summary.items += 1;
        }
        summary.solutions += insert_solutions(id, &item.solutions, &tx)?;
    }

    tx.commit()?;
    info!(
        "Imported {} of {} questions, {} solutions",
        summary.items,
        items.len(),
        summary.solutions
    );
    Ok(summary)
}

fn insert_item(item: &NewItem, conn: &Connection) -> Result<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO questions (title, title_slug, difficulty, frontend_id, ac_rate)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            item.title,
            item.title_slug,
            item.difficulty,
            item.frontend_id,
            item.ac_rate
        ],
    )?;

    let id = conn
        .query_row(
            "SELECT id FROM questions WHERE title_slug = ?1",
            params![item.title_slug],
            |row| row.get(0),
        )
        .optional()?;

    // Not inserted and not found by slug: the title is taken by another question
    id.ok_or_else(|| {
        ReviewError::ItemConflict(format!(
            "title '{}' already belongs to a question with a different slug than '{}'",
            item.title, item.title_slug
        ))
    })
}

/// Stores solutions for a question, skipping ones already saved. Returns how many were new.
pub fn insert_solutions(item_id: i64, solutions: &[NewSolution], conn: &Connection) -> Result<usize> {
    let mut inserted = 0;
    for solution in solutions {
        inserted += conn.execute(
            "INSERT OR IGNORE INTO solutions
                (question_id, summary, content, author_name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                item_id,
                solution.summary,
                solution.content,
                solution.author_name(),
                solution.created_at,
                solution.updated_at
            ],
        )?;
    }
    if inserted > 0 {
        debug!("Stored {} solutions for question {}", inserted, item_id);
    }
    Ok(inserted)
}

/// Solutions saved for a question, in the order they were stored.
pub fn solutions_for(item_id: i64, conn: &Connection) -> Result<Vec<Solution>> {
    let mut stmt = conn.prepare(
        "SELECT id, question_id, summary, content, author_name, created_at, updated_at
         FROM solutions
         WHERE question_id = ?1
         ORDER BY id",
    )?;

    let solutions = stmt
        .query_map(params![item_id], |row| {
            Ok(Solution {
                id: row.get(0)?,
                item_id: row.get(1)?,
                summary: row.get(2)?,
                content: row.get(3)?,
                author_name: row.get(4)?,
                created_at: row.get(5)?,
                updated_at: row.get(6)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(solutions)
}

pub fn get_item(id: i64, conn: &Connection) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            "SELECT id, title, title_slug, difficulty, frontend_id, ac_rate
             FROM questions WHERE id = ?1",
            params![id],
            |row| item_from_row(row, 0),
        )
        .optional()?;
    Ok(item)
}

/// Resolves an id or slug to a stored question.
pub fn find_item(item_ref: &ItemRef, conn: &Connection) -> Result<Item> {
    let item = match item_ref {
        ItemRef::Id(id) => get_item(*id, conn)?,
        ItemRef::Slug(slug) => conn
            .query_row(
                "SELECT id, title, title_slug, difficulty, frontend_id, ac_rate
                 FROM questions WHERE title_slug = ?1",
                params![slug],
                |row| item_from_row(row, 0),
            )
            .optional()?,
    };

    item.ok_or_else(|| ReviewError::ItemNotFound(item_ref.to_string()))
}

/// Lists every question together with its current (most recent) review record.
pub fn list_items(conn: &Connection) -> Result<Vec<(Item, Option<ReviewRecord>)>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT q.id, q.title, q.title_slug, q.difficulty, q.frontend_id, q.ac_rate,
                l.id, l.question_id, l.easiness_factor, l.interval_days, l.repetition_number,
                l.quality_rating, l.attempted_at, l.next_review_at
         FROM questions q
         LEFT JOIN ({LATEST_ATTEMPTS}) l ON l.question_id = q.id
         ORDER BY q.id"
    ))?;

    let items = stmt
        .query_map([], |row| {
            let item = item_from_row(row, 0)?;
            let record = match row.get::<_, Option<i64>>(6)? {
                Some(_) => Some(record_from_row(row, 6)?),
                None => None,
            };
            Ok((item, record))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(items)
}

/// Most recent review record of a question, ordered by `attempted_at`.
pub fn latest_record(item_id: i64, conn: &Connection) -> Result<Option<ReviewRecord>> {
    let record = conn
        .query_row(
            "SELECT id, question_id, easiness_factor, interval_days, repetition_number,
                    quality_rating, attempted_at, next_review_at
             FROM attempts
             WHERE question_id = ?1
             ORDER BY attempted_at DESC, id DESC
             LIMIT 1",
            params![item_id],
            |row| record_from_row(row, 0),
        )
        .optional()?;
    Ok(record)
}

/// Appends a new attempt to the log and returns it with its row id.
pub fn append_record(record: ReviewRecord, conn: &Connection) -> Result<ReviewRecord> {
    conn.execute(
        "INSERT INTO attempts
            (question_id, easiness_factor, interval_days, repetition_number,
             quality_rating, attempted_at, next_review_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.item_id(),
            record.easiness_factor(),
            record.interval(),
            record.repetition_number(),
            record.quality_rating(),
            record.attempted_at().timestamp(),
            record.next_review_at().timestamp()
        ],
    )?;

    let id = conn.last_insert_rowid();
    debug!("Appended attempt {} for question {}", id, record.item_id());
    Ok(record.with_id(id))
}

/// Every attempt of a question, oldest first.
pub fn history(item_id: i64, conn: &Connection) -> Result<Vec<ReviewRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, question_id, easiness_factor, interval_days, repetition_number,
                quality_rating, attempted_at, next_review_at
         FROM attempts
         WHERE question_id = ?1
         ORDER BY attempted_at ASC, id ASC",
    )?;

    let records = stmt
        .query_map(params![item_id], |row| record_from_row(row, 0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}

/// Number of questions whose current record is due at `now`.
pub fn count_due(now: DateTime<Utc>, conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM ({LATEST_ATTEMPTS}) WHERE next_review_at <= ?1"),
        params![now.timestamp()],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

/// Questions due at `now` with their current record, most overdue first.
pub fn due_items(now: DateTime<Utc>, conn: &Connection) -> Result<Vec<(Item, ReviewRecord)>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT q.id, q.title, q.title_slug, q.difficulty, q.frontend_id, q.ac_rate,
                l.id, l.question_id, l.easiness_factor, l.interval_days, l.repetition_number,
                l.quality_rating, l.attempted_at, l.next_review_at
         FROM ({LATEST_ATTEMPTS}) l
         JOIN questions q ON q.id = l.question_id
         WHERE l.next_review_at <= ?1
         ORDER BY l.next_review_at ASC, q.id ASC"
    ))?;

    let items = stmt
        .query_map(params![now.timestamp()], |row| {
            Ok((item_from_row(row, 0)?, record_from_row(row, 6)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(items)
}

fn item_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(offset)?,
        title: row.get(offset + 1)?,
        title_slug: row.get(offset + 2)?,
        difficulty: row.get(offset + 3)?,
        frontend_id: row.get(offset + 4)?,
        ac_rate: row.get(offset + 5)?,
    })
}

fn record_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<ReviewRecord> {
    let state = ReviewState {
        easiness_factor: row.get(offset + 2)?,
        interval: row.get(offset + 3)?,
        repetition_number: row.get(offset + 4)?,
    };
    let rating: QualityRating = row.get(offset + 5)?;

    Ok(ReviewRecord::from_stored(
        row.get(offset)?,
        row.get(offset + 1)?,
        state,
        rating,
        timestamp_column(row, offset + 6)?,
        timestamp_column(row, offset + 7)?,
    ))
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn new_item(title: &str, slug: &str) -> NewItem {
        NewItem {
            title: title.to_string(),
            title_slug: slug.to_string(),
            difficulty: "Medium".to_string(),
            frontend_id: None,
            ac_rate: None,
            solutions: Vec::new(),
        }
    }

    fn solution(summary: &str, author: Option<&str>) -> NewSolution {
        NewSolution {
            summary: summary.to_string(),
            content: format!("{} explained", summary),
            author: author.map(|name| crate::models::SolutionAuthor {
                user_name: name.to_string(),
            }),
            created_at: Some("2024-05-01T10:00:00+00:00".to_string()),
            updated_at: None,
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 21, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = test_conn();
        assert!(init_schema(&conn).is_ok());
    }

    #[test]
    fn test_add_and_find_item() {
        let conn = test_conn();
        let id = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();

        let by_id = find_item(&ItemRef::Id(id), &conn).unwrap();
        let by_slug = find_item(&ItemRef::Slug("two-sum".to_string()), &conn).unwrap();

        assert_eq!(by_id, by_slug);
        assert_eq!(by_id.title, "Two Sum");
        assert_eq!(by_id.difficulty, "Medium");
    }

    #[test]
    fn test_add_item_duplicate_returns_existing_id() {
        let conn = test_conn();
        let first = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        let second = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_missing_item() {
        let conn = test_conn();
        let err = find_item(&ItemRef::Slug("nope".to_string()), &conn).unwrap_err();
        assert!(matches!(err, ReviewError::ItemNotFound(ref s) if s == "nope"));
        assert!(get_item(99, &conn).unwrap().is_none());
    }

    #[test]
    fn test_import_items_counts_new_rows() {
        let mut conn = test_conn();
        add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();

        let items = vec![
            new_item("Two Sum", "two-sum"),
            new_item("Valid Parentheses", "valid-parentheses"),
            new_item("Merge Intervals", "merge-intervals"),
        ];
        let summary = import_items(&items, &mut conn).unwrap();
        assert_eq!(summary.items, 2);
        assert_eq!(summary.conflicts, 0);
        assert_eq!(list_items(&conn).unwrap().len(), 3);
    }

    #[test]
    fn test_add_item_title_taken_by_other_slug() {
        let conn = test_conn();
        add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();

        let err = add_item(&new_item("Two Sum", "two-sum-ii"), &conn).unwrap_err();
        assert!(matches!(err, ReviewError::ItemConflict(ref msg) if msg.contains("Two Sum")));
        assert_eq!(list_items(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_import_skips_title_conflicts() {
        let mut conn = test_conn();
        add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();

        let items = vec![
            new_item("Two Sum", "two-sum-ii"),
            new_item("LRU Cache", "lru-cache"),
        ];
        let summary = import_items(&items, &mut conn).unwrap();
        assert_eq!(summary.items, 1);
        assert_eq!(summary.conflicts, 1);
        assert_eq!(list_items(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_import_stores_solutions_once() {
        let mut conn = test_conn();
        let mut item = new_item("Two Sum", "two-sum");
        item.solutions = vec![
            solution("Hash map", Some("alice")),
            solution("Brute force", None),
        ];

        let first = import_items(std::slice::from_ref(&item), &mut conn).unwrap();
        assert_eq!(first.items, 1);
        assert_eq!(first.solutions, 2);

        let again = import_items(std::slice::from_ref(&item), &mut conn).unwrap();
        assert_eq!(again.items, 0);
        assert_eq!(again.solutions, 0);

        let id = find_item(&ItemRef::Slug("two-sum".to_string()), &conn).unwrap().id;
        let stored = solutions_for(id, &conn).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].author_name.as_deref(), Some("alice"));
        assert_eq!(stored[0].content, "Hash map explained");
        assert_eq!(stored[1].author_name, None);
    }

    #[test]
    fn test_add_item_stores_solutions() {
        let conn = test_conn();
        let mut item = new_item("Two Sum", "two-sum");
        item.solutions = vec![solution("Hash map", Some("alice"))];

        let id = add_item(&item, &conn).unwrap();
        assert_eq!(solutions_for(id, &conn).unwrap().len(), 1);
    }

    #[test]
    fn test_append_and_latest_record() {
        let conn = test_conn();
        let id = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        assert!(latest_record(id, &conn).unwrap().is_none());

        let first = append_record(ReviewRecord::new(id, None, QualityRating::Easy, t0()), &conn)
            .unwrap();
        let second = append_record(
            ReviewRecord::new(
                id,
                Some(first.state()),
                QualityRating::Medium,
                t0() + Duration::days(1),
            ),
            &conn,
        )
        .unwrap();

        assert!(first.id().is_some());
        let latest = latest_record(id, &conn).unwrap().unwrap();
        assert_eq!(latest, second);
        assert_eq!(latest.repetition_number(), 2);
        assert_eq!(latest.quality_rating(), QualityRating::Medium);
    }

    #[test]
    fn test_latest_record_breaks_ties_by_insertion() {
        let conn = test_conn();
        let id = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();

        append_record(ReviewRecord::new(id, None, QualityRating::Easy, t0()), &conn).unwrap();
        let last = append_record(ReviewRecord::new(id, None, QualityRating::Hard, t0()), &conn)
            .unwrap();

        assert_eq!(latest_record(id, &conn).unwrap().unwrap(), last);
    }

    #[test]
    fn test_history_is_oldest_first() {
        let conn = test_conn();
        let id = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();

        let later = t0() + Duration::days(2);
        append_record(ReviewRecord::new(id, None, QualityRating::Hard, later), &conn).unwrap();
        append_record(ReviewRecord::new(id, None, QualityRating::Easy, t0()), &conn).unwrap();

        let records = history(id, &conn).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].attempted_at(), t0());
        assert_eq!(records[1].attempted_at(), later);
    }

    #[test]
    fn test_append_for_unknown_item_fails() {
        let conn = test_conn();
        let result = append_record(ReviewRecord::new(404, None, QualityRating::Easy, t0()), &conn);
        assert!(matches!(result, Err(ReviewError::Persistence(_))));
    }

    #[test]
    fn test_count_due_uses_latest_record_only() {
        let conn = test_conn();
        let a = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        let b = add_item(&new_item("LRU Cache", "lru-cache"), &conn).unwrap();
        add_item(&new_item("Word Ladder", "word-ladder"), &conn).unwrap();

        // a: old attempt due long ago, then a fresh one due in 6 days
        let first = append_record(ReviewRecord::new(a, None, QualityRating::Easy, t0()), &conn)
            .unwrap();
        append_record(
            ReviewRecord::new(a, Some(first.state()), QualityRating::Easy, t0() + Duration::days(1)),
            &conn,
        )
        .unwrap();
        // b: due one day after t0
        append_record(ReviewRecord::new(b, None, QualityRating::Hard, t0()), &conn).unwrap();

        let now = t0() + Duration::days(2);
        assert_eq!(count_due(now, &conn).unwrap(), 1);

        let due = due_items(now, &conn).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0.id, b);

        assert_eq!(count_due(t0() + Duration::days(7), &conn).unwrap(), 2);
        assert_eq!(count_due(t0(), &conn).unwrap(), 0);
    }

    #[test]
    fn test_due_items_most_overdue_first() {
        let conn = test_conn();
        let a = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        let b = add_item(&new_item("LRU Cache", "lru-cache"), &conn).unwrap();

        append_record(
            ReviewRecord::new(a, None, QualityRating::Easy, t0() + Duration::days(1)),
            &conn,
        )
        .unwrap();
        append_record(ReviewRecord::new(b, None, QualityRating::Easy, t0()), &conn).unwrap();

        let due = due_items(t0() + Duration::days(5), &conn).unwrap();
        let ids: Vec<i64> = due.iter().map(|(item, _)| item.id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_list_items_with_current_record() {
        let conn = test_conn();
        let a = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        add_item(&new_item("LRU Cache", "lru-cache"), &conn).unwrap();

        let record = append_record(ReviewRecord::new(a, None, QualityRating::Easy, t0()), &conn)
            .unwrap();

        let items = list_items(&conn).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].1.as_ref(), Some(&record));
        assert!(items[1].1.is_none());
    }

    #[test]
    fn test_drop_and_init_clears_everything() {
        let conn = test_conn();
        let id = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        append_record(ReviewRecord::new(id, None, QualityRating::Easy, t0()), &conn).unwrap();

        insert_solutions(id, &[solution("Hash map", None)], &conn).unwrap();

        drop_and_init(&conn).unwrap();

        assert!(list_items(&conn).unwrap().is_empty());
        assert!(solutions_for(id, &conn).unwrap().is_empty());
        assert_eq!(count_due(t0() + Duration::days(30), &conn).unwrap(), 0);
    }

    #[test]
    fn test_deleting_item_cascades() {
        let conn = test_conn();
        let id = add_item(&new_item("Two Sum", "two-sum"), &conn).unwrap();
        append_record(ReviewRecord::new(id, None, QualityRating::Easy, t0()), &conn).unwrap();
        insert_solutions(id, &[solution("Hash map", None)], &conn).unwrap();

        conn.execute("DELETE FROM questions WHERE id = ?1", params![id])
            .unwrap();
        assert!(history(id, &conn).unwrap().is_empty());
        assert!(solutions_for(id, &conn).unwrap().is_empty());
    }
}
