//! Recording attempts: load the current state, run SM-2, append the new record.

use crate::database::db;
use crate::error::{Result, ReviewError};
use crate::models::{QualityRating, ReviewRecord};
use chrono::{DateTime, Utc};
use log::info;
use rusqlite::Connection;

/// Records an attempt on `item_id` at the current time.
pub fn record_attempt(
    conn: &mut Connection,
    item_id: i64,
    rating: QualityRating,
) -> Result<ReviewRecord> {
    record_attempt_at(conn, item_id, rating, Utc::now())
}

/// Records an attempt on `item_id` as of `now`.
///
/// The lookup of the previous record and the insert of the new one share a
/// transaction: if anything fails, nothing is written. Failures are returned
/// as is and never retried, since a retry after an unnoticed commit would
/// apply the repetition twice.
pub fn record_attempt_at(
    conn: &mut Connection,
    item_id: i64,
    rating: QualityRating,
    now: DateTime<Utc>,
) -> Result<ReviewRecord> {
    let tx = conn.transaction()?;

    if db::get_item(item_id, &tx)?.is_none() {
        return Err(ReviewError::ItemNotFound(format!("#{}", item_id)));
    }

    let previous = db::latest_record(item_id, &tx)?.map(|record| record.state());
    let record = db::append_record(ReviewRecord::new(item_id, previous, rating, now), &tx)?;
    tx.commit()?;

    info!(
        "Recorded {} for question {}: interval {}d, next review {}",
        rating,
        item_id,
        record.interval(),
        record.next_review_at()
    );
    Ok(record)
}
