//! Scheduling state of a question, one immutable record per attempt.

use super::QualityRating;
use super::sm2;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EASINESS_FACTOR: f64 = 2.5;
pub const MIN_EASINESS_FACTOR: f64 = 1.3;
/// Longest interval SM-2 may schedule, about a century.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// The part of a record that carries over from one attempt to the next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    pub easiness_factor: f64,
    pub interval: u32,
    pub repetition_number: u32,
}

/// State used for the first attempt on a question.
impl Default for ReviewState {
    fn default() -> Self {
        Self {
            easiness_factor: DEFAULT_EASINESS_FACTOR,
            interval: 0,
            repetition_number: 0,
        }
    }
}

/// A recorded attempt. Derived fields are computed once in [`ReviewRecord::new`]
/// from the previous state and never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewRecord {
    id: Option<i64>,
    item_id: i64,
    easiness_factor: f64,
    interval: u32,
    repetition_number: u32,
    quality_rating: QualityRating,
    attempted_at: DateTime<Utc>,
    next_review_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Builds the record for a new attempt. `previous` is the state of the most
    /// recent attempt on the item, or `None` for the first one.
    ///
    /// `now` is truncated to whole seconds so a record reads back from storage
    /// exactly as it was built.
    pub fn new(
        item_id: i64,
        previous: Option<ReviewState>,
        rating: QualityRating,
        now: DateTime<Utc>,
    ) -> Self {
        let attempted_at = now.trunc_subsecs(0);
        let scheduled =
            sm2::compute_next_review(&previous.unwrap_or_default(), rating, attempted_at);

        Self {
            id: None,
            item_id,
            easiness_factor: scheduled.state.easiness_factor,
            interval: scheduled.state.interval,
            repetition_number: scheduled.state.repetition_number,
            quality_rating: rating,
            attempted_at,
            next_review_at: scheduled.next_review_at,
        }
    }

    /// Rebuilds a record read from storage.
    pub(crate) fn from_stored(
        id: i64,
        item_id: i64,
        state: ReviewState,
        quality_rating: QualityRating,
        attempted_at: DateTime<Utc>,
        next_review_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            item_id,
            easiness_factor: state.easiness_factor,
            interval: state.interval,
            repetition_number: state.repetition_number,
            quality_rating,
            attempted_at,
            next_review_at,
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn item_id(&self) -> i64 {
        self.item_id
    }

    pub fn easiness_factor(&self) -> f64 {
        self.easiness_factor
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn repetition_number(&self) -> u32 {
        self.repetition_number
    }

    pub fn quality_rating(&self) -> QualityRating {
        self.quality_rating
    }

    pub fn attempted_at(&self) -> DateTime<Utc> {
        self.attempted_at
    }

    pub fn next_review_at(&self) -> DateTime<Utc> {
        self.next_review_at
    }

    pub fn state(&self) -> ReviewState {
        ReviewState {
            easiness_factor: self.easiness_factor,
            interval: self.interval,
            repetition_number: self.repetition_number,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}
