//! SM-2 (SuperMemo 2) spaced repetition, adapted to a three-level rating.
//!
//! - Quality is HARD = 1, MEDIUM = 2, EASY = 3 (see [`QualityRating::quality`])
//! - The easiness factor (EF) is updated on every review and never falls below 1.3
//! - HARD (quality < 2) resets progress: repetition 0, review again tomorrow
//! - MEDIUM and EASY grow the interval: 1 day → 6 days → previous interval × EF,
//!   capped at [`MAX_INTERVAL_DAYS`]

use super::review_record::{MAX_INTERVAL_DAYS, MIN_EASINESS_FACTOR};
use super::{QualityRating, ReviewState};
use chrono::{DateTime, Duration, Utc};

/// Output of one SM-2 step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledReview {
    pub state: ReviewState,
    pub next_review_at: DateTime<Utc>,
}

/// Calculates the state following `previous` after an attempt rated `rating` at `now`.
pub fn compute_next_review(
    previous: &ReviewState,
    rating: QualityRating,
    now: DateTime<Utc>,
) -> ScheduledReview {
    let q = f64::from(rating.quality());

    let candidate_ef = previous.easiness_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    let easiness_factor = candidate_ef.max(MIN_EASINESS_FACTOR);

    let (interval, repetition_number) = if rating.quality() < 2 {
        (1, 0)
    } else {
        let repetitions = previous.repetition_number + 1;
        let interval = match repetitions {
            1 => 1,
            2 => 6,
            // Ties round to even
            _ => (f64::from(previous.interval) * easiness_factor)
                .round_ties_even()
                .min(f64::from(MAX_INTERVAL_DAYS)) as u32,
        };
        (interval, repetitions)
    };

    ScheduledReview {
        state: ReviewState {
            easiness_factor,
            interval,
            repetition_number,
        },
        next_review_at: now
            .checked_add_signed(Duration::days(i64::from(interval)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
    }
}
