//! Self-assessed difficulty of an attempt and its SM-2 quality score.
//!
//! The ordering is inverted relative to the usual "higher is harder" reading:
//! HARD maps to the *lowest* quality (1) and is the only rating that resets
//! an item's progress.

use crate::error::{Result, ReviewError};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityRating {
    Hard,
    Medium,
    Easy,
}

impl QualityRating {
    pub const ALL: [QualityRating; 3] =
        [QualityRating::Hard, QualityRating::Medium, QualityRating::Easy];

    /// Numeric quality fed into the SM-2 formula.
    pub fn quality(self) -> u8 {
        match self {
            QualityRating::Hard => 1,
            QualityRating::Medium => 2,
            QualityRating::Easy => 3,
        }
    }

    pub fn from_quality(quality: u8) -> Result<Self> {
        match quality {
            1 => Ok(QualityRating::Hard),
            2 => Ok(QualityRating::Medium),
            3 => Ok(QualityRating::Easy),
            other => Err(ReviewError::InvalidRating(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityRating::Hard => "HARD",
            QualityRating::Medium => "MEDIUM",
            QualityRating::Easy => "EASY",
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Accepts the rating names in any case, or the numeric qualities 1-3.
impl FromStr for QualityRating {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(quality) = trimmed.parse::<u8>() {
            return Self::from_quality(quality);
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "HARD" => Ok(QualityRating::Hard),
            "MEDIUM" => Ok(QualityRating::Medium),
            "EASY" => Ok(QualityRating::Easy),
            _ => Err(ReviewError::InvalidRating(s.to_string())),
        }
    }
}

impl ToSql for QualityRating {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for QualityRating {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|_| FromSqlError::InvalidType)
    }
}
