//! Runtime configuration.

use crate::database::db;
use crate::error::Result;
use rusqlite::Connection;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "leetcode.db";
pub const DATABASE_PATH_ENV: &str = "LEETCODE_REVIEW_DB";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl Config {
    /// Explicit path first, then `LEETCODE_REVIEW_DB`, then the default.
    pub fn from_args(database_path: Option<PathBuf>) -> Self {
        Self::resolve(database_path, std::env::var(DATABASE_PATH_ENV).ok())
    }

    fn resolve(flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        let database_path = flag
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));
        Self { database_path }
    }

    pub fn open_database(&self) -> Result<Connection> {
        db::init_database(&self.database_path)
    }
}
