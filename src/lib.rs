pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;

pub use config::Config;
pub use error::{Result, ReviewError};
pub use models::{
    Item, ItemRef, NewItem, NewSolution, QualityRating, ReviewRecord, ReviewState, Solution,
};
pub use scheduler::{record_attempt, record_attempt_at};
