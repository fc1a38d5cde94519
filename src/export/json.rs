//! JSON import/export.
//! Reads question lists in the LeetCode problem-list shape (optionally with saved
//! solution articles) and writes review history.

use crate::error::Result;
use crate::models::{NewItem, ReviewRecord};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Saved `problemsetQuestionList` GraphQL response.
#[derive(Deserialize)]
struct QuestionEnvelope {
    data: QuestionData,
}

#[derive(Deserialize)]
struct QuestionData {
    #[serde(rename = "problemsetQuestionList")]
    problemset_question_list: QuestionList,
}

#[derive(Deserialize)]
struct QuestionList {
    questions: Vec<NewItem>,
}

/// Reads questions from a JSON file: either a bare array or a saved
/// `problemsetQuestionList` GraphQL response.
pub fn read_items_json(path: &Path) -> Result<Vec<NewItem>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    // Parsed per layout so field errors in an entry are reported as such
    let items = if contents.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<NewItem>>(&contents)?
    } else {
        serde_json::from_str::<QuestionEnvelope>(&contents)?
            .data
            .problemset_question_list
            .questions
    };

    info!("Read {} questions from '{}'", items.len(), path.display());
    Ok(items)
}

/// Writes review records as a pretty-printed JSON array.
pub fn export_history_to_path(records: &[ReviewRecord], path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(records)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}
