//! A practice question. Review records reference it by `id`.
use super::NewSolution;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    pub frontend_id: Option<String>,
    pub ac_rate: Option<f64>,
}

/// Question metadata before it is stored. Deserializes from the LeetCode
/// problem-list shape; unknown keys are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    #[serde(default, rename = "frontendQuestionId")]
    pub frontend_id: Option<String>,
    #[serde(default)]
    pub ac_rate: Option<f64>,
    /// Saved solution articles, stored alongside the question on import.
    #[serde(default)]
    pub solutions: Vec<NewSolution>,
}

/// How a caller names an item: by numeric id or by title slug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemRef {
    Id(i64),
    Slug(String),
}

impl From<&str> for ItemRef {
    fn from(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(id) => ItemRef::Id(id),
            Err(_) => ItemRef::Slug(value.trim().to_string()),
        }
    }
}

impl std::fmt::Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemRef::Id(id) => write!(f, "#{}", id),
            ItemRef::Slug(slug) => f.write_str(slug),
        }
    }
}
