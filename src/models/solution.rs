//! Community solution attached to a question.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: i64,
    pub item_id: i64,
    pub summary: String,
    pub content: String,
    pub author_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Solution article as saved from a LeetCode solution-detail response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSolution {
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<SolutionAuthor>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolutionAuthor {
    #[serde(rename = "userName")]
    pub user_name: String,
}

impl NewSolution {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.user_name.as_str())
    }
}
