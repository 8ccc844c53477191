use serde::{Deserialize, Serialize};

// Absent fields bind as empty strings, same as present-but-empty ones.

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct PostArticleForm {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct PostCommentForm {
    pub name: String,
    pub body: String,
}
