use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

/// Listings only load `name`, `body` and `created_at`; `id` and `article` stay `None` there.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    #[sqlx(default)]
    pub id: Option<i64>,
    #[sqlx(default)]
    pub article: Option<i64>,
    pub name: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

/// Entry of the recently commented sidebar.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecentArticle {
    pub id: i64,
    pub title: String,
}
