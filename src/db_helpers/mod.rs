mod article_helpers;
mod comment_helpers;
mod recent_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use recent_helpers::*;

/// Fresh in-memory database with the schema applied, for the query tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    crate::init_db("sqlite::memory:", 1).await.unwrap()
}
