use sqlx::SqlitePool;

use crate::models::RecentArticle;

// Articles with equal latest comment timestamps fall back to the newest comment id.
const RECENT_COMMENTED_QUERY: &str = r#"
    SELECT a.id    AS "id",
           a.title AS "title"
      FROM comment c
           INNER JOIN article a
                   ON c.article = a.id
     GROUP BY a.id
     ORDER BY MAX(c.created_at) DESC,
              MAX(c.id) DESC
     LIMIT 10
"#;

/// The ten articles with the most recent comment activity.
/// Articles nobody has commented on never appear.
pub async fn get_recent_commented_articles_in_db(
    pool: &SqlitePool,
) -> Result<Vec<RecentArticle>, sqlx::Error> {
    sqlx::query_as::<_, RecentArticle>(RECENT_COMMENTED_QUERY)
        .fetch_all(pool)
        .await
}
