use sqlx::SqlitePool;

use crate::models::Comment;

/// The article is not looked up first; a missing one surfaces as a foreign key failure.
pub async fn insert_comment_in_db(
    pool: &SqlitePool,
    article_id: i64,
    name: &str,
    body: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO comment (article, name, body)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(article_id)
    .bind(name)
    .bind(body)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn list_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT name, body, created_at
          FROM comment
         WHERE article = $1
         ORDER BY id
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await
}
