use sqlx::SqlitePool;

use crate::models::Article;

const NEWEST_ARTICLES_LIMIT: i64 = 10;

pub async fn insert_article_in_db(
    pool: &SqlitePool,
    title: &str,
    body: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO article (title, body)
        VALUES ($1, $2)
        "#,
    )
    .bind(title)
    .bind(body)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Fails with `sqlx::Error::RowNotFound` when no article has this id.
pub async fn get_article_by_id_in_db(pool: &SqlitePool, id: i64) -> Result<Article, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, body, created_at FROM article WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn list_newest_articles_in_db(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, body, created_at FROM article ORDER BY id DESC LIMIT $1
        "#,
    )
    .bind(NEWEST_ARTICLES_LIMIT)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_helpers::test_pool;

    #[tokio::test]
    async fn inserted_article_can_be_read_back() {
        let pool = test_pool().await;
        let id = insert_article_in_db(&pool, "Hello", "first\nsecond")
            .await
            .unwrap();

        let article = get_article_by_id_in_db(&pool, id).await.unwrap();
        assert_eq!(article.id, id);
        assert_eq!(article.title, "Hello");
        assert_eq!(article.body, "first\nsecond");
    }

    #[tokio::test]
    async fn empty_strings_are_stored() {
        let pool = test_pool().await;
        let id = insert_article_in_db(&pool, "", "").await.unwrap();

        let article = get_article_by_id_in_db(&pool, id).await.unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.body, "");
    }

    #[tokio::test]
    async fn missing_article_is_row_not_found() {
        let pool = test_pool().await;
        let error = get_article_by_id_in_db(&pool, 42).await.unwrap_err();
        assert!(matches!(error, sqlx::Error::RowNotFound));
    }

    #[tokio::test]
    async fn newest_articles_are_limited_and_descending() {
        let pool = test_pool().await;
        for i in 0..12 {
            insert_article_in_db(&pool, &format!("article {}", i), "body")
                .await
                .unwrap();
        }

        let articles = list_newest_articles_in_db(&pool).await.unwrap();
        assert_eq!(articles.len(), 10);
        assert_eq!(articles[0].title, "article 11");
        assert_eq!(articles[9].title, "article 2");
        assert!(articles.windows(2).all(|pair| pair[0].id > pair[1].id));
    }
}
