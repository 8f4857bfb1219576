use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{models::posts::Post, Error, Result};

use super::SqliteRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn count_posts(&self) -> Result<i64>;
    async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<Post>>;
    async fn find_post(&self, post_id: i64) -> Result<Option<Post>>;
    async fn create_post(&self, title: &str, content: &str, now: DateTime<Utc>) -> Result<Post>;
    /// `None` when no row has `post.id`.
    async fn update_post(&self, post: &Post) -> Result<Option<Post>>;
    async fn delete_post(&self, post_id: i64) -> Result<()>;
}

#[async_trait]
impl PostsRepository for SqliteRepo {
    async fn count_posts(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM posts"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Error::storage("Failed to count posts", e))?;

        Ok(total)
    }

    async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, updated_at FROM posts
            ORDER BY created_at DESC, id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::storage("Failed to fetch posts", e))?;

        Ok(posts)
    }

    async fn find_post(&self, post_id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, updated_at FROM posts WHERE id = ?1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::storage("Failed to fetch post", e))?;

        Ok(post)
    }

    async fn create_post(&self, title: &str, content: &str, now: DateTime<Utc>) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::storage("Failed to create post", e))?;

        Ok(post)
    }

    async fn update_post(&self, post: &Post) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = ?2,
                content = ?3,
                updated_at = ?4
            WHERE id = ?1
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::storage("Failed to update post", e))?;

        Ok(post)
    }

    async fn delete_post(&self, post_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM posts WHERE id = ?1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::storage("Failed to delete post", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::repositories::connect_in_memory;

    async fn repo() -> SqliteRepo {
        SqliteRepo::new(connect_in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = repo().await;
        let now = Utc::now();

        let first = repo.create_post("one", "1", now).await.unwrap();
        let second = repo.create_post("two", "2", now).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.created_at, now);
        assert_eq!(first.updated_at, now);
        assert_eq!(repo.count_posts().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let repo = repo().await;
        let base = Utc::now();

        let old = repo.create_post("old", "x", base).await.unwrap();
        let new = repo
            .create_post("new", "x", base + Duration::seconds(5))
            .await
            .unwrap();

        let posts = repo.list_posts(10, 0).await.unwrap();
        assert_eq!(
            posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![new.id, old.id]
        );
    }

    #[tokio::test]
    async fn find_and_delete() {
        let repo = repo().await;
        let post = repo.create_post("t", "c", Utc::now()).await.unwrap();

        assert_eq!(repo.find_post(post.id).await.unwrap(), Some(post.clone()));

        repo.delete_post(post.id).await.unwrap();
        assert_eq!(repo.find_post(post.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_of_missing_row_returns_none() {
        let repo = repo().await;
        let mut post = repo.create_post("t", "c", Utc::now()).await.unwrap();
        repo.delete_post(post.id).await.unwrap();

        post.title = "t2".into();
        assert_eq!(repo.update_post(&post).await.unwrap(), None);
        assert_eq!(repo.count_posts().await.unwrap(), 0);
    }
}
