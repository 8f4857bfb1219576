use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;
use validator::Validate;

use crate::{
    models::{
        posts::{Post, PostPayload, PostsPage},
        query::Pagination,
    },
    repositories::posts_repo::PostsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostsRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self, pagination: Pagination) -> Result<PostsPage> {
        let total = self.repo.count_posts().await?;
        let posts = self
            .repo
            .list_posts(pagination.limit, pagination.offset())
            .await?;

        Ok(PostsPage {
            posts,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: pagination.total_pages(total),
        })
    }

    pub async fn create_post(&self, payload: PostPayload) -> Result<Post> {
        payload.validate()?;

        let post = self
            .repo
            .create_post(&payload.title, &payload.content, Utc::now())
            .await?;
        debug!("Created post {}", post.id);

        Ok(post)
    }

    pub async fn get_post(&self, post_id: i64) -> Result<Post> {
        self.repo
            .find_post(post_id)
            .await?
            .ok_or(Error::NotFound("Post not found"))
    }

    /// Looks the post up before inspecting `payload`, so a missing post is
    /// reported even when the body could not be parsed.
    pub async fn update_post(&self, post_id: i64, payload: Result<PostPayload>) -> Result<Post> {
        let mut post = self.get_post(post_id).await?;
        let payload = payload?;
        payload.validate()?;

        // updated_at must move forward even if the clock has not
        let now = Utc::now();
        post.updated_at = if now > post.updated_at {
            now
        } else {
            post.updated_at + Duration::microseconds(1)
        };
        post.title = payload.title;
        post.content = payload.content;

        // the row may have been deleted since the lookup
        self.repo
            .update_post(&post)
            .await?
            .ok_or(Error::NotFound("Post not found"))
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<()> {
        let post = self.get_post(post_id).await?;
        self.repo.delete_post(post.id).await?;
        debug!("Deleted post {}", post.id);

        Ok(())
    }
}
