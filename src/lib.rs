use std::sync::Arc;

use repositories::posts_repo::PostsRepository;
use services::posts::PostService;

pub use self::errors::{Error, Result};

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub post_service: PostService,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self {
            post_service: PostService::new(repo),
        }
    }
}
