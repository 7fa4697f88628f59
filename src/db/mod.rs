pub mod catalog;
pub mod models;
pub mod schema;
pub mod seed;

use std::collections::HashMap;

use async_trait::async_trait;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;
use thiserror::Error;

use models::{Category, PageRequest, VideoInfo, VideoInfoFilter, VideoInfoSlice};

pub use catalog::PgCatalogStore;

pub type DbPool = deadpool::managed::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool: {0}")]
    Pool(#[from] deadpool::managed::PoolError<diesel_async::pooled_connection::PoolError>),

    #[error("query: {0}")]
    Query(#[from] diesel::result::Error),
}

pub fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<DbPool, deadpool::managed::BuildError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Pool::builder(config)
        .max_size(max_connections as usize)
        .build()
}

/// Read access to categories and video infos, plus the category view counter.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All categories ordered by display order ascending.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError>;

    /// Atomic `view = view + 1`.
    async fn increment_category_view(&self, id: i32) -> Result<(), StoreError>;

    /// One page of matching rows, id descending, with the total match count.
    async fn page_video_infos(
        &self,
        filter: VideoInfoFilter,
        page: PageRequest,
    ) -> Result<VideoInfoSlice, StoreError>;

    /// The `limit` newest video infos of a category, id descending.
    async fn latest_video_infos(
        &self,
        category_id: i32,
        limit: i64,
    ) -> Result<Vec<VideoInfo>, StoreError>;

    /// Number of video rows per video info. Ids without videos may be absent.
    async fn count_videos(&self, video_info_ids: &[i32]) -> Result<HashMap<i32, i64>, StoreError>;
}
