use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::pg::Pg;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

use super::models::{Category, PageRequest, VideoInfo, VideoInfoFilter, VideoInfoSlice};
use super::schema::{categories, video_infos, videos};
use super::{CatalogStore, DbPool, StoreError};

pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn filtered(filter: VideoInfoFilter) -> video_infos::BoxedQuery<'static, Pg> {
    let mut query = video_infos::table
        .filter(video_infos::recommend.ge(filter.min_recommend))
        .into_boxed();
    if let Some(category_id) = filter.category_id {
        query = query.filter(video_infos::category_id.eq(category_id));
    }
    query
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let conn = &mut self.pool.get().await?;
        let rows = categories::table
            .order_by(categories::display_order.asc())
            .load::<Category>(conn)
            .await?;
        Ok(rows)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let conn = &mut self.pool.get().await?;
        let mut rows = categories::table
            .filter(categories::id.eq(id))
            .limit(1)
            .load::<Category>(conn)
            .await?;
        Ok(rows.pop())
    }

    async fn increment_category_view(&self, id: i32) -> Result<(), StoreError> {
        let conn = &mut self.pool.get().await?;
        diesel::update(categories::table.filter(categories::id.eq(id)))
            .set(categories::view.eq(categories::view + 1))
            .execute(conn)
            .await?;
        Ok(())
    }

    async fn page_video_infos(
        &self,
        filter: VideoInfoFilter,
        page: PageRequest,
    ) -> Result<VideoInfoSlice, StoreError> {
        let conn = &mut self.pool.get().await?;

        let total: i64 = filtered(filter).count().get_result(conn).await?;
        let Some(offset) = page.offset().filter(|offset| *offset < total) else {
            return Ok(VideoInfoSlice {
                rows: Vec::new(),
                total,
            });
        };
        let rows = filtered(filter)
            .order_by(video_infos::id.desc())
            .offset(offset)
            .limit(page.size)
            .load::<VideoInfo>(conn)
            .await?;

        Ok(VideoInfoSlice { rows, total })
    }

    async fn latest_video_infos(
        &self,
        category_id: i32,
        limit: i64,
    ) -> Result<Vec<VideoInfo>, StoreError> {
        let conn = &mut self.pool.get().await?;
        let rows = video_infos::table
            .filter(video_infos::category_id.eq(category_id))
            .order_by(video_infos::id.desc())
            .limit(limit)
            .load::<VideoInfo>(conn)
            .await?;
        Ok(rows)
    }

    async fn count_videos(&self, video_info_ids: &[i32]) -> Result<HashMap<i32, i64>, StoreError> {
        if video_info_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let conn = &mut self.pool.get().await?;
        let counts = videos::table
            .filter(videos::video_info_id.eq_any(video_info_ids.to_vec()))
            .group_by(videos::video_info_id)
            .select((videos::video_info_id, count_star()))
            .load::<(i32, i64)>(conn)
            .await?;
        Ok(counts.into_iter().collect())
    }
}
