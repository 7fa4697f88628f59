use std::collections::HashMap;

use crate::api::shared::{CategoryItem, PageInfo, VideoInfoItem, VideoInfoPage};
use crate::config::ListingConfig;
use crate::db::models::{Category, PageRequest, VideoInfo, VideoInfoFilter};
use crate::db::CatalogStore;
use crate::error::{AppError, Result};
use crate::services::validation::{int_param, param, Query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoListParams {
    /// 0 selects every category.
    pub category_id: i64,
    pub page: i64,
    pub count: i64,
    pub recommend_only: bool,
}

impl VideoListParams {
    /// Reads already-validated query parameters.
    pub fn from_query(query: &Query, listing: &ListingConfig) -> Self {
        Self {
            category_id: int_param(query, "category_id").unwrap_or(0),
            page: int_param(query, "page").unwrap_or(1),
            count: clamp_count(int_param(query, "count"), listing.default_page_size, listing),
            recommend_only: param(query, "recommend") == Some("1"),
        }
    }

    pub fn min_recommend(&self) -> i16 {
        if self.recommend_only {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryListParams {
    /// Set when `have_data` was supplied.
    pub preview_count: Option<i64>,
}

impl CategoryListParams {
    pub fn from_query(query: &Query, listing: &ListingConfig) -> Self {
        let preview_count = query.contains_key("have_data").then(|| {
            clamp_count(
                int_param(query, "count"),
                listing.default_preview_count,
                listing,
            )
        });
        Self { preview_count }
    }
}

fn clamp_count(requested: Option<i64>, default: i64, listing: &ListingConfig) -> i64 {
    requested.unwrap_or(default).clamp(1, listing.max_page_size.max(1))
}

/// Joins a stored photo path onto the public base URL.
pub fn resolve_cover(base_url: &str, photo: &str) -> String {
    if photo.starts_with("http://") || photo.starts_with("https://") {
        return photo.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        photo.trim_start_matches('/')
    )
}

pub fn project_video_info(info: &VideoInfo, video_count: i64, base_url: &str) -> VideoInfoItem {
    VideoInfoItem {
        id: info.id,
        title: info.title.clone(),
        cover: resolve_cover(base_url, &info.photo),
        view: info.view,
        teacher_name: info.teacher.clone(),
        video_type: info.video_type,
        recommended: info.recommend,
        video_count,
    }
}

fn project_category(category: &Category) -> CategoryItem {
    CategoryItem {
        id: category.id,
        name: category.name.clone(),
        alias: category.alias.clone(),
        view: category.view,
        video_info_list: None,
    }
}

async fn project_rows(
    store: &dyn CatalogStore,
    rows: &[VideoInfo],
    base_url: &str,
) -> Result<Vec<VideoInfoItem>> {
    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let counts: HashMap<i32, i64> = store.count_videos(&ids).await?;

    Ok(rows
        .iter()
        .map(|row| {
            let count = counts.get(&row.id).copied().unwrap_or(0);
            project_video_info(row, count, base_url)
        })
        .collect())
}

pub async fn video_info_page(
    store: &dyn CatalogStore,
    params: &VideoListParams,
    base_url: &str,
) -> Result<VideoInfoPage> {
    let category_id = match params.category_id {
        0 => None,
        requested => {
            let id = i32::try_from(requested).map_err(|_| AppError::UnknownCategory(requested))?;
            let category = store
                .find_category(id)
                .await?
                .ok_or(AppError::UnknownCategory(requested))?;
            store.increment_category_view(category.id).await?;
            Some(category.id)
        }
    };

    let filter = VideoInfoFilter {
        category_id,
        min_recommend: params.min_recommend(),
    };
    let page = PageRequest {
        number: params.page,
        size: params.count,
    };
    if page.offset().is_none() {
        return Err(AppError::NoVideos);
    }

    let slice = store.page_video_infos(filter, page).await?;
    if slice.rows.is_empty() {
        return Err(AppError::NoVideos);
    }

    let data = project_rows(store, &slice.rows, base_url).await?;
    log::debug!(
        "Listed {} of {} video infos for category {}",
        data.len(),
        slice.total,
        params.category_id
    );

    Ok(VideoInfoPage {
        page_info: PageInfo {
            total: slice.total,
            current_page: params.page,
        },
        data,
    })
}

pub async fn category_list(
    store: &dyn CatalogStore,
    params: &CategoryListParams,
    base_url: &str,
) -> Result<Vec<CategoryItem>> {
    let categories = store.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::NoCategories);
    }

    let mut items: Vec<CategoryItem> = categories.iter().map(project_category).collect();
    let Some(limit) = params.preview_count else {
        return Ok(items);
    };

    for item in &mut items {
        let rows = store.latest_video_infos(item.id, limit).await?;
        item.video_info_list = Some(project_rows(store, &rows, base_url).await?);
    }

    Ok(items)
}
