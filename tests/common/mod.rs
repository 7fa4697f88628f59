#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use async_trait::async_trait;

use video_learning::api;
use video_learning::config::{AppConfig, ServerConfig};
use video_learning::db::models::{
    Category, PageRequest, Video, VideoInfo, VideoInfoFilter, VideoInfoSlice,
};
use video_learning::db::{CatalogStore, StoreError};

pub const PUBLIC_URL: &str = "http://cdn.test";

#[derive(Default)]
pub struct MemoryCatalogStore {
    categories: Mutex<Vec<Category>>,
    video_infos: Vec<VideoInfo>,
    videos: Vec<Video>,
}

impl MemoryCatalogStore {
    pub fn new(categories: Vec<Category>, video_infos: Vec<VideoInfo>, videos: Vec<Video>) -> Self {
        Self {
            categories: Mutex::new(categories),
            video_infos,
            videos,
        }
    }

    pub fn category_view(&self, id: i32) -> Option<i32> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.view)
    }

    fn newest_first(&self, keep: impl Fn(&VideoInfo) -> bool) -> Vec<VideoInfo> {
        let mut rows: Vec<VideoInfo> = self
            .video_infos
            .iter()
            .filter(|&v| keep(v))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut rows = self.categories.lock().unwrap().clone();
        rows.sort_by_key(|c| c.display_order);
        Ok(rows)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn increment_category_view(&self, id: i32) -> Result<(), StoreError> {
        if let Some(c) = self.categories.lock().unwrap().iter_mut().find(|c| c.id == id) {
            c.view += 1;
        }
        Ok(())
    }

    async fn page_video_infos(
        &self,
        filter: VideoInfoFilter,
        page: PageRequest,
    ) -> Result<VideoInfoSlice, StoreError> {
        let matching = self.newest_first(|v| {
            v.recommend >= filter.min_recommend
                && filter.category_id.map_or(true, |id| v.category_id == id)
        });
        let total = matching.len() as i64;
        let Some(offset) = page.offset() else {
            return Ok(VideoInfoSlice {
                rows: Vec::new(),
                total,
            });
        };
        let rows = matching
            .into_iter()
            .skip(offset as usize)
            .take(page.size as usize)
            .collect();
        Ok(VideoInfoSlice { rows, total })
    }

    async fn latest_video_infos(
        &self,
        category_id: i32,
        limit: i64,
    ) -> Result<Vec<VideoInfo>, StoreError> {
        let mut rows = self.newest_first(|v| v.category_id == category_id);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn count_videos(&self, video_info_ids: &[i32]) -> Result<HashMap<i32, i64>, StoreError> {
        let mut counts = HashMap::new();
        for video in self.videos.iter().filter(|v| video_info_ids.contains(&v.video_info_id)) {
            *counts.entry(video.video_info_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

pub fn category(id: i32, name: &str, display_order: i32) -> Category {
    Category {
        id,
        name: name.to_string(),
        alias: name.to_lowercase(),
        display_order,
        view: 0,
    }
}

pub fn video_info(id: i32, category_id: i32, recommend: i16) -> VideoInfo {
    VideoInfo {
        id,
        title: format!("Lesson {id}"),
        photo: format!("uploads/cover/{id}.jpg"),
        view: id * 10,
        teacher: "Ferris".to_string(),
        video_type: 1,
        recommend,
        category_id,
    }
}

pub fn video(id: i32, video_info_id: i32) -> Video {
    Video { id, video_info_id }
}

/// Categories 1 (Rust, order 2) and 2 (Go, order 1).
/// Video infos 1,3,5 in Rust (3 recommended), 2,4 in Go (4 recommended).
/// Info 5 has two videos, info 3 has one.
pub fn fixture_store() -> Arc<MemoryCatalogStore> {
    Arc::new(MemoryCatalogStore::new(
        vec![category(1, "Rust", 2), category(2, "Go", 1)],
        vec![
            video_info(1, 1, 0),
            video_info(2, 2, 0),
            video_info(3, 1, 1),
            video_info(4, 2, 1),
            video_info(5, 1, 0),
        ],
        vec![video(1, 5), video(2, 5), video(3, 3)],
    ))
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            public_url: Some(PUBLIC_URL.to_string()),
            ..ServerConfig::default()
        },
        ..AppConfig::default()
    }
}

pub async fn init_app(
    store: Arc<MemoryCatalogStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let store: Arc<dyn CatalogStore> = store;
    test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .app_data(web::Data::new(test_config()))
            .configure(api::configure),
    )
    .await
}

pub fn ids(body: &serde_json::Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_i64().expect("numeric id"))
        .collect()
}
