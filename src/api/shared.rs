use actix_web::http::StatusCode;
use actix_web::HttpRequest;
use serde::Serialize;

use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub code: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status: "error",
            code: status.as_u16(),
            message,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfoItem {
    pub id: i32,
    pub title: String,
    pub cover: String,
    pub view: i32,
    pub teacher_name: String,
    pub video_type: i16,
    pub recommended: i16,
    pub video_count: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfoPage {
    pub page_info: PageInfo,
    pub data: Vec<VideoInfoItem>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: i32,
    pub name: String,
    pub alias: String,
    pub view: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_info_list: Option<Vec<VideoInfoItem>>,
}

/// Absolute base for cover URLs: the configured public URL, else the request origin.
pub fn base_url(req: &HttpRequest, server: &ServerConfig) -> String {
    match &server.public_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            let info = req.connection_info();
            format!("{}://{}", info.scheme(), info.host())
        }
    }
}
