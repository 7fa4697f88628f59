use actix_web::{web, HttpRequest, HttpResponse};

use crate::api::shared::base_url;
use crate::config::AppConfig;
use crate::db::CatalogStore;
use crate::error::Result;
use crate::services::listing::{self, CategoryListParams, VideoListParams};
use crate::services::validation::{validate, Query, CATEGORY_PREVIEW, VIDEO_INFO_LIST};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/getVideoInfosList.api").route(web::get().to(get_video_infos_list)),
    )
    .service(web::resource("/getAllCategories.api").route(web::get().to(get_all_categories)));
}

/// `category_id` (0 for all), `page`, `count`, `recommend` (0/1).
pub async fn get_video_infos_list(
    req: HttpRequest,
    query: web::Query<Query>,
    store: web::Data<dyn CatalogStore>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse> {
    validate(&VIDEO_INFO_LIST, &query)?;

    let params = VideoListParams::from_query(&query, &config.listing);
    let base = base_url(&req, &config.server);
    let page = listing::video_info_page(store.get_ref(), &params, &base).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Categories by display order; `have_data` attaches the newest `count` videos to each.
pub async fn get_all_categories(
    req: HttpRequest,
    query: web::Query<Query>,
    store: web::Data<dyn CatalogStore>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse> {
    // `count` only matters for previews.
    if query.contains_key("have_data") {
        validate(&CATEGORY_PREVIEW, &query)?;
    }

    let params = CategoryListParams::from_query(&query, &config.listing);
    let base = base_url(&req, &config.server);
    let categories = listing::category_list(store.get_ref(), &params, &base).await?;

    Ok(HttpResponse::Ok().json(categories))
}
