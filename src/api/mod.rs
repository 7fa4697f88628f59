// src/api/mod.rs
pub mod categories;
pub mod health;
pub mod shared;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(categories::configure)
        .configure(health::configure);
}
