mod app_config;

pub use app_config::{
    AdminSeed, AppConfig, DatabaseConfig, ListingConfig, SeedConfig, ServerConfig, StorageConfig,
};
