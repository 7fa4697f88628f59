use anyhow::{Context, Result};
use diesel_async::{AsyncConnection, AsyncPgConnection};
use dotenv::dotenv;

use video_learning::config::AppConfig;
use video_learning::db::seed::{seed_admin, SeedOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::new().context("Failed to load configuration")?;
    let mut conn = AsyncPgConnection::establish(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    let admin = &config.seed.admin;
    match seed_admin(&mut conn, admin)
        .await
        .context("Failed to seed admin user")?
    {
        SeedOutcome::Inserted => log::info!("Seeded admin user {}", admin.email),
        SeedOutcome::AlreadyPresent => {
            log::info!("Admin user {} already present, nothing to do", admin.email)
        }
    }

    Ok(())
}
