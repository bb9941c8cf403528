//! Migrate the store, create or reset the admin account and insert the
//! sample projects and skills into empty tables.
//!
//! `ADMIN_PASSWORD` is required; the username comes from `auth.admin_username`
//! (or `ADMIN_USERNAME`).

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use service::auth::{
    repo::seaorm::SeaOrmAuthRepository,
    service::{AuthConfig, AuthService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = configs::AppConfig::load_and_validate()?;
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_and_migrate(&db_cfg).await?;
    info!(url = %models::db::redact(&db_cfg.url), "database migrated");

    let password = std::env::var("ADMIN_PASSWORD").ok();
    let auth = AuthService::new(Arc::new(SeaOrmAuthRepository { db: db.clone() }), AuthConfig::from(&cfg.auth));
    let admin = service::seed::seed_admin(&auth, &cfg.auth.admin_username, password.as_deref())
        .await
        .context("seeding admin account")?;
    info!(username = %admin.username, "admin account ready");

    let report = service::seed::seed_content(&db).await.context("seeding sample content")?;
    info!(projects = report.projects, skills = report.skills, "seed complete");
    Ok(())
}
