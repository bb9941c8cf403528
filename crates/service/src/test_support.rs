#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, DatabaseConfig};

/// A fresh, migrated in-memory database per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}
