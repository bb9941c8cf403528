use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, DatabaseConfig};

/// CRUD behaviour of every content entity
pub mod crud_tests;


pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}
