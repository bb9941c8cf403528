use std::env;
use std::time::Duration;

use migration::MigratorTrait;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://portfolio.db?mode=rwc".to_string())
});

/// Pool settings for a single database connection.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: DATABASE_URL.clone(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(3600)),
            sqlx_logging: false,
        }
    }

    /// Read the `[database]` table of a TOML config file, if it exists and parses.
    pub fn from_file(path: &str) -> Option<Self> {
        let cfg = configs::load_from_file(path).ok()?;
        if cfg.database.url.trim().is_empty() {
            return None;
        }
        Some(Self::from(&cfg.database))
    }

    /// A private in-memory SQLite database. The pool is pinned to one
    /// connection that never expires so the schema outlives each query.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
            sqlx_logging: false,
        }
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        let secs = |s: u64| if s == 0 { None } else { Some(Duration::from_secs(s)) };
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections.max(1),
            min_connections: c.min_connections.max(1),
            connect_timeout: Duration::from_secs(c.connect_timeout_secs.max(1)),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs.max(1)),
            idle_timeout: secs(c.idle_timeout_secs),
            max_lifetime: secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&DatabaseConfig::from_env()).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);
    if let Some(idle) = cfg.idle_timeout {
        opt.idle_timeout(idle);
    }
    if let Some(lifetime) = cfg.max_lifetime {
        opt.max_lifetime(lifetime);
    }
    let db = Database::connect(opt).await?;
    tracing::debug!(url = %redact(&cfg.url), "database connected");
    Ok(db)
}

/// Connect and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Strip the password from a connection URL before it reaches the logs.
pub fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme), Some(at)) if at > scheme => {
            let creds = &url[scheme + 3..at];
            match creds.find(':') {
                Some(colon) => format!("{}{}:***{}", &url[..scheme + 3], &creds[..colon], &url[at..]),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_hides_password_only() {
        assert_eq!(redact("postgres://app:hunter2@db:5432/site"), "postgres://app:***@db:5432/site");
        assert_eq!(redact("postgres://app@db/site"), "postgres://app@db/site");
        assert_eq!(redact("sqlite::memory:"), "sqlite::memory:");
    }

    #[test]
    fn zero_second_timeouts_disable_the_limit() {
        let c = configs::DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 0,
            min_connections: 0,
            idle_timeout_secs: 0,
            max_lifetime_secs: 0,
            ..configs::DatabaseConfig::default()
        };
        let d = DatabaseConfig::from(&c);
        assert_eq!(d.max_connections, 1);
        assert!(d.idle_timeout.is_none());
        assert!(d.max_lifetime.is_none());
    }
}
