use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4), static_dir: default_static_dir() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// Admin authentication settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    /// Require a bearer token on POST/PUT/DELETE under `/api/<collection>`.
    #[serde(default = "default_enforce")]
    pub enforce_on_mutations: bool,
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl_hours(),
            enforce_on_mutations: default_enforce(),
            admin_username: default_admin_username(),
        }
    }
}

fn default_static_dir() -> String { "static".into() }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_token_ttl_hours() -> i64 { 12 }
fn default_enforce() -> bool { true }
fn default_admin_username() -> String { "hashnova".into() }

const DEV_JWT_SECRET: &str = "dev-secret-change-me";
/// One year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 8760;

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to an env-only
    /// configuration when the file is absent, then normalize and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => Self::from_env(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Configuration assembled purely from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        cfg.database = DatabaseConfig {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            ..DatabaseConfig::default()
        };
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        if self.static_dir.trim().is_empty() {
            self.static_dir = default_static_dir();
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // DATABASE_URL fills the url only when the TOML leaves it empty
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            self.jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string());
        }
        if let Ok(name) = std::env::var("ADMIN_USERNAME") {
            if !name.trim().is_empty() {
                self.admin_username = name;
            }
        }
        if let Ok(flag) = std::env::var("AUTH_ENFORCE_MUTATIONS") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "no" | "off" => self.enforce_on_mutations = false,
                "1" | "true" | "yes" | "on" => self.enforce_on_mutations = true,
                _ => {}
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_ttl_hours <= 0 {
            return Err(anyhow!("auth.token_ttl_hours must be positive"));
        }
        if self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(anyhow!("auth.token_ttl_hours must be at most {MAX_TOKEN_TTL_HOURS}"));
        }
        if self.admin_username.trim().is_empty() {
            return Err(anyhow!("auth.admin_username must not be empty"));
        }
        Ok(())
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [database]
            url = "sqlite::memory:"
            max_connections = 1
            min_connections = 1

            [auth]
            jwt_secret = "s3cret"
            enforce_on_mutations = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.static_dir, "static");
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert!(!cfg.auth.enforce_on_mutations);
        assert_eq!(cfg.auth.token_ttl_hours, 12);
        assert_eq!(cfg.auth.admin_username, "hashnova");
    }

    #[test]
    fn missing_auth_section_enforces_by_default() {
        let cfg = parse("[server]\nhost = \"h\"\nport = 1\n").unwrap();
        assert!(cfg.auth.enforce_on_mutations);
    }

    #[test]
    fn rejects_unknown_database_scheme() {
        let db = DatabaseConfig {
            url: "mysql://root@localhost/db".into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 1,
            acquire_timeout_secs: 1,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/db".into(),
            max_connections: 1,
            min_connections: 2,
            connect_timeout_secs: 1,
            acquire_timeout_secs: 1,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn server_normalize_fills_blank_host() {
        let mut s = ServerConfig { host: " ".into(), port: 8080, worker_threads: Some(0), static_dir: String::new() };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
        assert_eq!(s.static_dir, "static");
    }

    #[test]
    fn auth_rejects_non_positive_ttl() {
        let auth = AuthConfig { token_ttl_hours: 0, ..AuthConfig::default() };
        assert!(auth.validate().is_err());
    }

    #[test]
    fn auth_caps_ttl_at_one_year() {
        let max = AuthConfig { token_ttl_hours: MAX_TOKEN_TTL_HOURS, ..AuthConfig::default() };
        assert!(max.validate().is_ok());
        let over = AuthConfig { token_ttl_hours: MAX_TOKEN_TTL_HOURS + 1, ..AuthConfig::default() };
        let err = over.validate().unwrap_err();
        assert!(err.to_string().contains("at most 8760"), "{err}");
    }
}
