use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, auth::ServerState};
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect, migrate and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    runtime::ensure_env(&cfg.server.static_dir).await?;

    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_and_migrate(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(url = %models::db::redact(&db_cfg.url), "database ready");

    if cfg.auth.uses_dev_secret() {
        warn!("JWT_SECRET not set; using the development secret");
    }
    if !cfg.auth.enforce_on_mutations {
        warn!("auth.enforce_on_mutations = false: content mutations are open to anyone");
    }

    let state = ServerState::new(db, &cfg.auth);
    Ok(routes::build_router(state, build_cors(), &cfg.server.static_dir))
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "portfolio server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("portfolio server stopped");
    Ok(())
}
