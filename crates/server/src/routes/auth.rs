use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Method},
    middleware::Next,
    response::Response,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{error, warn};

use service::auth::{
    domain::{AdminUser, LoginInput},
    errors::AuthError,
    repo::seaorm::SeaOrmAuthRepository,
    service::{AuthConfig, AuthService},
};

use crate::errors::JsonApiError;
use crate::extract::JsonBody;
use crate::routes::content::wants_drafts;

/// Shared state for every handler.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
    /// Require a bearer token on mutations and draft listings.
    pub enforce_on_mutations: bool,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, cfg: &configs::AuthConfig) -> Self {
        let repo = Arc::new(SeaOrmAuthRepository { db: db.clone() });
        Self {
            db,
            auth: Arc::new(AuthService::new(repo, AuthConfig::from(cfg))),
            enforce_on_mutations: cfg.enforce_on_mutations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub success: bool,
    pub user: AdminUser,
    pub token: String,
}

/// `POST /api/auth`
pub async fn login(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<Json<LoginOutput>, JsonApiError> {
    match state.auth.login(input).await {
        Ok(session) => Ok(Json(LoginOutput { success: true, user: session.user, token: session.token })),
        Err(AuthError::Validation(msg)) => Err(JsonApiError::bad_request(msg)),
        Err(AuthError::Unauthorized) => Err(JsonApiError::new(
            axum::http::StatusCode::UNAUTHORIZED,
            "Invalid credentials",
        )),
        Err(e) => {
            error!(code = e.code(), error = %e, "admin login failed");
            Err(JsonApiError::internal("Authentication failed"))
        }
    }
}

/// Mutations, and reads that ask for drafts.
fn is_privileged(req: &Request) -> bool {
    match *req.method() {
        Method::GET | Method::HEAD => wants_drafts(req.uri().query()),
        Method::OPTIONS => false,
        _ => true,
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Reject privileged content requests that lack a valid bearer token.
pub async fn require_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    if !state.enforce_on_mutations || !is_privileged(&req) {
        return Ok(next.run(req).await);
    }
    let path = req.uri().path().to_string();
    let Some(token) = bearer(req.headers()) else {
        warn!(%path, method = %req.method(), "missing bearer token");
        return Err(JsonApiError::unauthorized());
    };
    if let Err(e) = state.auth.verify_token(token) {
        warn!(%path, err = %e, "token validation failed");
        return Err(JsonApiError::unauthorized());
    }
    Ok(next.run(req).await)
}
