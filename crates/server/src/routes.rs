use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::content::{Blog, ContentResource, Experiences, Projects, Services, Skills, Testimonials};

pub mod auth;
pub mod content;
pub mod public;

use auth::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// GET/POST/PUT/DELETE on one collection path.
fn resource<R: ContentResource>() -> MethodRouter<ServerState> {
    get(content::list::<R>)
        .post(content::create::<R>)
        .put(content::update::<R>)
        .delete(content::remove::<R>)
}

fn path<R: ContentResource>() -> String {
    R::COLLECTION.api_path()
}

/// Build the full application router: health, public page, auth, the six
/// content resources and static assets.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    let api = Router::new()
        .route(&path::<Projects>(), resource::<Projects>())
        .route(&path::<Skills>(), resource::<Skills>())
        .route(&path::<Experiences>(), resource::<Experiences>())
        .route(&path::<Services>(), resource::<Services>())
        .route(&path::<Testimonials>(), resource::<Testimonials>())
        .route(&path::<Blog>(), resource::<Blog>())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    Router::new()
        .route("/", get(public::index))
        .route("/health", get(health))
        .route("/api/auth", post(auth::login))
        .merge(api)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
