//! Router-level flows driven with `oneshot`, no socket involved.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, auth::ServerState};

const ADMIN: &str = "hashnova";
const PASSWORD: &str = "Secret123";

async fn app_with(enforce: bool) -> anyhow::Result<Router> {
    let db = models::db::connect_and_migrate(&models::db::DatabaseConfig::in_memory()).await?;
    let cfg = configs::AuthConfig {
        jwt_secret: "test-secret".into(),
        enforce_on_mutations: enforce,
        ..configs::AuthConfig::default()
    };
    let state = ServerState::new(db, &cfg);
    state.auth.set_password(ADMIN, PASSWORD).await?;
    Ok(routes::build_router(state, CorsLayer::very_permissive(), "static"))
}

async fn call(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(v) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) =
        call(app, Method::POST, "/api/auth", None, Some(json!({"username": ADMIN, "password": PASSWORD}))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["username"], ADMIN);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn projects_are_listed_by_order() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let token = login(&app).await;
    for (title, order) in [("U-Plus", 2), ("NextTalk", 1)] {
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/projects",
            Some(&token),
            Some(json!({"title": title, "description": "d", "technologies": ["Rust"], "order": order})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["version"], 1);
    }
    let (status, body) = call(&app, Method::GET, "/api/projects", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body.as_array().unwrap().iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["NextTalk", "U-Plus"]);
    Ok(())
}

#[tokio::test]
async fn delete_requires_a_well_formed_id() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let token = login(&app).await;

    let (status, body) = call(&app, Method::DELETE, "/api/skills?id=", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "ID required"}));

    let (status, body) = call(&app, Method::DELETE, "/api/skills?id=abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid ID"}));

    let (_, skill) = call(
        &app,
        Method::POST,
        "/api/skills",
        Some(&token),
        Some(json!({"name": "Rust", "icon": "SiRust", "category": "Backend", "level": 80})),
    )
    .await;
    let uri = format!("/api/skills?id={}", skill["id"].as_str().unwrap());
    let (status, body) = call(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = call(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "skill not found"}));
    Ok(())
}

#[tokio::test]
async fn malformed_delete_query_keeps_the_json_envelope() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let token = login(&app).await;
    let id = Uuid::new_v4();
    let uri = format!("/api/skills?id={id}&id={id}");
    let (status, body) = call(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error envelope");
    assert!(message.contains("duplicate field"), "{message}");
    Ok(())
}

#[tokio::test]
async fn stale_version_is_a_conflict() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let token = login(&app).await;
    let (_, created) = call(
        &app,
        Method::POST,
        "/api/services",
        Some(&token),
        Some(json!({"title": "Web", "description": "Sites", "icon": "💻", "features": ["SSR"]})),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, first) =
        call(&app, Method::PUT, "/api/services", Some(&token), Some(json!({"id": id, "version": 1, "title": "Web apps"})))
            .await;
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["version"], 2);
    assert_eq!(first["description"], "Sites");

    let (status, body) =
        call(&app, Method::PUT, "/api/services", Some(&token), Some(json!({"id": id, "version": 1, "title": "Late"})))
            .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "service was modified concurrently"}));

    // no version: last write wins
    let (status, body) =
        call(&app, Method::PUT, "/api/services", Some(&token), Some(json!({"id": id, "title": "Late"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], 3);

    let (status, body) = call(&app, Method::PUT, "/api/services", Some(&token), Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "ID required"}));

    let missing = Uuid::new_v4().to_string();
    let (status, _) =
        call(&app, Method::PUT, "/api/services", Some(&token), Some(json!({"id": missing, "title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn mutations_need_a_token_when_enforced() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let body = json!({"name": "Ada", "role": "CTO", "company": "X", "content": "Great"});

    let (status, err) = call(&app, Method::POST, "/api/testimonials", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(err, json!({"error": "Unauthorized"}));

    let (status, _) = call(&app, Method::POST, "/api/testimonials", Some("garbage"), Some(body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app).await;
    let (status, created) = call(&app, Method::POST, "/api/testimonials", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["rating"], 5);

    // reads stay public
    let (status, list) = call(&app, Method::GET, "/api/testimonials", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn open_mode_accepts_anonymous_writes() -> anyhow::Result<()> {
    let app = app_with(false).await?;
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/experiences",
        None,
        Some(json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "startDate": "2022-01-01",
            "current": true,
            "description": "Built things"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["current"], true);
    Ok(())
}

#[tokio::test]
async fn bad_credentials_look_the_same() -> anyhow::Result<()> {
    let app = app_with(true).await?;

    let (status, body) = call(&app, Method::POST, "/api/auth", None, Some(json!({"username": ADMIN}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (s1, wrong_password) =
        call(&app, Method::POST, "/api/auth", None, Some(json!({"username": ADMIN, "password": "nope"}))).await;
    let (s2, unknown_user) =
        call(&app, Method::POST, "/api/auth", None, Some(json!({"username": "ghost", "password": "nope"}))).await;
    assert_eq!(s1, StatusCode::UNAUTHORIZED);
    assert_eq!(s2, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password, json!({"error": "Invalid credentials"}));
    Ok(())
}

#[tokio::test]
async fn invalid_fields_are_rejected() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let token = login(&app).await;

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/skills",
        Some(&token),
        Some(json!({"name": "Cobol", "icon": "SiCobol", "category": "Legacy", "level": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/skills",
        Some(&token),
        Some(json!({"name": "Rust", "icon": "SiRust", "category": "Backend", "level": 101})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/testimonials",
        Some(&token),
        Some(json!({"name": "A", "role": "B", "company": "C", "content": "D", "rating": 6})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, Method::GET, "/api/skills", None, None).await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn drafts_are_private() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let token = login(&app).await;
    for (title, published) in [("Draft", false), ("Live", true)] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/blog",
            Some(&token),
            Some(json!({"title": title, "excerpt": "e", "published": published})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, public) = call(&app, Method::GET, "/api/blog", None, None).await;
    let titles: Vec<&str> = public.as_array().unwrap().iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Live"]);

    let (status, _) = call(&app, Method::GET, "/api/blog?includeDrafts=true", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, all) = call(&app, Method::GET, "/api/blog?includeDrafts=true", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn public_page_and_health() -> anyhow::Result<()> {
    let app = app_with(true).await?;
    let (status, body) = call(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let html = String::from_utf8(to_bytes(res.into_body(), usize::MAX).await?.to_vec())?;
    assert!(html.contains("id=\"projects\""));
    assert!(html.contains("id=\"services\""));
    Ok(())
}
