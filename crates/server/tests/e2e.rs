//! Full stack over a real socket: reqwest, the admin editor and the
//! HTTP content source all talk to a live server.

use std::net::SocketAddr;

use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use common::Collection;
use portal::{try_fetch_collection, AdminClient, AdminError, HttpContentSource, PublicPage};
use server::routes::{self, auth::ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_and_migrate(&models::db::DatabaseConfig::in_memory()).await?;
    let cfg = configs::AuthConfig { jwt_secret: "e2e-secret".into(), ..configs::AuthConfig::default() };
    let state = ServerState::new(db, &cfg);
    service::seed::seed_admin(&state.auth, "hashnova", Some("Secret123")).await?;
    service::seed::seed_content(&state.db).await?;

    let app = routes::build_router(state, CorsLayer::very_permissive(), "static");
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}

#[tokio::test]
async fn health_and_public_page() -> anyhow::Result<()> {
    let app = start_server().await?;
    let http = reqwest::Client::new();

    let res = http.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"status": "ok"}));

    let html = http.get(format!("{}/", app.base_url)).send().await?.text().await?;
    assert!(html.contains("NextTalk"));
    assert!(html.contains("MSCakeHub"));
    Ok(())
}

#[tokio::test]
async fn http_source_reads_seeded_content() -> anyhow::Result<()> {
    let app = start_server().await?;
    let source = HttpContentSource::new(&app.base_url);

    let projects: Vec<models::project::Model> = try_fetch_collection(&source, Collection::Projects).await?;
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["NextTalk", "U-Plus", "MSCakeHub"]);

    let page = PublicPage::load(&source).await;
    assert_eq!(page.skills.items().len(), 10);
    assert!(page.blog.items().is_empty());
    Ok(())
}

#[tokio::test]
async fn admin_editor_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut admin = AdminClient::new(&app.base_url);

    match admin.login("hashnova", "wrong-password").await {
        Err(AdminError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected 401, got {other:?}"),
    }
    assert!(!admin.is_logged_in());

    let who = admin.login("hashnova", "Secret123").await?;
    assert_eq!(who.username, "hashnova");

    let mut blog = admin.editor(Collection::Blog);
    let draft = blog
        .create(json!({"title": "Hello World", "excerpt": "First post", "published": false, "tags": ["intro"]}))
        .await?;
    assert_eq!(draft["slug"], "hello-world");
    assert_eq!(blog.records().len(), 1);

    let id: Uuid = draft["id"].as_str().unwrap().parse()?;
    let published = blog.update(id, json!({"published": true})).await?;
    assert_eq!(published["published"], true);
    assert_eq!(published["version"], 2);

    // an edit racing with a stale version is reported
    let stale = blog.update(id, json!({"excerpt": "late", "version": 1})).await;
    assert!(matches!(stale, Err(AdminError::Api { status: 409, .. })));

    blog.delete(id).await?;
    assert!(blog.records().is_empty());

    admin.logout();
    let mut anon = admin.editor(Collection::Skills);
    let denied = anon.create(json!({"name": "Go", "icon": "SiGo", "category": "Backend", "level": 50})).await;
    assert!(matches!(denied, Err(AdminError::Api { status: 401, .. })));
    Ok(())
}
