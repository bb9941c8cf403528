use async_trait::async_trait;
use axum::{extract::State, response::Html};
use common::Collection;
use portal::{ContentSource, FetchError, PublicPage};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use service::content::{
    self, Blog, ContentResource, Experiences, ListScope, Projects, Services, Skills, Testimonials,
};

use crate::routes::auth::ServerState;

/// Reads collections straight from the store, skipping the HTTP hop.
pub struct StoreSource {
    db: DatabaseConnection,
}

impl StoreSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch<R: ContentResource>(&self) -> Result<Value, FetchError> {
        let records = content::list::<R>(&self.db, ListScope::default())
            .await
            .map_err(|e| FetchError::Store(e.to_string()))?;
        serde_json::to_value(records).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContentSource for StoreSource {
    async fn fetch_json(&self, collection: Collection) -> Result<Value, FetchError> {
        match collection {
            Collection::Projects => self.fetch::<Projects>().await,
            Collection::Skills => self.fetch::<Skills>().await,
            Collection::Experiences => self.fetch::<Experiences>().await,
            Collection::Services => self.fetch::<Services>().await,
            Collection::Testimonials => self.fetch::<Testimonials>().await,
            Collection::Blog => self.fetch::<Blog>().await,
        }
    }
}

/// `GET /`
pub async fn index(State(state): State<ServerState>) -> Html<String> {
    let source = StoreSource::new(state.db.clone());
    Html(PublicPage::load(&source).await.render())
}
