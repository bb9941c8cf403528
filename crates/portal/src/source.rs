use async_trait::async_trait;
use common::Collection;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response is not a JSON array")]
    NotAnArray,
    #[error("decode error: {0}")]
    Decode(String),
    #[error("store error: {0}")]
    Store(String),
}

/// Where collections come from: the HTTP API, or the store itself when
/// rendering inside the server.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_json(&self, collection: Collection) -> Result<Value, FetchError>;
}

/// `GET <base>/api/<collection>` over reqwest.
#[derive(Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_json(&self, collection: Collection) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, collection.api_path());
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !res.status().is_success() {
            return Err(FetchError::Status(res.status().as_u16()));
        }
        res.json::<Value>().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Fetch and decode one collection, surfacing every failure.
pub async fn try_fetch_collection<T, S>(source: &S, collection: Collection) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
{
    let value = source.fetch_json(collection).await?;
    if !value.is_array() {
        return Err(FetchError::NotAnArray);
    }
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Like [`try_fetch_collection`], but any failure is logged and becomes an
/// empty list. Callers cannot tell an outage from an empty collection.
pub async fn fetch_collection<T, S>(source: &S, collection: Collection) -> Vec<T>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
{
    match try_fetch_collection(source, collection).await {
        Ok(items) => items,
        Err(e) => {
            warn!(%collection, error = %e, "collection fetch failed; rendering as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::*;

    /// Canned responses per collection; anything unlisted fails.
    #[derive(Default)]
    pub struct StubSource {
        pub bodies: HashMap<Collection, Value>,
    }

    impl StubSource {
        pub fn with(mut self, c: Collection, body: Value) -> Self {
            self.bodies.insert(c, body);
            self
        }
    }

    #[async_trait]
    impl ContentSource for StubSource {
        async fn fetch_json(&self, collection: Collection) -> Result<Value, FetchError> {
            self.bodies.get(&collection).cloned().ok_or(FetchError::Status(500))
        }
    }
}
