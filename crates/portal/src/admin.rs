//! Admin editor: log in once, then edit one collection at a time. Every
//! mutation is followed by a refresh so `records()` mirrors the server.

use common::types::ErrorBody;
use common::Collection;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AdminError {
    /// The server's `{error}` message.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("fields must be a JSON object")]
    NotAnObject,
}

/// Identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub username: String,
}

#[derive(Deserialize)]
struct LoginReply {
    user: AdminIdentity,
    token: String,
}

/// Talks to the content API. The bearer token lives only in this value.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    identity: Option<AdminIdentity>,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            identity: None,
        }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<AdminIdentity, AdminError> {
        let req = self
            .http
            .post(format!("{}/api/auth", self.base_url))
            .json(&serde_json::json!({ "username": username, "password": password }));
        let value = self.send(req).await?;
        let reply: LoginReply = serde_json::from_value(value).map_err(|e| AdminError::Decode(e.to_string()))?;
        info!(username = %reply.user.username, "admin logged in");
        self.token = Some(reply.token);
        self.identity = Some(reply.user.clone());
        Ok(reply.user)
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.identity = None;
    }

    pub fn identity(&self) -> Option<&AdminIdentity> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn editor(&self, collection: Collection) -> AdminEditor<'_> {
        AdminEditor { client: self, collection, records: Vec::new() }
    }

    fn request(&self, method: Method, collection: Collection) -> RequestBuilder {
        let req = self.http.request(method, format!("{}{}", self.base_url, collection.api_path()));
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Value, AdminError> {
        let res = req.send().await.map_err(|e| AdminError::Transport(e.to_string()))?;
        let status = res.status();
        let body = res.bytes().await.map_err(|e| AdminError::Transport(e.to_string()))?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(AdminError::Api { status: status.as_u16(), message });
        }
        serde_json::from_slice(&body).map_err(|e| AdminError::Decode(e.to_string()))
    }
}

/// Editor for one collection.
pub struct AdminEditor<'a> {
    client: &'a AdminClient,
    collection: Collection,
    records: Vec<Value>,
}

impl<'a> AdminEditor<'a> {
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Records as of the last refresh.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub async fn refresh(&mut self) -> Result<&[Value], AdminError> {
        let mut req = self.client.request(Method::GET, self.collection);
        if self.collection == Collection::Blog {
            req = req.query(&[("includeDrafts", "true")]);
        }
        let value = self.client.send(req).await?;
        self.records = match value {
            Value::Array(items) => items,
            _ => return Err(AdminError::Decode("expected a JSON array".into())),
        };
        debug!(collection = %self.collection, count = self.records.len(), "editor refreshed");
        Ok(&self.records)
    }

    pub async fn create(&mut self, fields: Value) -> Result<Value, AdminError> {
        let req = self.client.request(Method::POST, self.collection).json(&fields);
        let created = self.client.send(req).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Sends only `fields`. The version seen at the last refresh rides along
    /// so an edit made elsewhere in the meantime is reported, not overwritten.
    pub async fn update(&mut self, id: Uuid, fields: Value) -> Result<Value, AdminError> {
        let Value::Object(mut body) = fields else {
            return Err(AdminError::NotAnObject);
        };
        body.insert("id".into(), Value::String(id.to_string()));
        if !body.contains_key("version") {
            if let Some(v) = self.known_version(id) {
                body.insert("version".into(), v);
            }
        }
        let req = self.client.request(Method::PUT, self.collection).json(&body);
        let updated = self.client.send(req).await?;
        self.refresh().await?;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), AdminError> {
        let req = self
            .client
            .request(Method::DELETE, self.collection)
            .query(&[("id", id.to_string())]);
        self.client.send(req).await?;
        self.refresh().await?;
        Ok(())
    }

    fn known_version(&self, id: Uuid) -> Option<Value> {
        let id = id.to_string();
        self.records
            .iter()
            .filter_map(Value::as_object)
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
            .and_then(|r: &Map<String, Value>| r.get("version").cloned())
    }
}

/// Comma-separated form input to a list: trimmed, blanks dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(split_list("a, b,,c"), vec!["a", "b", "c"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn new_client_has_no_token() {
        let c = AdminClient::new("http://localhost:8080/");
        assert!(!c.is_logged_in());
        assert!(c.identity().is_none());
        assert_eq!(c.editor(Collection::Skills).records().len(), 0);
    }
}
