//! Handlers shared by every `/api/<collection>` resource.

use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use service::content::{self, ContentResource, ListScope};
use service::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::{JsonBody, JsonQuery};
use crate::routes::auth::ServerState;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub success: bool,
}

/// `includeDrafts=true` (or `1`) anywhere in a query string.
pub fn wants_drafts(query: Option<&str>) -> bool {
    query
        .unwrap_or("")
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(k, v)| k == "includeDrafts" && (v == "true" || v == "1"))
}

fn parse_id(raw: Option<&str>) -> Result<Uuid, JsonApiError> {
    match raw.map(str::trim) {
        None | Some("") => Err(JsonApiError::bad_request("ID required")),
        Some(s) => Uuid::parse_str(s).map_err(|_| JsonApiError::bad_request("Invalid ID")),
    }
}

/// Map a service failure onto the wire. Store errors are logged with their
/// detail and answered with `Failed to <verb> <noun>`.
fn reject<R: ContentResource>(err: ServiceError, verb: &str) -> JsonApiError {
    let c = R::COLLECTION;
    match err {
        ServiceError::Validation(msg) => JsonApiError::bad_request(msg),
        e @ ServiceError::NotFound(_) => JsonApiError::not_found(e.to_string()),
        e @ ServiceError::Conflict(_) => JsonApiError::conflict(e.to_string()),
        ServiceError::Db(detail) => {
            error!(collection = %c, verb, %detail, "content store failure");
            let noun = if verb == "fetch" { c.plural() } else { c.singular() };
            JsonApiError::internal(format!("Failed to {verb} {noun}"))
        }
    }
}

/// `GET /api/<collection>`
pub async fn list<R: ContentResource>(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<R::Record>>, JsonApiError> {
    let scope = ListScope { include_drafts: wants_drafts(query.as_deref()) };
    content::list::<R>(&state.db, scope)
        .await
        .map(Json)
        .map_err(|e| reject::<R>(e, "fetch"))
}

/// `POST /api/<collection>`
pub async fn create<R: ContentResource>(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<R::Input>,
) -> Result<Json<R::Record>, JsonApiError> {
    content::create::<R>(&state.db, input)
        .await
        .map(Json)
        .map_err(|e| reject::<R>(e, "create"))
}

/// `PUT /api/<collection>` with `id`, an optional `version` and any subset
/// of fields in the body.
pub async fn update<R: ContentResource>(
    State(state): State<ServerState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<R::Record>, JsonApiError> {
    let Value::Object(mut fields) = body else {
        return Err(JsonApiError::bad_request("Expected a JSON object"));
    };
    let id = match fields.remove("id") {
        None | Some(Value::Null) => return Err(JsonApiError::bad_request("ID required")),
        Some(Value::String(s)) => parse_id(Some(&s))?,
        Some(_) => return Err(JsonApiError::bad_request("Invalid ID")),
    };
    let expected_version = match fields.remove("version") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            v.as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| JsonApiError::bad_request("version must be an integer"))?,
        ),
    };
    // server-managed columns are not patchable
    for key in ["createdAt", "updatedAt"] {
        fields.remove(key);
    }
    let patch: R::Patch =
        serde_json::from_value(Value::Object(fields)).map_err(|e| JsonApiError::bad_request(e.to_string()))?;
    content::update::<R>(&state.db, id, patch, expected_version)
        .await
        .map(Json)
        .map_err(|e| reject::<R>(e, "update"))
}

/// `DELETE /api/<collection>?id=<uuid>`
pub async fn remove<R: ContentResource>(
    State(state): State<ServerState>,
    JsonQuery(q): JsonQuery<IdQuery>,
) -> Result<Json<DeleteOutput>, JsonApiError> {
    let id = parse_id(q.id.as_deref())?;
    content::delete::<R>(&state.db, id)
        .await
        .map_err(|e| reject::<R>(e, "delete"))?;
    Ok(Json(DeleteOutput { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_flag_parsing() {
        assert!(wants_drafts(Some("includeDrafts=true")));
        assert!(wants_drafts(Some("x=1&includeDrafts=1")));
        assert!(!wants_drafts(Some("includeDrafts=false")));
        assert!(!wants_drafts(Some("includeDrafts")));
        assert!(!wants_drafts(None));
    }

    #[test]
    fn id_parsing() {
        assert_eq!(parse_id(None).unwrap_err().message, "ID required");
        assert_eq!(parse_id(Some("  ")).unwrap_err().message, "ID required");
        assert_eq!(parse_id(Some("42")).unwrap_err().message, "Invalid ID");
        let id = Uuid::new_v4();
        assert_eq!(parse_id(Some(&id.to_string())).unwrap(), id);
    }
}
