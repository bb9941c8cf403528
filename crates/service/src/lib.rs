//! Service layer between the HTTP handlers and the `models` crate.
//! - `content`: one `ContentResource` per collection, driven generically by the server.
//! - `auth`: admin login and bearer tokens (domain, repository, service).
//! - `seed`: first-run data.

pub mod errors;
pub mod content;
pub mod auth;
pub mod seed;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use content::{ContentResource, ListScope};
pub use errors::ServiceError;
