//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Admin login against a stored argon2 hash, and HS256 bearer tokens for
//! privileged requests.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
