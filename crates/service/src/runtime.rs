//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Warn about a missing static asset directory.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(static_dir).await
}
