use thiserror::Error;

pub mod types;
pub mod utils;
pub mod env;

pub use types::Collection;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
}
