pub mod migrations;
pub mod repository;

use thiserror::Error;

/// Store failures are a distinct condition: a failed query must never be
/// observable as "zero records".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
    #[error("corrupt row in {table}: {detail}")]
    Corrupt { table: &'static str, detail: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
