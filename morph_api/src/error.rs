//! Error types for the morph data model.

use thiserror::Error;

/// Errors raised while encoding or decoding persisted morph records.
///
/// Gameplay paths never produce these; they only surface when a host converts
/// tags to and from text.
#[derive(Debug, Error)]
pub enum MorphError {
    #[error("malformed morph record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("morph record must be a compound, found {found}")]
    NotACompound { found: &'static str },
}

pub type Result<T> = std::result::Result<T, MorphError>;
