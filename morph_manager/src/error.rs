//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading a morph catalog.
///
/// These only occur at startup; once a catalog is loaded, lookups degrade to
/// "no morph" instead of failing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid morph catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("morph '{name}' has invalid dimensions {width}x{height}")]
    InvalidDimensions { name: String, width: f32, height: f32 },

    #[error("morph '{name}' has invalid speed {speed}")]
    InvalidSpeed { name: String, speed: f32 },

    #[error("morph '{name}' is listed more than once")]
    DuplicateMorph { name: String },

    #[error("morph catalog entry has an empty name")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
