//! # Morph Manager
//!
//! Turns persisted data into live morphs. Morph families plug in as
//! [`MorphFactory`] implementations; the [`MorphManager`] composes them,
//! resolves a persisted record back to a morph, and names actors.
//!
//! ## Core Components
//!
//! - **registry**: The manager, the factory SPI and the render model table
//! - **config**: TOML morph catalogs
//! - **localization**: Key lookup with fallbacks
//! - **selection**: The category/cell view a morph picker is built on
//! - **vanilla**: The built-in creature morph family and its abilities
//!
//! ## Startup
//!
//! ```
//! use morph_manager::{MorphManager, VanillaFactory};
//!
//! let mut manager = MorphManager::new();
//! manager.add_factory(VanillaFactory::builtin().expect("built-in catalog parses"));
//! manager.register();
//!
//! assert!(manager.has_morph("Pig"));
//! assert!(!manager.has_morph("Unicorn"));
//! ```

pub mod config;
pub mod error;
pub mod localization;
pub mod registry;
pub mod selection;
pub mod vanilla;

pub use config::*;
pub use error::*;
pub use localization::*;
pub use registry::*;
pub use selection::*;
pub use vanilla::*;
