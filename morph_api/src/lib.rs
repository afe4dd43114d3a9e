//! # Morph API
//!
//! The data model every morph family builds on. This crate knows nothing about
//! which morphs exist; it defines what a morph *is* and how it acts on a living
//! actor each tick.
//!
//! ## Core Components
//!
//! - **actor**: The host engine's living entity, consumed through a trait
//! - **tag**: Sparse compound records used to persist morphs
//! - **abilities**: Ability, action and attack contracts plus the name-keyed registry
//! - **settings**: Tunable per-morph parameters with a shared immutable default
//! - **morphs**: The morph contract and its default per-tick pipeline

pub mod abilities;
pub mod actor;
pub mod error;
pub mod morphs;
pub mod settings;
pub mod tag;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use abilities::*;
pub use actor::*;
pub use error::*;
pub use morphs::*;
pub use settings::*;
pub use tag::*;
