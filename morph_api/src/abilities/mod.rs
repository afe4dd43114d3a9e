//! Pluggable capability units invoked through a morph's settings.
//!
//! - **Ability**: runs every simulation tick while morphed, plus once at each
//!   morph/demorph boundary
//! - **Action**: runs on an explicit "use ability" input
//! - **AttackAbility**: runs on an explicit "use attack" input against a target
//!
//! Callers only ever reach these through [`MorphSettings`](crate::MorphSettings),
//! never by inspecting the concrete type.

mod registry;

pub use registry::*;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::actor::Actor;
use crate::morphs::Morph;

/// Per-tick behavior attached to a morph.
pub trait Ability: Send + Sync {
    fn update(&self, _actor: &mut dyn Actor) {}

    fn on_morph(&self, _actor: &mut dyn Actor) {}

    fn on_demorph(&self, _actor: &mut dyn Actor) {}
}

/// Behavior triggered by the "use ability" input, at most once per input.
pub trait Action: Send + Sync {
    fn execute(&self, actor: &mut dyn Actor, morph: &dyn Morph);
}

/// Behavior triggered by the "use attack" input on a resolved target.
pub trait AttackAbility: Send + Sync {
    fn attack(&self, target: &mut dyn Actor, source: &mut dyn Actor);
}

/// A handler together with the registry key it was resolved from.
///
/// Equality and persistence go through the key, so two settings that name the
/// same registered ability compare equal.
pub struct Named<T: ?Sized> {
    name: String,
    handler: Arc<T>,
}

impl<T: ?Sized> Named<T> {
    pub fn new(name: impl Into<String>, handler: Arc<T>) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: ?Sized> Clone for Named<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T: ?Sized> Deref for Named<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.handler
    }
}

impl<T: ?Sized> PartialEq for Named<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: ?Sized> fmt::Debug for Named<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.name)
    }
}
