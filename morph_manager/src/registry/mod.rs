//! The morph manager - composes factories and resolves morphs by name.

mod factory;
mod models;

pub use factory::*;
pub use models::*;

use std::collections::HashMap;
use std::fmt;

use morph_api::{Actor, Morph, MorphTag, Registry, SkeletonType};
use tracing::{debug, warn};

use crate::localization::Localizer;

/// Canonical name of the wither skeleton, which the host only exposes as a
/// skeleton subtype.
pub const WITHER_SKELETON: &str = "WitherSkeleton";

/// Registry of morph families plus the ability tables they populate.
///
/// Constructed once at startup and passed to whoever needs it. Factories are
/// kept in registration order; when two factories claim the same name, the one
/// registered last wins.
#[derive(Default)]
pub struct MorphManager {
    registry: Registry,
    factories: Vec<Box<dyn MorphFactory>>,
    /// Name -> index of the last factory that listed it up front.
    claims: HashMap<String, usize>,
    models: ModelManager,
}

impl MorphManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a morph family. Later families take precedence over earlier ones.
    pub fn add_factory(&mut self, factory: impl MorphFactory + 'static) {
        let index = self.factories.len();

        for name in factory.morph_names() {
            self.claims.insert(name, index);
        }

        self.factories.push(Box::new(factory));
        debug!(factory = index, claims = self.claims.len(), "added morph factory");
    }

    /// Run every factory's registration hook, newest first, then resolve
    /// active settings oldest first so the newest family's settings win.
    pub fn register(&mut self) {
        for factory in self.factories.iter().rev() {
            factory.register(&mut self.registry);
        }
        for factory in &self.factories {
            factory.resolve_settings(&mut self.registry);
        }
        debug!(registry = ?self.registry, "registered morph factories");
    }

    /// Run every factory's render-side registration hook, newest first.
    pub fn register_client(&mut self) {
        for factory in self.factories.iter().rev() {
            factory.register_client(&mut self.models);
        }
        debug!(models = self.models.len(), "registered morph models");
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable tables, for per-name settings overrides after startup.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn models(&self) -> &ModelManager {
        &self.models
    }

    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    /// The factory responsible for `name`: the last registered one that claims it.
    fn factory_for(&self, name: &str) -> Option<&dyn MorphFactory> {
        let listed = self.claims.get(name).copied();
        let newer = listed.map_or(0, |index| index + 1);

        self.factories[newer..]
            .iter()
            .rev()
            .find(|factory| factory.has_morph(name))
            .or_else(|| listed.map(|index| &self.factories[index]))
            .map(|factory| factory.as_ref())
    }

    pub fn has_morph(&self, name: &str) -> bool {
        self.factory_for(name).is_some()
    }

    /// Materialize a persisted morph.
    ///
    /// Returns `None` for names no family claims; callers treat that as
    /// "no morph applied". A record without a name reads as the empty name
    /// and ends up here too.
    pub fn morph_from_tag(&self, tag: &MorphTag) -> Option<Box<dyn Morph>> {
        let name = tag.get_string("Name");

        match self.factory_for(&name) {
            Some(factory) => factory.morph_from_tag(tag, &self.registry),
            None => {
                warn!(morph = %name, "unknown morph in persisted data");
                None
            }
        }
    }

    /// Persist a morph against this manager's tables.
    pub fn morph_to_tag(&self, morph: &dyn Morph) -> MorphTag {
        morph.to_tag(&self.registry)
    }

    /// Every family's templates, newest family first.
    ///
    /// Each call builds fresh instances.
    pub fn all_morphs(&self) -> Vec<Box<dyn Morph>> {
        self.factories
            .iter()
            .rev()
            .flat_map(|factory| factory.morphs(&self.registry))
            .collect()
    }

    /// Canonical morph name for an actor.
    pub fn morph_name_from_actor(&self, actor: &dyn Actor) -> String {
        if actor.skeleton_type() == Some(SkeletonType::Wither) {
            return WITHER_SKELETON.to_owned();
        }

        actor.entity_type()
    }

    /// Localized display name for a morph name. Render-side only.
    ///
    /// Looks up `entity.<name>.name`; a miss yields `name` unchanged.
    pub fn morph_display_name_from_name(&self, name: &str, localizer: &dyn Localizer) -> String {
        let entity = if name == WITHER_SKELETON {
            "Skeleton"
        } else {
            name
        };

        let key = format!("entity.{entity}.name");
        let result = localizer.translate(&key, &[]);

        if result == key {
            name.to_owned()
        } else {
            result
        }
    }
}

impl fmt::Debug for MorphManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphManager")
            .field("registry", &self.registry)
            .field("factories", &self.factories.len())
            .field("claims", &self.claims.len())
            .field("models", &self.models)
            .finish()
    }
}
