//! The built-in creature morph family.

mod abilities;
mod morph;

pub use abilities::*;
pub use morph::*;

use morph_api::{Morph, MorphTag, Registry};
use tracing::debug;

use crate::config::{CatalogEntry, MorphCatalog};
use crate::error::Result;
use crate::registry::{ModelInfo, ModelManager, MorphFactory};

/// Produces [`EntityMorph`]s for every creature in a catalog.
#[derive(Debug, Clone)]
pub struct VanillaFactory {
    catalog: MorphCatalog,
}

impl VanillaFactory {
    pub fn new(catalog: MorphCatalog) -> Self {
        Self { catalog }
    }

    /// A factory over the embedded catalog.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(MorphCatalog::builtin()?))
    }

    pub fn catalog(&self) -> &MorphCatalog {
        &self.catalog
    }

    fn template(&self, entry: &CatalogEntry, registry: &Registry) -> EntityMorph {
        EntityMorph::from_entry(entry, registry.settings_for(&entry.name))
    }
}

impl MorphFactory for VanillaFactory {
    fn register(&self, registry: &mut Registry) {
        register_vanilla_capabilities(registry);
        debug!(morphs = self.catalog.len(), "registered vanilla morphs");
    }

    fn resolve_settings(&self, registry: &mut Registry) {
        for entry in &self.catalog.morphs {
            if let Some(settings) = &entry.settings {
                let resolved = settings.resolve(registry);
                registry.set_active_settings(entry.name.as_str(), resolved);
            }
        }
    }

    fn register_client(&self, models: &mut ModelManager) {
        for entry in &self.catalog.morphs {
            let mut info = ModelInfo::new(entry.model());
            info.texture = entry.texture.clone();
            models.register(entry.name.as_str(), info);
        }
    }

    fn morph_names(&self) -> Vec<String> {
        self.catalog
            .morphs
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    fn has_morph(&self, name: &str) -> bool {
        self.catalog.entry(name).is_some()
    }

    fn morph_from_tag(&self, tag: &MorphTag, registry: &Registry) -> Option<Box<dyn Morph>> {
        let entry = self.catalog.entry(&tag.get_string("Name"))?;
        let mut morph: Box<dyn Morph> = Box::new(self.template(entry, registry));
        morph.from_tag(tag, registry);
        Some(morph)
    }

    fn morphs(&self, registry: &Registry) -> Vec<Box<dyn Morph>> {
        self.catalog
            .morphs
            .iter()
            .map(|entry| Box::new(self.template(entry, registry)) as Box<dyn Morph>)
            .collect()
    }
}
