//! The morph factory SPI.

use morph_api::{Morph, MorphTag, Registry};

use super::ModelManager;

/// A provider of one family of morph variants.
///
/// New families plug into [`MorphManager`](super::MorphManager) through this
/// trait without the manager knowing their variants.
pub trait MorphFactory {
    /// Populate the ability, action and attack tables.
    fn register(&self, _registry: &mut Registry) {}

    /// Fill the active-settings table.
    ///
    /// Runs after every family's [`MorphFactory::register`], so settings may
    /// name capabilities contributed by any family.
    fn resolve_settings(&self, _registry: &mut Registry) {}

    /// Render-side setup, such as registering models.
    fn register_client(&self, _models: &mut ModelManager) {}

    /// Names this family is known to provide up front.
    ///
    /// Families whose names are open-ended may leave this empty and answer
    /// through [`MorphFactory::has_morph`] alone.
    fn morph_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn has_morph(&self, name: &str) -> bool;

    /// Materialize a morph from a persisted record this family claims.
    fn morph_from_tag(&self, tag: &MorphTag, registry: &Registry) -> Option<Box<dyn Morph>>;

    /// Fresh template instances of every morph in this family.
    fn morphs(&self, registry: &Registry) -> Vec<Box<dyn Morph>>;
}
