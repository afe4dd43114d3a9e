//! Name-keyed tables of abilities, actions, attacks and active settings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Ability, Action, AttackAbility, Named};
use crate::settings::MorphSettings;

/// Lookup tables populated by morph factories during registration.
///
/// Keys are unique and case-sensitive; registering a key twice replaces the
/// earlier entry. The active-settings table holds the shared per-name settings
/// a morph family hands to its templates, so that those templates do not count
/// as customized when persisted.
#[derive(Default)]
pub struct Registry {
    abilities: HashMap<String, Arc<dyn Ability>>,
    actions: HashMap<String, Arc<dyn Action>>,
    attacks: HashMap<String, Arc<dyn AttackAbility>>,
    active_settings: HashMap<String, Arc<MorphSettings>>,
}

impl Registry {
    /// Create empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_ability(&mut self, name: impl Into<String>, ability: impl Ability + 'static) {
        self.abilities.insert(name.into(), Arc::new(ability));
    }

    pub fn register_action(&mut self, name: impl Into<String>, action: impl Action + 'static) {
        self.actions.insert(name.into(), Arc::new(action));
    }

    pub fn register_attack(
        &mut self,
        name: impl Into<String>,
        attack: impl AttackAbility + 'static,
    ) {
        self.attacks.insert(name.into(), Arc::new(attack));
    }

    /// Set the shared settings for every morph with the given name.
    pub fn set_active_settings(&mut self, morph_name: impl Into<String>, settings: MorphSettings) {
        self.active_settings
            .insert(morph_name.into(), Arc::new(settings));
    }

    pub fn ability(&self, name: &str) -> Option<Named<dyn Ability>> {
        self.abilities
            .get(name)
            .map(|handler| Named::new(name, Arc::clone(handler)))
    }

    pub fn action(&self, name: &str) -> Option<Named<dyn Action>> {
        self.actions
            .get(name)
            .map(|handler| Named::new(name, Arc::clone(handler)))
    }

    pub fn attack(&self, name: &str) -> Option<Named<dyn AttackAbility>> {
        self.attacks
            .get(name)
            .map(|handler| Named::new(name, Arc::clone(handler)))
    }

    /// Shared settings for a morph name, if its family registered any.
    pub fn active_settings(&self, morph_name: &str) -> Option<&Arc<MorphSettings>> {
        self.active_settings.get(morph_name)
    }

    /// Active settings for a morph name, falling back to the global default.
    pub fn settings_for(&self, morph_name: &str) -> Arc<MorphSettings> {
        self.active_settings(morph_name)
            .cloned()
            .unwrap_or_else(MorphSettings::shared_default)
    }

    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn has_attack(&self, name: &str) -> bool {
        self.attacks.contains_key(name)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut abilities: Vec<_> = self.abilities.keys().collect();
        let mut actions: Vec<_> = self.actions.keys().collect();
        let mut attacks: Vec<_> = self.attacks.keys().collect();
        abilities.sort();
        actions.sort();
        attacks.sort();

        f.debug_struct("Registry")
            .field("abilities", &abilities)
            .field("actions", &actions)
            .field("attacks", &attacks)
            .field("active_settings", &self.active_settings.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;

    struct Noop;

    impl Ability for Noop {}

    struct Shove;

    impl AttackAbility for Shove {
        fn attack(&self, target: &mut dyn Actor, _source: &mut dyn Actor) {
            target.set_velocity(glam::Vec3::X);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.register_ability("jumping", Noop);

        assert!(registry.ability("jumping").is_some());
        assert!(registry.ability("Jumping").is_none());
        assert!(registry.has_ability("jumping"));
        assert!(!registry.has_action("jumping"));
    }

    #[test]
    fn test_resolved_handle_keeps_key() {
        let mut registry = Registry::new();
        registry.register_attack("shove", Shove);

        let attack = registry.attack("shove").unwrap();
        assert_eq!(attack.name(), "shove");
        assert_eq!(attack, registry.attack("shove").unwrap());
    }

    #[test]
    fn test_settings_for_falls_back_to_default() {
        let mut registry = Registry::new();
        registry.set_active_settings("Pig", MorphSettings::with_speed(0.25));

        assert!(Arc::ptr_eq(
            &registry.settings_for("Cow"),
            &MorphSettings::shared_default()
        ));
        assert_eq!(registry.settings_for("Pig").speed, 0.25);
        assert!(Arc::ptr_eq(
            &registry.settings_for("Pig"),
            registry.active_settings("Pig").unwrap()
        ));
    }
}
