//! Tunable per-morph parameters.

use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::abilities::{Ability, Action, AttackAbility, Named, Registry};
use crate::tag::MorphTag;

/// Movement speed the host engine gives an unmorphed actor.
pub const DEFAULT_SPEED: f32 = 0.1;

/// Speed, abilities, action and attack attached to a morph.
///
/// Morphs without customization share one immutable default instance (see
/// [`MorphSettings::shared_default`]); a morph owns a private instance only
/// after it is customized.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphSettings {
    pub speed: f32,
    /// Ordered, without duplicates.
    pub abilities: Vec<Named<dyn Ability>>,
    pub action: Option<Named<dyn Action>>,
    pub attack: Option<Named<dyn AttackAbility>>,
}

impl Default for MorphSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            abilities: Vec::new(),
            action: None,
            attack: None,
        }
    }
}

impl MorphSettings {
    /// The process-wide default instance.
    pub fn shared_default() -> Arc<MorphSettings> {
        static DEFAULT: OnceLock<Arc<MorphSettings>> = OnceLock::new();
        Arc::clone(DEFAULT.get_or_init(|| Arc::new(MorphSettings::default())))
    }

    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Append an ability unless one with the same key is already attached.
    pub fn add_ability(&mut self, ability: Named<dyn Ability>) -> bool {
        if self.abilities.contains(&ability) {
            return false;
        }
        self.abilities.push(ability);
        true
    }

    pub fn is_default(&self) -> bool {
        *self == *Self::shared_default()
    }

    /// Write every field that differs from the default.
    pub fn to_tag(&self, tag: &mut MorphTag) {
        if self.speed != DEFAULT_SPEED {
            tag.set_float("Speed", self.speed);
        }

        if !self.abilities.is_empty() {
            tag.set_string_list("Abilities", self.abilities.iter().map(|a| a.name()));
        }

        if let Some(action) = &self.action {
            tag.set_string("Action", action.name());
        }

        if let Some(attack) = &self.attack {
            tag.set_string("Attack", attack.name());
        }
    }

    /// Read settings, resolving names through the registry.
    ///
    /// Unknown names are dropped with a warning; a save that references an
    /// ability that no longer exists still loads.
    pub fn from_tag(tag: &MorphTag, registry: &Registry) -> Self {
        let mut settings = Self::default();

        if let Some(speed) = tag.float("Speed").filter(|s| s.is_finite()) {
            settings.speed = speed;
        }

        for name in tag.get_string_list("Abilities") {
            match registry.ability(&name) {
                Some(ability) => {
                    settings.add_ability(ability);
                }
                None => warn!(ability = %name, "skipping unknown ability in morph settings"),
            }
        }

        if tag.has_key("Action") {
            let name = tag.get_string("Action");
            settings.action = registry.action(&name);
            if settings.action.is_none() {
                warn!(action = %name, "skipping unknown action in morph settings");
            }
        }

        if tag.has_key("Attack") {
            let name = tag.get_string("Attack");
            settings.attack = registry.attack(&name);
            if settings.attack.is_none() {
                warn!(attack = %name, "skipping unknown attack in morph settings");
            }
        }

        settings
    }
}
