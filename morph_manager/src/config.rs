//! TOML morph catalogs.
//!
//! A catalog lists the creatures a morph family offers:
//!
//! ```toml
//! [[morph]]
//! name = "Blaze"
//! category = "hostile"
//! width = 0.6
//! height = 1.8
//! hurt_sound = "entity.blaze.hurt"
//!
//! [morph.settings]
//! speed = 0.12
//! abilities = ["fire_proof", "slow_fall"]
//! attack = "ignite"
//! ```

use std::collections::HashSet;

use morph_api::{MorphSettings, Registry};
use serde::Deserialize;
use tracing::warn;

use crate::error::{ConfigError, Result};

/// The catalog shipped with the vanilla morph family.
const BUILTIN_CATALOG: &str = include_str!("vanilla/catalog.toml");

/// An ordered list of morph definitions.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MorphCatalog {
    #[serde(default, rename = "morph")]
    pub morphs: Vec<CatalogEntry>,
}

/// One creature morph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub width: f32,
    pub height: f32,
    /// Render model key; defaults to the morph name.
    pub model: Option<String>,
    pub texture: Option<String>,
    pub hurt_sound: Option<String>,
    pub death_sound: Option<String>,
    pub step_sound: Option<String>,
    pub settings: Option<SettingsEntry>,
}

impl CatalogEntry {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(&self.name)
    }
}

/// Settings by registered name, resolved against a [`Registry`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsEntry {
    pub speed: Option<f32>,
    #[serde(default)]
    pub abilities: Vec<String>,
    pub action: Option<String>,
    pub attack: Option<String>,
}

impl SettingsEntry {
    /// Build settings, skipping names the registry does not know.
    pub fn resolve(&self, registry: &Registry) -> MorphSettings {
        let mut settings = MorphSettings::default();

        if let Some(speed) = self.speed {
            settings.speed = speed;
        }

        for name in &self.abilities {
            match registry.ability(name) {
                Some(ability) => {
                    settings.add_ability(ability);
                }
                None => warn!(ability = %name, "catalog references unknown ability"),
            }
        }

        if let Some(name) = &self.action {
            settings.action = registry.action(name);
            if settings.action.is_none() {
                warn!(action = %name, "catalog references unknown action");
            }
        }

        if let Some(name) = &self.attack {
            settings.attack = registry.attack(name);
            if settings.attack.is_none() {
                warn!(attack = %name, "catalog references unknown attack");
            }
        }

        settings
    }
}

impl MorphCatalog {
    /// Parse and validate a catalog.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let catalog: MorphCatalog = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog embedded in this crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.morphs.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.morphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphs.is_empty()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for entry in &self.morphs {
            if entry.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }

            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateMorph {
                    name: entry.name.clone(),
                });
            }

            let valid = |v: f32| v.is_finite() && v > 0.0;
            if !valid(entry.width) || !valid(entry.height) {
                return Err(ConfigError::InvalidDimensions {
                    name: entry.name.clone(),
                    width: entry.width,
                    height: entry.height,
                });
            }

            if let Some(speed) = entry.settings.as_ref().and_then(|s| s.speed) {
                if !speed.is_finite() || speed < 0.0 {
                    return Err(ConfigError::InvalidSpeed {
                        name: entry.name.clone(),
                        speed,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_api::Ability;

    struct Noop;

    impl Ability for Noop {}

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = MorphCatalog::builtin().unwrap();

        assert!(catalog.len() > 10);
        assert!(catalog.entry("Pig").is_some());
        assert!(catalog.entry("WitherSkeleton").is_some());
        assert_eq!(catalog.entry("Pig").unwrap().model(), "Pig");
    }

    #[test]
    fn test_parse_entry() {
        let catalog = MorphCatalog::from_toml_str(
            r#"
            [[morph]]
            name = "Blaze"
            category = "hostile"
            width = 0.6
            height = 1.8
            model = "blaze"
            hurt_sound = "entity.blaze.hurt"

            [morph.settings]
            speed = 0.12
            abilities = ["fire_proof"]
            attack = "ignite"
            "#,
        )
        .unwrap();

        let blaze = catalog.entry("Blaze").unwrap();
        assert_eq!(blaze.category, "hostile");
        assert_eq!(blaze.model(), "blaze");
        assert_eq!(blaze.hurt_sound.as_deref(), Some("entity.blaze.hurt"));
        assert!(blaze.death_sound.is_none());

        let settings = blaze.settings.as_ref().unwrap();
        assert_eq!(settings.speed, Some(0.12));
        assert_eq!(settings.abilities, vec!["fire_proof"]);
        assert_eq!(settings.attack.as_deref(), Some("ignite"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MorphCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = MorphCatalog::from_toml_str(
            r#"
            [[morph]]
            name = "Ghost"
            width = 0.0
            height = 1.0
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDimensions { name, .. } if name == "Ghost"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MorphCatalog::from_toml_str(
            r#"
            [[morph]]
            name = "Pig"
            width = 0.9
            height = 0.9

            [[morph]]
            name = "Pig"
            width = 1.0
            height = 1.0
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateMorph { name } if name == "Pig"));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = MorphCatalog::from_toml_str(
            r#"
            [[morph]]
            name = "Snail"
            width = 0.5
            height = 0.5
            settings = { speed = -1.0 }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidSpeed { .. }));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = MorphCatalog::from_toml_str(
            r#"
            [[morph]]
            name = "Pig"
            width = 0.9
            height = 0.9
            health = 10
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_resolve_skips_unknown_names() {
        let mut registry = Registry::new();
        registry.register_ability("jumping", Noop);

        let entry = SettingsEntry {
            speed: Some(0.2),
            abilities: vec!["jumping".into(), "flying".into()],
            action: Some("explode".into()),
            attack: None,
        };
        let settings = entry.resolve(&registry);

        assert_eq!(settings.speed, 0.2);
        assert_eq!(settings.abilities.len(), 1);
        assert!(settings.action.is_none());
    }
}
