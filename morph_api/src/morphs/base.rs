//! Identity and settings shared by every morph variant.

use std::sync::Arc;

use crate::abilities::Registry;
use crate::settings::MorphSettings;
use crate::tag::MorphTag;

/// The part of a morph every variant carries: who it is and how it behaves.
///
/// Settings are held behind an [`Arc`]. Untouched morphs point at the shared
/// default (or their family's active settings); [`MorphBase::settings_mut`]
/// detaches a private copy before the first write, so a customized morph never
/// mutates settings another morph can see.
#[derive(Debug, Clone)]
pub struct MorphBase {
    /// Stable key used for lookup, equality and persistence.
    pub name: String,
    pub display_name: Option<String>,
    pub favorite: bool,
    pub keybind: Option<u32>,
    settings: Arc<MorphSettings>,
}

impl Default for MorphBase {
    fn default() -> Self {
        Self::new("")
    }
}

impl MorphBase {
    /// Create a morph identity using the shared default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, MorphSettings::shared_default())
    }

    pub fn with_settings(name: impl Into<String>, settings: Arc<MorphSettings>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            favorite: false,
            keybind: None,
            settings,
        }
    }

    pub fn settings(&self) -> &MorphSettings {
        &self.settings
    }

    pub fn settings_handle(&self) -> &Arc<MorphSettings> {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Arc<MorphSettings>) {
        self.settings = settings;
    }

    /// Mutable settings, copied out of any shared instance first.
    pub fn settings_mut(&mut self) -> &mut MorphSettings {
        Arc::make_mut(&mut self.settings)
    }

    /// Whether the settings carry anything worth persisting.
    ///
    /// False when they equal the global default or the registry's active
    /// settings for this morph's name.
    pub fn has_custom_settings(&self, registry: &Registry) -> bool {
        if self.settings.is_default() {
            return false;
        }

        match registry.active_settings(&self.name) {
            Some(active) => *self.settings != **active,
            None => true,
        }
    }

    fn has_active_override(&self, registry: &Registry) -> bool {
        registry
            .active_settings(&self.name)
            .is_some_and(|active| !active.is_default())
    }

    /// Transfer identity and settings from another morph.
    pub fn copy_from(&mut self, from: &MorphBase) {
        self.name = from.name.clone();
        self.display_name = from.display_name.clone();
        self.favorite = from.favorite;
        self.keybind = from.keybind;
        self.settings = Arc::clone(&from.settings);
    }

    /// Structural identity: name, display name and settings.
    pub fn same_identity(&self, other: &MorphBase) -> bool {
        self.name == other.name
            && self.display_name == other.display_name
            && *self.settings == *other.settings
    }

    /// Write the sparse identity record.
    pub fn write_tag(&self, tag: &mut MorphTag, registry: &Registry) {
        tag.set_string("Name", self.name.as_str());

        if self.has_custom_settings(registry) {
            let mut settings = MorphTag::new();
            self.settings.to_tag(&mut settings);

            if !settings.is_empty() {
                tag.set_compound("Settings", settings);
            }
        } else if self.settings.is_default() && self.has_active_override(registry) {
            // Without a record the reader would fall back to the active settings.
            tag.set_compound("Settings", MorphTag::new());
        }

        if let Some(display_name) = self.display_name.as_deref().filter(|s| !s.is_empty()) {
            tag.set_string("DisplayName", display_name);
        }

        if self.favorite {
            tag.set_bool("Favorite", true);
        }

        if let Some(keybind) = self.keybind {
            tag.set_long("Keybind", i64::from(keybind));
        }
    }

    /// Read the identity record; absent fields keep their current value.
    pub fn read_tag(&mut self, tag: &MorphTag, registry: &Registry) {
        self.name = tag.get_string("Name");

        if tag.has_key("Settings") {
            let settings = MorphSettings::from_tag(&tag.get_compound("Settings"), registry);
            self.settings = Arc::new(settings);
        }

        if tag.has_key("DisplayName") {
            self.display_name = Some(tag.get_string("DisplayName")).filter(|s| !s.is_empty());
        }

        if tag.has_key("Favorite") {
            self.favorite = tag.get_bool("Favorite");
        }

        if tag.has_key("Keybind") {
            self.keybind = tag.long("Keybind").and_then(|k| u32::try_from(k).ok());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_morph_is_not_custom() {
        let registry = Registry::new();
        let base = MorphBase::new("Pig");

        assert!(!base.has_custom_settings(&registry));
        assert!(Arc::ptr_eq(
            base.settings_handle(),
            &MorphSettings::shared_default()
        ));
    }

    #[test]
    fn test_distinct_settings_are_custom() {
        let registry = Registry::new();
        let mut base = MorphBase::new("Pig");
        base.set_settings(Arc::new(MorphSettings::with_speed(0.3)));

        assert!(base.has_custom_settings(&registry));
    }

    #[test]
    fn test_active_settings_are_not_custom() {
        let mut registry = Registry::new();
        registry.set_active_settings("Pig", MorphSettings::with_speed(0.3));

        let base = MorphBase::with_settings("Pig", registry.settings_for("Pig"));
        assert!(!base.has_custom_settings(&registry));

        let other = MorphBase::with_settings("Cow", registry.settings_for("Pig"));
        assert!(other.has_custom_settings(&registry));
    }

    #[test]
    fn test_settings_mut_detaches_from_default() {
        let mut base = MorphBase::new("Pig");
        base.settings_mut().speed = 0.4;

        assert_eq!(base.settings().speed, 0.4);
        assert!(MorphSettings::shared_default().is_default());
        assert_eq!(MorphSettings::shared_default().speed, 0.1);
    }

    #[test]
    fn test_minimal_record() {
        let registry = Registry::new();
        let mut tag = MorphTag::new();
        MorphBase::new("Pig").write_tag(&mut tag, &registry);

        assert_eq!(tag.keys().collect::<Vec<_>>(), vec!["Name"]);
        assert_eq!(tag.get_string("Name"), "Pig");
    }

    #[test]
    fn test_full_record() {
        let registry = Registry::new();
        let mut base = MorphBase::new("Pig");
        base.display_name = Some("Bacon".into());
        base.favorite = true;
        base.keybind = Some(3);
        base.settings_mut().speed = 0.2;

        let mut tag = MorphTag::new();
        base.write_tag(&mut tag, &registry);

        assert_eq!(tag.len(), 5);
        assert_eq!(tag.get_string("DisplayName"), "Bacon");
        assert!(tag.get_bool("Favorite"));
        assert_eq!(tag.get_int("Keybind"), 3);

        let mut read = MorphBase::default();
        read.read_tag(&tag, &registry);
        assert!(read.same_identity(&base));
        assert!(read.favorite);
        assert_eq!(read.keybind, Some(3));
    }

    #[test]
    fn test_default_over_active_settings_round_trips() {
        let mut registry = Registry::new();
        registry.set_active_settings("Pig", MorphSettings::with_speed(0.3));

        let mut base = MorphBase::new("Pig");
        base.settings_mut();
        assert!(!base.has_custom_settings(&registry));

        let mut tag = MorphTag::new();
        base.write_tag(&mut tag, &registry);
        assert!(tag.has_key("Settings"));
        assert!(tag.get_compound("Settings").is_empty());

        let mut read = MorphBase::with_settings("Pig", registry.settings_for("Pig"));
        read.read_tag(&tag, &registry);
        assert!(read.settings().is_default());
    }

    #[test]
    fn test_large_keybind_round_trips() {
        let registry = Registry::new();
        let mut base = MorphBase::new("Pig");
        base.keybind = Some(u32::MAX);

        let mut tag = MorphTag::new();
        base.write_tag(&mut tag, &registry);

        let mut read = MorphBase::new("");
        read.read_tag(&tag, &registry);
        assert_eq!(read.keybind, Some(u32::MAX));
    }

    #[test]
    fn test_mistyped_keybind_reads_as_unset() {
        let registry = Registry::new();
        let tag = MorphTag::from_json_str(r#"{"Name": "Pig", "Keybind": "F4"}"#).unwrap();

        let mut base = MorphBase::new("");
        base.keybind = Some(7);
        base.read_tag(&tag, &registry);
        assert_eq!(base.keybind, None);
    }

    #[test]
    fn test_missing_name_reads_as_empty() {
        let registry = Registry::new();
        let mut base = MorphBase::new("Pig");
        base.read_tag(&MorphTag::new(), &registry);

        assert_eq!(base.name, "");
    }

    #[test]
    fn test_negative_keybind_reads_as_unset() {
        let registry = Registry::new();
        let mut tag = MorphTag::new();
        tag.set_string("Name", "Pig");
        tag.set_int("Keybind", -1);

        let mut base = MorphBase::new("");
        base.keybind = Some(7);
        base.read_tag(&tag, &registry);
        assert_eq!(base.keybind, None);
    }
}
