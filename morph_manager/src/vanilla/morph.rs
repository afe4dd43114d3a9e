//! Creature morphs.

use std::any::Any;
use std::sync::Arc;

use glam::Vec3;
use morph_api::{
    Actor, DamageSource, Morph, MorphBase, MorphSettings, MorphTag, Registry, RenderHost,
    SoundEvent,
};

use crate::config::CatalogEntry;

const STEP_VOLUME: f32 = 0.15;

/// A morph into one of the host's creatures.
///
/// Body, model and sounds come from the catalog. `entity_data` is
/// per-instance creature state (e.g. a sheep's wool color) that travels with
/// the morph through clones and saves.
#[derive(Debug, Clone, Default)]
pub struct EntityMorph {
    pub base: MorphBase,
    pub category: String,
    pub model: String,
    pub width: f32,
    pub height: f32,
    pub hurt_sound: Option<SoundEvent>,
    pub death_sound: Option<SoundEvent>,
    pub step_sound: Option<SoundEvent>,
    pub entity_data: MorphTag,
}

impl EntityMorph {
    /// A template for a catalog entry using the given settings.
    pub fn from_entry(entry: &CatalogEntry, settings: Arc<MorphSettings>) -> Self {
        Self {
            base: MorphBase::with_settings(entry.name.as_str(), settings),
            category: entry.category.clone(),
            model: entry.model().to_owned(),
            width: entry.width,
            height: entry.height,
            hurt_sound: entry.hurt_sound.as_deref().map(SoundEvent::new),
            death_sound: entry.death_sound.as_deref().map(SoundEvent::new),
            step_sound: entry.step_sound.as_deref().map(SoundEvent::new),
            entity_data: MorphTag::new(),
        }
    }
}

impl Morph for EntityMorph {
    fn base(&self) -> &MorphBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MorphBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn create(&self, _is_remote: bool) -> Box<dyn Morph> {
        Box::new(EntityMorph::default())
    }

    fn copy_from(&mut self, from: &dyn Morph, _is_remote: bool) {
        self.base.copy_from(from.base());

        if let Some(from) = from.downcast_ref::<EntityMorph>() {
            self.category = from.category.clone();
            self.model = from.model.clone();
            self.width = from.width;
            self.height = from.height;
            self.hurt_sound = from.hurt_sound.clone();
            self.death_sound = from.death_sound.clone();
            self.step_sound = from.step_sound.clone();
            self.entity_data = from.entity_data.clone();
        }
    }

    fn width(&self, _actor: &dyn Actor) -> f32 {
        self.width
    }

    fn height(&self, _actor: &dyn Actor) -> f32 {
        self.height
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn hurt_sound(&self, _actor: &dyn Actor, _source: &DamageSource) -> Option<SoundEvent> {
        self.hurt_sound.clone()
    }

    fn death_sound(&self, _actor: &dyn Actor) -> Option<SoundEvent> {
        self.death_sound.clone()
    }

    fn has_custom_step_sound(&self, _actor: &dyn Actor) -> bool {
        self.step_sound.is_some()
    }

    fn play_step_sound(&self, actor: &mut dyn Actor) {
        if let Some(sound) = &self.step_sound {
            actor.play_sound(sound, STEP_VOLUME, 1.0);
        }
    }

    fn same_as(&self, other: &dyn Morph) -> bool {
        self.base.same_identity(other.base())
            && other
                .downcast_ref::<EntityMorph>()
                .map_or(true, |other| other.entity_data == self.entity_data)
    }

    /// Same creature: adopt the newer instance in place.
    fn can_merge(&self, other: &dyn Morph, _is_remote: bool) -> bool {
        other
            .downcast_ref::<EntityMorph>()
            .is_some_and(|other| other.base.name == self.base.name)
    }

    /// Keeps the local favorite and keybind; takes everything else.
    fn after_merge(&mut self, other: &dyn Morph, _is_remote: bool) {
        if let Some(other) = other.downcast_ref::<EntityMorph>() {
            self.base.display_name = other.base.display_name.clone();
            self.base.set_settings(Arc::clone(other.base.settings_handle()));
            self.entity_data = other.entity_data.clone();
        }
    }

    fn reset(&mut self) {
        self.entity_data = MorphTag::new();
    }

    fn write_tag(&self, tag: &mut MorphTag, registry: &Registry) {
        self.base.write_tag(tag, registry);

        if !self.entity_data.is_empty() {
            tag.set_compound("EntityData", self.entity_data.clone());
        }
    }

    fn read_tag(&mut self, tag: &MorphTag, registry: &Registry) {
        self.base.read_tag(tag, registry);

        if tag.has_key("EntityData") {
            self.entity_data = tag.get_compound("EntityData");
        }
    }

    fn render_on_screen(
        &self,
        host: &mut dyn RenderHost,
        _actor: &dyn Actor,
        x: i32,
        y: i32,
        scale: f32,
        alpha: f32,
    ) {
        host.draw_on_screen(&self.model, x, y, scale, alpha);
    }

    fn render(
        &self,
        host: &mut dyn RenderHost,
        _actor: &dyn Actor,
        position: Vec3,
        yaw: f32,
        partial_tick: f32,
    ) {
        host.draw_in_world(&self.model, position, yaw, partial_tick);
    }
}
