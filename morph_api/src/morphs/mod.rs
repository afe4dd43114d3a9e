//! The morph contract: an alternate identity, body and ability set an actor
//! can temporarily assume.
//!
//! Each morph family implements [`Morph`] for its variants and gets the
//! default per-tick pipeline for free. Operations that need the morph as a
//! trait object (cloning, persistence, the action/attack shortcuts) live on
//! `dyn Morph` itself.

mod base;
mod render;
mod size;

pub use base::*;
pub use render::*;
pub use size::*;

use std::any::Any;
use std::fmt;

use glam::Vec3;
use tracing::trace;

use crate::abilities::Registry;
use crate::actor::{Actor, DamageSource, Hand, SoundEvent};
use crate::settings::DEFAULT_SPEED;
use crate::tag::MorphTag;

/// A polymorphic morph variant.
pub trait Morph: Any + Send + Sync + fmt::Debug {
    fn base(&self) -> &MorphBase;
    fn base_mut(&mut self) -> &mut MorphBase;
    fn as_any(&self) -> &dyn Any;

    /// An empty instance of the same variant, to be filled by [`Morph::copy_from`].
    fn create(&self, is_remote: bool) -> Box<dyn Morph>;

    /// Transfer identity, settings and variant state from `from`.
    ///
    /// Overrides must copy the base first.
    fn copy_from(&mut self, from: &dyn Morph, _is_remote: bool) {
        self.base_mut().copy_from(from.base());
    }

    fn width(&self, actor: &dyn Actor) -> f32;
    fn height(&self, actor: &dyn Actor) -> f32;

    fn eye_height(&self, actor: &dyn Actor) -> f32 {
        self.height(actor) * EYE_HEIGHT_RATIO
    }

    /// Grouping key for the selection screen.
    fn category(&self) -> &str {
        ""
    }

    /// The display-name override if set, otherwise the variant's own name.
    fn display_name(&self) -> String {
        match self.base().display_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.variant_display_name(),
        }
    }

    fn variant_display_name(&self) -> String {
        self.base().name.clone()
    }

    fn has_custom_settings(&self, registry: &Registry) -> bool {
        self.base().has_custom_settings(registry)
    }

    /// Per-tick update: apply speed, then every ability in order.
    fn update(&self, actor: &mut dyn Actor) {
        let settings = self.base().settings();

        if settings.speed != DEFAULT_SPEED {
            actor.set_movement_speed(settings.speed);
        }

        for ability in &settings.abilities {
            ability.update(actor);
        }
    }

    /// Called once when the actor assumes this morph.
    fn morph(&self, actor: &mut dyn Actor) {
        trace!(morph = %self.base().name, actor = %actor.id(), "morph");

        for ability in &self.base().settings().abilities {
            ability.on_morph(actor);
        }
    }

    /// Called once when the actor leaves this morph.
    fn demorph(&self, actor: &mut dyn Actor) {
        trace!(morph = %self.base().name, actor = %actor.id(), "demorph");

        for ability in &self.base().settings().abilities {
            ability.on_demorph(actor);
        }
    }

    fn update_size(&self, actor: &mut dyn Actor, width: f32, height: f32) {
        update_size_default(actor, width, height);
    }

    /// Hurt sound for the given cause; `None` keeps the host's sound.
    fn hurt_sound(&self, _actor: &dyn Actor, _source: &DamageSource) -> Option<SoundEvent> {
        None
    }

    /// Death sound; `None` keeps the host's sound.
    fn death_sound(&self, _actor: &dyn Actor) -> Option<SoundEvent> {
        None
    }

    /// Return true when overriding [`Morph::play_step_sound`].
    fn has_custom_step_sound(&self, _actor: &dyn Actor) -> bool {
        false
    }

    fn play_step_sound(&self, _actor: &mut dyn Actor) {}

    fn on_change_dimension(&self, _actor: &mut dyn Actor, _old: i32, _current: i32) {}

    /// Structural equality; variants may compare their own state too.
    fn same_as(&self, other: &dyn Morph) -> bool {
        self.base().same_identity(other.base())
    }

    /// Whether `other` may be merged into this instance instead of replacing it.
    fn can_merge(&self, _other: &dyn Morph, _is_remote: bool) -> bool {
        false
    }

    /// Adopt state from a newer morph after [`Morph::can_merge`] said yes.
    fn after_merge(&mut self, _other: &dyn Morph, _is_remote: bool) {}

    /// Clear transient edit state. Runs before reading a record into `self`.
    fn reset(&mut self) {}

    fn write_tag(&self, tag: &mut MorphTag, registry: &Registry) {
        self.base().write_tag(tag, registry);
    }

    fn read_tag(&mut self, tag: &MorphTag, registry: &Registry) {
        self.base_mut().read_tag(tag, registry);
    }

    fn render_on_screen(
        &self,
        host: &mut dyn RenderHost,
        actor: &dyn Actor,
        x: i32,
        y: i32,
        scale: f32,
        alpha: f32,
    );

    fn render(
        &self,
        host: &mut dyn RenderHost,
        actor: &dyn Actor,
        position: Vec3,
        yaw: f32,
        partial_tick: f32,
    );

    /// Draw a first-person hand; false means "no custom hand".
    fn render_hand(&self, _host: &mut dyn RenderHost, _actor: &dyn Actor, _hand: Hand) -> bool {
        false
    }
}

impl dyn Morph {
    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// A copy of this morph that shares no mutable state with it.
    pub fn clone_morph(&self, is_remote: bool) -> Box<dyn Morph> {
        let mut morph = self.create(is_remote);
        morph.copy_from(self, is_remote);
        morph
    }

    /// Run the configured action, if any.
    pub fn action(&self, actor: &mut dyn Actor) {
        if let Some(action) = &self.base().settings().action {
            action.execute(actor, self);
        }
    }

    /// Run the configured attack, if any.
    pub fn attack(&self, target: &mut dyn Actor, source: &mut dyn Actor) {
        if let Some(attack) = &self.base().settings().attack {
            attack.attack(target, source);
        }
    }

    /// Resize the actor to this morph's dimensions.
    pub fn resize(&self, actor: &mut dyn Actor) {
        let width = self.width(actor);
        let height = self.height(actor);
        self.update_size(actor, width, height);
    }

    /// Hurt sound for generic damage.
    pub fn generic_hurt_sound(&self, actor: &dyn Actor) -> Option<SoundEvent> {
        self.hurt_sound(actor, &DamageSource::generic())
    }

    pub fn to_tag(&self, registry: &Registry) -> MorphTag {
        let mut tag = MorphTag::new();
        self.write_tag(&mut tag, registry);
        tag
    }

    /// Reset, then read a record into this instance.
    pub fn from_tag(&mut self, tag: &MorphTag, registry: &Registry) {
        self.reset();
        self.read_tag(tag, registry);
    }

    pub fn downcast_ref<T: Morph>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for dyn Morph {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}
