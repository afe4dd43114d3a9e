//! The host engine's living entity, as seen by morphs.

mod components;

pub use components::*;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an actor, used by abilities that keep per-actor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an actor ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A living entity owned by the host engine.
///
/// Morphs never own actors; they mutate them in place during the simulation
/// tick. All coordinates are in the host's world units.
pub trait Actor {
    fn id(&self) -> ActorId;

    /// The host's generic entity-type string (e.g. "Skeleton", "Pig").
    fn entity_type(&self) -> String;

    /// Skeleton subtype, for skeleton-archetype actors only.
    fn skeleton_type(&self) -> Option<SkeletonType> {
        None
    }

    /// Whether the actor is player-like (has a camera and eye height).
    fn is_player(&self) -> bool;

    fn position(&self) -> Vec3;

    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Record the actor's nominal size. Does not touch the bounding box.
    fn set_size(&mut self, width: f32, height: f32);

    fn bounding_box(&self) -> BoundingBox;
    fn set_bounding_box(&mut self, bounds: BoundingBox);

    fn eye_height(&self) -> f32;
    fn set_eye_height(&mut self, eye_height: f32);

    /// Base value of the movement-speed attribute.
    fn movement_speed(&self) -> f32;
    fn set_movement_speed(&mut self, speed: f32);

    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);

    /// Unit vector the actor is facing.
    fn look_direction(&self) -> Vec3;

    fn on_ground(&self) -> bool;

    /// Whether movement input (strafe or forward) is currently held.
    fn is_moving(&self) -> bool;

    fn is_fire_immune(&self) -> bool;
    fn set_fire_immune(&mut self, immune: bool);

    fn set_on_fire(&mut self, seconds: u32);
    fn extinguish(&mut self);

    /// Play a sound at the actor's position.
    fn play_sound(&mut self, sound: &SoundEvent, volume: f32, pitch: f32);
}
