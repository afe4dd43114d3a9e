//! Value types exchanged with the host engine.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding volume of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// A box of the given size standing on `bottom_y`, centered on `center`
    /// horizontally.
    pub fn anchored(center: Vec3, bottom_y: f32, width: f32, height: f32) -> Self {
        let half = width / 2.0;
        Self {
            min: Vec3::new(center.x - half, bottom_y, center.z - half),
            max: Vec3::new(center.x + half, bottom_y + height, center.z + half),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Skeleton subtypes the host distinguishes only through a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SkeletonType {
    #[default]
    Normal,
    Wither,
    Stray,
}

/// Which hand is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    MainHand,
    OffHand,
}

/// Cause of damage taken by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageSource {
    pub cause: String,
}

impl DamageSource {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Damage with no more specific cause.
    pub fn generic() -> Self {
        Self::new("generic")
    }
}

/// A sound registered with the host, by resource key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundEvent(pub String);

impl SoundEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Display for SoundEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
