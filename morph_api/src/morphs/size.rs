//! Default resizing of an actor's bounding volume to a morph's size.

use crate::actor::{Actor, BoundingBox};

/// Minimum distance between the eyes and the top of the bounding volume.
///
/// The host damages an actor whose head is closer than this to a ceiling, and
/// suffocates one whose eyes are closer than this to the ground.
pub const MIN_EYE_TO_HEAD: f32 = 0.1;

/// Eye height as a fraction of body height.
pub const EYE_HEIGHT_RATIO: f32 = 0.9;

/// Eye height for a body of the given height, kept at least
/// [`MIN_EYE_TO_HEAD`] below the top.
pub fn eye_height_for(height: f32) -> f32 {
    let eye_height = height * EYE_HEIGHT_RATIO;

    if eye_height + MIN_EYE_TO_HEAD > height {
        height - MIN_EYE_TO_HEAD
    } else {
        eye_height
    }
}

/// Resize an actor to `width` x `height`.
///
/// Height never drops below twice [`MIN_EYE_TO_HEAD`]. Player-like actors get
/// their eye height recomputed. The bounding volume is rebuilt only when the
/// size actually changes; it stays centered on the actor horizontally and its
/// bottom stays where it was.
pub fn update_size_default(actor: &mut dyn Actor, width: f32, height: f32) {
    let height = height.max(MIN_EYE_TO_HEAD * 2.0);

    if actor.is_player() {
        actor.set_eye_height(eye_height_for(height));
    }

    if width != actor.width() || height != actor.height() {
        let bottom = actor.bounding_box().min.y;

        actor.set_size(width, height);
        actor.set_bounding_box(BoundingBox::anchored(
            actor.position(),
            bottom,
            width,
            height,
        ));
    }
}
