//! Rendering collaborator. Render-thread only.

use glam::Vec3;

use crate::actor::Hand;

/// Drawing hooks the host's renderer exposes to morphs.
///
/// `model` is the render model key a morph family registered for the morph.
pub trait RenderHost {
    /// Draw a 2D preview, e.g. in the morph selection screen.
    fn draw_on_screen(&mut self, model: &str, x: i32, y: i32, scale: f32, alpha: f32);

    /// Draw the morph in the world at `position`.
    fn draw_in_world(&mut self, model: &str, position: Vec3, yaw: f32, partial_tick: f32);

    /// Draw a first-person hand. Returns false if the model has no hand.
    fn draw_hand(&mut self, model: &str, hand: Hand) -> bool;
}
