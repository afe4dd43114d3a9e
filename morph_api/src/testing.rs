//! In-memory doubles for the host engine, shared by this workspace's tests.

use std::any::Any;

use glam::Vec3;

use crate::abilities::Registry;
use crate::actor::{Actor, ActorId, BoundingBox, Hand, SkeletonType, SoundEvent};
use crate::morphs::{Morph, MorphBase, RenderHost};
use crate::tag::MorphTag;

/// A plain-data actor.
#[derive(Debug, Clone)]
pub struct TestActor {
    pub id: ActorId,
    pub entity_type: String,
    pub skeleton_type: Option<SkeletonType>,
    pub player: bool,
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
    pub bounds: BoundingBox,
    pub eye_height: f32,
    pub movement_speed: f32,
    pub velocity: Vec3,
    pub look: Vec3,
    pub on_ground: bool,
    pub moving: bool,
    pub fire_immune: bool,
    pub fire_seconds: u32,
    pub sounds: Vec<SoundEvent>,
}

impl TestActor {
    pub fn player() -> Self {
        Self::new("Player", true)
    }

    pub fn creature(entity_type: &str) -> Self {
        Self::new(entity_type, false)
    }

    pub fn skeleton(subtype: SkeletonType) -> Self {
        Self {
            skeleton_type: Some(subtype),
            ..Self::creature("Skeleton")
        }
    }

    fn new(entity_type: &str, player: bool) -> Self {
        Self {
            id: ActorId::new(),
            entity_type: entity_type.to_owned(),
            skeleton_type: None,
            player,
            position: Vec3::ZERO,
            width: 0.6,
            height: 1.8,
            bounds: BoundingBox::anchored(Vec3::ZERO, 0.0, 0.6, 1.8),
            eye_height: 1.62,
            movement_speed: 0.1,
            velocity: Vec3::ZERO,
            look: Vec3::Z,
            on_ground: true,
            moving: false,
            fire_immune: false,
            fire_seconds: 0,
            sounds: Vec::new(),
        }
    }
}

impl Actor for TestActor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn entity_type(&self) -> String {
        self.entity_type.clone()
    }

    fn skeleton_type(&self) -> Option<SkeletonType> {
        self.skeleton_type
    }

    fn is_player(&self) -> bool {
        self.player
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn set_bounding_box(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }

    fn eye_height(&self) -> f32 {
        self.eye_height
    }

    fn set_eye_height(&mut self, eye_height: f32) {
        self.eye_height = eye_height;
    }

    fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn look_direction(&self) -> Vec3 {
        self.look
    }

    fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn is_fire_immune(&self) -> bool {
        self.fire_immune
    }

    fn set_fire_immune(&mut self, immune: bool) {
        self.fire_immune = immune;
    }

    fn set_on_fire(&mut self, seconds: u32) {
        self.fire_seconds = seconds;
    }

    fn extinguish(&mut self) {
        self.fire_seconds = 0;
    }

    fn play_sound(&mut self, sound: &SoundEvent, _volume: f32, _pitch: f32) {
        self.sounds.push(sound.clone());
    }
}

/// Render host that records what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub screen: Vec<(String, i32, i32)>,
    pub world: Vec<(String, Vec3)>,
    pub hands: Vec<(String, Hand)>,
}

impl RenderHost for RecordingHost {
    fn draw_on_screen(&mut self, model: &str, x: i32, y: i32, _scale: f32, _alpha: f32) {
        self.screen.push((model.to_owned(), x, y));
    }

    fn draw_in_world(&mut self, model: &str, position: Vec3, _yaw: f32, _partial_tick: f32) {
        self.world.push((model.to_owned(), position));
    }

    fn draw_hand(&mut self, model: &str, hand: Hand) -> bool {
        self.hands.push((model.to_owned(), hand));
        true
    }
}

/// Minimal morph variant with one piece of variant state (`pose`).
#[derive(Debug, Clone, Default)]
pub struct StubMorph {
    pub base: MorphBase,
    pub width: f32,
    pub height: f32,
    pub pose: String,
    pub resets: u32,
}

impl StubMorph {
    pub fn new(name: &str, width: f32, height: f32) -> Self {
        Self {
            base: MorphBase::new(name),
            width,
            height,
            ..Self::default()
        }
    }
}

impl Morph for StubMorph {
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
        Box::new(StubMorph::default())
    }

    fn copy_from(&mut self, from: &dyn Morph, _is_remote: bool) {
        self.base.copy_from(from.base());

        if let Some(stub) = from.as_any().downcast_ref::<StubMorph>() {
            self.width = stub.width;
            self.height = stub.height;
            self.pose = stub.pose.clone();
        }
    }

    fn width(&self, _actor: &dyn Actor) -> f32 {
        self.width
    }

    fn height(&self, _actor: &dyn Actor) -> f32 {
        self.height
    }

    fn reset(&mut self) {
        self.pose.clear();
        self.resets += 1;
    }

    fn write_tag(&self, tag: &mut MorphTag, registry: &Registry) {
        self.base.write_tag(tag, registry);

        if !self.pose.is_empty() {
            tag.set_string("Pose", self.pose.as_str());
        }
    }

    fn read_tag(&mut self, tag: &MorphTag, registry: &Registry) {
        self.base.read_tag(tag, registry);

        if tag.has_key("Pose") {
            self.pose = tag.get_string("Pose");
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
        host.draw_on_screen(&self.base.name, x, y, scale, alpha);
    }

    fn render(
        &self,
        host: &mut dyn RenderHost,
        _actor: &dyn Actor,
        position: Vec3,
        yaw: f32,
        partial_tick: f32,
    ) {
        host.draw_in_world(&self.base.name, position, yaw, partial_tick);
    }
}
