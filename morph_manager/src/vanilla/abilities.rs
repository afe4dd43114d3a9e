//! Abilities, actions and attacks of the vanilla morph family.

use std::collections::HashMap;
use std::sync::Mutex;

use glam::Vec3;
use morph_api::{Ability, Action, Actor, ActorId, AttackAbility, Morph, Registry};

/// Vertical velocity added per hop.
const JUMP_VELOCITY: f32 = 0.5;
/// Fastest descent allowed while slow-falling.
const SLOW_FALL_LIMIT: f32 = -0.1;
const LEAP_STRENGTH: f32 = 1.0;
const LEAP_LIFT: f32 = 0.4;
const IGNITE_SECONDS: u32 = 5;
const KNOCKBACK_STRENGTH: f32 = 0.8;
const KNOCKBACK_LIFT: f32 = 0.3;

/// Register every vanilla capability under its catalog name.
pub fn register_vanilla_capabilities(registry: &mut Registry) {
    registry.register_ability("jumping", Jumping);
    registry.register_ability("fire_proof", FireProof::default());
    registry.register_ability("slow_fall", SlowFall);
    registry.register_action("leap", Leap);
    registry.register_attack("ignite", Ignite);
    registry.register_attack("knockback", Knockback);
}

/// Hop whenever moving on the ground, like a slime.
pub struct Jumping;

impl Ability for Jumping {
    fn update(&self, actor: &mut dyn Actor) {
        let mut velocity = actor.velocity();

        if actor.on_ground() && actor.is_moving() && velocity.y <= 0.0 {
            velocity.y += JUMP_VELOCITY;
            actor.set_velocity(velocity);
        }
    }
}

/// Immunity to fire while morphed.
///
/// Remembers each actor's own immunity on morph and puts it back on demorph.
/// Hooks only run on the simulation thread, so the lock is never contended;
/// it exists because abilities are shared as `Send + Sync`.
#[derive(Default)]
pub struct FireProof {
    previous: Mutex<HashMap<ActorId, bool>>,
}

impl Ability for FireProof {
    fn update(&self, actor: &mut dyn Actor) {
        actor.extinguish();
    }

    fn on_morph(&self, actor: &mut dyn Actor) {
        if let Ok(mut previous) = self.previous.lock() {
            previous
                .entry(actor.id())
                .or_insert_with(|| actor.is_fire_immune());
        }
        actor.set_fire_immune(true);
    }

    fn on_demorph(&self, actor: &mut dyn Actor) {
        let restored = self
            .previous
            .lock()
            .ok()
            .and_then(|mut previous| previous.remove(&actor.id()))
            .unwrap_or(false);

        actor.set_fire_immune(restored);
    }
}

/// Caps the falling speed.
pub struct SlowFall;

impl Ability for SlowFall {
    fn update(&self, actor: &mut dyn Actor) {
        let mut velocity = actor.velocity();

        if !actor.on_ground() && velocity.y < SLOW_FALL_LIMIT {
            velocity.y = SLOW_FALL_LIMIT;
            actor.set_velocity(velocity);
        }
    }
}

/// Jump forward in the facing direction. Only from the ground.
pub struct Leap;

impl Action for Leap {
    fn execute(&self, actor: &mut dyn Actor, _morph: &dyn Morph) {
        if !actor.on_ground() {
            return;
        }

        let impulse = actor.look_direction() * LEAP_STRENGTH + Vec3::Y * LEAP_LIFT;
        actor.set_velocity(actor.velocity() + impulse);
    }
}

/// Set the target on fire.
pub struct Ignite;

impl AttackAbility for Ignite {
    fn attack(&self, target: &mut dyn Actor, _source: &mut dyn Actor) {
        target.set_on_fire(IGNITE_SECONDS);
    }
}

/// Push the target away from the attacker.
pub struct Knockback;

impl AttackAbility for Knockback {
    fn attack(&self, target: &mut dyn Actor, source: &mut dyn Actor) {
        let offset = target.position() - source.position();
        let horizontal = Vec3::new(offset.x, 0.0, offset.z);

        let direction = horizontal.try_normalize().unwrap_or_else(|| {
            let look = source.look_direction();
            Vec3::new(look.x, 0.0, look.z).normalize_or_zero()
        });

        let push = direction * KNOCKBACK_STRENGTH + Vec3::Y * KNOCKBACK_LIFT;
        target.set_velocity(target.velocity() + push);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_api::testing::{StubMorph, TestActor};

    #[test]
    fn test_jumping_hops_when_moving_on_ground() {
        let mut actor = TestActor::player();
        actor.moving = true;

        Jumping.update(&mut actor);
        assert_eq!(actor.velocity.y, 0.5);

        // Already rising: no second hop.
        Jumping.update(&mut actor);
        assert_eq!(actor.velocity.y, 0.5);
    }

    #[test]
    fn test_jumping_needs_ground_and_movement() {
        let mut idle = TestActor::player();
        Jumping.update(&mut idle);
        assert_eq!(idle.velocity.y, 0.0);

        let mut airborne = TestActor::player();
        airborne.moving = true;
        airborne.on_ground = false;
        Jumping.update(&mut airborne);
        assert_eq!(airborne.velocity.y, 0.0);
    }

    #[test]
    fn test_fire_proof_restores_previous_state() {
        let ability = FireProof::default();
        let mut plain = TestActor::player();
        let mut immune = TestActor::creature("Blaze");
        immune.fire_immune = true;

        ability.on_morph(&mut plain);
        ability.on_morph(&mut immune);
        assert!(plain.fire_immune);

        plain.fire_seconds = 8;
        ability.update(&mut plain);
        assert_eq!(plain.fire_seconds, 0);

        ability.on_demorph(&mut plain);
        ability.on_demorph(&mut immune);
        assert!(!plain.fire_immune);
        assert!(immune.fire_immune);
    }

    #[test]
    fn test_slow_fall_caps_descent() {
        let mut actor = TestActor::player();
        actor.on_ground = false;
        actor.velocity = Vec3::new(0.2, -0.8, 0.0);

        SlowFall.update(&mut actor);

        assert_eq!(actor.velocity, Vec3::new(0.2, -0.1, 0.0));
    }

    #[test]
    fn test_leap_from_ground_only() {
        let morph = StubMorph::new("Spider", 1.4, 0.9);
        let mut actor = TestActor::player();
        actor.look = Vec3::X;

        Leap.execute(&mut actor, &morph);
        assert_eq!(actor.velocity, Vec3::new(1.0, 0.4, 0.0));

        actor.on_ground = false;
        Leap.execute(&mut actor, &morph);
        assert_eq!(actor.velocity, Vec3::new(1.0, 0.4, 0.0));
    }

    #[test]
    fn test_ignite() {
        let mut source = TestActor::player();
        let mut target = TestActor::creature("Cow");

        Ignite.attack(&mut target, &mut source);

        assert_eq!(target.fire_seconds, 5);
    }

    #[test]
    fn test_knockback_pushes_away() {
        let mut source = TestActor::player();
        let mut target = TestActor::creature("Cow");
        target.position = Vec3::new(0.0, 3.0, -2.0);

        Knockback.attack(&mut target, &mut source);

        assert!((target.velocity.z + 0.8).abs() < 1e-6);
        assert!(target.velocity.x.abs() < 1e-6);
        assert!((target.velocity.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_knockback_on_same_spot_uses_look() {
        let mut source = TestActor::player();
        source.look = Vec3::new(0.0, -1.0, 1.0).normalize();
        let mut target = TestActor::creature("Cow");

        Knockback.attack(&mut target, &mut source);

        assert!((target.velocity.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_register_vanilla_capabilities() {
        let mut registry = Registry::new();
        register_vanilla_capabilities(&mut registry);

        for ability in ["jumping", "fire_proof", "slow_fall"] {
            assert!(registry.has_ability(ability));
        }
        assert!(registry.has_action("leap"));
        assert!(registry.has_attack("ignite"));
        assert!(registry.has_attack("knockback"));
    }
}
