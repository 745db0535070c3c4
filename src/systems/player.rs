use hecs::World;

use crate::components::{Body, Player, Rect, Sprite};
use crate::engine::input::Intent;

use super::physics::{resolve_motion, PhysicsParams};

pub const PLAYER_SPEED: f32 = 4.0;

/// Apply one tick of player control: the held axis becomes a horizontal
/// delta and updates facing/motion flags, a jump request fires only while
/// grounded (airborne requests are dropped, not queued), then the body
/// resolves against the platform set.
///
/// Returns whether a jump fired this tick, so the app can play its cue.
pub fn player_system(
    world: &mut World,
    intent: Intent,
    platforms: &[Rect],
    params: &PhysicsParams,
) -> bool {
    let mut jumped = false;
    for (_e, (body, sprite, player)) in world.query_mut::<(&mut Body, &mut Sprite, &Player)>() {
        sprite.is_moving = intent.axis != 0;
        if intent.axis != 0 {
            // Facing persists while no axis is held.
            sprite.facing_right = intent.axis > 0;
        }

        if intent.jump && body.on_ground {
            body.vy = params.jump_impulse;
            body.on_ground = false;
            jumped = true;
        }

        let dx = intent.axis as f32 * player.speed;
        resolve_motion(body, dx, sprite.facing_right, platforms, params);
    }
    if jumped {
        log::debug!("player jumped");
    }
    jumped
}
