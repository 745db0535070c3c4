use hecs::World;

use crate::components::{Body, Enemy, PatrolState, Rect, Sprite};

use super::physics::{resolve_motion, PhysicsParams};

pub const BASE_PATROL_SPEED: f32 = 1.5;
pub const PATROL_SPEED_JITTER: f32 = 0.5;
pub const PATROL_RADIUS: f32 = 150.0;
pub const PATROL_REST_TICKS: u32 = 60;

impl PatrolState {
    /// Advance timers that live inside timed state variants.
    /// Called every tick before evaluating transitions.
    fn tick_timers(&mut self) {
        if let PatrolState::Resting { remaining, .. } = self {
            *remaining = remaining.saturating_sub(1);
        }
    }

    /// Return the next state if a transition should fire, or `None` to stay.
    /// `x` is the body's x-coordinate after this tick's motion resolved.
    fn next(&self, x: f32, min_x: f32, max_x: f32) -> Option<PatrolState> {
        match *self {
            PatrolState::Walking { dir } => {
                if x <= min_x || x >= max_x {
                    Some(PatrolState::Resting {
                        remaining: PATROL_REST_TICKS,
                        dir: -dir,
                    })
                } else {
                    None
                }
            }
            PatrolState::Resting { remaining, dir } => {
                if remaining == 0 {
                    Some(PatrolState::Walking { dir })
                } else {
                    None
                }
            }
        }
    }
}

/// Drive every enemy's patrol for one tick: walking enemies advance by
/// `speed * dir` through the shared motion resolver; reaching a patrol
/// bound flips direction (and facing) and starts a fixed rest, after which
/// the walk resumes the other way.
///
/// `is_moving` reflects the state that governed this tick's motion, so a
/// bound hit reads as one moving tick followed by exactly
/// `PATROL_REST_TICKS` stationary ones.
pub fn enemy_patrol_system(world: &mut World, platforms: &[Rect], params: &PhysicsParams) {
    for (_e, (body, sprite, enemy)) in world.query_mut::<(&mut Body, &mut Sprite, &mut Enemy)>() {
        let dx = match enemy.fsm.state {
            PatrolState::Walking { dir } => enemy.speed * dir,
            PatrolState::Resting { .. } => 0.0,
        };
        sprite.is_moving = matches!(enemy.fsm.state, PatrolState::Walking { .. });

        resolve_motion(body, dx, sprite.facing_right, platforms, params);

        enemy.fsm.state.tick_timers();
        if let Some(next) = enemy.fsm.state.next(body.rect.x, enemy.min_x, enemy.max_x) {
            if let PatrolState::Resting { dir, .. } = next {
                sprite.facing_right = dir > 0.0;
                // Keep the patrol interval airtight even when a step
                // overshoots the bound.
                body.rect.x = body.rect.x.clamp(enemy.min_x, enemy.max_x);
                log::debug!(
                    "enemy at x={:.1} reversing, resting {} ticks",
                    body.rect.x,
                    PATROL_REST_TICKS
                );
            }
            enemy.fsm.go(next);
        }
        enemy.fsm.tick();
    }
}
