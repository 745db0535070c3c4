use hecs::World;

use crate::components::{Body, Enemy, FrameKey, Sprite};

/// Pick the frame key for one entity this tick.
///
/// Moving entities cycle through the walk sequence on a fractional
/// accumulator that wraps to zero at the sequence length (never clamps, so
/// the cycle restarts cleanly). Airborne entities show the airborne frame.
/// Grounded, stationary entities show the idle frame, unless the class
/// declares a withdrawn override and `withdrawn` is set (a resting snail
/// pulls into its shell).
fn select_frame(sprite: &mut Sprite, on_ground: bool, withdrawn: bool) -> FrameKey {
    if sprite.is_moving && !sprite.frames.walk.is_empty() {
        sprite.walk_frame += sprite.walk_anim_speed;
        if sprite.walk_frame >= sprite.frames.walk.len() as f32 {
            sprite.walk_frame = 0.0;
        }
        return sprite.frames.walk[sprite.walk_frame as usize];
    }
    if !on_ground {
        return sprite.frames.airborne;
    }
    if withdrawn {
        if let Some(key) = sprite.frames.withdrawn {
            return key;
        }
    }
    sprite.frames.idle
}

/// Derive every sprite's visual frame from its motion state after the
/// physics and controller systems have run.
pub fn animation_system(world: &mut World) {
    for (_e, (body, sprite, enemy)) in
        world.query_mut::<(&Body, &mut Sprite, Option<&Enemy>)>()
    {
        let withdrawn = enemy.map_or(false, |e| e.is_resting());
        sprite.frame = select_frame(sprite, body.on_ground, withdrawn);
    }
}
