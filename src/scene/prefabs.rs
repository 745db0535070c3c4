use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use crate::components::{Body, Enemy, Player, Sprite, HERO_FRAMES, SNAIL_FRAMES};
use crate::systems::{BASE_PATROL_SPEED, PATROL_RADIUS, PATROL_SPEED_JITTER, PLAYER_SPEED};

use super::level::{Level, SPRITE_H, SPRITE_W};

/// Enemy spawn x range on the ground line.
pub const ENEMY_SPAWN_MIN_X: f32 = 200.0;
pub const ENEMY_SPAWN_MAX_X: f32 = 600.0;

/// Spawn the hero near the left edge, standing on the ground.
pub fn spawn_player(world: &mut World, level: &Level) -> Entity {
    let spawn = Vec2::new(50.0, level.ground_top - SPRITE_H);
    let mut body = Body::new(spawn.x, spawn.y, SPRITE_W, SPRITE_H);
    body.on_ground = true;
    world.spawn((
        body,
        Sprite::new(HERO_FRAMES),
        Player {
            speed: PLAYER_SPEED,
        },
    ))
}

/// Spawn one snail on the ground at `x`. Patrol speed, initial direction
/// and the patrol range are drawn here and fixed for the enemy's lifetime;
/// the range is the spawn point plus/minus the patrol radius, clamped to
/// the world.
pub fn spawn_enemy<R: Rng>(world: &mut World, level: &Level, x: f32, rng: &mut R) -> Entity {
    let speed = BASE_PATROL_SPEED + rng.gen::<f32>() * PATROL_SPEED_JITTER;
    let dir = if rng.gen::<bool>() { 1.0 } else { -1.0 };
    let min_x = (x - PATROL_RADIUS).max(0.0);
    let max_x = (x + PATROL_RADIUS).min(level.width - SPRITE_W);

    let mut body = Body::new(x, level.ground_top - SPRITE_H, SPRITE_W, SPRITE_H);
    body.on_ground = true;
    let mut sprite = Sprite::new(SNAIL_FRAMES);
    sprite.facing_right = dir > 0.0;
    sprite.is_moving = true;
    world.spawn((body, sprite, Enemy::new(speed, dir, min_x, max_x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn player_spawns_grounded_at_left_edge() {
        let level = Level::standard().unwrap();
        let mut world = World::new();
        let e = spawn_player(&mut world, &level);
        let body = world.get::<&Body>(e).unwrap();
        assert_eq!(body.rect.x, 50.0);
        assert_eq!(body.rect.bottom(), level.ground_top);
        assert!(body.on_ground);
    }

    #[test]
    fn enemy_draws_are_within_tuning_ranges() {
        let level = Level::standard().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = World::new();
        for _ in 0..50 {
            let e = spawn_enemy(&mut world, &level, 400.0, &mut rng);
            let enemy = world.get::<&Enemy>(e).unwrap();
            assert!((BASE_PATROL_SPEED..BASE_PATROL_SPEED + PATROL_SPEED_JITTER)
                .contains(&enemy.speed));
            assert_eq!(enemy.min_x, 250.0);
            assert_eq!(enemy.max_x, 550.0);
        }
    }

    #[test]
    fn patrol_range_clamps_to_world_edges() {
        let level = Level::standard().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = World::new();

        let near_left = spawn_enemy(&mut world, &level, 60.0, &mut rng);
        let enemy = world.get::<&Enemy>(near_left).unwrap();
        assert_eq!(enemy.min_x, 0.0);
        drop(enemy);

        let near_right = spawn_enemy(&mut world, &level, 740.0, &mut rng);
        let enemy = world.get::<&Enemy>(near_right).unwrap();
        assert_eq!(enemy.max_x, level.width - SPRITE_W);
    }
}
