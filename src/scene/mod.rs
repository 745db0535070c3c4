pub mod level;
pub mod prefabs;

pub use level::{Level, LevelError, GOAL_H, GOAL_W, SPRITE_H, SPRITE_W, WORLD_H, WORLD_W};
pub use prefabs::{spawn_enemy, spawn_player, ENEMY_SPAWN_MAX_X, ENEMY_SPAWN_MIN_X};
