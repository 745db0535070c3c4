pub mod animation;
pub mod enemy;
pub mod physics;
pub mod player;

pub use animation::animation_system;
pub use enemy::{
    enemy_patrol_system, BASE_PATROL_SPEED, PATROL_RADIUS, PATROL_REST_TICKS, PATROL_SPEED_JITTER,
};
pub use physics::{resolve_motion, PhysicsParams};
pub use player::{player_system, PLAYER_SPEED};
