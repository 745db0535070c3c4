mod character;
mod physics;
mod render;

pub use character::{Enemy, PatrolFsm, PatrolState, Player};
pub use physics::{Body, Rect};
pub use render::{FrameKey, FrameSet, Sprite, HERO_FRAMES, SNAIL_FRAMES};
