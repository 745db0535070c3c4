/// Opaque identifier for the visual asset representing an animation state.
/// The renderer maps keys to atlas entries (or a placeholder tint when the
/// asset is missing); the simulation never interprets them.
pub type FrameKey = &'static str;

/// Per-entity-class frame table: which key each animation state selects.
#[derive(Clone, Copy)]
pub struct FrameSet {
    pub idle: FrameKey,
    pub airborne: FrameKey,
    pub walk: &'static [FrameKey],
    /// Override for the idle branch while an enemy is resting between
    /// patrol legs (the snail pulls into its shell). `None` for classes
    /// without a withdrawn pose.
    pub withdrawn: Option<FrameKey>,
}

pub const HERO_FRAMES: FrameSet = FrameSet {
    idle: "hero/front",
    airborne: "hero/jump",
    walk: &["hero/walk_a", "hero/walk_b"],
    withdrawn: None,
};

pub const SNAIL_FRAMES: FrameSet = FrameSet {
    idle: "snail/rest",
    airborne: "snail/shell",
    walk: &["snail/walk_a", "snail/walk_b"],
    withdrawn: Some("snail/shell"),
};

/// Animated sprite state: facing, motion flag, and the walk-cycle
/// accumulator. `frame` holds the key selected by the animation system
/// this tick; the renderer reads it together with `facing_right` as a
/// horizontal-mirror hint.
pub struct Sprite {
    pub frames: FrameSet,
    pub facing_right: bool,
    pub is_moving: bool,
    pub walk_frame: f32,
    pub walk_anim_speed: f32,
    pub frame: FrameKey,
}

impl Sprite {
    pub fn new(frames: FrameSet) -> Self {
        Self {
            frames,
            facing_right: true,
            is_moving: false,
            walk_frame: 0.0,
            walk_anim_speed: 0.2,
            frame: frames.idle,
        }
    }
}
