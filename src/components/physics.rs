use glam::Vec2;

/// Axis-aligned rectangle with a top-left origin. Validated level data
/// guarantees `w` and `h` are positive and all coordinates finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Strict overlap on both axes. Edge-touching rectangles do NOT
    /// intersect, so a body resting exactly on a platform top produces no
    /// contact on the next tick.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Kinematic collision body: the entity's collision box plus vertical
/// velocity and grounded flag. Mutated in place once per simulation tick
/// by `systems::physics::resolve_motion`.
pub struct Body {
    pub rect: Rect,
    pub vy: f32,
    pub on_ground: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            vy: 0.0,
            on_ground: false,
        }
    }

    /// Draw anchor exported to the renderer: bottom-center of the box.
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.rect.center_x(), self.rect.bottom())
    }
}
