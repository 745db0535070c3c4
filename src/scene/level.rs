use thiserror::Error;

use crate::components::Rect;

pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 600.0;
pub const SPRITE_W: f32 = 48.0;
pub const SPRITE_H: f32 = 48.0;
pub const GOAL_W: f32 = 100.0;
pub const GOAL_H: f32 = 50.0;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no platforms")]
    Empty,
    #[error("platform {index} has non-positive size {w}x{h}")]
    DegeneratePlatform { index: usize, w: f32, h: f32 },
    #[error("platform {index} has a non-finite coordinate")]
    NonFinitePlatform { index: usize },
    #[error("goal has non-positive size {w}x{h}")]
    DegenerateGoal { w: f32, h: f32 },
    #[error("world size {w}x{h} is not positive")]
    BadWorldSize { w: f32, h: f32 },
    #[error("ground line {ground_top} lies outside the world height {h}")]
    GroundOutOfWorld { ground_top: f32, h: f32 },
}

/// Static level data: world extent, the ground line, the platform set, and
/// the goal region. Immutable once built; every field is validated by
/// [`Level::new`] so the simulation can treat the geometry as total.
pub struct Level {
    pub width: f32,
    pub height: f32,
    /// Top of the walkable ground strip; the physics floor clamp.
    pub ground_top: f32,
    /// Platform set, ground strip included (first entry by convention).
    pub platforms: Vec<Rect>,
    pub goal: Rect,
}

impl Level {
    pub fn new(
        width: f32,
        height: f32,
        ground_top: f32,
        platforms: Vec<Rect>,
        goal: Rect,
    ) -> Result<Self, LevelError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(LevelError::BadWorldSize { w: width, h: height });
        }
        if !(0.0..=height).contains(&ground_top) {
            return Err(LevelError::GroundOutOfWorld { ground_top, h: height });
        }
        if platforms.is_empty() {
            return Err(LevelError::Empty);
        }
        for (index, p) in platforms.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite() && p.w.is_finite() && p.h.is_finite()) {
                return Err(LevelError::NonFinitePlatform { index });
            }
            if p.w <= 0.0 || p.h <= 0.0 {
                return Err(LevelError::DegeneratePlatform {
                    index,
                    w: p.w,
                    h: p.h,
                });
            }
        }
        if goal.w <= 0.0 || goal.h <= 0.0 {
            return Err(LevelError::DegenerateGoal { w: goal.w, h: goal.h });
        }
        Ok(Self {
            width,
            height,
            ground_top,
            platforms,
            goal,
        })
    }

    /// The built-in course: a full-width ground strip, three floating
    /// platforms rising toward the right, and the goal on the ground in the
    /// far right corner.
    pub fn standard() -> Result<Self, LevelError> {
        let ground_top = WORLD_H - 50.0;
        Self::new(
            WORLD_W,
            WORLD_H,
            ground_top,
            vec![
                Rect::new(0.0, ground_top, WORLD_W, 50.0),
                Rect::new(150.0, WORLD_H - 150.0, 150.0, 20.0),
                Rect::new(400.0, WORLD_H - 200.0, 150.0, 20.0),
                Rect::new(600.0, WORLD_H - 250.0, 150.0, 20.0),
            ],
            Rect::new(700.0, ground_top - GOAL_H, GOAL_W, GOAL_H),
        )
    }

    /// Whether a platform is the ground strip (tinted differently by the
    /// renderer).
    pub fn is_ground(&self, p: &Rect) -> bool {
        p.top() == self.ground_top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_level_is_valid_and_grounded() {
        let level = Level::standard().unwrap();
        assert_eq!(level.ground_top, 550.0);
        // Ground strip spans the whole world width.
        let ground = &level.platforms[0];
        assert!(level.is_ground(ground));
        assert_eq!(ground.left(), 0.0);
        assert_eq!(ground.right(), level.width);
        // Goal sits on the ground line.
        assert_eq!(level.goal.bottom(), level.ground_top);
    }

    #[test]
    fn rejects_empty_platform_set() {
        let err = Level::new(800.0, 600.0, 550.0, vec![], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(err, Err(LevelError::Empty)));
    }

    #[test]
    fn rejects_degenerate_platform() {
        let err = Level::new(
            800.0,
            600.0,
            550.0,
            vec![Rect::new(0.0, 550.0, 800.0, 50.0), Rect::new(10.0, 10.0, 0.0, 20.0)],
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(matches!(
            err,
            Err(LevelError::DegeneratePlatform { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_platform() {
        let err = Level::new(
            800.0,
            600.0,
            550.0,
            vec![Rect::new(f32::NAN, 550.0, 800.0, 50.0)],
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(matches!(
            err,
            Err(LevelError::NonFinitePlatform { index: 0 })
        ));
    }

    #[test]
    fn rejects_ground_line_outside_world() {
        let err = Level::new(
            800.0,
            600.0,
            700.0,
            vec![Rect::new(0.0, 550.0, 800.0, 50.0)],
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(matches!(err, Err(LevelError::GroundOutOfWorld { .. })));
    }

    #[test]
    fn rejects_degenerate_goal() {
        let err = Level::new(
            800.0,
            600.0,
            550.0,
            vec![Rect::new(0.0, 550.0, 800.0, 50.0)],
            Rect::new(700.0, 500.0, 100.0, -1.0),
        );
        assert!(matches!(err, Err(LevelError::DegenerateGoal { .. })));
    }
}
