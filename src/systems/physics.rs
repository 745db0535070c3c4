use crate::components::{Body, Rect};

/// Motion tunables shared by every body in a session.
///
/// `side_margin` is the vertical band (in world units) excluded at a
/// platform's top and bottom when classifying a contact as a side
/// collision; overlaps inside the band are left for the vertical phase to
/// resolve as landings or head bumps.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsParams {
    /// Added to `vy` every tick. Positive is downward; no terminal clamp.
    pub gravity: f32,
    /// Set as `vy` by a grounded jump. Negative is upward.
    pub jump_impulse: f32,
    pub side_margin: f32,
    /// World ground line; a safety net independent of the platform set.
    pub ground_top: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -12.0,
            side_margin: 5.0,
            ground_top: 550.0,
        }
    }
}

/// Resolve one tick of motion for `body` against the static platform set.
/// Phases run in a fixed order: horizontal displacement + side clamping,
/// gravity integration, vertical displacement + landing/head-bump snap,
/// floor clamp. Total over its inputs; mutates the body in place.
pub fn resolve_motion(
    body: &mut Body,
    dx: f32,
    facing_right: bool,
    platforms: &[Rect],
    params: &PhysicsParams,
) {
    // Horizontal phase. A contact counts as a side collision only when the
    // overlap reaches past the margin band at the platform's top and
    // bottom; the trailing edge clamps against each such platform in set
    // order.
    body.rect.x += dx;
    for p in platforms {
        if !body.rect.intersects(p) {
            continue;
        }
        let side_hit = body.rect.bottom() > p.top() + params.side_margin
            && body.rect.top() < p.bottom() - params.side_margin;
        if !side_hit {
            continue;
        }
        if facing_right {
            body.rect.x = p.left() - body.rect.w;
        } else {
            body.rect.x = p.right();
        }
    }

    body.vy += params.gravity;

    // Vertical phase. Resolve against the nearest platform only: falling
    // picks the highest intersecting top, rising the lowest intersecting
    // bottom, so a seam landing is deterministic regardless of set order.
    body.rect.y += body.vy;
    body.on_ground = false;
    if body.vy > 0.0 {
        let landing = platforms
            .iter()
            .filter(|p| body.rect.intersects(p))
            .min_by(|a, b| a.top().total_cmp(&b.top()));
        if let Some(p) = landing {
            body.rect.y = p.top() - body.rect.h;
            body.vy = 0.0;
            body.on_ground = true;
        }
    } else if body.vy < 0.0 {
        let ceiling = platforms
            .iter()
            .filter(|p| body.rect.intersects(p))
            .max_by(|a, b| a.bottom().total_cmp(&b.bottom()));
        if let Some(p) = ceiling {
            body.rect.y = p.bottom();
            body.vy = 0.0;
        }
    }

    if body.rect.bottom() > params.ground_top {
        body.rect.y = params.ground_top - body.rect.h;
        body.vy = 0.0;
        body.on_ground = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 48.0;

    fn params() -> PhysicsParams {
        PhysicsParams::default()
    }

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(x, y, SIZE, SIZE)
    }

    #[test]
    fn falling_body_lands_on_platform_top() {
        let platform = Rect::new(100.0, 400.0, 150.0, 20.0);
        for entry_vy in [1.0, 4.0, 12.0] {
            let mut body = body_at(120.0, 400.0 - SIZE - 1.0);
            body.vy = entry_vy;
            resolve_motion(&mut body, 0.0, true, &[platform], &params());
            assert_eq!(body.rect.bottom(), platform.top());
            assert_eq!(body.vy, 0.0);
            assert!(body.on_ground);
        }
    }

    #[test]
    fn landing_is_idempotent_across_ticks() {
        let platform = Rect::new(100.0, 400.0, 150.0, 20.0);
        let mut body = body_at(120.0, 400.0 - SIZE - 2.0);
        body.vy = 6.0;
        for _ in 0..5 {
            resolve_motion(&mut body, 0.0, true, &[platform], &params());
            assert_eq!(body.rect.bottom(), platform.top());
            assert_eq!(body.vy, 0.0);
            assert!(body.on_ground);
        }
    }

    #[test]
    fn floor_clamp_catches_body_with_no_platform() {
        let mut body = body_at(10.0, 540.0);
        body.vy = 9.0;
        resolve_motion(&mut body, 0.0, true, &[], &params());
        assert_eq!(body.rect.bottom(), params().ground_top);
        assert_eq!(body.vy, 0.0);
        assert!(body.on_ground);
    }

    #[test]
    fn moving_right_clamps_against_platform_left_edge() {
        let wall = Rect::new(200.0, 300.0, 150.0, 100.0);
        // Vertical overlap well inside the side-collision band.
        let mut body = body_at(200.0 - SIZE - 3.0, 330.0);
        resolve_motion(&mut body, 8.0, true, &[wall], &params());
        assert_eq!(body.rect.right(), wall.left());
        assert!(!body.rect.intersects(&wall));
    }

    #[test]
    fn moving_left_clamps_against_platform_right_edge() {
        let wall = Rect::new(200.0, 300.0, 150.0, 100.0);
        let mut body = body_at(wall.right() + 3.0, 330.0);
        resolve_motion(&mut body, -8.0, false, &[wall], &params());
        assert_eq!(body.rect.left(), wall.right());
    }

    #[test]
    fn shallow_overlap_inside_margin_band_is_not_a_side_hit() {
        // Body skimming a thin platform from above: overlap stays within
        // the 5-unit band, so the horizontal phase leaves it alone and the
        // vertical phase lands it.
        let platform = Rect::new(150.0, 450.0, 150.0, 20.0);
        let mut body = body_at(130.0, 450.0 - SIZE + 3.0);
        body.vy = 2.0;
        resolve_motion(&mut body, 4.0, true, &[platform], &params());
        assert_eq!(body.rect.x, 134.0);
        assert_eq!(body.rect.bottom(), platform.top());
        assert!(body.on_ground);
    }

    #[test]
    fn side_margin_is_configurable() {
        let platform = Rect::new(150.0, 450.0, 150.0, 20.0);
        let mut wide = params();
        wide.side_margin = 0.0;
        // Same shallow overlap as above, but with no margin it now counts
        // as a side collision and clamps x.
        let mut body = body_at(130.0, 450.0 - SIZE + 3.0);
        resolve_motion(&mut body, 4.0, true, &[platform], &wide);
        assert_eq!(body.rect.right(), platform.left());
    }

    #[test]
    fn rising_body_bumps_head_on_platform_bottom() {
        let overhead = Rect::new(100.0, 200.0, 150.0, 20.0);
        let mut body = body_at(120.0, 222.0);
        body.vy = -10.0;
        resolve_motion(&mut body, 0.0, true, &[overhead], &params());
        assert_eq!(body.rect.top(), overhead.bottom());
        assert_eq!(body.vy, 0.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn seam_landing_resolves_against_highest_platform() {
        // Two platforms overlap horizontally at different heights; the
        // body straddles the seam. Whichever order the set lists them in,
        // the body lands on the higher one.
        let high = Rect::new(100.0, 390.0, 100.0, 20.0);
        let low = Rect::new(180.0, 400.0, 100.0, 20.0);
        for set in [[high, low], [low, high]] {
            let mut body = body_at(160.0, 390.0 - SIZE + 1.0);
            body.vy = 15.0;
            resolve_motion(&mut body, 0.0, true, &set, &params());
            assert_eq!(body.rect.bottom(), high.top());
            assert!(body.on_ground);
        }
    }

    #[test]
    fn jump_tick_nets_impulse_plus_gravity() {
        // Grounded body at y=502, jump sets vy=-12; one
        // tick with no horizontal delta and no platform contact ends at
        // y = 502 - 12 + 0.5 = 490.5.
        let p = params();
        let mut body = body_at(50.0, 502.0);
        body.on_ground = true;
        body.vy = p.jump_impulse;
        body.on_ground = false;
        resolve_motion(&mut body, 0.0, true, &[], &p);
        assert_eq!(body.rect.y, 490.5);
        assert_eq!(body.vy, -11.5);
        assert!(!body.on_ground);
    }

    #[test]
    fn gravity_accumulates_without_terminal_clamp() {
        let mut body = body_at(0.0, -10_000.0);
        let p = params();
        for _ in 0..100 {
            resolve_motion(&mut body, 0.0, true, &[], &p);
        }
        assert_eq!(body.vy, 50.0);
    }
}
