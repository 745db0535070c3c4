use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::components::{Body, Rect, Sprite};
use crate::session::Session;
use crate::ui::TextRenderer;

const SKY: Color = Color::RGB(100, 149, 237);
const GROUND_COLOR: Color = Color::RGB(0, 100, 0);
const PLATFORM_COLOR: Color = Color::RGB(139, 69, 19);
const GOAL_COLOR: Color = Color::RGB(255, 215, 0);
const GOAL_TEXT: Color = Color::RGB(0, 0, 0);
const MARKER: Color = Color::RGB(20, 20, 20);
/// Stands in for any frame key the palette does not know.
const PLACEHOLDER: Color = Color::RGB(255, 0, 255);

/// Flat tint standing in for the atlas entry behind a frame key. Unknown
/// keys get a loud placeholder instead of failing the frame.
fn tint(key: &str) -> Color {
    match key {
        "hero/front" => Color::RGB(255, 140, 0),
        "hero/jump" => Color::RGB(255, 175, 70),
        "hero/walk_a" => Color::RGB(255, 120, 0),
        "hero/walk_b" => Color::RGB(225, 100, 0),
        "snail/rest" => Color::RGB(85, 107, 47),
        "snail/shell" => Color::RGB(112, 128, 144),
        "snail/walk_a" => Color::RGB(107, 142, 35),
        "snail/walk_b" => Color::RGB(85, 120, 30),
        _ => PLACEHOLDER,
    }
}

fn to_sdl(r: &Rect) -> SdlRect {
    SdlRect::new(r.x as i32, r.y as i32, r.w as u32, r.h as u32)
}

/// Draws a session's level and entities onto the window canvas. Purely a
/// reader of simulation state.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw_scene(
        &self,
        canvas: &mut Canvas<Window>,
        session: &Session,
        text: &TextRenderer,
    ) -> Result<(), String> {
        canvas.set_draw_color(SKY);
        canvas.clear();

        let level = &session.level;
        for p in &level.platforms {
            let color = if level.is_ground(p) {
                GROUND_COLOR
            } else {
                PLATFORM_COLOR
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(to_sdl(p))?;
        }

        canvas.set_draw_color(GOAL_COLOR);
        canvas.fill_rect(to_sdl(&level.goal))?;
        text.draw_text_centered(
            canvas,
            "GOAL",
            level.goal.center_x() as i32,
            level.goal.center_y() as i32 - 7,
            2,
            GOAL_TEXT,
        )?;

        for (_e, (body, sprite)) in session.world.query::<(&Body, &Sprite)>().iter() {
            self.draw_entity(canvas, body, sprite)?;
        }
        Ok(())
    }

    /// Tinted box at the body's bottom-center anchor, with a dark marker on
    /// the facing side standing in for sprite mirroring.
    fn draw_entity(
        &self,
        canvas: &mut Canvas<Window>,
        body: &Body,
        sprite: &Sprite,
    ) -> Result<(), String> {
        let anchor = body.anchor();
        let w = body.rect.w as u32;
        let h = body.rect.h as u32;
        let x = (anchor.x - body.rect.w * 0.5) as i32;
        let y = (anchor.y - body.rect.h) as i32;

        canvas.set_draw_color(tint(sprite.frame));
        canvas.fill_rect(SdlRect::new(x, y, w, h))?;

        canvas.set_draw_color(MARKER);
        let marker_x = if sprite.facing_right {
            x + w as i32 - 12
        } else {
            x + 6
        };
        canvas.fill_rect(SdlRect::new(marker_x, y + 10, 6, 6))?;
        Ok(())
    }
}
