use sdl2::keyboard::Scancode;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::engine::input::InputEvent;
use crate::session::Outcome;
use crate::ui::text::TextRenderer;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OverlayAction {
    None,
    Menu,
}

const DIM: Color = Color::RGBA(0, 0, 0, 128);
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);

/// End-of-run screen drawn over the frozen scene.
pub struct GameOverOverlay;

impl GameOverOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&self, events: &[InputEvent]) -> OverlayAction {
        for event in events {
            if let InputEvent::KeyPressed(
                Scancode::Return | Scancode::KpEnter | Scancode::Space,
            ) = event
            {
                return OverlayAction::Menu;
            }
        }
        OverlayAction::None
    }

    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        text: &TextRenderer,
        outcome: Outcome,
    ) -> Result<(), String> {
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(DIM);
        let full = canvas.viewport();
        canvas.fill_rect(full)?;
        canvas.set_blend_mode(BlendMode::None);

        let reason = match outcome {
            Outcome::Won => "YOU WIN!",
            Outcome::Caught => "GAME OVER! YOU WERE CAUGHT!",
        };
        let center_x = full.width() as i32 / 2;
        let center_y = full.height() as i32 / 2;
        text.draw_text_centered(canvas, reason, center_x, center_y - 50, 4, TEXT_COLOR)?;
        text.draw_text_centered(
            canvas,
            "PRESS ENTER OR SPACE FOR MENU",
            center_x,
            center_y + 50,
            2,
            TEXT_COLOR,
        )?;
        Ok(())
    }
}
