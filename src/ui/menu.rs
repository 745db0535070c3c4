use sdl2::keyboard::Scancode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::engine::input::InputEvent;
use crate::ui::text::TextRenderer;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuAction {
    None,
    Start,
    ToggleSound,
    Quit,
}

const TITLE: &str = "PLATFORM ADVENTURE";
const ITEM_COUNT: usize = 3;

const TITLE_Y: i32 = 130;
const ITEMS_Y: i32 = 250;
const ITEM_SPACING: i32 = 60;
const TITLE_SCALE: u32 = 6;
const ITEM_SCALE: u32 = 4;

const BACKGROUND: Color = Color::RGB(100, 149, 237);
const SELECTED_COLOR: Color = Color::RGB(255, 215, 0);
const ITEM_COLOR: Color = Color::RGB(255, 255, 255);

pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    pub fn handle_input(&mut self, events: &[InputEvent]) -> MenuAction {
        for event in events {
            match event {
                InputEvent::KeyPressed(Scancode::Up | Scancode::W) => {
                    self.selected = (self.selected + ITEM_COUNT - 1) % ITEM_COUNT;
                }
                InputEvent::KeyPressed(Scancode::Down | Scancode::S) => {
                    self.selected = (self.selected + 1) % ITEM_COUNT;
                }
                InputEvent::KeyPressed(Scancode::Return | Scancode::KpEnter) => {
                    return match self.selected {
                        0 => MenuAction::Start,
                        1 => MenuAction::ToggleSound,
                        _ => MenuAction::Quit,
                    };
                }
                InputEvent::KeyPressed(Scancode::Escape) => {
                    return MenuAction::Quit;
                }
                _ => {}
            }
        }
        MenuAction::None
    }

    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        text: &TextRenderer,
        sound_enabled: bool,
    ) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();

        let center_x = canvas.viewport().width() as i32 / 2;
        text.draw_text_centered(canvas, TITLE, center_x, TITLE_Y, TITLE_SCALE, ITEM_COLOR)?;

        let sound_label = if sound_enabled { "SOUND: ON" } else { "SOUND: OFF" };
        let items = ["START GAME", sound_label, "EXIT"];
        for (i, item) in items.iter().enumerate() {
            let color = if i == self.selected {
                SELECTED_COLOR
            } else {
                ITEM_COLOR
            };
            let y = ITEMS_Y + i as i32 * ITEM_SPACING;
            text.draw_text_centered(canvas, item, center_x, y, ITEM_SCALE, color)?;
            if i == self.selected {
                let offset = text.text_width(item, ITEM_SCALE) as i32 / 2 + 20;
                text.draw_text(canvas, ">", center_x - offset, y, ITEM_SCALE, color)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(sc: Scancode) -> [InputEvent; 1] {
        [InputEvent::KeyPressed(sc)]
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut menu = MainMenu::new();
        menu.handle_input(&press(Scancode::Up));
        assert_eq!(menu.handle_input(&press(Scancode::Return)), MenuAction::Quit);

        let mut menu = MainMenu::new();
        menu.handle_input(&press(Scancode::Down));
        menu.handle_input(&press(Scancode::Down));
        menu.handle_input(&press(Scancode::Down));
        assert_eq!(menu.handle_input(&press(Scancode::Return)), MenuAction::Start);
    }

    #[test]
    fn return_maps_selection_to_action() {
        let mut menu = MainMenu::new();
        assert_eq!(menu.handle_input(&press(Scancode::Return)), MenuAction::Start);
        menu.handle_input(&press(Scancode::Down));
        assert_eq!(
            menu.handle_input(&press(Scancode::Return)),
            MenuAction::ToggleSound
        );
    }

    #[test]
    fn escape_quits_from_menu() {
        let mut menu = MainMenu::new();
        assert_eq!(menu.handle_input(&press(Scancode::Escape)), MenuAction::Quit);
    }
}
