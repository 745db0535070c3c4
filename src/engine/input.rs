use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

/// Edge-triggered input event, for menus and one-shot actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Scancode),
}

/// Per-tick control request handed to the player system. `axis` is the
/// held direction (-1, 0 or +1); `jump` is a level, not an edge, so
/// holding Space keeps requesting jumps and the grounded gate decides.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intent {
    pub axis: i8,
    pub jump: bool,
}

pub struct InputState {
    pub keys: HashSet<Scancode>,
    pub events: Vec<InputEvent>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            events: Vec::new(),
            quit: false,
        }
    }

    /// Drain the SDL event queue. Key presses are edge-detected against the
    /// held set, so OS key repeat never produces duplicate events.
    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc), ..
                } => {
                    if self.keys.insert(sc) {
                        self.events.push(InputEvent::KeyPressed(sc));
                    }
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                }
                _ => {}
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    /// Fold the held keys into a player intent. Arrows and WASD both work;
    /// opposite directions cancel.
    pub fn intent(&self) -> Intent {
        let right = self.is_key_held(Scancode::Right) || self.is_key_held(Scancode::D);
        let left = self.is_key_held(Scancode::Left) || self.is_key_held(Scancode::A);
        Intent {
            axis: right as i8 - left as i8,
            jump: self.is_key_held(Scancode::Space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Scancode]) -> InputState {
        let mut input = InputState::new();
        input.keys.extend(keys);
        input
    }

    #[test]
    fn opposite_directions_cancel() {
        let input = held(&[Scancode::Left, Scancode::Right]);
        assert_eq!(input.intent().axis, 0);
    }

    #[test]
    fn wasd_aliases_arrows() {
        assert_eq!(held(&[Scancode::D]).intent().axis, 1);
        assert_eq!(held(&[Scancode::A]).intent().axis, -1);
    }

    #[test]
    fn space_requests_jump() {
        assert!(held(&[Scancode::Space]).intent().jump);
        assert!(!held(&[]).intent().jump);
    }
}
