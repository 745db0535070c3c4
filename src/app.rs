use sdl2::keyboard::Scancode;
use sdl2::Sdl;

use crate::engine::audio::{Audio, Cue};
use crate::engine::input::{InputEvent, InputState};
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::Renderer;
use crate::session::{Outcome, Session};
use crate::ui::{GameOverOverlay, MainMenu, MenuAction, OverlayAction, TextRenderer};

/// Fixed simulation step. Rendering runs at whatever rate vsync gives us;
/// the accumulator ticks the session at exactly this cadence.
pub const TICK_DT: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Menu,
    Playing,
    GameOver(Outcome),
}

pub struct GameApp {
    session: Session,
    renderer: Renderer,
    text: TextRenderer,
    menu: MainMenu,
    overlay: GameOverOverlay,
    phase: Phase,
    audio: Option<Audio>,
    sound_enabled: bool,
    tick_accum: f32,
}

impl GameApp {
    pub fn new(session: Session, audio: Option<Audio>, muted: bool) -> Self {
        let sound_enabled = !muted;
        let mut audio = audio;
        if let Some(a) = audio.as_mut() {
            a.set_enabled(sound_enabled);
        }
        Self {
            session,
            renderer: Renderer::new(),
            text: TextRenderer::new(),
            menu: MainMenu::new(),
            overlay: GameOverOverlay::new(),
            phase: Phase::Menu,
            audio,
            sound_enabled,
            tick_accum: 0.0,
        }
    }

    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) {
        let mut event_pump = sdl.event_pump().expect("Failed to get event pump");
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        'main: loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.should_quit() {
                break;
            }

            // Escape returns to the menu from play or game over. The menu
            // skips input on that frame so the same press cannot also quit.
            let mut just_entered_menu = false;
            if self.phase != Phase::Menu {
                for event in &input.events {
                    if let InputEvent::KeyPressed(Scancode::Escape) = event {
                        self.enter_menu();
                        just_entered_menu = true;
                    }
                }
            }

            match self.phase {
                Phase::Menu => {
                    let action = if just_entered_menu {
                        MenuAction::None
                    } else {
                        self.menu.handle_input(&input.events)
                    };
                    match action {
                        MenuAction::Start => self.start_run(),
                        MenuAction::ToggleSound => self.toggle_sound(),
                        MenuAction::Quit => break 'main,
                        MenuAction::None => {}
                    }
                }
                Phase::Playing => {
                    let intent = input.intent();
                    self.tick_accum += timer.dt;
                    while self.tick_accum >= TICK_DT {
                        self.tick_accum -= TICK_DT;
                        let events = self.session.tick(intent);
                        if events.jumped {
                            self.cue(Cue::Jump);
                        }
                        if let Some(outcome) = events.outcome {
                            self.cue(match outcome {
                                Outcome::Won => Cue::Win,
                                Outcome::Caught => Cue::Caught,
                            });
                            self.phase = Phase::GameOver(outcome);
                            break;
                        }
                    }
                }
                Phase::GameOver(_) => {
                    if self.overlay.handle_input(&input.events) == OverlayAction::Menu {
                        self.enter_menu();
                    }
                }
            }

            if let Err(e) = self.render(window) {
                log::error!("render failed: {e}");
            }
            window.present();
        }
    }

    fn render(&mut self, window: &mut GameWindow) -> Result<(), String> {
        let canvas = window.canvas();
        match self.phase {
            Phase::Menu => self.menu.draw(canvas, &self.text, self.sound_enabled),
            Phase::Playing => self.renderer.draw_scene(canvas, &self.session, &self.text),
            Phase::GameOver(outcome) => {
                self.renderer.draw_scene(canvas, &self.session, &self.text)?;
                self.overlay.draw(canvas, &self.text, outcome)
            }
        }
    }

    fn start_run(&mut self) {
        log::info!("starting run");
        self.session.reset();
        self.tick_accum = 0.0;
        self.phase = Phase::Playing;
    }

    fn enter_menu(&mut self) {
        self.menu.reset_selection();
        self.phase = Phase::Menu;
    }

    fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        match self.audio.as_mut() {
            Some(a) => a.set_enabled(self.sound_enabled),
            None => log::warn!("sound toggled but no audio device is available"),
        }
        log::info!(
            "sound {}",
            if self.sound_enabled { "on" } else { "off" }
        );
    }

    fn cue(&mut self, cue: Cue) {
        if let Some(a) = self.audio.as_mut() {
            a.play(cue);
        }
    }
}
