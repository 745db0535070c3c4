mod app;
mod components;
mod engine;
mod fsm;
mod renderer;
mod scene;
mod session;
mod systems;
mod ui;

use app::GameApp;
use clap::Parser;
use engine::audio::Audio;
use engine::window::GameWindow;
use scene::{Level, WORLD_H, WORLD_W};
use session::Session;

#[derive(Parser)]
#[command(name = "rind", about = "A small side-scrolling platformer")]
struct Args {
    /// Seed for enemy spawn draws (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with sound off
    #[arg(long)]
    muted: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let level = Level::standard().expect("Failed to build level");
    let session = Session::new(level, args.seed);

    let sdl = sdl2::init().expect("Failed to init SDL2");
    let mut window = GameWindow::new(&sdl, "Platform Adventure", WORLD_W as u32, WORLD_H as u32);

    let audio = match Audio::new(&sdl) {
        Ok(audio) => Some(audio),
        Err(e) => {
            log::warn!("audio unavailable, continuing silently: {e}");
            None
        }
    };

    let mut app = GameApp::new(session, audio, args.muted);
    app.run(&sdl, &mut window);
}
