use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::Sdl;

/// SDL window plus its 2D canvas.
pub struct GameWindow {
    canvas: Canvas<Window>,
}

impl GameWindow {
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32) -> Self {
        let video = sdl.video().expect("Failed to init SDL2 video");

        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .expect("Failed to create window");

        let canvas = window
            .into_canvas()
            .present_vsync()
            .build()
            .expect("Failed to create canvas");

        Self { canvas }
    }

    pub fn canvas(&mut self) -> &mut Canvas<Window> {
        &mut self.canvas
    }

    pub fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}
