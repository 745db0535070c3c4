pub mod audio;
pub mod input;
pub mod time;
pub mod window;

pub use audio::{Audio, AudioError, Cue};
pub use input::{InputEvent, InputState, Intent};
pub use time::FrameTimer;
pub use window::GameWindow;
