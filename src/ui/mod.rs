pub mod menu;
pub mod overlay;
pub mod text;

pub use menu::{MainMenu, MenuAction};
pub use overlay::{GameOverOverlay, OverlayAction};
pub use text::TextRenderer;
