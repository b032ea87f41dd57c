pub mod console;
pub mod renderer;

pub use console::{Console, APP_TITLE, INPUT_PLACEHOLDER};
pub use renderer::{ChatRenderer, LoopControl};
