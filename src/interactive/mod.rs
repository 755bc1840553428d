//! Interactive terminal UI
//!
//! One screen, mirroring the game flow: type a guess, read the feedback,
//! press Enter again to play another round once it ends.

mod app;
mod rendering;

pub use app::{App, MAX_INPUT_LEN, Message, MessageStyle, run_tui};
pub use rendering::ui;
