pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_play_toggle_button};
pub use pointer::wire_pointermove;
