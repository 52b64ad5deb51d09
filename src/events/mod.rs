pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, DragState, InputWiring};
pub use touch::wire_touch_handlers;
