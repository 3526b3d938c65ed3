pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_cursor, wire_magnetic, wire_tilt, wire_work_hover};
pub use scroll::{wire_nav_scroll, wire_parallax};
