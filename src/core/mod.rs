pub mod backdrop;
pub mod card;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod counter;
pub mod gate;
pub mod grid;
pub mod keys;
pub mod motion;
pub mod ready;
pub mod reveal;

pub use backdrop::*;
pub use card::*;
pub use carousel::*;
pub use config::*;
pub use counter::*;
pub use gate::*;
pub use grid::*;
pub use keys::*;
pub use motion::*;
pub use ready::*;
pub use reveal::*;
