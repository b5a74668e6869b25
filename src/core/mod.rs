pub mod arena;
pub mod color;
pub mod config;
pub mod constants;
pub mod effects;
pub mod keymap;
pub mod lifecycle;
pub mod pad;
pub mod picker;
pub mod stroke;

pub use arena::*;
pub use color::*;
pub use config::*;
pub use effects::*;
pub use keymap::*;
pub use lifecycle::*;
pub use pad::*;
pub use picker::*;
pub use stroke::*;
