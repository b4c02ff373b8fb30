#[macro_use]
pub mod logger;

pub mod border;
pub mod color;
pub mod config;
pub mod error;
pub mod game_listener;
pub mod pacer;
pub mod pixel_buffer;
pub mod scroll;
pub mod sequence_game;
pub mod state_machine;
pub mod surface;

pub use error::{Error, Result};
