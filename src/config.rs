use std::time::Duration;

use crate::{
    color::{RGB, RGB_GRAY, RGB_RED},
    logger::Level,
    scroll::BorderColors,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub step_delay: Duration,
    pub border_colors: BorderColors,
    pub try_scroll_color: RGB,
    /// Shortest time the blocked edge stays lit in `try_scroll`.
    pub min_flash: Duration,
    pub target_length: usize,
    pub seed: Option<u64>,
    pub log_file_path: Option<String>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(200),
            border_colors: BorderColors::uniform(RGB_GRAY),
            try_scroll_color: RGB_RED,
            min_flash: Duration::from_millis(500),
            target_length: 5,
            seed: None,
            log_file_path: None,
            log_level: Level::Info,
        }
    }
}
