use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const CONFIG_FILE_NAME: &str = "tv_remote.json5";

// Settings read from JSON5 at startup. Television state is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigData {
    #[serde(default = "default_images_dir")] // Directory holding ch0.png..ch9.png
    pub images_dir: String,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_images_dir() -> String {
    DEFAULT_IMAGES_DIR.to_string()
}

fn default_window_width() -> f32 {
    crate::INITIAL_WIDTH
}

fn default_window_height() -> f32 {
    crate::INITIAL_HEIGHT
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

/// Default config location: `<config_dir>/tv_remote.json5`, or the current
/// directory when the platform has no config dir.
pub fn default_config_path() -> String {
    let config_dir = dirs::config_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    format!("{}/{}", config_dir, CONFIG_FILE_NAME)
}
