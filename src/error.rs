use thiserror::Error;

// Everything that can go wrong before the control panel is up.
// Television operations themselves never fail.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load configuration from {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to start the user interface: {0}")]
    Ui(#[from] eframe::Error),
}
