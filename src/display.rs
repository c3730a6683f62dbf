use std::fmt;

// Identifies the picture the screen view should show
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Channel(u8), // Picture for a tuned channel
    Nothingness, // Blank screen while the set is off
}

impl ImageKey {
    /// File name of the picture inside the configured images directory.
    pub fn file_name(&self) -> String {
        format!("{}.png", self)
    }
}

// How the key is written, e.g. "ch3" or "nothingness"
impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImageKey::Channel(ch) => write!(f, "ch{}", ch),
            ImageKey::Nothingness => write!(f, "nothingness"),
        }
    }
}

/// The externally visible projection of the television state.
///
/// Digit displays and slider positions show `displayed_channel` and
/// `displayed_volume`; the screen view loads the picture named by `image_key`.
/// `powered` and `muted` drive the button indicators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pub displayed_channel: u8,
    pub displayed_volume: u8,
    pub image_key: ImageKey,
    pub powered: bool,
    pub muted: bool,
}

// Payload of a refresh notification
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayUpdate {
    // Digits, sliders, picture and indicators
    Full(DisplaySnapshot),
    // Volume digits, volume slider and mute indicator only
    Volume { displayed_volume: u8, muted: bool },
    // Channel slider back to 0
    ResetChannelControl,
}

/// Receives refresh notifications from the television.
///
/// This is the only way state leaves the core; implementors own every
/// rendering concern.
pub trait RefreshListener {
    fn on_refresh(&mut self, update: DisplayUpdate);
}

// Headless listener, drops every notification
impl RefreshListener for () {
    fn on_refresh(&mut self, _update: DisplayUpdate) {}
}
