use crate::display::{DisplayUpdate, ImageKey, RefreshListener};
use log::trace;
use std::path::PathBuf;

// Mirror of the control panel widgets, kept in sync by refresh notifications.
// The ui module draws straight from these fields and never asks the core.
#[derive(Debug, Clone)]
pub struct PanelModel {
    pub channel_digits: u8,
    pub volume_digits: u8,
    pub channel_slider: u8,
    pub volume_slider: u8,
    pub image_key: ImageKey,
    pub power_indicator: bool, // Power button lit
    pub mute_indicator: bool,  // Mute button and volume digits highlighted
    images_dir: PathBuf,
    refresh_count: u64, // Notifications received so far
}

impl PanelModel {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            channel_digits: 0,
            volume_digits: 0,
            channel_slider: 0,
            volume_slider: 0,
            image_key: ImageKey::Nothingness,
            power_indicator: false,
            mute_indicator: false,
            images_dir: images_dir.into(),
            refresh_count: 0,
        }
    }

    /// Path of the picture for the current image key.
    pub fn image_path(&self) -> PathBuf {
        self.images_dir.join(self.image_key.file_name())
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

impl RefreshListener for PanelModel {
    fn on_refresh(&mut self, update: DisplayUpdate) {
        self.refresh_count += 1;
        trace!("Panel refresh #{}: {:?}", self.refresh_count, update);
        match update {
            DisplayUpdate::Full(snapshot) => {
                self.channel_digits = snapshot.displayed_channel;
                self.channel_slider = snapshot.displayed_channel;
                self.volume_digits = snapshot.displayed_volume;
                self.volume_slider = snapshot.displayed_volume;
                self.image_key = snapshot.image_key;
                self.power_indicator = snapshot.powered;
                self.mute_indicator = snapshot.muted;
            }
            DisplayUpdate::Volume {
                displayed_volume,
                muted,
            } => {
                self.volume_digits = displayed_volume;
                self.volume_slider = displayed_volume;
                self.mute_indicator = muted;
            }
            DisplayUpdate::ResetChannelControl => {
                self.channel_slider = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplaySnapshot;
    use std::path::Path;

    #[test]
    fn test_full_refresh_updates_everything() {
        let mut panel = PanelModel::new("pics");
        panel.on_refresh(DisplayUpdate::Full(DisplaySnapshot {
            displayed_channel: 3,
            displayed_volume: 5,
            image_key: ImageKey::Channel(3),
            powered: true,
            muted: false,
        }));
        assert_eq!(panel.channel_digits, 3);
        assert_eq!(panel.channel_slider, 3);
        assert_eq!(panel.volume_digits, 5);
        assert_eq!(panel.volume_slider, 5);
        assert!(panel.power_indicator);
        assert!(!panel.mute_indicator);
        assert_eq!(panel.image_path(), Path::new("pics").join("ch3.png"));
        assert_eq!(panel.refresh_count(), 1);
    }

    #[test]
    fn test_volume_refresh_leaves_channel_alone() {
        let mut panel = PanelModel::new("pics");
        panel.channel_digits = 4;
        panel.channel_slider = 4;
        panel.power_indicator = true;
        panel.on_refresh(DisplayUpdate::Volume {
            displayed_volume: 0,
            muted: true,
        });
        assert_eq!(panel.channel_digits, 4);
        assert_eq!(panel.channel_slider, 4);
        assert_eq!(panel.volume_slider, 0);
        assert!(panel.mute_indicator);
        assert!(panel.power_indicator);
    }

    #[test]
    fn test_reset_channel_control() {
        let mut panel = PanelModel::new("pics");
        panel.channel_slider = 7;
        panel.on_refresh(DisplayUpdate::ResetChannelControl);
        assert_eq!(panel.channel_slider, 0);
        assert_eq!(panel.channel_digits, 0);
        assert_eq!(panel.image_path(), Path::new("pics").join("nothingness.png"));
    }
}
