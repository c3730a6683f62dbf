use crate::display::{DisplaySnapshot, DisplayUpdate, ImageKey, RefreshListener};
use log::{debug, trace, warn};

pub const MIN_CHANNEL: u8 = 0;
pub const MAX_CHANNEL: u8 = 9;
pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 9;

/// Power, mute, channel and volume of the set, plus the listener that is
/// told about every observable change.
///
/// Stored channel and volume survive power cycles and muting; only the
/// displayed values are forced to 0 (see [`TelevisionState::snapshot`]).
pub struct TelevisionState<L: RefreshListener> {
    power: bool,
    muted: bool,
    channel: u8, // MIN_CHANNEL..=MAX_CHANNEL
    volume: u8,  // MIN_VOLUME..=MAX_VOLUME
    listener: L,
}

impl<L: RefreshListener> TelevisionState<L> {
    pub fn new(listener: L) -> Self {
        Self {
            power: false,
            muted: false,
            channel: MIN_CHANNEL,
            volume: MIN_VOLUME,
            listener,
        }
    }

    // --- Accessors ---

    pub fn is_powered(&self) -> bool {
        self.power
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Stored channel, regardless of power.
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Stored volume, regardless of power or mute.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    // --- Operations ---

    pub fn power_toggle(&mut self) {
        self.power = !self.power;
        debug!("Power toggled: {}", if self.power { "on" } else { "off" });
        self.refresh();
    }

    /// Flips mute while powered. Only the volume display is refreshed.
    pub fn mute_toggle(&mut self) {
        if !self.power {
            trace!("Mute ignored: set is off.");
            return;
        }
        self.muted = !self.muted;
        debug!("Mute toggled: {}", self.muted);
        let displayed_volume = self.snapshot().displayed_volume;
        self.listener.on_refresh(DisplayUpdate::Volume {
            displayed_volume,
            muted: self.muted,
        });
    }

    /// Next channel, wrapping past MAX_CHANNEL. Refreshes even when off.
    pub fn channel_up(&mut self) {
        if self.power {
            self.channel = if self.channel >= MAX_CHANNEL {
                MIN_CHANNEL
            } else {
                self.channel + 1
            };
            debug!("Channel up: {}", self.channel);
        }
        self.refresh();
    }

    /// Previous channel, wrapping below MIN_CHANNEL. Refreshes even when off.
    pub fn channel_down(&mut self) {
        if self.power {
            self.channel = if self.channel <= MIN_CHANNEL {
                MAX_CHANNEL
            } else {
                self.channel - 1
            };
            debug!("Channel down: {}", self.channel);
        }
        self.refresh();
    }

    /// Clears mute and raises the volume by one. At the ceiling nothing is
    /// refreshed, even if mute was just cleared.
    pub fn volume_up(&mut self) {
        if !self.power {
            return;
        }
        self.muted = false;
        if self.volume < MAX_VOLUME {
            self.volume += 1;
            debug!("Volume up: {}", self.volume);
            self.refresh();
        } else {
            trace!("Volume already at max ({}).", MAX_VOLUME);
        }
    }

    /// Clears mute and lowers the volume by one. At the floor nothing is
    /// refreshed, even if mute was just cleared.
    pub fn volume_down(&mut self) {
        if !self.power {
            return;
        }
        self.muted = false;
        if self.volume > MIN_VOLUME {
            self.volume -= 1;
            debug!("Volume down: {}", self.volume);
            self.refresh();
        } else {
            trace!("Volume already at min ({}).", MIN_VOLUME);
        }
    }

    /// Adopts a channel reported by an external control.
    ///
    /// While off the request is rejected and the control is told to go
    /// back to 0; the stored channel is left alone.
    pub fn set_channel(&mut self, requested: u8) {
        if !self.power {
            debug!("Channel {} rejected: set is off.", requested);
            self.listener.on_refresh(DisplayUpdate::ResetChannelControl);
            return;
        }
        self.channel = clamp_request("channel", requested, MAX_CHANNEL);
        debug!("Channel set: {}", self.channel);
        self.refresh();
    }

    /// Adopts a volume reported by an external control, only while powered
    /// and unmuted.
    pub fn set_volume(&mut self, requested: u8) {
        if !self.power || self.muted {
            trace!(
                "Volume {} ignored (power={}, muted={}).",
                requested,
                self.power,
                self.muted
            );
            return;
        }
        let volume = clamp_request("volume", requested, MAX_VOLUME);
        if volume == self.volume {
            return;
        }
        self.volume = volume;
        debug!("Volume set: {}", self.volume);
        self.refresh();
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            displayed_channel: if self.power { self.channel } else { 0 },
            displayed_volume: if !self.power || self.muted {
                0
            } else {
                self.volume
            },
            image_key: if self.power {
                ImageKey::Channel(self.channel)
            } else {
                ImageKey::Nothingness
            },
            powered: self.power,
            muted: self.muted,
        }
    }

    /// Pushes the full current snapshot to the listener.
    pub fn refresh(&mut self) {
        let snapshot = self.snapshot();
        trace!("Refresh: {:?}", snapshot);
        self.listener.on_refresh(DisplayUpdate::Full(snapshot));
    }
}

impl Default for TelevisionState<()> {
    fn default() -> Self {
        Self::new(())
    }
}

// Callers clamp before calling; anything above the bound is a caller bug.
fn clamp_request(what: &str, requested: u8, max: u8) -> u8 {
    if requested > max {
        warn!(
            "Requested {} {} out of range, clamping to {}.",
            what, requested, max
        );
        max
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        updates: Vec<DisplayUpdate>,
    }

    impl RefreshListener for Recorder {
        fn on_refresh(&mut self, update: DisplayUpdate) {
            self.updates.push(update);
        }
    }

    fn powered() -> TelevisionState<Recorder> {
        let mut tv = TelevisionState::new(Recorder::default());
        tv.power_toggle();
        tv.listener_mut().updates.clear();
        tv
    }

    #[test]
    fn test_defaults() {
        let tv = TelevisionState::default();
        assert!(!tv.is_powered());
        assert!(!tv.is_muted());
        assert_eq!(tv.channel(), MIN_CHANNEL);
        assert_eq!(tv.volume(), MIN_VOLUME);
    }

    #[test]
    fn test_power_toggle_refreshes() {
        let mut tv = TelevisionState::new(Recorder::default());
        tv.power_toggle();
        assert_eq!(
            tv.listener().updates,
            vec![DisplayUpdate::Full(DisplaySnapshot {
                displayed_channel: 0,
                displayed_volume: 0,
                image_key: ImageKey::Channel(0),
                powered: true,
                muted: false,
            })]
        );
    }

    #[test]
    fn test_channel_wraps() {
        let mut tv = powered();
        tv.channel_down();
        assert_eq!(tv.channel(), MAX_CHANNEL);
        tv.channel_up();
        assert_eq!(tv.channel(), MIN_CHANNEL);
        assert_eq!(tv.listener().updates.len(), 2);
    }

    #[test]
    fn test_channel_up_while_off_still_refreshes() {
        let mut tv = TelevisionState::new(Recorder::default());
        tv.channel_up();
        assert_eq!(tv.channel(), 0);
        assert_eq!(
            tv.listener().updates,
            vec![DisplayUpdate::Full(DisplaySnapshot {
                displayed_channel: 0,
                displayed_volume: 0,
                image_key: ImageKey::Nothingness,
                powered: false,
                muted: false,
            })]
        );
    }

    #[test]
    fn test_volume_ceiling_does_not_refresh() {
        let mut tv = powered();
        for _ in 0..MAX_VOLUME {
            tv.volume_up();
        }
        assert_eq!(tv.listener().updates.len(), MAX_VOLUME as usize);
        tv.volume_up();
        assert_eq!(tv.volume(), MAX_VOLUME);
        assert_eq!(tv.listener().updates.len(), MAX_VOLUME as usize);
    }

    #[test]
    fn test_volume_floor_clears_mute_without_refresh() {
        let mut tv = powered();
        tv.mute_toggle();
        tv.listener_mut().updates.clear();
        tv.volume_down();
        assert!(!tv.is_muted());
        assert!(tv.listener().updates.is_empty());
    }

    #[test]
    fn test_volume_ops_ignored_while_off() {
        let mut tv = TelevisionState::new(Recorder::default());
        tv.volume_up();
        tv.volume_down();
        tv.set_volume(5);
        assert_eq!(tv.volume(), 0);
        assert!(tv.listener().updates.is_empty());
    }

    #[test]
    fn test_mute_refreshes_volume_only() {
        let mut tv = powered();
        tv.volume_up();
        tv.volume_up();
        tv.listener_mut().updates.clear();
        tv.mute_toggle();
        tv.mute_toggle();
        assert_eq!(
            tv.listener().updates,
            vec![
                DisplayUpdate::Volume { displayed_volume: 0, muted: true },
                DisplayUpdate::Volume { displayed_volume: 2, muted: false },
            ]
        );
        assert_eq!(tv.volume(), 2);
    }

    #[test]
    fn test_set_channel_rejected_while_off() {
        let mut tv = TelevisionState::new(Recorder::default());
        tv.set_channel(7);
        assert_eq!(tv.channel(), 0);
        assert_eq!(tv.listener().updates, vec![DisplayUpdate::ResetChannelControl]);
    }

    #[test]
    fn test_set_channel_clamps_out_of_range() {
        let mut tv = powered();
        tv.set_channel(42);
        assert_eq!(tv.channel(), MAX_CHANNEL);
    }

    #[test]
    fn test_set_volume_ignored_while_muted() {
        let mut tv = powered();
        tv.mute_toggle();
        tv.listener_mut().updates.clear();
        tv.set_volume(6);
        assert_eq!(tv.volume(), 0);
        assert!(tv.listener().updates.is_empty());
    }

    #[test]
    fn test_set_volume_refreshes_on_change() {
        let mut tv = powered();
        tv.set_volume(6);
        assert_eq!(tv.volume(), 6);
        assert_eq!(tv.snapshot().displayed_volume, 6);
        assert_eq!(tv.listener().updates.len(), 1);
        tv.set_volume(6);
        assert_eq!(tv.listener().updates.len(), 1);
    }
}
