//! The television state container.

use super::control::Control;
use super::snapshot::Snapshot;
use std::fmt;

/// A television with power, mute, channel, and volume controls.
///
/// Every control except [`Television::power`] is a silent no-op while the
/// set is off. Channels wrap around at both ends; volume clamps. Adjusting
/// the volume clears mute before the clamp is applied.
///
/// Mute is left untouched by [`Television::power`], so a set muted before
/// being switched off comes back on muted.
///
/// # Example
///
/// ```rust
/// use television::core::Television;
///
/// let mut tv = Television::new();
/// tv.power();
/// for _ in 0..4 {
///     tv.channel_up();
/// }
/// for _ in 0..3 {
///     tv.volume_up();
/// }
///
/// assert_eq!(tv.render(), "Power = true, Channel = 0, Volume = 2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Television {
    power: bool,
    muted: bool,
    volume: u8,
    channel: u8,
}

impl Television {
    pub const MIN_VOLUME: u8 = 0;
    pub const MAX_VOLUME: u8 = 2;
    pub const MIN_CHANNEL: u8 = 0;
    pub const MAX_CHANNEL: u8 = 3;

    /// Create a television that is off, unmuted, at minimum volume and channel.
    pub fn new() -> Self {
        Self {
            power: false,
            muted: false,
            volume: Self::MIN_VOLUME,
            channel: Self::MIN_CHANNEL,
        }
    }

    /// Assemble a television from already validated fields.
    pub(crate) fn from_parts(power: bool, muted: bool, volume: u8, channel: u8) -> Self {
        debug_assert!((Self::MIN_VOLUME..=Self::MAX_VOLUME).contains(&volume));
        debug_assert!((Self::MIN_CHANNEL..=Self::MAX_CHANNEL).contains(&channel));
        Self {
            power,
            muted,
            volume,
            channel,
        }
    }

    /// Toggle power.
    pub fn power(&mut self) {
        self.apply(Control::Power);
    }

    /// Toggle mute.
    pub fn mute(&mut self) {
        self.apply(Control::Mute);
    }

    /// Next channel while on, wrapping from [`Television::MAX_CHANNEL`] to
    /// [`Television::MIN_CHANNEL`].
    pub fn channel_up(&mut self) {
        self.apply(Control::ChannelUp);
    }

    /// Previous channel while on, wrapping from [`Television::MIN_CHANNEL`]
    /// to [`Television::MAX_CHANNEL`].
    pub fn channel_down(&mut self) {
        self.apply(Control::ChannelDown);
    }

    /// Clear mute and raise the volume while on, clamped at
    /// [`Television::MAX_VOLUME`].
    pub fn volume_up(&mut self) {
        self.apply(Control::VolumeUp);
    }

    /// Clear mute and lower the volume while on, clamped at
    /// [`Television::MIN_VOLUME`].
    pub fn volume_down(&mut self) {
        self.apply(Control::VolumeDown);
    }

    /// Perform `control` if its guard admits the current state.
    ///
    /// Returns whether the control was admitted. An admitted control may
    /// still leave the state unchanged, e.g. `VolumeUp` at maximum volume
    /// with mute already off.
    pub fn apply(&mut self, control: Control) -> bool {
        if !control.can_execute(self) {
            return false;
        }

        match control {
            Control::Power => self.power = !self.power,
            Control::Mute => self.muted = !self.muted,
            Control::ChannelUp => {
                self.channel = if self.channel < Self::MAX_CHANNEL {
                    self.channel + 1
                } else {
                    Self::MIN_CHANNEL
                };
            }
            Control::ChannelDown => {
                self.channel = if self.channel > Self::MIN_CHANNEL {
                    self.channel - 1
                } else {
                    Self::MAX_CHANNEL
                };
            }
            Control::VolumeUp => {
                self.muted = false;
                if self.volume < Self::MAX_VOLUME {
                    self.volume += 1;
                }
            }
            Control::VolumeDown => {
                self.muted = false;
                if self.volume > Self::MIN_VOLUME {
                    self.volume -= 1;
                }
            }
        }
        true
    }

    /// Whether the set is powered on. Every control but power needs this.
    pub fn is_on(&self) -> bool {
        self.power
    }

    /// Whether mute is set. Survives power toggles.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Stored volume, regardless of mute.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Current channel, within [`Television::MIN_CHANNEL`]..=[`Television::MAX_CHANNEL`].
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Volume as shown on screen: [`Television::MIN_VOLUME`] while muted.
    pub fn effective_volume(&self) -> u8 {
        if self.muted {
            Self::MIN_VOLUME
        } else {
            self.volume
        }
    }

    /// Copy the current state into a serializable [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            power: self.power,
            muted: self.muted,
            volume: self.volume,
            channel: self.channel,
        }
    }

    /// Render as `Power = <bool>, Channel = <int>, Volume = <int>`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
