//! Builder for constructing televisions in a chosen starting state.

use crate::builder::error::BuildError;
use crate::core::{Snapshot, Television};

/// Builder for constructing a television with a fluent API.
///
/// Unset fields keep the defaults of [`Television::new`].
///
/// # Example
///
/// ```
/// use television::builder::TelevisionBuilder;
///
/// let tv = TelevisionBuilder::new()
///     .power(true)
///     .channel(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(tv.render(), "Power = true, Channel = 3, Volume = 0");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TelevisionBuilder {
    power: bool,
    muted: bool,
    volume: Option<u8>,
    channel: Option<u8>,
}

impl TelevisionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn power(mut self, on: bool) -> Self {
        self.power = on;
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn volume(mut self, volume: u8) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Build the television.
    /// Returns an error if the volume or channel is out of range.
    pub fn build(self) -> Result<Television, BuildError> {
        let volume = self.volume.unwrap_or(Television::MIN_VOLUME);
        if !(Television::MIN_VOLUME..=Television::MAX_VOLUME).contains(&volume) {
            return Err(BuildError::VolumeOutOfRange {
                value: volume,
                min: Television::MIN_VOLUME,
                max: Television::MAX_VOLUME,
            });
        }

        let channel = self.channel.unwrap_or(Television::MIN_CHANNEL);
        if !(Television::MIN_CHANNEL..=Television::MAX_CHANNEL).contains(&channel) {
            return Err(BuildError::ChannelOutOfRange {
                value: channel,
                min: Television::MIN_CHANNEL,
                max: Television::MAX_CHANNEL,
            });
        }

        Ok(Television::from_parts(self.power, self.muted, volume, channel))
    }
}

impl From<Snapshot> for TelevisionBuilder {
    fn from(snapshot: Snapshot) -> Self {
        Self::new()
            .power(snapshot.power)
            .muted(snapshot.muted)
            .volume(snapshot.volume)
            .channel(snapshot.channel)
    }
}

impl TryFrom<Snapshot> for Television {
    type Error = BuildError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        TelevisionBuilder::from(snapshot).build()
    }
}
