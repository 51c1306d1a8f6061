//! Serializable point-in-time view of a television.

use super::television::Television;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain copy of a television's fields.
///
/// Snapshots are values: they are taken with [`Television::snapshot`] and
/// turned back into a television with `Television::try_from`, which
/// re-checks the volume and channel ranges.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub power: bool,
    pub muted: bool,
    pub volume: u8,
    pub channel: u8,
}

impl Snapshot {
    /// Volume as rendered: [`Television::MIN_VOLUME`] while muted.
    pub fn effective_volume(&self) -> u8 {
        if self.muted {
            Television::MIN_VOLUME
        } else {
            self.volume
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power = {}, Channel = {}, Volume = {}",
            self.power,
            self.channel,
            self.effective_volume()
        )
    }
}
