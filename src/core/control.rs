//! The set of controls a television responds to.

use super::guard::Guard;
use super::television::Television;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Admits a control only while the television is powered on.
pub const POWERED_ON: Guard<Television> = Guard::new(Television::is_on);

/// A single button on the television.
///
/// Every control except [`Control::Power`] is gated by [`POWERED_ON`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

/// Errors returned when parsing a control name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseControlError {
    #[error("Unknown control '{0}'")]
    Unknown(String),
}

impl Control {
    /// Every control, in button order.
    pub const ALL: [Control; 6] = [
        Self::Power,
        Self::Mute,
        Self::ChannelUp,
        Self::ChannelDown,
        Self::VolumeUp,
        Self::VolumeDown,
    ];

    /// Stable snake_case name of the control.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Mute => "mute",
            Self::ChannelUp => "channel_up",
            Self::ChannelDown => "channel_down",
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
        }
    }

    /// The guard this control must pass, if any.
    pub fn guard(&self) -> Option<Guard<Television>> {
        match self {
            Self::Power => None,
            _ => Some(POWERED_ON),
        }
    }

    /// Check if this control can act on the television (pure)
    pub fn can_execute(&self, tv: &Television) -> bool {
        self.guard().is_none_or(|g| g.check(tv))
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Control {
    type Err = ParseControlError;

    /// Accepts the snake_case name in any case, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|control| control.name() == normalized)
            .ok_or_else(|| ParseControlError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_has_no_guard() {
        assert!(Control::Power.guard().is_none());
        assert!(Control::Power.can_execute(&Television::new()));
    }

    #[test]
    fn other_controls_require_power() {
        let off = Television::new();
        let mut on = Television::new();
        on.power();

        for control in Control::ALL.into_iter().filter(|c| *c != Control::Power) {
            assert!(control.guard().is_some());
            assert!(!control.can_execute(&off), "{control} ran while off");
            assert!(control.can_execute(&on), "{control} blocked while on");
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Control::ALL.iter().map(Control::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Control::ALL.len());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Control::ChannelUp.to_string(), "channel_up");
        assert_eq!(Control::VolumeDown.to_string(), "volume_down");
    }

    #[test]
    fn parses_names_leniently() {
        assert_eq!("power".parse::<Control>(), Ok(Control::Power));
        assert_eq!("Channel-Up".parse::<Control>(), Ok(Control::ChannelUp));
        assert_eq!(" VOLUME_DOWN ".parse::<Control>(), Ok(Control::VolumeDown));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "rewind".parse::<Control>().unwrap_err();
        assert_eq!(err, ParseControlError::Unknown("rewind".to_string()));
        assert_eq!(err.to_string(), "Unknown control 'rewind'");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Control::ChannelDown).unwrap();
        assert_eq!(json, "\"channel_down\"");
        let parsed: Control = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Control::ChannelDown);
    }
}
