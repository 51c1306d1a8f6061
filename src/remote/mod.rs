//! A remote control that drives a television and remembers what it did.

use crate::core::{Control, Snapshot, Television};
use chrono::Utc;
use tracing::{debug, trace};

pub mod history;

pub use history::{ControlHistory, ControlRecord};

/// Outcome of pressing a single button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// The control's guard admitted it
    Applied { from: Snapshot, to: Snapshot },

    /// The control's guard rejected it; nothing changed
    Ignored(Control),
}

impl Press {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Owns a television and dispatches controls to it.
///
/// Applied presses are recorded in a [`ControlHistory`]; ignored presses
/// are not.
///
/// # Example
///
/// ```rust
/// use television::core::Control;
/// use television::remote::{Press, Remote};
///
/// let mut remote = Remote::default();
/// assert_eq!(remote.press(Control::Mute), Press::Ignored(Control::Mute));
///
/// remote.press(Control::Power);
/// remote.press(Control::VolumeUp);
///
/// assert_eq!(remote.television().render(), "Power = true, Channel = 0, Volume = 1");
/// assert_eq!(remote.history().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Remote {
    tv: Television,
    history: ControlHistory,
}

impl Remote {
    /// Create a remote for `tv` with an empty history.
    pub fn new(tv: Television) -> Self {
        Self {
            tv,
            history: ControlHistory::new(),
        }
    }

    /// Press one button.
    pub fn press(&mut self, control: Control) -> Press {
        let from = self.tv.snapshot();
        if !self.tv.apply(control) {
            trace!(%control, "control ignored while powered off");
            return Press::Ignored(control);
        }

        let to = self.tv.snapshot();
        debug!(
            %control,
            power = to.power,
            muted = to.muted,
            channel = to.channel,
            volume = to.volume,
            "control applied"
        );
        self.history.record(ControlRecord {
            control,
            from,
            to,
            timestamp: Utc::now(),
        });

        Press::Applied { from, to }
    }

    /// Press each button in order, returning one outcome per press.
    pub fn press_all<I>(&mut self, controls: I) -> Vec<Press>
    where
        I: IntoIterator<Item = Control>,
    {
        controls
            .into_iter()
            .map(|control| self.press(control))
            .collect()
    }

    /// Get the television (pure)
    pub fn television(&self) -> &Television {
        &self.tv
    }

    /// Get press history (pure)
    pub fn history(&self) -> &ControlHistory {
        &self.history
    }

    /// Drop every recorded press, keeping the television as it is.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Give back the television, discarding the history.
    pub fn into_inner(self) -> Television {
        self.tv
    }
}

impl From<Television> for Remote {
    fn from(tv: Television) -> Self {
        Self::new(tv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TelevisionBuilder;

    #[test]
    fn press_while_off_is_ignored_and_unrecorded() {
        let mut remote = Remote::default();

        for control in [
            Control::Mute,
            Control::ChannelUp,
            Control::ChannelDown,
            Control::VolumeUp,
            Control::VolumeDown,
        ] {
            assert_eq!(remote.press(control), Press::Ignored(control));
        }

        assert_eq!(remote.television(), &Television::new());
        assert!(remote.history().is_empty());
    }

    #[test]
    fn press_reports_before_and_after() {
        let mut remote = Remote::default();
        remote.press(Control::Power);

        let press = remote.press(Control::ChannelDown);
        match press {
            Press::Applied { from, to } => {
                assert_eq!(from.channel, 0);
                assert_eq!(to.channel, 3);
            }
            Press::Ignored(_) => panic!("Expected Applied result"),
        }
    }

    #[test]
    fn press_all_runs_in_order() {
        let mut remote = Remote::default();
        let mut controls = vec![Control::Power];
        controls.extend([Control::ChannelUp; 4]);
        controls.extend([Control::VolumeUp; 3]);

        let presses = remote.press_all(controls);

        assert_eq!(presses.len(), 8);
        assert!(presses.iter().all(Press::is_applied));
        assert_eq!(
            remote.television().render(),
            "Power = true, Channel = 0, Volume = 2"
        );
        assert_eq!(remote.history().len(), 8);
    }

    #[test]
    fn history_path_tracks_each_applied_press() {
        let mut remote = Remote::default();
        remote.press_all([Control::Mute, Control::Power, Control::VolumeUp]);

        let path = remote.history().path();
        assert_eq!(path.len(), 3);
        assert!(!path[0].power);
        assert!(path[1].power);
        assert_eq!(path[2].volume, 1);
    }

    #[test]
    fn clear_history_keeps_television_state() {
        let mut remote = Remote::default();
        remote.press_all([Control::Power, Control::ChannelUp, Control::VolumeUp]);
        assert_eq!(remote.history().len(), 3);

        remote.clear_history();

        assert!(remote.history().is_empty());
        assert_eq!(
            remote.television().render(),
            "Power = true, Channel = 1, Volume = 1"
        );

        remote.press(Control::Mute);
        assert_eq!(remote.history().len(), 1);
        assert_eq!(remote.history().path().len(), 2);
    }

    #[test]
    fn remote_wraps_a_configured_television() {
        let tv = TelevisionBuilder::new()
            .power(true)
            .muted(true)
            .volume(1)
            .build()
            .unwrap();
        let mut remote = Remote::from(tv);

        remote.press(Control::VolumeUp);

        let tv = remote.into_inner();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 2);
    }
}
