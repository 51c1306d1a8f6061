//! Press history tracking.
//!
//! Records every control a remote applied, with the television state
//! before and after it.

use crate::core::{Control, Snapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied control.
///
/// # Example
///
/// ```rust
/// use television::core::{Control, Television};
/// use television::remote::ControlRecord;
/// use chrono::Utc;
///
/// let mut tv = Television::new();
/// let from = tv.snapshot();
/// tv.power();
///
/// let record = ControlRecord {
///     control: Control::Power,
///     from,
///     to: tv.snapshot(),
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlRecord {
    /// The control that was applied
    pub control: Control,
    /// State before the control
    pub from: Snapshot,
    /// State after the control
    pub to: Snapshot,
    /// When the control was applied
    pub timestamp: DateTime<Utc>,
}

impl ControlRecord {
    /// Whether the control changed anything.
    ///
    /// `false` for admitted controls that hit a clamp, such as `VolumeUp`
    /// at maximum volume while unmuted.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of applied controls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlHistory {
    records: Vec<ControlRecord>,
}

impl ControlHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, record: ControlRecord) {
        self.records.push(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first record, then the `to` state of
    /// each record. Empty when nothing has been recorded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use television::core::Control;
    /// use television::remote::Remote;
    ///
    /// let mut remote = Remote::default();
    /// remote.press(Control::Power);
    /// remote.press(Control::ChannelUp);
    ///
    /// let path = remote.history().path();
    /// assert_eq!(path.len(), 3);
    /// assert!(!path[0].power);
    /// assert_eq!(path[2].channel, 1);
    /// ```
    pub fn path(&self) -> Vec<&Snapshot> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[ControlRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
