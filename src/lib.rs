//! Television: a small finite-state model of a TV set
//!
//! A television has four pieces of state (power, mute, volume, channel)
//! and a handful of buttons. Power is a gate: while the set is off every
//! other button does nothing. Channels wrap around, volume clamps, and
//! touching the volume clears mute.
//!
//! # Core Concepts
//!
//! - **Television**: the state container and its textual rendering
//! - **Controls and Guards**: the button vocabulary and the pure predicates
//!   deciding whether a button may act
//! - **Builder**: start a television anywhere within its valid ranges
//! - **Remote**: dispatch buttons and keep a history of what changed
//!
//! # Example
//!
//! ```rust
//! use television::core::{Control, Television};
//! use television::remote::Remote;
//!
//! let mut tv = Television::new();
//! tv.power();
//! tv.channel_down();
//! tv.mute();
//! assert_eq!(tv.render(), "Power = true, Channel = 3, Volume = 0");
//!
//! let mut remote = Remote::new(tv);
//! remote.press(Control::VolumeUp);
//! assert_eq!(remote.television().render(), "Power = true, Channel = 3, Volume = 1");
//! ```

pub mod builder;
pub mod core;
pub mod remote;

// Re-export commonly used types
pub use builder::{BuildError, TelevisionBuilder};
pub use core::{Control, Guard, ParseControlError, Snapshot, Television};
pub use remote::{ControlHistory, ControlRecord, Press, Remote};
