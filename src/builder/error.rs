//! Build errors for the television builder.

use thiserror::Error;

/// Errors that can occur when building a television.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Volume {value} out of range. Expected {min}..={max}")]
    VolumeOutOfRange { value: u8, min: u8, max: u8 },

    #[error("Channel {value} out of range. Expected {min}..={max}")]
    ChannelOutOfRange { value: u8, min: u8, max: u8 },
}
