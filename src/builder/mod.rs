//! Builder API for constructing televisions in a chosen state.
//!
//! [`Television::new`](crate::core::Television::new) always starts off at
//! the lowest channel and volume. The builder lets callers start anywhere
//! within range, and rejects values outside it.

pub mod error;
pub mod television;

pub use error::BuildError;
pub use television::TelevisionBuilder;
