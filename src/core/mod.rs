//! Core television types and logic.
//!
//! This module contains the television itself:
//! - The `Television` state container and its rendering
//! - The `Control` vocabulary and the `Guard` predicates gating it
//! - `Snapshot`, a serializable copy of the state
//!
//! Television operations never fail and never log. The only error here
//! comes from parsing a control name.

mod control;
mod guard;
mod snapshot;
mod television;

pub use control::{Control, ParseControlError, POWERED_ON};
pub use guard::Guard;
pub use snapshot::Snapshot;
pub use television::Television;
