//! Guard predicates for controlling which controls may act.
//!
//! Guards are pure boolean functions over a value. A control whose guard
//! rejects the current state is a silent no-op.

use std::fmt;

/// Pure predicate that determines if a control can act on a value.
///
/// Guards hold a plain function pointer, so they are `Copy` and can be
/// built in `const` context.
///
/// # Example
///
/// ```rust
/// use television::core::{Guard, Television};
///
/// let powered = Guard::new(Television::is_on);
///
/// let mut tv = Television::new();
/// assert!(!powered.check(&tv));
///
/// tv.power();
/// assert!(powered.check(&tv));
/// ```
pub struct Guard<S> {
    predicate: fn(&S) -> bool,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub const fn new(predicate: fn(&S) -> bool) -> Self {
        Guard { predicate }
    }

    /// Check if the guard admits this value.
    pub fn check(&self, value: &S) -> bool {
        (self.predicate)(value)
    }
}

impl<S> Clone for Guard<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Guard<S> {}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Level(u8);

    fn is_loud(level: &Level) -> bool {
        level.0 > 5
    }

    #[test]
    fn guard_allows_matching_values() {
        let guard = Guard::new(is_loud);

        assert!(guard.check(&Level(9)));
        assert!(!guard.check(&Level(2)));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(is_loud);
        let level = Level(6);

        assert_eq!(guard.check(&level), guard.check(&level));
    }

    #[test]
    fn guard_accepts_non_capturing_closures() {
        let guard = Guard::new(|level: &Level| level.0 == 0);

        assert!(guard.check(&Level(0)));
        assert!(!guard.check(&Level(1)));
    }

    #[test]
    fn guard_is_copy_and_const() {
        const LOUD: Guard<Level> = Guard::new(is_loud);
        let copy = LOUD;

        assert!(LOUD.check(&Level(7)));
        assert!(copy.check(&Level(7)));
    }
}
