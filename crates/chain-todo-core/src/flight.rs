//! In-flight flag guard

use std::cell::Cell;

/// Sets a flag for the guard's lifetime
pub(crate) struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    pub(crate) fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
