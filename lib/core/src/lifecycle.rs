//! One-shot mount hook.

/// A callback that runs the first time the owning component mounts.
///
/// UI frameworks may call their effect closures more than once; wrapping the
/// work in a `MountHook` keeps it to a single run per component lifetime.
pub struct MountHook<F: FnOnce()> {
    pending: Option<F>,
}

impl<F: FnOnce()> MountHook<F> {
    #[must_use]
    pub const fn new(callback: F) -> Self {
        Self {
            pending: Some(callback),
        }
    }

    /// Runs the callback if it has not run yet.
    ///
    /// Returns true if the callback ran during this call.
    pub fn fire(&mut self) -> bool {
        match self.pending.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.pending.is_none()
    }
}

impl<F: FnOnce()> std::fmt::Debug for MountHook<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountHook")
            .field("fired", &self.has_fired())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn runs_exactly_once() {
        let calls = Cell::new(0);
        let mut hook = MountHook::new(|| calls.set(calls.get() + 1));

        assert!(!hook.has_fired());
        assert!(hook.fire());
        assert!(!hook.fire());
        assert!(!hook.fire());

        assert!(hook.has_fired());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn never_fired_hook_never_runs() {
        let calls = Cell::new(0);
        let hook = MountHook::new(|| calls.set(calls.get() + 1));
        drop(hook);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn debug_shows_state() {
        let mut hook = MountHook::new(|| {});
        assert_eq!(format!("{hook:?}"), "MountHook { fired: false }");
        hook.fire();
        assert_eq!(format!("{hook:?}"), "MountHook { fired: true }");
    }
}
