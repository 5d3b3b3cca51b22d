use std::cell::Cell;

/// Coalescing "something changed" signal.
///
/// Listeners call [`DirtyFlag::mark`] as often as events arrive; the periodic
/// tick calls [`DirtyFlag::take`], so any number of marks between two ticks
/// collapse into a single re-evaluation.
#[derive(Debug)]
pub struct DirtyFlag {
    set: Cell<bool>,
}

impl DirtyFlag {
    pub fn new(initially_set: bool) -> Self {
        Self {
            set: Cell::new(initially_set),
        }
    }

    #[inline]
    pub fn mark(&self) {
        self.set.set(true);
    }

    /// Returns whether the flag was set and clears it.
    #[inline]
    pub fn take(&self) -> bool {
        self.set.replace(false)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.set.get()
    }
}

// Starts set so the first tick evaluates the initial scroll position.
impl Default for DirtyFlag {
    fn default() -> Self {
        Self::new(true)
    }
}
