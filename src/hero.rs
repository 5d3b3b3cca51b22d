use std::cell::Cell;

/// Element whose inline `min-height` can be written.
pub trait MinHeightTarget {
    fn set_min_height(&self, value: &str) -> anyhow::Result<()>;
}

impl<T: MinHeightTarget + ?Sized> MinHeightTarget for &T {
    fn set_min_height(&self, value: &str) -> anyhow::Result<()> {
        (**self).set_min_height(value)
    }
}

/// CSS length for a viewport height. For viewport-sized values this matches
/// JS number formatting (`800` not `800.0`).
#[inline]
pub fn min_height_value(inner_height: f64) -> String {
    format!("{}px", inner_height)
}

/// Pins the hero to the viewport height seen at load. Later calls are ignored,
/// so browser chrome showing/hiding on mobile never changes the layout.
pub struct HeroSizer<T> {
    hero: T,
    applied: Cell<bool>,
}

impl<T: MinHeightTarget> HeroSizer<T> {
    pub fn new(hero: T) -> Self {
        Self {
            hero,
            applied: Cell::new(false),
        }
    }

    /// Returns `Ok(true)` when the style was written by this call.
    pub fn apply(&self, inner_height: f64) -> anyhow::Result<bool> {
        if self.applied.get() {
            return Ok(false);
        }
        let value = min_height_value(inner_height);
        self.hero.set_min_height(&value)?;
        self.applied.set(true);
        log::info!("[hero] min-height={}", value);
        Ok(true)
    }

    #[inline]
    pub fn is_applied(&self) -> bool {
        self.applied.get()
    }
}
