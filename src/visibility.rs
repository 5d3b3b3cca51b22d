use crate::constants::VISIBLE_TOP_THRESHOLD_PX;

/// Anything whose top edge can be measured relative to the viewport.
pub trait TopEdge {
    /// Top of the bounding client rect in CSS pixels. Read fresh on every call.
    fn top_px(&self) -> f64;
}

impl<T: TopEdge + ?Sized> TopEdge for &T {
    fn top_px(&self) -> f64 {
        (**self).top_px()
    }
}

/// True while the element's top edge sits at or below the default threshold.
#[inline]
pub fn is_visible<E: TopEdge + ?Sized>(el: &E) -> bool {
    is_visible_at(el, VISIBLE_TOP_THRESHOLD_PX)
}

#[inline]
pub fn is_visible_at<E: TopEdge + ?Sized>(el: &E, threshold_px: f64) -> bool {
    // NaN compares false: treated as scrolled past
    el.top_px() >= threshold_px
}
