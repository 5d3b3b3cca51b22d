//! Fading floating header.
//!
//! The header's shown/hidden state lives in the DOM as a CSS class. The
//! controller only reads class membership and adds/removes the class, so the
//! stylesheet owns the actual fade.

use crate::config::EffectsConfig;
use crate::dirty::DirtyFlag;
use crate::visibility::{is_visible_at, TopEdge};
use std::rc::Rc;

/// Minimal class-list surface of an element.
pub trait ClassTarget {
    fn has_class(&self, name: &str) -> bool;
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
}

impl<T: ClassTarget + ?Sized> ClassTarget for &T {
    fn has_class(&self, name: &str) -> bool {
        (**self).has_class(name)
    }
    fn add_class(&self, name: &str) {
        (**self).add_class(name)
    }
    fn remove_class(&self, name: &str) {
        (**self).remove_class(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    Hidden,
    Visible,
}

/// Outcome of a single check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Shown,
    Hidden,
    Unchanged,
}

pub struct FadingHeader<H, C> {
    header: H,
    content: C,
    visible_class: String,
    threshold_px: f64,
    dirty: Rc<DirtyFlag>,
}

impl<H: ClassTarget, C: TopEdge> FadingHeader<H, C> {
    pub fn new(header: H, content: C, config: &EffectsConfig) -> Self {
        Self {
            header,
            content,
            visible_class: config.visible_class.clone(),
            threshold_px: config.threshold_px,
            dirty: Rc::new(DirtyFlag::default()),
        }
    }

    #[inline]
    pub fn state(&self) -> HeaderState {
        if self.header.has_class(&self.visible_class) {
            HeaderState::Visible
        } else {
            HeaderState::Hidden
        }
    }

    /// Evaluate the content position once and apply at most one class change.
    pub fn check(&self) -> Transition {
        let content_near_top = is_visible_at(&self.content, self.threshold_px);
        match (content_near_top, self.state()) {
            (true, HeaderState::Visible) => {
                self.header.remove_class(&self.visible_class);
                log::debug!("[header] hidden");
                Transition::Hidden
            }
            (false, HeaderState::Hidden) => {
                self.header.add_class(&self.visible_class);
                log::debug!("[header] shown");
                Transition::Shown
            }
            _ => Transition::Unchanged,
        }
    }

    /// Timer entry point: runs [`check`](Self::check) only if something changed
    /// since the previous tick.
    pub fn tick(&self) -> Option<Transition> {
        self.dirty.take().then(|| self.check())
    }

    #[inline]
    pub fn notify(&self) {
        self.dirty.mark();
    }

    /// Shared handle for event listeners that only need to mark the flag.
    pub fn dirty_flag(&self) -> Rc<DirtyFlag> {
        self.dirty.clone()
    }
}
