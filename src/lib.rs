//! Scroll-driven floating header fade and load-time hero sizing for a static page.
//!
//! The state machines and predicates are plain Rust and run on the host; the
//! browser glue (`dom`, `events`, `schedule`, `app`) is only built for wasm32.

pub mod config;
pub mod constants;
pub mod dirty;
pub mod header;
pub mod hero;
pub mod signals;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod schedule;

pub use config::EffectsConfig;
pub use dirty::DirtyFlag;
pub use header::{ClassTarget, FadingHeader, HeaderState, Transition};
pub use hero::{min_height_value, HeroSizer, MinHeightTarget};
pub use signals::{
    defers_until_dom_ready, subscribe_all, ChangeSignal, NoSignals, RegistrationApi, SignalSource,
};
pub use visibility::{is_visible, is_visible_at, TopEdge};
