use anyhow::Context;
use std::rc::Rc;

/// Page events after which the header position may have changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeSignal {
    DomContentLoaded,
    Load,
    Scroll,
    Resize,
}

impl ChangeSignal {
    pub const ALL: [ChangeSignal; 4] = [
        ChangeSignal::DomContentLoaded,
        ChangeSignal::Load,
        ChangeSignal::Scroll,
        ChangeSignal::Resize,
    ];

    /// Name for `addEventListener`.
    #[inline]
    pub fn event_name(self) -> &'static str {
        match self {
            ChangeSignal::DomContentLoaded => "DOMContentLoaded",
            ChangeSignal::Load => "load",
            ChangeSignal::Scroll => "scroll",
            ChangeSignal::Resize => "resize",
        }
    }

    /// Name for legacy `attachEvent`.
    #[inline]
    pub fn legacy_event_name(self) -> &'static str {
        match self {
            ChangeSignal::DomContentLoaded => "onDOMContentLoaded",
            ChangeSignal::Load => "onload",
            ChangeSignal::Scroll => "onscroll",
            ChangeSignal::Resize => "onresize",
        }
    }
}

/// Whether setup must wait for `DOMContentLoaded`, given `document.readyState`.
/// Only `"loading"` defers; `"interactive"` and `"complete"` mean the event has fired.
#[inline]
pub fn defers_until_dom_ready(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Which registration API the host exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationApi {
    Standard,
    Legacy,
    Unavailable,
}

impl RegistrationApi {
    /// Standard wins when both are present.
    #[inline]
    pub fn detect(has_add_event_listener: bool, has_attach_event: bool) -> Self {
        match (has_add_event_listener, has_attach_event) {
            (true, _) => RegistrationApi::Standard,
            (false, true) => RegistrationApi::Legacy,
            (false, false) => RegistrationApi::Unavailable,
        }
    }
}

pub trait SignalSource {
    fn api(&self) -> RegistrationApi;
    fn subscribe(&self, signal: ChangeSignal, handler: Rc<dyn Fn()>) -> anyhow::Result<()>;
}

/// Host without any registration API. Subscriptions are accepted and dropped.
pub struct NoSignals;

impl SignalSource for NoSignals {
    fn api(&self) -> RegistrationApi {
        RegistrationApi::Unavailable
    }

    fn subscribe(&self, _signal: ChangeSignal, _handler: Rc<dyn Fn()>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Subscribe one handler to every [`ChangeSignal`]. Stops at the first failure.
pub fn subscribe_all(source: &dyn SignalSource, handler: Rc<dyn Fn()>) -> anyhow::Result<()> {
    for signal in ChangeSignal::ALL {
        source
            .subscribe(signal, handler.clone())
            .with_context(|| format!("subscribing to {}", signal.event_name()))?;
    }
    log::info!("[signals] subscribed via {:?}", source.api());
    Ok(())
}
