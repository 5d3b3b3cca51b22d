// Host-side tests for change-signal naming, API detection and fan-out.

use page_effects::{
    defers_until_dom_ready, subscribe_all, ChangeSignal, DirtyFlag, NoSignals, RegistrationApi,
    SignalSource,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Records subscriptions and lets tests fire them.
struct RecordingSource {
    api: RegistrationApi,
    handlers: RefCell<Vec<(ChangeSignal, Rc<dyn Fn()>)>>,
    fail_on: Option<ChangeSignal>,
}

impl RecordingSource {
    fn new(api: RegistrationApi) -> Self {
        Self {
            api,
            handlers: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    fn fire(&self, signal: ChangeSignal) {
        for (s, h) in self.handlers.borrow().iter() {
            if *s == signal {
                h();
            }
        }
    }
}

impl SignalSource for RecordingSource {
    fn api(&self) -> RegistrationApi {
        self.api
    }

    fn subscribe(&self, signal: ChangeSignal, handler: Rc<dyn Fn()>) -> anyhow::Result<()> {
        if self.fail_on == Some(signal) {
            anyhow::bail!("host refused");
        }
        self.handlers.borrow_mut().push((signal, handler));
        Ok(())
    }
}

#[test]
fn standard_event_names() {
    let names: Vec<_> = ChangeSignal::ALL.iter().map(|s| s.event_name()).collect();
    assert_eq!(names, ["DOMContentLoaded", "load", "scroll", "resize"]);
}

#[test]
fn legacy_names_are_on_prefixed() {
    for signal in ChangeSignal::ALL {
        assert_eq!(
            signal.legacy_event_name(),
            format!("on{}", signal.event_name())
        );
    }
}

#[test]
fn detection_prefers_standard_api() {
    assert_eq!(RegistrationApi::detect(true, true), RegistrationApi::Standard);
    assert_eq!(RegistrationApi::detect(true, false), RegistrationApi::Standard);
    assert_eq!(RegistrationApi::detect(false, true), RegistrationApi::Legacy);
    assert_eq!(
        RegistrationApi::detect(false, false),
        RegistrationApi::Unavailable
    );
}

#[test]
fn subscribes_to_all_four_signals() {
    let source = RecordingSource::new(RegistrationApi::Standard);
    subscribe_all(&source, Rc::new(|| {})).unwrap();
    let subscribed: Vec<_> = source.handlers.borrow().iter().map(|(s, _)| *s).collect();
    assert_eq!(subscribed, ChangeSignal::ALL);
}

#[test]
fn any_signal_marks_the_flag() {
    let source = RecordingSource::new(RegistrationApi::Legacy);
    let flag = Rc::new(DirtyFlag::new(false));
    let marker = flag.clone();
    subscribe_all(&source, Rc::new(move || marker.mark())).unwrap();

    for signal in ChangeSignal::ALL {
        assert!(!flag.is_set());
        source.fire(signal);
        assert!(flag.take(), "{:?} did not mark", signal);
    }
}

#[test]
fn unavailable_api_is_not_an_error() {
    let flag = Rc::new(DirtyFlag::new(false));
    let marker = flag.clone();
    subscribe_all(&NoSignals, Rc::new(move || marker.mark())).unwrap();
    assert_eq!(NoSignals.api(), RegistrationApi::Unavailable);
    assert!(!flag.is_set());
}

#[test]
fn subscription_failure_names_the_event() {
    let mut source = RecordingSource::new(RegistrationApi::Standard);
    source.fail_on = Some(ChangeSignal::Scroll);
    let err = subscribe_all(&source, Rc::new(|| {})).unwrap_err();
    assert!(format!("{:#}", err).contains("subscribing to scroll"));
    assert_eq!(source.handlers.borrow().len(), 2);
}

#[test]
fn setup_waits_only_while_document_is_loading() {
    assert!(defers_until_dom_ready("loading"));
    assert!(!defers_until_dom_ready("interactive"));
    assert!(!defers_until_dom_ready("complete"));
}
