use crate::signals::{ChangeSignal, NoSignals, RegistrationApi, SignalSource};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Listeners live as long as the page; closures are leaked on purpose.
fn leak_handler(handler: Rc<dyn Fn()>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>)
}

/// `addEventListener(name, handler, false)`
pub struct StandardSignals {
    target: web::EventTarget,
}

impl SignalSource for StandardSignals {
    fn api(&self) -> RegistrationApi {
        RegistrationApi::Standard
    }

    fn subscribe(&self, signal: ChangeSignal, handler: Rc<dyn Fn()>) -> anyhow::Result<()> {
        let closure = leak_handler(handler);
        self.target
            .add_event_listener_with_callback_and_bool(
                signal.event_name(),
                closure.as_ref().unchecked_ref(),
                false,
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        closure.forget();
        Ok(())
    }
}

/// `attachEvent("on" + name, handler)` for hosts without the standard API.
pub struct LegacySignals {
    target: JsValue,
    attach_event: js_sys::Function,
}

impl SignalSource for LegacySignals {
    fn api(&self) -> RegistrationApi {
        RegistrationApi::Legacy
    }

    fn subscribe(&self, signal: ChangeSignal, handler: Rc<dyn Fn()>) -> anyhow::Result<()> {
        let closure = leak_handler(handler);
        self.attach_event
            .call2(
                &self.target,
                &JsValue::from_str(signal.legacy_event_name()),
                closure.as_ref(),
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        closure.forget();
        Ok(())
    }
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Probe the window once and pick the adapter used for every subscription.
pub fn select(window: &web::Window) -> Box<dyn SignalSource> {
    let target: &JsValue = window.as_ref();
    let attach_event = method(target, "attachEvent");
    let api = RegistrationApi::detect(
        method(target, "addEventListener").is_some(),
        attach_event.is_some(),
    );
    match (api, attach_event) {
        (RegistrationApi::Standard, _) => Box::new(StandardSignals {
            target: window.clone().into(),
        }),
        (RegistrationApi::Legacy, Some(attach_event)) => Box::new(LegacySignals {
            target: target.clone(),
            attach_event,
        }),
        _ => {
            log::warn!("[signals] no event registration API; header will not track scrolling");
            Box::new(NoSignals)
        }
    }
}
