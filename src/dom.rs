use crate::header::ClassTarget;
use crate::hero::MinHeightTarget;
use crate::signals::defers_until_dom_ready;
use crate::visibility::TopEdge;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("query {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}

pub fn query_html(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    query(document, selector)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{} is not an HTML element: {:?}", selector, e))
}

pub fn inner_height(window: &web::Window) -> anyhow::Result<f64> {
    window
        .inner_height()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerHeight is not a number"))
}

/// Run `handler` once the DOM is parsed. The wasm module usually finishes
/// loading after `DOMContentLoaded` has fired, in which case it runs now.
pub fn on_dom_ready(
    document: &web::Document,
    handler: impl FnOnce() + 'static,
) -> anyhow::Result<()> {
    if !defers_until_dom_ready(&document.ready_state()) {
        handler();
        return Ok(());
    }
    let callback = Closure::once_into_js(handler);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

impl ClassTarget for web::Element {
    #[inline]
    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    #[inline]
    fn add_class(&self, name: &str) {
        _ = self.class_list().add_1(name);
    }

    #[inline]
    fn remove_class(&self, name: &str) {
        _ = self.class_list().remove_1(name);
    }
}

impl TopEdge for web::Element {
    #[inline]
    fn top_px(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }
}

impl MinHeightTarget for web::HtmlElement {
    fn set_min_height(&self, value: &str) -> anyhow::Result<()> {
        self.style()
            .set_property("min-height", value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }
}
