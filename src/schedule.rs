use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Call `tick` every `interval_ms` for the rest of the page's life.
/// Returns the browser interval id.
pub fn every(
    window: &web::Window,
    interval_ms: i32,
    mut tick: impl FnMut() + 'static,
) -> anyhow::Result<i32> {
    let closure = Closure::wrap(Box::new(move || tick()) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(id)
}
