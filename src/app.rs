use crate::config::EffectsConfig;
use crate::header::FadingHeader;
use crate::hero::HeroSizer;
use crate::{dom, events, schedule, signals};
use anyhow::Context;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-effects starting");

    if let Err(e) = init(EffectsConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: EffectsConfig) -> anyhow::Result<()> {
    config.validate().context("invalid effects config")?;
    let (window, document) = dom::window_document()?;

    let doc = document.clone();
    dom::on_dom_ready(&document, move || {
        // Independent: a page without a hero still gets the header, and vice versa
        if let Err(e) = size_hero(&window, &doc, &config) {
            log::error!("[hero] skipped: {:?}", e);
        }
        if let Err(e) = wire_fading_header(&window, &doc, &config) {
            log::error!("[header] skipped: {:?}", e);
        }
    })
}

fn size_hero(
    window: &web::Window,
    document: &web::Document,
    config: &EffectsConfig,
) -> anyhow::Result<()> {
    let hero = dom::query_html(document, &config.hero_selector)?;
    let height = dom::inner_height(window)?;
    // Deliberately not re-applied on resize
    HeroSizer::new(hero).apply(height)?;
    Ok(())
}

fn wire_fading_header(
    window: &web::Window,
    document: &web::Document,
    config: &EffectsConfig,
) -> anyhow::Result<()> {
    let header = dom::query(document, &config.header_selector)?;
    let content = dom::query(document, &config.content_selector)?;
    let controller = Rc::new(FadingHeader::new(header, content, config));

    // Listeners first: once the interval is live the header counts as wired
    let notifying = controller.clone();
    let source = events::select(window);
    signals::subscribe_all(source.as_ref(), Rc::new(move || notifying.notify()))
        .context("wiring change signals")?;

    let ticking = controller.clone();
    let interval_id = schedule::every(window, config.poll_interval_ms, move || {
        ticking.tick();
    })
    .context("starting header poll")?;

    log::info!(
        "[header] polling every {}ms (interval {}), threshold={}px",
        config.poll_interval_ms,
        interval_id,
        config.threshold_px
    );
    Ok(())
}
