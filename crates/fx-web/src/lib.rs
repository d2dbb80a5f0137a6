#![cfg(target_arch = "wasm32")]
//! Browser glue for the Singularity site's decorative canvas effects.
//!
//! The `start` entry point wires a particle field onto a `#starfield` canvas
//! and a cursor trail onto a `#cursor` canvas when those elements exist.
//! Hosts embedding this crate as an rlib can instead mount effects on their
//! own canvases via [`StarfieldEffect::mount`] / [`CursorTrailEffect::mount`]
//! and keep the returned handles for teardown.

mod dom;
mod draw;
mod listeners;
mod raf;
mod starfield;
mod trail;

pub use starfield::StarfieldEffect;
pub use trail::CursorTrailEffect;

use fx_core::{StarfieldConfig, TrailConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    match dom::canvas_by_id(&document, "starfield") {
        Some(canvas) => {
            let config = StarfieldConfig {
                mouse_adjust: true,
                click_to_warp: true,
                ..Default::default()
            };
            StarfieldEffect::mount(canvas, config, rand::random())?.forget();
        }
        None => log::info!("no #starfield canvas; particle field not mounted"),
    }

    match dom::canvas_by_id(&document, "cursor") {
        Some(canvas) => {
            CursorTrailEffect::mount(canvas, TrailConfig::default(), rand::random())?.forget();
        }
        None => log::info!("no #cursor canvas; cursor trail not mounted"),
    }

    Ok(())
}
