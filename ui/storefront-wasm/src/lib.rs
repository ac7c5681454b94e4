//! Pizzetta Storefront WASM Frontend
//!
//! Rust + WASM implementation of the restaurant site's client-side
//! behavior: cart, overlay panels, slider, accordion, checkout. One concern
//! per module; the cart domain itself lives in `pz-cart-core`.

pub mod accordion;
pub mod cart_ops;
pub mod checkout;
pub mod dom;
pub mod events;
pub mod panels;
pub mod slider;
pub mod state;
pub mod toast;
pub mod view;

use gloo_console::log;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // First render from whatever the persisted cart holds
    view::render(&els);

    // Bind all event listeners
    events::bind_events(&els);

    log!("storefront ready");
    Ok(())
}
