//! Overlay panel toggles.
//!
//! Four independent panels (navbar, account, orders, cart), each a binary
//! `active` class on its container. Panels never interact with each other;
//! the only cross-cutting rule is that a page scroll closes all four at once.

use crate::dom::{self, Elements};
use web_sys::Element;

const ACTIVE: &str = "active";

pub fn toggle_menu(els: &Elements) {
    dom::toggle_class(&els.navbar, ACTIVE);
}

pub fn open(panel: &Element) {
    dom::add_class(panel, ACTIVE);
}

pub fn close(panel: &Element) {
    dom::remove_class(panel, ACTIVE);
}

/// Adding an item reveals the cart so the shopper sees what changed.
pub fn open_cart(els: &Elements) {
    open(&els.cart_panel);
}

/// Close every panel, open or not.
pub fn close_all(els: &Elements) {
    for panel in [
        &els.navbar,
        &els.my_orders,
        &els.cart_panel,
        &els.user_account,
    ] {
        dom::remove_class(panel, ACTIVE);
    }
}
