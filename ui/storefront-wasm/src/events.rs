//! Event binding.
//!
//! Wires every listener exactly once, at startup. Interaction with markup
//! the renderer rebuilds (cart boxes, the close affordance) is delegated
//! from the stable cart section container, so re-renders never lose a
//! listener.

use crate::accordion;
use crate::cart_ops;
use crate::checkout;
use crate::dom::{self, Elements};
use crate::panels;
use crate::slider;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Helper: attach a sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach a submit handler that cancels the native submission.
macro_rules! on_submit {
    ($el:expr, $cb:expr) => {{
        let handler = $cb;
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            handler(e);
        }) as Box<dyn FnMut(web_sys::Event)>);
        $el.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Panels ──
    {
        let els2 = els.clone();
        on_click!(els.menu_btn, move |_| panels::toggle_menu(&els2));
    }
    {
        let els2 = els.clone();
        on_click!(els.user_btn, move |_| panels::open(&els2.user_account));
    }
    {
        let els2 = els.clone();
        on_click!(els.close_account, move |_| panels::close(&els2.user_account));
    }
    {
        let els2 = els.clone();
        on_click!(els.order_btn, move |_| panels::open(&els2.my_orders));
    }
    {
        let els2 = els.clone();
        on_click!(els.close_orders, move |_| panels::close(&els2.my_orders));
    }
    {
        let els2 = els.clone();
        on_click!(els.cart_btn, move |_| panels::open(&els2.cart_panel));
    }

    // Scrolling closes every panel
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            panels::close_all(&els2);
        }) as Box<dyn FnMut(_)>);
        dom::window()
            .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Slider ──
    for btn in dom::query_all(".fas.fa-angle-right") {
        let els2 = els.clone();
        on_click!(btn, move |_| slider::next(&els2));
    }
    for btn in dom::query_all(".fas.fa-angle-left") {
        let els2 = els.clone();
        on_click!(btn, move |_| slider::prev(&els2));
    }

    // ── Accordion ──
    for section in &els.accordions {
        let els2 = els.clone();
        let section2 = section.clone();
        on_click!(section, move |_| accordion::activate(&els2, &section2));
    }

    // ── Add to cart ──
    for form in &els.add_to_cart_forms {
        let els2 = els.clone();
        let form2 = form.clone();
        on_submit!(form, move |_| cart_ops::on_add_to_cart(&els2, &form2));
    }

    // ── Cart section (delegated: markup inside is rebuilt on every render) ──
    if let Some(section) = &els.cart_content {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            if target.closest("#close-cart").ok().flatten().is_some() {
                panels::close(&els2.cart_panel);
                return;
            }
            if dom::has_class(&target, "fa-times") {
                e.prevent_default();
                if let Some(name) = cart_ops::item_name_for(&target) {
                    cart_ops::on_remove_item(&els2, &name);
                }
            }
        }) as Box<dyn FnMut(_)>);
        section
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();

        let els2 = els.clone();
        on_submit!(section, move |e: web_sys::Event| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            cart_ops::on_update_quantity(&els2, &target);
        });
    }

    // ── Checkout ──
    if let Some(form) = &els.order_form {
        let els2 = els.clone();
        on_submit!(form, move |_| checkout::on_submit_order(&els2));
    }
}
