//! DOM element bindings.
//!
//! Mirrors the page template's structural selectors. All fixed elements are
//! resolved once at startup; containers the page may omit are `Option`s and
//! every operation over them degrades to a no-op.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

/// Value of an `<input>` matched inside `parent`, untrimmed. `None` when the
/// element is absent or not an input.
pub fn input_value_in(parent: &Element, selector: &str) -> Option<String> {
    let el = parent.query_selector(selector).ok().flatten()?;
    let input: HtmlInputElement = el.dyn_into().ok()?;
    Some(input.value())
}

pub fn select_value_in(parent: &Element, selector: &str) -> Option<String> {
    let el = parent.query_selector(selector).ok().flatten()?;
    let select: HtmlSelectElement = el.dyn_into().ok()?;
    Some(select.value())
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All DOM references the storefront uses.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Panels and their buttons
    pub navbar: Element,
    pub menu_btn: Element,
    pub user_account: Element,
    pub user_btn: Element,
    pub close_account: Element,
    pub my_orders: Element,
    pub order_btn: Element,
    pub close_orders: Element,
    pub cart_panel: Element,
    pub cart_btn: Element,
    pub cart_count: Element,

    // Rebuilt wholesale on every cart mutation
    pub cart_content: Option<Element>,

    // Widgets
    pub slides: Vec<Element>,
    pub accordions: Vec<Element>,

    // Menu product forms and order surfaces
    pub add_to_cart_forms: Vec<Element>,
    pub order_display_sections: Vec<Element>,
    pub order_form: Option<Element>,
    pub my_orders_section: Option<Element>,
}

macro_rules! get_sel {
    ($sel:expr) => {
        query($sel).ok_or_else(|| JsValue::from_str(&format!("missing element {}", $sel)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            navbar: get_sel!(".header .flex .navbar"),
            menu_btn: get_sel!("#menu-btn"),
            user_account: get_sel!(".user-account"),
            user_btn: get_sel!("#user-btn"),
            close_account: get_sel!("#close-account"),
            my_orders: get_sel!(".my-orders"),
            order_btn: get_sel!("#order-btn"),
            close_orders: get_sel!("#close-orders"),
            cart_panel: get_sel!(".shopping-cart"),
            cart_btn: get_sel!("#cart-btn"),
            cart_count: get_sel!("#cart-btn span"),

            cart_content: query(".shopping-cart section"),

            slides: query_all(".home-bg .home .slide-container .slide"),
            accordions: query_all(".faq .accordion-container .accordion"),

            add_to_cart_forms: query_all(".menu .box form"),
            order_display_sections: query_all(".display-orders"),
            order_form: query(".order form"),
            my_orders_section: query(".my-orders section"),
        })
    }
}
