//! Cart mutations driven by UI events.
//!
//! Each handler mutates the store, then re-renders and toasts. Persist
//! failures are reported as console warnings and the session continues on
//! the in-memory cart.

use crate::dom::Elements;
use crate::panels;
use crate::state;
use crate::toast;
use crate::view;
use gloo_console::warn;
use pz_cart_core::QtyChange;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Add-to-cart submit on a menu product form. Product name, price, and image
/// come from the surrounding `.box` markup; the quantity from the form's
/// `.qty` input.
pub fn on_add_to_cart(els: &Elements, form: &Element) {
    let Some(product) = form.closest(".box").ok().flatten() else {
        return;
    };

    let name = product
        .query_selector(".name")
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
        .trim()
        .to_string();
    if name.is_empty() {
        return;
    }

    let price_text = product
        .query_selector(".price")
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    let price = dollar_digits(&price_text).unwrap_or_else(|| "0".to_string());

    let image = product
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("src"))
        .unwrap_or_default();

    let Some(qty) = added_qty(form) else {
        toast::show("Please enter a valid quantity.");
        return;
    };

    if let Err(err) = state::with_store_mut(|s| s.add_item(&name, &price, &image, qty)) {
        warn!(format!("cart persist failed: {err}"));
    }
    view::render(els);
    panels::open_cart(els);
    toast::show(&format!("{name} added to cart!"));
}

/// Remove affordance click inside the cart section.
pub fn on_remove_item(els: &Elements, name: &str) {
    if let Err(err) = state::with_store_mut(|s| s.remove_item(name)) {
        warn!(format!("cart persist failed: {err}"));
    }
    view::render(els);
    toast::show("Item removed from cart!");
}

/// Quantity-edit submit inside the cart section. Zero or negative input
/// removes the item; non-numeric input is rejected.
pub fn on_update_quantity(els: &Elements, form: &Element) {
    let Some(name) = item_name_for(form) else {
        return;
    };
    let Some(qty) = edited_qty(form) else {
        toast::show("Please enter a valid quantity.");
        return;
    };

    let change = match state::with_store_mut(|s| s.set_quantity(&name, qty)) {
        Ok(change) => change,
        Err(err) => {
            // The in-memory change already applied; degrade to the generic toast
            warn!(format!("cart persist failed: {err}"));
            QtyChange::Updated
        }
    };

    match change {
        QtyChange::Updated => {
            view::render(els);
            toast::show("Cart updated!");
        }
        QtyChange::Removed => {
            view::render(els);
            toast::show("Item removed from cart!");
        }
        QtyChange::NotFound => {}
    }
}

/// Product name for a node inside a cart `.box`: the text of its content
/// paragraph up to the ` (` that opens the computed label.
pub fn item_name_for(node: &Element) -> Option<String> {
    let product = node.closest(".box").ok().flatten()?;
    let text = product
        .query_selector(".content p")
        .ok()
        .flatten()?
        .text_content()?;
    let name = text.split(" (").next().unwrap_or_default().trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}

/// First run of digits after the `$` in a price label like `$10/-`.
fn dollar_digits(text: &str) -> Option<String> {
    let rest = text.split('$').nth(1)?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// Quantity for an add: a positive integer, everything else rejected.
fn added_qty(form: &Element) -> Option<u32> {
    qty_input_value(form)?.parse::<u32>().ok().filter(|q| *q > 0)
}

/// Quantity for an edit: negatives clamp into the remove-at-zero path,
/// non-numeric input is rejected.
fn edited_qty(form: &Element) -> Option<u32> {
    let n: i64 = qty_input_value(form)?.parse().ok()?;
    Some(n.clamp(0, i64::from(u32::MAX)) as u32)
}

fn qty_input_value(form: &Element) -> Option<String> {
    let input = form.query_selector(".qty").ok().flatten()?;
    let input: web_sys::HtmlInputElement = input.dyn_into().ok()?;
    Some(input.value().trim().to_string())
}
