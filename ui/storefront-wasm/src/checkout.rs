//! Checkout flow.
//!
//! Submission is always intercepted; no request is ever sent. A failed
//! validation toasts exactly one message and changes nothing. A successful
//! checkout snapshots the cart into an order record, clears the store, and
//! renders the record into the my-orders panel.

use crate::dom::{self, Elements};
use crate::state;
use crate::toast;
use crate::view;
use gloo_console::warn;
use pz_cart_core::{
    CheckoutRequest, OrderRecord, PAYMENT_STATUS_PENDING, validate_checkout,
};
use wasm_bindgen::JsValue;
use web_sys::Element;

pub fn on_submit_order(els: &Elements) {
    let Some(form) = &els.order_form else {
        return;
    };
    let req = read_request(form);

    let outcome = state::with_store(|s| validate_checkout(s.cart(), &req).map(|()| s.cart().clone()));
    let cart = match outcome {
        Ok(cart) => cart,
        Err(err) => {
            toast::show(&err.to_string());
            return;
        }
    };

    // Snapshot before the clear; the record is the only surviving view of
    // these items
    let placed_on: String = js_sys::Date::new_0()
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into();
    let record = OrderRecord::from_cart(&cart, &req, &placed_on);

    if let Err(err) = state::with_store_mut(|s| s.clear()) {
        warn!(format!("cart persist failed: {err}"));
    }
    view::render(els);
    toast::show("Order placed successfully!");
    append_order_box(els, &record);
}

/// Read the named checkout fields. Absent fields stay `None`, which skips
/// their validation.
fn read_request(form: &Element) -> CheckoutRequest {
    CheckoutRequest {
        name: dom::input_value_in(form, r#"input[name="name"]"#),
        phone: dom::input_value_in(form, r#"input[name="number"]"#),
        pin: dom::input_value_in(form, r#"input[name="pin_code"]"#),
        method: dom::select_value_in(form, r#"select[name="method"]"#).unwrap_or_default(),
        flat: dom::input_value_in(form, r#"input[name="flat"]"#).unwrap_or_default(),
        street: dom::input_value_in(form, r#"input[name="street"]"#).unwrap_or_default(),
    }
}

/// Render the record as a `.box` at the top of the my-orders section:
/// after its title when one exists, else after the close affordance, else
/// appended at the end.
fn append_order_box(els: &Elements, record: &OrderRecord) {
    let Some(section) = &els.my_orders_section else {
        return;
    };

    let order_box = dom::create_element("div");
    order_box.set_class_name("box");
    dom::set_inner_html(
        &order_box,
        &format!(
            "<p>placed on : <span>{placed_on}</span></p>\
             <p>name : <span>{name}</span></p>\
             <p>number : <span>{number}</span></p>\
             <p>address : <span>{address}</span></p>\
             <p>payment method : <span>{method}</span></p>\
             <p>your orders : <span>{orders}</span></p>\
             <p>total price : <span>${total}/-</span></p>\
             <p>payment status : <span style=\"color: var(--red);\">{status}</span></p>",
            placed_on = record.placed_on,
            name = record.customer_name,
            number = record.phone,
            address = record.address,
            method = record.method,
            orders = record.item_summary(),
            total = record.total,
            status = PAYMENT_STATUS_PENDING,
        ),
    );

    let anchor = section
        .query_selector(".title")
        .ok()
        .flatten()
        .or_else(|| section.query_selector("#close-orders").ok().flatten());
    let reference = anchor.and_then(|a| a.next_sibling());
    let _ = section.insert_before(&order_box, reference.as_ref());
}
