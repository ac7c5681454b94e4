//! Cart rendering.
//!
//! Pure function of store state → markup; every mutation rebuilds the cart
//! section, the order-display sections, and the badge wholesale. Nothing
//! here attaches listeners: all interaction with regenerated markup is
//! delegated from stable containers in `events`, so a re-render can never
//! lose a listener.

use crate::dom::{self, Elements};
use crate::state;
use pz_cart_core::{Cart, LineItem};

/// Re-render everything derived from the cart.
pub fn render(els: &Elements) {
    let cart = state::with_store(|s| s.cart().clone());
    render_badge(els, &cart);
    render_cart_section(els, &cart);
    render_order_displays(els, &cart);
}

/// `Margherita <span>( $10/- x 2 )</span>`
fn line_label(item: &LineItem) -> String {
    format!(
        "{} <span>( ${}/- x {} )</span>",
        item.name, item.price, item.qty
    )
}

fn render_badge(els: &Elements, cart: &Cart) {
    dom::set_text(&els.cart_count, &format!("({})", cart.total_qty()));
}

fn render_cart_section(els: &Elements, cart: &Cart) {
    let Some(section) = &els.cart_content else {
        return;
    };

    let mut html = String::from(r#"<div id="close-cart"><span>close</span></div>"#);
    for item in cart.items() {
        html.push_str(&format!(
            r##"
            <div class="box">
                <a href="#" class="fas fa-times"></a>
                <img src="{image}" alt="{name}">
                <div class="content">
                    <p>{label}</p>
                    <form action="" method="post">
                        <input type="number" class="qty" name="qty" min="1" max="100" value="{qty}">
                        <button type="submit" class="fas fa-edit" name="update_qty"></button>
                    </form>
                </div>
            </div>
            "##,
            image = item.image,
            name = item.name,
            label = line_label(item),
            qty = item.qty,
        ));
    }

    if cart.is_empty() {
        html.push_str(
            r#"<p style="text-align: center; font-size: 2rem; margin: 2rem 0;">Your cart is empty</p>"#,
        );
    } else {
        html.push_str(r##"<a href="#order" class="btn">order now</a>"##);
    }

    dom::set_inner_html(section, &html);
}

fn render_order_displays(els: &Elements, cart: &Cart) {
    for section in &els.order_display_sections {
        let mut html = String::new();
        for item in cart.items() {
            html.push_str(&format!("<p>{}</p>", line_label(item)));
        }
        if cart.is_empty() {
            html.push_str("<p>Your cart is empty</p>");
        } else {
            html.push_str(&format!(
                r#"<p class="total-price">Total: <span>${}/-</span></p>"#,
                cart.total_price()
            ));
        }
        dom::set_inner_html(section, &html);
    }
}
