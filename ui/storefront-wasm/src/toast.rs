//! Toast notifications.
//!
//! One reusable `.toast-notification` element, lazily created (with its
//! one-time style block) and appended to `<body>` on first use. Each `show`
//! cancels the pending hide timer, so an older timer can never hide a newer
//! message early.

use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::Element;

const TOAST_VISIBLE_MS: u32 = 3_000;

const TOAST_CSS: &str = "
.toast-notification {
  position: fixed;
  bottom: 20px;
  left: 50%;
  transform: translateX(-50%);
  background-color: var(--black);
  color: var(--white);
  padding: 1rem 2rem;
  border-radius: 5px;
  font-size: 1.6rem;
  z-index: 10000;
  opacity: 0;
  transition: opacity 0.3s ease;
}
.toast-notification.show {
  opacity: 1;
}
";

thread_local! {
    static HIDE_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

fn toast_element() -> Element {
    if let Some(el) = dom::query(".toast-notification") {
        return el;
    }

    let style = dom::create_element("style");
    style.set_text_content(Some(TOAST_CSS));
    if let Some(head) = dom::document().head() {
        let _ = head.append_child(&style);
    }

    let el = dom::create_element("div");
    el.set_class_name("toast-notification");
    if let Some(body) = dom::document().body() {
        let _ = body.append_child(&el);
    }
    el
}

/// Show a transient message for three seconds. A newer message overwrites
/// the text and restarts the visibility window.
pub fn show(message: &str) {
    let el = toast_element();
    el.set_text_content(Some(message));
    dom::add_class(&el, "show");

    let hidden = el.clone();
    let timeout = Timeout::new(TOAST_VISIBLE_MS, move || {
        dom::remove_class(&hidden, "show");
    });
    // Cancel the previous hide timer before arming the new one
    HIDE_TIMER.with(|t| {
        if let Some(prev) = t.borrow_mut().replace(timeout) {
            prev.cancel();
        }
    });
}
