//! Home image slider.
//!
//! Cycles an index over the fixed `.slide` list. Index 0 is assumed active
//! in the initial markup; there is no auto-advance timer. No-ops on pages
//! without slides.

use crate::dom::{self, Elements};
use std::cell::RefCell;

thread_local! {
    static CURRENT: RefCell<usize> = RefCell::new(0);
}

pub fn next(els: &Elements) {
    let len = els.slides.len();
    if len == 0 {
        return;
    }
    CURRENT.with(|c| {
        let mut idx = c.borrow_mut();
        dom::remove_class(&els.slides[*idx], "active");
        *idx = (*idx + 1) % len;
        dom::add_class(&els.slides[*idx], "active");
    });
}

pub fn prev(els: &Elements) {
    let len = els.slides.len();
    if len == 0 {
        return;
    }
    CURRENT.with(|c| {
        let mut idx = c.borrow_mut();
        dom::remove_class(&els.slides[*idx], "active");
        *idx = (*idx + len - 1) % len;
        dom::add_class(&els.slides[*idx], "active");
    });
}
