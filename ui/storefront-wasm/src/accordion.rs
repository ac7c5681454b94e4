//! FAQ accordion: at most one section open at a time.

use crate::dom::{self, Elements};
use web_sys::Element;

/// Deactivate every section, then activate the clicked one.
pub fn activate(els: &Elements, target: &Element) {
    for section in &els.accordions {
        dom::remove_class(section, "active");
    }
    dom::add_class(target, "active");
}
