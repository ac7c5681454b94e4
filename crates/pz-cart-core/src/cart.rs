//! Cart data model.
//!
//! A cart is an ordered list of line items keyed by product name. All
//! mutation is linear-scan over the list; re-adding a name merges into the
//! existing entry rather than duplicating it.

use serde::{Deserialize, Serialize};

/// One cart entry. The product name doubles as the lookup key; there is no
/// separate numeric id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price as captured from the page's display text. Kept verbatim
    /// for rendering; arithmetic goes through [`LineItem::unit_price`].
    pub price: String,
    pub image: String,
    pub qty: u32,
}

impl LineItem {
    /// Integer unit price. Unparseable prices contribute 0 to totals.
    pub fn unit_price(&self) -> i64 {
        self.price.trim().parse().unwrap_or(0)
    }

    /// One-line summary used in order records: `Margherita $10/- x 2`.
    pub fn summary(&self) -> String {
        format!("{} ${}/- x {}", self.name, self.price, self.qty)
    }
}

/// What [`Cart::set_qty`] did, so the UI can pick the matching toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QtyChange {
    Updated,
    Removed,
    NotFound,
}

/// The ordered list of line items. Serializes as a bare JSON array, which is
/// exactly what lands in the single storage slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Parse a persisted cart. Missing or malformed content is an empty cart.
    pub fn from_json(raw: &str) -> Cart {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `qty` units of a product, merging into an existing entry with the
    /// same name. Zero quantities are rejected upstream; adding zero is a
    /// no-op here so the qty > 0 invariant holds regardless.
    pub fn add(&mut self, name: &str, price: &str, image: &str, qty: u32) {
        if qty == 0 {
            return;
        }
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => item.qty += qty,
            None => self.items.push(LineItem {
                name: name.to_string(),
                price: price.to_string(),
                image: image.to_string(),
                qty,
            }),
        }
    }

    /// Drop every entry with the given name. Returns whether anything was
    /// removed; removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }

    /// Overwrite an entry's quantity. Zero delegates to removal, keeping the
    /// qty > 0 invariant; an absent name changes nothing.
    pub fn set_qty(&mut self, name: &str, qty: u32) -> QtyChange {
        if !self.items.iter().any(|item| item.name == name) {
            return QtyChange::NotFound;
        }
        if qty == 0 {
            self.remove(name);
            return QtyChange::Removed;
        }
        for item in &mut self.items {
            if item.name == name {
                item.qty = qty;
            }
        }
        QtyChange::Updated
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities, shown in the cart badge.
    pub fn total_qty(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }

    /// Grand total: `sum(unit price * qty)` over all entries.
    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.unit_price() * i64::from(item.qty))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cart {
        let mut cart = Cart::default();
        cart.add("Margherita", "10", "img/margherita.png", 2);
        cart.add("Pepperoni", "12", "img/pepperoni.png", 1);
        cart
    }

    #[test]
    fn readding_a_name_merges_instead_of_duplicating() {
        let mut cart = sample();
        cart.add("Margherita", "10", "img/margherita.png", 1);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].qty, 3);
    }

    #[test]
    fn adding_zero_quantity_changes_nothing() {
        let mut cart = sample();
        cart.add("Hawaiian", "14", "img/hawaiian.png", 0);

        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn remove_drops_the_entry_and_absent_names_are_a_noop() {
        let mut cart = sample();
        assert!(cart.remove("Pepperoni"));
        assert!(!cart.items().iter().any(|i| i.name == "Pepperoni"));

        assert!(!cart.remove("Pepperoni"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn set_qty_overwrites_in_place() {
        let mut cart = sample();
        assert_eq!(cart.set_qty("Margherita", 5), QtyChange::Updated);
        assert_eq!(cart.items()[0].qty, 5);
    }

    #[test]
    fn set_qty_zero_removes_the_entry() {
        let mut cart = sample();
        assert_eq!(cart.set_qty("Margherita", 0), QtyChange::Removed);
        assert!(!cart.items().iter().any(|i| i.name == "Margherita"));
    }

    #[test]
    fn set_qty_on_absent_name_reports_not_found() {
        let mut cart = sample();
        assert_eq!(cart.set_qty("Calzone", 3), QtyChange::NotFound);
        assert_eq!(cart, sample());
    }

    #[test]
    fn badge_count_is_the_qty_sum() {
        let mut cart = sample();
        assert_eq!(cart.total_qty(), 3);
        cart.set_qty("Margherita", 4);
        assert_eq!(cart.total_qty(), 5);
        cart.clear();
        assert_eq!(cart.total_qty(), 0);
    }

    #[test]
    fn grand_total_tracks_every_mutation() {
        let mut cart = sample();
        assert_eq!(cart.total_price(), 2 * 10 + 12);

        cart.add("Margherita", "10", "img/margherita.png", 1);
        assert_eq!(cart.total_price(), 3 * 10 + 12);

        cart.set_qty("Margherita", 0);
        assert_eq!(cart.total_price(), 12);
    }

    #[test]
    fn unparseable_price_counts_as_zero() {
        let mut cart = Cart::default();
        cart.add("Mystery", "market price", "img/mystery.png", 3);
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_qty(), 3);
    }

    #[test]
    fn json_round_trip_preserves_the_list() {
        let cart = sample();
        let restored = Cart::from_json(&cart.to_json());
        assert_eq!(restored, cart);
    }

    #[test]
    fn malformed_json_loads_as_empty() {
        assert!(Cart::from_json("not json").is_empty());
        assert!(Cart::from_json("{\"items\":3}").is_empty());
        assert!(Cart::from_json("").is_empty());
    }
}
