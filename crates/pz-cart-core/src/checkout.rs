//! Checkout validation and order-record synthesis.
//!
//! Checkout is a client-only simulation: nothing is ever sent anywhere.
//! Validation checks run in a fixed order and stop at the first failure, so
//! the shopper sees exactly one message per attempt. The error messages are
//! the user-facing toast text.

use crate::cart::{Cart, LineItem};
use thiserror::Error;

pub const MIN_PHONE_LEN: usize = 10;
pub const MIN_PIN_LEN: usize = 5;

/// Payment never actually happens, so every synthesized order stays pending.
pub const PAYMENT_STATUS_PENDING: &str = "pending";

/// Raw checkout form values. `None` means the page's form does not carry
/// that field, which skips its check.
#[derive(Clone, Debug, Default)]
pub struct CheckoutRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub pin: Option<String>,
    pub method: String,
    pub flat: String,
    pub street: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Your cart is empty. Please add items before ordering.")]
    EmptyCart,
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter a valid PIN code.")]
    InvalidPin,
}

/// Validate a checkout attempt against the current cart.
///
/// Order matters: empty cart, then name, then phone, then PIN. Phone and PIN
/// are length checks over characters, not digit validation.
pub fn validate_checkout(cart: &Cart, req: &CheckoutRequest) -> Result<(), CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(CheckoutError::MissingName);
        }
    }
    if let Some(phone) = &req.phone {
        if phone.chars().count() < MIN_PHONE_LEN {
            return Err(CheckoutError::InvalidPhone);
        }
    }
    if let Some(pin) = &req.pin {
        if pin.chars().count() < MIN_PIN_LEN {
            return Err(CheckoutError::InvalidPin);
        }
    }
    Ok(())
}

/// A completed checkout, rendered once into the my-orders panel and never
/// persisted. The item snapshot is taken before the cart is cleared.
#[derive(Clone, Debug)]
pub struct OrderRecord {
    pub placed_on: String,
    pub customer_name: String,
    pub phone: String,
    pub method: String,
    /// `flat, street, pin` as one display string.
    pub address: String,
    pub items: Vec<LineItem>,
    pub total: i64,
}

impl OrderRecord {
    pub fn from_cart(cart: &Cart, req: &CheckoutRequest, placed_on: &str) -> Self {
        Self {
            placed_on: placed_on.to_string(),
            customer_name: req.name.clone().unwrap_or_default(),
            phone: req.phone.clone().unwrap_or_default(),
            method: req.method.clone(),
            address: format!(
                "{}, {}, {}",
                req.flat,
                req.street,
                req.pin.clone().unwrap_or_default()
            ),
            items: cart.items().to_vec(),
            total: cart.total_price(),
        }
    }

    /// Comma-joined item lines: `Margherita $10/- x 2, Diavola $13/- x 1`.
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(LineItem::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cart() -> Cart {
        let mut cart = Cart::default();
        cart.add("Margherita", "10", "img/m.png", 2);
        cart.add("Diavola", "13", "img/d.png", 1);
        cart
    }

    fn valid_request() -> CheckoutRequest {
        CheckoutRequest {
            name: Some("Ada".to_string()),
            phone: Some("0123456789".to_string()),
            pin: Some("94103".to_string()),
            method: "cash on delivery".to_string(),
            flat: "4B".to_string(),
            street: "Via Roma".to_string(),
        }
    }

    #[test]
    fn empty_cart_fails_before_anything_else() {
        let mut req = valid_request();
        req.name = Some("   ".to_string());

        let err = validate_checkout(&Cart::default(), &req).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn blank_name_fails_after_trimming() {
        let mut req = valid_request();
        req.name = Some("  \t ".to_string());

        let err = validate_checkout(&filled_cart(), &req).unwrap_err();
        assert_eq!(err, CheckoutError::MissingName);
    }

    #[test]
    fn name_failure_wins_over_phone_failure() {
        let mut req = valid_request();
        req.name = Some(String::new());
        req.phone = Some("123".to_string());

        let err = validate_checkout(&filled_cart(), &req).unwrap_err();
        assert_eq!(err, CheckoutError::MissingName);
    }

    #[test]
    fn phone_needs_at_least_ten_characters() {
        let mut req = valid_request();
        req.phone = Some("012345678".to_string());
        assert_eq!(
            validate_checkout(&filled_cart(), &req).unwrap_err(),
            CheckoutError::InvalidPhone
        );

        req.phone = Some("0123456789".to_string());
        assert!(validate_checkout(&filled_cart(), &req).is_ok());
    }

    #[test]
    fn pin_needs_at_least_five_characters() {
        let mut req = valid_request();
        req.pin = Some("9410".to_string());
        assert_eq!(
            validate_checkout(&filled_cart(), &req).unwrap_err(),
            CheckoutError::InvalidPin
        );

        req.pin = Some("94103".to_string());
        assert!(validate_checkout(&filled_cart(), &req).is_ok());
    }

    #[test]
    fn absent_fields_skip_their_checks() {
        let req = CheckoutRequest::default();
        assert!(validate_checkout(&filled_cart(), &req).is_ok());
    }

    #[test]
    fn record_snapshots_the_cart_before_it_is_cleared() {
        let mut cart = filled_cart();
        let record = OrderRecord::from_cart(&cart, &valid_request(), "1/15/2026");
        cart.clear();

        assert_eq!(record.items.len(), 2);
        assert_eq!(record.total, 2 * 10 + 13);
        assert_eq!(
            record.item_summary(),
            "Margherita $10/- x 2, Diavola $13/- x 1"
        );
        assert_eq!(record.address, "4B, Via Roma, 94103");
        assert_eq!(record.placed_on, "1/15/2026");
    }

    #[test]
    fn valid_checkout_then_clear_leaves_the_store_empty() {
        use crate::storage::InMemoryBackend;
        use crate::store::CartStore;

        let backend = InMemoryBackend::default();
        let mut store = CartStore::open(backend.clone());
        store.add_item("Margherita", "10", "img/m.png", 2).unwrap();

        let req = valid_request();
        validate_checkout(store.cart(), &req).unwrap();
        let record = OrderRecord::from_cart(store.cart(), &req, "1/15/2026");
        store.clear().unwrap();

        assert!(store.cart().is_empty());
        assert!(CartStore::open(backend).cart().is_empty());
        assert_eq!(record.items.len(), 1);
    }
}
