//! Checkout: report what the cart costs, then empty it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use printmart_catalog::Category;
use printmart_core::{CartId, Money};

use crate::cart::Cart;

/// One purchased unit as it was priced at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub name: String,
    pub category: Category,
    pub base_price: Money,
    pub discounted_price: Money,
}

/// Snapshot of a cart taken at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub cart_id: CartId,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub checked_out_at: DateTime<Utc>,
}

impl Receipt {
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// What the customer saved against base prices.
    pub fn savings(&self) -> Money {
        let base: Money = self.lines.iter().map(|l| l.base_price).sum();
        Money::from_minor(base.minor().saturating_sub(self.total.minor()))
    }
}

/// Price the cart, then clear it for the next round of shopping.
///
/// An empty cart checks out to a zero total.
pub fn checkout(cart: &mut Cart, at: DateTime<Utc>) -> Receipt {
    let lines: Vec<ReceiptLine> = cart
        .entries()
        .iter()
        .map(|product| ReceiptLine {
            name: product.name().to_string(),
            category: product.category(),
            base_price: product.base_price(),
            discounted_price: product.discounted_price(),
        })
        .collect();

    let receipt = Receipt {
        cart_id: cart.id_typed(),
        total: cart.total(),
        lines,
        checked_out_at: at,
    };

    cart.clear();

    tracing::info!(
        cart_id = %receipt.cart_id,
        items = receipt.item_count(),
        total_minor = receipt.total.minor(),
        "checkout completed"
    );

    receipt
}
