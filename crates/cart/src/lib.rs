//! Cart domain module.
//!
//! This crate contains business rules for the shopping cart and checkout,
//! implemented purely as deterministic domain logic (no IO, no terminal).

pub mod cart;
pub mod checkout;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEvent, CartState, ClearCart, ItemAdded,
    ItemRemoved, RemoveItem,
};
pub use checkout::{Receipt, ReceiptLine, checkout};
