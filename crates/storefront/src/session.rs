//! One shopper's session: the catalog on one side, their cart on the other.

use std::sync::Arc;

use chrono::Utc;

use printmart_cart::{Cart, Receipt, checkout};
use printmart_catalog::{Catalog, Product};
use printmart_core::{CartId, Money};

use crate::error::{Pane, StorefrontError};

#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        let cart = Cart::new(CartId::new());
        tracing::info!(cart_id = %cart.id_typed(), products = catalog.len(), "storefront session started");
        Self { catalog, cart }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Put the selected catalog product in the cart.
    pub fn add_selected(&mut self, selection: Option<usize>) -> Result<Arc<Product>, StorefrontError> {
        let index = selection.ok_or(StorefrontError::NoProductSelected)?;
        let product = self
            .catalog
            .product(index)
            .map_err(|err| StorefrontError::from_domain(Pane::Catalog, err))?;

        self.cart.add(Arc::clone(&product));
        Ok(product)
    }

    /// Take the selected entry out of the cart.
    pub fn remove_selected(
        &mut self,
        selection: Option<usize>,
    ) -> Result<Arc<Product>, StorefrontError> {
        let index = selection.ok_or(StorefrontError::NoCartItemSelected)?;
        self.cart
            .remove(index)
            .map_err(|err| StorefrontError::from_domain(Pane::Cart, err))
    }

    /// Report the total and empty the cart.
    pub fn checkout(&mut self) -> Receipt {
        checkout(&mut self.cart, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront {
        Storefront::new(Catalog::print_shop().unwrap())
    }

    #[test]
    fn adding_without_selection_is_refused() {
        let mut shop = storefront();
        assert_eq!(
            shop.add_selected(None).unwrap_err(),
            StorefrontError::NoProductSelected
        );
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn removing_without_selection_is_refused() {
        let mut shop = storefront();
        shop.add_selected(Some(0)).unwrap();
        assert_eq!(
            shop.remove_selected(None).unwrap_err(),
            StorefrontError::NoCartItemSelected
        );
        assert_eq!(shop.cart().len(), 1);
    }

    #[test]
    fn add_then_remove_tracks_total() {
        let mut shop = storefront();
        shop.add_selected(Some(3)).unwrap(); // Foto 4R
        shop.add_selected(Some(6)).unwrap(); // Mug Custom
        assert_eq!(shop.total().as_major_f64(), 34440.0);

        let removed = shop.remove_selected(Some(0)).unwrap();
        assert_eq!(removed.name(), "Foto 4R");
        assert_eq!(shop.total().as_major_f64(), 31500.0);
    }

    #[test]
    fn unknown_catalog_position_is_reported_one_based() {
        let mut shop = storefront();
        assert_eq!(
            shop.add_selected(Some(20)).unwrap_err(),
            StorefrontError::NoSuchEntry {
                pane: Pane::Catalog,
                position: 21,
                len: 9,
            }
        );
    }

    #[test]
    fn checkout_empties_the_cart_but_keeps_the_catalog() {
        let mut shop = storefront();
        shop.add_selected(Some(0)).unwrap();
        let receipt = shop.checkout();

        assert_eq!(receipt.total.as_major_f64(), 28500.0);
        assert!(shop.cart().is_empty());
        assert_eq!(shop.catalog().len(), 9);
        assert!(matches!(
            shop.remove_selected(Some(0)).unwrap_err(),
            StorefrontError::NoSuchEntry { pane: Pane::Cart, position: 1, len: 0 }
        ));
    }
}
