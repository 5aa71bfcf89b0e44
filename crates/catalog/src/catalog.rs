use std::sync::Arc;

use serde::{Deserialize, Serialize};

use printmart_core::{DomainError, DomainResult};

use crate::product::{Category, Product};

/// One catalog row as written in a catalog file (price in whole rupiah).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub base_price: u64,
    pub category: Category,
}

/// Fixed, ordered set of products for a session.
///
/// Products are handed out as `Arc`s: carts hold references into the catalog
/// rather than copies, and the catalog outlives every cart.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// The print shop's standard nine-product range.
    pub fn print_shop() -> DomainResult<Self> {
        Ok(Self::new(vec![
            Product::banner("Banner 1x1 m", 30_000)?,
            Product::banner("Banner 2x1 m", 55_000)?,
            Product::banner("Banner 3x1 m", 75_000)?,
            Product::photo_print("Foto 4R", 3_000)?,
            Product::photo_print("Foto 10R", 12_000)?,
            Product::photo_print("Foto 20R", 25_000)?,
            Product::merch("Mug Custom", 35_000)?,
            Product::merch("Kaos Sablon", 80_000)?,
            Product::merch("Stiker A4", 5_000)?,
        ]))
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> DomainResult<Self> {
        if entries.is_empty() {
            return Err(DomainError::validation("catalog must list at least one product"));
        }

        let products = entries
            .into_iter()
            .map(|entry| Product::from_whole_rupiah(entry.name, entry.base_price, entry.category))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self::new(products))
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Product>> {
        self.products.get(index)
    }

    /// Shared handle to the product at `index`.
    pub fn product(&self, index: usize) -> DomainResult<Arc<Product>> {
        self.products
            .get(index)
            .cloned()
            .ok_or_else(|| DomainError::index_out_of_range(index, self.products.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
