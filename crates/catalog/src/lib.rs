//! Catalog domain module.
//!
//! This crate contains the print-product taxonomy and its pricing rules,
//! implemented purely as deterministic domain logic (no IO, no terminal).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogEntry};
pub use product::{Category, Product};
