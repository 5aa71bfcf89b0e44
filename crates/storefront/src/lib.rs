//! `printmart-storefront`
//!
//! **Responsibility:** the interactive front end of the print shop.
//!
//! This crate provides:
//! - Catalog and cart listings rendered for a terminal
//! - Selection checks before anything reaches the cart
//! - Checkout reporting
//!
//! The storefront is a **thin shell** around `printmart-cart`; all pricing lives
//! in the domain crates.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod repl;
pub mod session;
pub mod view;

pub use cli::Args;
pub use config::StorefrontConfig;
pub use error::{Pane, StorefrontError};
pub use input::Action;
pub use repl::run;
pub use session::Storefront;
pub use view::View;
