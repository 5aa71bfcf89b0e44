//! `printmart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal, no files).

pub mod aggregate;
pub mod error;
pub mod event;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::CartId;
pub use money::{DiscountRate, Money};
pub use value_object::ValueObject;
