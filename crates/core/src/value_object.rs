//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two `Money`
/// amounts of 28 500 rupiah are the same amount, whichever product produced
/// them. To "modify" a value object, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(100), Money(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
