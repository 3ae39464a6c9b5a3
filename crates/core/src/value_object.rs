//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Two prices of 1999 cents are the same price, whereas two
//! products with the same name are still different catalog entries.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```
/// use travelstore_core::{Money, ValueObject};
///
/// fn assert_value_object<T: ValueObject>() {}
/// assert_value_object::<Money>();
///
/// assert_eq!(Money::from_cents(8999), Money::from_cents(8999));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
