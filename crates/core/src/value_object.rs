//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects holding the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a quality score of 20 equals any other 20)
/// - **Entity**: has identity (two inventory items with equal fields are still
///   two different items on the shelf)
///
/// ## Mutation
///
/// Value objects are normally immutable. Where a value object does expose
/// mutators (the bounded quality score does), those mutators are the **only**
/// way to change it and each one must preserve the type's invariant on its own.
///
/// The trait requires:
/// - **Clone**: value objects should be cheap to copy
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, tests)
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quality(i32);
///
/// impl ValueObject for Quality {}
///
/// assert_eq!(Quality(20), Quality(20));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
