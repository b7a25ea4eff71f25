//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; two instances
/// with the same attribute values are interchangeable. In this domain the
/// canonical example is a selection request: once validated, it is a frozen
/// description of one customization attempt, and two requests naming the
/// same parts and choices mean the same thing.
///
/// To "modify" a value object, construct a new one. That keeps requests
/// safe to clone into logs or test fixtures without aliasing surprises.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
