//! Catalog domain module.
//!
//! This crate contains the variant-product data model: parts, part choices,
//! the constraints attached to them, and the product aggregate with its
//! derived pricing. Pure deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod choice;
pub mod constraint;
pub mod part;
pub mod product;

pub use choice::{PartChoice, PartChoices};
pub use constraint::Constraint;
pub use part::{Part, Parts};
pub use product::{Product, ProductKind};
