//! Product lookup contract consumed by customization callers.
//!
//! The engine itself never loads anything; a caller fetches the product
//! graph through [`ProductRepository::find_by_id`] and hands it to the
//! `Customizer`. Nothing else is persisted or consulted here.

pub mod repository;

pub use repository::{InMemoryProductRepository, ProductRepository};
