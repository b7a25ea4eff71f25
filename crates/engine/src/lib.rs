//! Customization engine for variant-based products.
//!
//! This crate sequences one customization attempt over a product graph:
//!
//! 1. [`SelectedOptions`] — the validated selection request.
//! 2. [`ConstraintEngine`] — the priority-dispatch constraint sweep that
//!    disables choices before anything is selected.
//! 3. Choice selection — applies the request part by part.
//! 4. [`Customizer`] — the orchestrator tying the two passes together.
//!
//! Everything here is synchronous, single-threaded, pure in-process
//! computation over a mutable product graph. Callers serialize access to a
//! given `Product` instance; the engine assumes exclusive access for the
//! duration of one `customize` call.

pub mod customizer;
pub mod resolver;
pub mod selection;
pub mod selector;


pub use customizer::Customizer;
pub use resolver::{
    ConstraintEngine, ConstraintHandler, IncompatibleConstraintHandler, PriceConstraintHandler,
    ResolutionContext,
};
pub use selection::SelectedOptions;
