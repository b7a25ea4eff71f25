//! Strongly-typed identifiers used across the domain.
//!
//! The whole catalog is an arena of entities cross-referenced by plain
//! integer IDs (`part_id`, `option_choice_id`, `constrained_by_choice_id`),
//! which keeps the model serializable and makes disable cascades pure
//! id-indexed lookups instead of pointer chasing.

use serde::{Deserialize, Serialize};

/// Identifier of a configurable part slot on a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u64);

/// Identifier of one selectable choice for a part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(u64);

/// Identifier of a constraint attached to a part choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintId(u64);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

macro_rules! impl_id_newtype {
    ($t:ty) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_id_newtype!(PartId);
impl_id_newtype!(ChoiceId);
impl_id_newtype!(ConstraintId);
impl_id_newtype!(ProductId);
