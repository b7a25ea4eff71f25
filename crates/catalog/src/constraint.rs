use serde::{Deserialize, Serialize};

use velokit_core::{ChoiceId, ConstraintId, Entity};

/// A compatibility or pricing rule attached to a part choice.
///
/// A constraint is carried by the choice it acts upon (`option_choice_id`)
/// and activates when a *different* choice — the trigger, named by
/// `constrained_by_choice_id` — is part of the current selection. The
/// trigger always references a choice, never a part, and several
/// constraints may target the same choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Constraint {
    /// Selecting the trigger choice disables the target choice.
    Incompatible {
        id: ConstraintId,
        option_choice_id: ChoiceId,
        constrained_by_choice_id: ChoiceId,
    },
    /// While the trigger choice is selected, `price_adjustment` contributes
    /// to the product total. Never mutates any flag; realized at price-read
    /// time only.
    Price {
        id: ConstraintId,
        option_choice_id: ChoiceId,
        constrained_by_choice_id: ChoiceId,
        /// Adjustment in the smallest currency unit; may be negative.
        price_adjustment: i64,
    },
}

impl Constraint {
    /// Kind tag for the incompatible variant, as it appears on the wire.
    pub const INCOMPATIBLE: &'static str = "incompatible";
    /// Kind tag for the price variant, as it appears on the wire.
    pub const PRICE: &'static str = "price";

    pub fn incompatible(
        id: ConstraintId,
        option_choice_id: ChoiceId,
        constrained_by_choice_id: ChoiceId,
    ) -> Self {
        Self::Incompatible {
            id,
            option_choice_id,
            constrained_by_choice_id,
        }
    }

    pub fn price(
        id: ConstraintId,
        option_choice_id: ChoiceId,
        constrained_by_choice_id: ChoiceId,
        price_adjustment: i64,
    ) -> Self {
        Self::Price {
            id,
            option_choice_id,
            constrained_by_choice_id,
            price_adjustment,
        }
    }

    pub fn constraint_id(&self) -> ConstraintId {
        match self {
            Self::Incompatible { id, .. } | Self::Price { id, .. } => *id,
        }
    }

    /// The string tag identifying this constraint's kind; also the dispatch
    /// key for the handler registry.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Incompatible { .. } => Self::INCOMPATIBLE,
            Self::Price { .. } => Self::PRICE,
        }
    }

    /// The choice this constraint acts upon (typically the one carrying it).
    pub fn option_choice_id(&self) -> ChoiceId {
        match self {
            Self::Incompatible {
                option_choice_id, ..
            }
            | Self::Price {
                option_choice_id, ..
            } => *option_choice_id,
        }
    }

    /// The trigger choice whose selection activates this constraint.
    pub fn constrained_by_choice_id(&self) -> ChoiceId {
        match self {
            Self::Incompatible {
                constrained_by_choice_id,
                ..
            }
            | Self::Price {
                constrained_by_choice_id,
                ..
            } => *constrained_by_choice_id,
        }
    }

    /// Price contribution of this constraint; `None` for non-price kinds.
    pub fn price_adjustment(&self) -> Option<i64> {
        match self {
            Self::Price {
                price_adjustment, ..
            } => Some(*price_adjustment),
            Self::Incompatible { .. } => None,
        }
    }
}

impl Entity for Constraint {
    type Id = ConstraintId;

    fn id(&self) -> ConstraintId {
        self.constraint_id()
    }
}
