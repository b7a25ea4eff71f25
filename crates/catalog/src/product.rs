use serde::{Deserialize, Serialize};

use velokit_core::{Entity, ProductId};

use crate::choice::PartChoices;
use crate::constraint::Constraint;
use crate::part::Parts;

/// Whether a product is sold as-is or configured part by part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Standard,
    Customizable,
}

/// Aggregate root: a product and the full graph of its parts and choices.
///
/// Identity, kind and `base_price` are immutable; the choice flags inside
/// `part_choices` are the only mutable state, written by exactly one
/// customization pass. The aggregate owns both collections exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    kind: ProductKind,
    /// Base price in the smallest currency unit.
    base_price: i64,
    parts: Parts,
    part_choices: PartChoices,
}

impl Product {
    pub fn new(
        id: ProductId,
        kind: ProductKind,
        base_price: i64,
        parts: Parts,
        part_choices: PartChoices,
    ) -> Self {
        Self {
            id,
            kind,
            base_price,
            parts,
            part_choices,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn base_price(&self) -> i64 {
        self.base_price
    }

    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    pub fn part_choices(&self) -> &PartChoices {
        &self.part_choices
    }

    pub fn part_choices_mut(&mut self) -> &mut PartChoices {
        &mut self.part_choices
    }

    /// Derived total for the current selection state.
    ///
    /// `base_price`, plus the `price_adjustment` of every choice that is
    /// selected and not disabled, plus the contribution of every price
    /// constraint whose trigger choice is currently in that selected view.
    /// A price constraint contributes independently of which choice
    /// physically carries it. Recomputed from scratch on every call; never
    /// cached, so it can't go stale.
    pub fn current_total_price(&self) -> i64 {
        let selected: Vec<_> = self.part_choices.selected().collect();

        // Price constraints attached to any currently-selected choice.
        let price_constraints: Vec<&Constraint> = selected
            .iter()
            .flat_map(|choice| choice.constraints())
            .filter(|constraint| matches!(constraint, Constraint::Price { .. }))
            .collect();

        let mut total = self.base_price + self.part_choices.total_price_adjustment();

        for choice in &selected {
            for constraint in &price_constraints {
                if let Constraint::Price {
                    constrained_by_choice_id,
                    price_adjustment,
                    ..
                } = constraint
                {
                    if *constrained_by_choice_id == choice.id() {
                        total += price_adjustment;
                    }
                }
            }
        }

        total
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
