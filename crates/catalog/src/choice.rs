use serde::{Deserialize, Serialize};

use velokit_core::{ChoiceId, Entity, PartId};

use crate::constraint::Constraint;

/// One selectable value for a part.
///
/// Catalog fields (`part_id`, `price_adjustment`, `out_of_stock`,
/// `constraints`) are immutable. `selected` and `disabled` are session
/// state, owned by the customization pass that mutates the product graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartChoice {
    id: ChoiceId,
    part_id: PartId,
    /// Adjustment in the smallest currency unit; may be negative.
    price_adjustment: i64,
    out_of_stock: bool,
    selected: bool,
    disabled: bool,
    /// Rules that apply *to this choice* when some other choice is picked.
    constraints: Vec<Constraint>,
}

impl PartChoice {
    pub fn new(id: ChoiceId, part_id: PartId, price_adjustment: i64) -> Self {
        Self {
            id,
            part_id,
            price_adjustment,
            out_of_stock: false,
            selected: false,
            disabled: false,
            constraints: Vec::new(),
        }
    }

    pub fn with_out_of_stock(mut self, out_of_stock: bool) -> Self {
        self.out_of_stock = out_of_stock;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn part_id(&self) -> PartId {
        self.part_id
    }

    pub fn price_adjustment(&self) -> i64 {
        self.price_adjustment
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.out_of_stock
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Mark this choice selected.
    ///
    /// A disabled choice never transitions to selected; callers check the
    /// flag and surface the error before getting here, so the guard makes
    /// the invariant unconditional rather than convention.
    pub fn mark_selected(&mut self) {
        if !self.disabled {
            self.selected = true;
        }
    }

    /// Disable this choice for the current session.
    pub fn disable(&mut self) {
        self.disabled = true;
    }
}

impl Entity for PartChoice {
    type Id = ChoiceId;

    fn id(&self) -> ChoiceId {
        self.id
    }
}

/// Ordered, id-indexed collection of part choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartChoices(Vec<PartChoice>);

impl PartChoices {
    pub fn new(choices: Vec<PartChoice>) -> Self {
        Self(choices)
    }

    /// Returns the matching choice or `None`.
    pub fn find_by_id(&self, id: ChoiceId) -> Option<&PartChoice> {
        self.0.iter().find(|choice| choice.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: ChoiceId) -> Option<&mut PartChoice> {
        self.0.iter_mut().find(|choice| choice.id() == id)
    }

    /// All choices belonging to one part, in collection order.
    pub fn for_part(&self, part_id: PartId) -> impl Iterator<Item = &PartChoice> {
        self.0.iter().filter(move |choice| choice.part_id() == part_id)
    }

    /// The subset of a part's choices whose id appears in `requested`.
    ///
    /// Used to detect "more than one choice requested for one part"; ids in
    /// `requested` that belong to other parts (or to no part) simply don't
    /// match.
    pub fn matching_for_part(
        &self,
        part_id: PartId,
        requested: &[ChoiceId],
    ) -> Vec<&PartChoice> {
        self.for_part(part_id)
            .filter(|choice| requested.contains(&choice.id()))
            .collect()
    }

    /// View of the effectively-selected choices: `selected && !disabled`.
    pub fn selected(&self) -> impl Iterator<Item = &PartChoice> {
        self.0
            .iter()
            .filter(|choice| choice.is_selected() && !choice.is_disabled())
    }

    /// Sum of `price_adjustment` over the selected view only.
    pub fn total_price_adjustment(&self) -> i64 {
        self.selected().map(PartChoice::price_adjustment).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartChoice> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PartChoice> for PartChoices {
    fn from_iter<I: IntoIterator<Item = PartChoice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
