//! Orchestration of one customization attempt.

use velokit_catalog::Product;
use velokit_core::CustomizationResult;

use crate::resolver::ConstraintEngine;
use crate::selection::SelectedOptions;
use crate::selector;

/// Sequences constraint resolution, then choice selection, over one
/// product graph.
///
/// Built explicitly with its engine at the construction site — no ambient
/// singletons, no memoized factories. Callers that need a different
/// handler set construct a different `Customizer` (or reach through
/// [`Customizer::engine_mut`]).
pub struct Customizer {
    engine: ConstraintEngine,
}

impl Customizer {
    pub fn new(engine: ConstraintEngine) -> Self {
        Self { engine }
    }

    /// Runtime access to the handler registry.
    pub fn engine_mut(&mut self) -> &mut ConstraintEngine {
        &mut self.engine
    }

    /// Apply one selection request to the product, in place.
    ///
    /// The resolution sweep completes for the entire product before any
    /// selection is attempted, so a request can never select a choice it
    /// simultaneously disables. The product is mutated directly and never
    /// copied; on error the caller still holds the partially-mutated graph,
    /// with everything applied up to the failing part.
    ///
    /// Never panics; all outcomes are the returned result.
    pub fn customize(
        &self,
        product: &mut Product,
        selection: &SelectedOptions,
    ) -> CustomizationResult<()> {
        tracing::debug!(
            product = %product.id(),
            parts = selection.part_ids().len(),
            choices = selection.choice_ids().len(),
            "customizing product"
        );

        self.engine
            .resolve(product.part_choices_mut(), selection.choice_ids())?;
        selector::apply_selection(product.part_choices_mut(), selection)
    }
}

impl Default for Customizer {
    fn default() -> Self {
        Self::new(ConstraintEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velokit_catalog::{Constraint, Part, PartChoice, PartChoices, ProductKind, Parts};
    use velokit_core::{ChoiceId, ConstraintId, CustomizationError, PartId, ProductId};

    fn product(choices: Vec<PartChoice>) -> Product {
        let parts = Parts::new(vec![
            Part::new(PartId::new(1), "Frame Type", "", 0),
            Part::new(PartId::new(2), "Wheels", "", 0),
        ]);
        Product::new(
            ProductId::new(1),
            ProductKind::Customizable,
            2000,
            parts,
            PartChoices::new(choices),
        )
    }

    fn request(part_ids: &[u64], choice_ids: &[u64]) -> SelectedOptions {
        SelectedOptions::new(
            part_ids.iter().copied().map(PartId::new).collect(),
            choice_ids.iter().copied().map(ChoiceId::new).collect(),
        )
        .unwrap()
    }

    #[test]
    fn customize_selects_the_requested_choices() {
        let mut product = product(vec![
            PartChoice::new(ChoiceId::new(101), PartId::new(1), 500),
            PartChoice::new(ChoiceId::new(201), PartId::new(2), 800),
        ]);

        Customizer::default()
            .customize(&mut product, &request(&[1, 2], &[101, 201]))
            .unwrap();

        assert!(product
            .part_choices()
            .find_by_id(ChoiceId::new(101))
            .unwrap()
            .is_selected());
        assert_eq!(product.current_total_price(), 3300);
    }

    #[test]
    fn resolution_completes_before_selection_is_attempted() {
        // Choice 201 is incompatible with 101. One request that picks both
        // must disable 201 first, then fail the selection of 201 — even
        // though part 2 comes after part 1 in iteration order.
        let mut product = product(vec![
            PartChoice::new(ChoiceId::new(101), PartId::new(1), 0),
            PartChoice::new(ChoiceId::new(201), PartId::new(2), 0).with_constraint(
                Constraint::incompatible(
                    ConstraintId::new(1),
                    ChoiceId::new(201),
                    ChoiceId::new(101),
                ),
            ),
        ]);

        let err = Customizer::default()
            .customize(&mut product, &request(&[1, 2], &[101, 201]))
            .unwrap_err();

        assert_eq!(
            err,
            CustomizationError::ChoiceDisabled(
                "Choice with Id = 201 is disabled and cannot be selected".into()
            )
        );

        // Part 1 was applied before the failure; no rollback.
        let trigger = product.part_choices().find_by_id(ChoiceId::new(101)).unwrap();
        assert!(trigger.is_selected());
        let target = product.part_choices().find_by_id(ChoiceId::new(201)).unwrap();
        assert!(target.is_disabled());
        assert!(!target.is_selected());
    }

    #[test]
    fn selecting_only_the_trigger_disables_without_selecting_the_target() {
        let mut product = product(vec![
            PartChoice::new(ChoiceId::new(101), PartId::new(1), 0),
            PartChoice::new(ChoiceId::new(201), PartId::new(2), 0).with_constraint(
                Constraint::incompatible(
                    ConstraintId::new(1),
                    ChoiceId::new(201),
                    ChoiceId::new(101),
                ),
            ),
        ]);

        Customizer::default()
            .customize(&mut product, &request(&[1], &[101]))
            .unwrap();

        let target = product.part_choices().find_by_id(ChoiceId::new(201)).unwrap();
        assert!(target.is_disabled());
        assert!(!target.is_selected());
    }

    #[test]
    fn an_engine_missing_a_handler_surfaces_the_resolver_error() {
        let mut product = product(vec![PartChoice::new(ChoiceId::new(101), PartId::new(1), 0)
            .with_constraint(Constraint::incompatible(
                ConstraintId::new(1),
                ChoiceId::new(101),
                ChoiceId::new(999),
            ))]);

        let mut customizer = Customizer::default();
        customizer.engine_mut().unregister(Constraint::INCOMPATIBLE);

        let err = customizer
            .customize(&mut product, &request(&[1], &[101]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "No handler for constraint type: incompatible"
        );
    }
}
