use std::collections::HashSet;

use serde::Serialize;

use velokit_core::{ChoiceId, CustomizationError, CustomizationResult, PartId, ValueObject};

/// A validated selection request: the parts and choices one actor wants
/// applied in a single customization attempt.
///
/// Validation happens at construction and is the only fallible moment in
/// this type's life; once built, the request is immutable and exposed
/// read-only. Only `Serialize` is derived: deserializing a request would
/// sidestep construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedOptions {
    part_ids: Vec<PartId>,
    choice_ids: Vec<ChoiceId>,
}

impl SelectedOptions {
    /// Build a request from raw part and choice ids.
    ///
    /// Fails fast, first violated rule wins:
    /// 1. at least one part, 2. at least one choice, 3. no duplicate
    /// choice id anywhere in the flat list.
    ///
    /// Rule 3 deliberately rejects any repeated literal id — `[101, 101,
    /// 102]` fails even if the two 101s were meant for different parts.
    /// The error text says "per part" but the check is global; upstream
    /// behaves the same way, so the literal check is kept rather than
    /// reinterpreted. See the duplicate-id tests for the documented quirk.
    pub fn new(part_ids: Vec<PartId>, choice_ids: Vec<ChoiceId>) -> CustomizationResult<Self> {
        let options = Self {
            part_ids,
            choice_ids,
        };

        if !options.has_parts() {
            return Err(CustomizationError::invalid_selection(
                "At least one product part must be selected to customize the product",
            ));
        }

        if !options.has_choices() {
            return Err(CustomizationError::invalid_selection(
                "At least one product part choice must be selected to customize the product",
            ));
        }

        if options.has_duplicate_choice_ids() {
            return Err(CustomizationError::invalid_selection(
                "Only one part choice can be selected per part",
            ));
        }

        Ok(options)
    }

    pub fn part_ids(&self) -> &[PartId] {
        &self.part_ids
    }

    pub fn choice_ids(&self) -> &[ChoiceId] {
        &self.choice_ids
    }

    pub fn has_parts(&self) -> bool {
        !self.part_ids.is_empty()
    }

    pub fn has_choices(&self) -> bool {
        !self.choice_ids.is_empty()
    }

    fn has_duplicate_choice_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.choice_ids.iter().any(|id| !seen.insert(*id))
    }
}

impl ValueObject for SelectedOptions {}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_ids(ids: &[u64]) -> Vec<PartId> {
        ids.iter().copied().map(PartId::new).collect()
    }

    fn choice_ids(ids: &[u64]) -> Vec<ChoiceId> {
        ids.iter().copied().map(ChoiceId::new).collect()
    }

    #[test]
    fn accepts_a_well_formed_request() {
        let options = SelectedOptions::new(part_ids(&[1, 2]), choice_ids(&[101, 201])).unwrap();

        assert_eq!(options.part_ids().len(), 2);
        assert_eq!(options.choice_ids().len(), 2);
        assert!(options.has_parts());
        assert!(options.has_choices());
    }

    #[test]
    fn rejects_an_empty_part_list() {
        let err = SelectedOptions::new(vec![], choice_ids(&[101])).unwrap_err();
        assert_eq!(
            err,
            CustomizationError::InvalidSelection(
                "At least one product part must be selected to customize the product".into()
            )
        );
    }

    #[test]
    fn rejects_an_empty_choice_list() {
        let err = SelectedOptions::new(part_ids(&[1]), vec![]).unwrap_err();
        assert_eq!(
            err,
            CustomizationError::InvalidSelection(
                "At least one product part choice must be selected to customize the product"
                    .into()
            )
        );
    }

    #[test]
    fn rejects_any_repeated_choice_id() {
        let err = SelectedOptions::new(part_ids(&[1, 2]), choice_ids(&[101, 101, 102]))
            .unwrap_err();
        assert_eq!(
            err,
            CustomizationError::InvalidSelection(
                "Only one part choice can be selected per part".into()
            )
        );
    }

    #[test]
    fn duplicate_check_is_literal_not_per_part() {
        // Documented quirk: the message reads "per part", but the rule
        // rejects a repeated literal id even when the duplicates could only
        // have been meant for different parts. Two *distinct* ids for the
        // same part pass construction and are caught later, at selection.
        let err = SelectedOptions::new(part_ids(&[1, 2]), choice_ids(&[101, 101])).unwrap_err();
        assert!(matches!(err, CustomizationError::InvalidSelection(_)));

        let same_part_conflict =
            SelectedOptions::new(part_ids(&[1]), choice_ids(&[101, 102]));
        assert!(same_part_conflict.is_ok());
    }

    #[test]
    fn empty_part_list_wins_over_later_violations() {
        // Fail-fast ordering: rule 1 fires even though rule 3 would too.
        let err = SelectedOptions::new(vec![], choice_ids(&[101, 101])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one product part must be selected to customize the product"
        );
    }
}
