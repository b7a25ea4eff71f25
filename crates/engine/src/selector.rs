//! Choice selection: applies a validated request to the product's choices.

use velokit_catalog::PartChoices;
use velokit_core::{ChoiceId, CustomizationError, CustomizationResult};

use crate::selection::SelectedOptions;

/// Apply the requested choice picks, one part at a time, in request order.
///
/// Per part: more than one matching choice is a conflict; exactly one
/// matching-but-disabled choice is an error; exactly one enabled choice is
/// selected; zero matches is a no-op, so unknown or irrelevant choice ids
/// are silently ignored — callers rely on that.
///
/// Fail-fast and non-transactional: a failure aborts the pass, but parts
/// processed earlier keep their already-applied `selected` flags. Callers
/// observe the partially-mutated graph on error.
pub fn apply_selection(
    choices: &mut PartChoices,
    selection: &SelectedOptions,
) -> CustomizationResult<()> {
    for &part_id in selection.part_ids() {
        let matching: Vec<ChoiceId> = choices
            .matching_for_part(part_id, selection.choice_ids())
            .iter()
            .map(|choice| choice.id())
            .collect();

        match matching.as_slice() {
            [] => {}
            [choice_id] => select_one(choices, *choice_id)?,
            _ => {
                return Err(CustomizationError::selection_conflict(
                    "Only one option choice can be selected",
                ));
            }
        }
    }

    Ok(())
}

fn select_one(choices: &mut PartChoices, choice_id: ChoiceId) -> CustomizationResult<()> {
    // The id came out of the collection one lookup ago.
    let Some(choice) = choices.find_by_id_mut(choice_id) else {
        return Ok(());
    };

    if choice.is_disabled() {
        return Err(CustomizationError::choice_disabled(format!(
            "Choice with Id = {choice_id} is disabled and cannot be selected"
        )));
    }

    choice.mark_selected();
    tracing::trace!(choice = %choice_id, "choice selected");
    Ok(())
}
