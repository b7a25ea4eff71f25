//! Domain error model.

use thiserror::Error;

/// Result type used across the customization domain.
pub type CustomizationResult<T> = Result<T, CustomizationError>;

/// Customization-level error.
///
/// Keep this focused on deterministic failures of a single customization
/// attempt. Message strings are part of the observable contract (callers
/// match on the exact text), so every variant renders its payload verbatim
/// with no added prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomizationError {
    /// The selection request itself is malformed.
    #[error("{0}")]
    InvalidSelection(String),

    /// A constraint reached the engine with no registered handler for its kind.
    #[error("{0}")]
    UnhandledConstraint(String),

    /// More than one choice was requested for a single part.
    #[error("{0}")]
    SelectionConflict(String),

    /// The requested choice is disabled and cannot be selected.
    #[error("{0}")]
    ChoiceDisabled(String),
}

impl CustomizationError {
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn unhandled_constraint(msg: impl Into<String>) -> Self {
        Self::UnhandledConstraint(msg.into())
    }

    pub fn selection_conflict(msg: impl Into<String>) -> Self {
        Self::SelectionConflict(msg.into())
    }

    pub fn choice_disabled(msg: impl Into<String>) -> Self {
        Self::ChoiceDisabled(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_the_message_verbatim() {
        let err = CustomizationError::selection_conflict("Only one option choice can be selected");
        assert_eq!(err.to_string(), "Only one option choice can be selected");

        let err = CustomizationError::invalid_selection(
            "At least one product part must be selected to customize the product",
        );
        assert_eq!(
            err.to_string(),
            "At least one product part must be selected to customize the product"
        );
    }
}
