//! Priority-dispatch constraint resolution.
//!
//! Constraints are evaluated by a registry of handlers, each declaring the
//! constraint kind it accepts and a priority (lower runs first). The
//! incompatible-constraint handler runs before everything else so that
//! disablement lands before any price accounting could observe the flags.
//! A constraint accepted by no registered handler is routed to a default
//! fallback that fails hard — an unknown constraint kind is a programming
//! error, not something to skip silently.
//!
//! The registry is open: handlers can be registered and unregistered at
//! runtime, so new constraint kinds plug in without touching call sites.

use velokit_catalog::{Constraint, PartChoice, PartChoices};
use velokit_core::{ChoiceId, CustomizationError, CustomizationResult, PartId};

/// Mutable view of the product's choices handed to handlers during the
/// sweep, scoped to one trigger choice.
pub struct ResolutionContext<'a> {
    choices: &'a mut PartChoices,
    trigger_choice_id: ChoiceId,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(choices: &'a mut PartChoices, trigger_choice_id: ChoiceId) -> Self {
        Self {
            choices,
            trigger_choice_id,
        }
    }

    /// The choice currently being evaluated as a constraint trigger.
    pub fn trigger_choice_id(&self) -> ChoiceId {
        self.trigger_choice_id
    }

    pub fn find_choice_by_id(&self, id: ChoiceId) -> Option<&PartChoice> {
        self.choices.find_by_id(id)
    }

    pub fn choices_for_part(&self, part_id: PartId) -> Vec<&PartChoice> {
        self.choices.for_part(part_id).collect()
    }

    /// Disable the target choice. Unknown ids are ignored: a constraint may
    /// reference a choice the catalog no longer carries.
    pub fn disable_choice(&mut self, id: ChoiceId) {
        if let Some(choice) = self.choices.find_by_id_mut(id) {
            choice.disable();
        }
    }
}

/// One pluggable constraint-resolution strategy.
pub trait ConstraintHandler {
    /// Dispatch key; matches the `Constraint::kind` string tags.
    fn kind(&self) -> &'static str;

    /// Sort key for the sweep; lower runs first.
    fn priority(&self) -> u8;

    fn can_handle(&self, constraint: &Constraint) -> bool;

    fn apply(
        &self,
        constraint: &Constraint,
        ctx: &mut ResolutionContext<'_>,
    ) -> CustomizationResult<()>;
}

/// Disables the target choice whenever the trigger matches the choice
/// currently under evaluation. Lowest priority: disablement must precede
/// any other constraint effect.
#[derive(Debug, Default)]
pub struct IncompatibleConstraintHandler;

impl ConstraintHandler for IncompatibleConstraintHandler {
    fn kind(&self) -> &'static str {
        Constraint::INCOMPATIBLE
    }

    fn priority(&self) -> u8 {
        0
    }

    fn can_handle(&self, constraint: &Constraint) -> bool {
        constraint.kind() == self.kind()
    }

    fn apply(
        &self,
        constraint: &Constraint,
        ctx: &mut ResolutionContext<'_>,
    ) -> CustomizationResult<()> {
        if constraint.constrained_by_choice_id() == ctx.trigger_choice_id() {
            let target = constraint.option_choice_id();
            tracing::debug!(
                trigger = %ctx.trigger_choice_id(),
                target = %target,
                "incompatible constraint disables choice"
            );
            ctx.disable_choice(target);
        }
        Ok(())
    }
}

/// Accepts price constraints and does nothing: their contribution is
/// realized at price-read time, not during the sweep. Registered purely so
/// price constraints dispatch like every other kind.
#[derive(Debug, Default)]
pub struct PriceConstraintHandler;

impl ConstraintHandler for PriceConstraintHandler {
    fn kind(&self) -> &'static str {
        Constraint::PRICE
    }

    fn priority(&self) -> u8 {
        10
    }

    fn can_handle(&self, constraint: &Constraint) -> bool {
        constraint.kind() == self.kind()
    }

    fn apply(
        &self,
        _constraint: &Constraint,
        _ctx: &mut ResolutionContext<'_>,
    ) -> CustomizationResult<()> {
        Ok(())
    }
}

/// Fallback for constraints no registered handler accepted.
#[derive(Debug, Default)]
struct DefaultConstraintHandler;

impl ConstraintHandler for DefaultConstraintHandler {
    fn kind(&self) -> &'static str {
        "default"
    }

    fn priority(&self) -> u8 {
        u8::MAX
    }

    fn can_handle(&self, _constraint: &Constraint) -> bool {
        true
    }

    fn apply(
        &self,
        constraint: &Constraint,
        _ctx: &mut ResolutionContext<'_>,
    ) -> CustomizationResult<()> {
        Err(CustomizationError::unhandled_constraint(format!(
            "No handler for constraint type: {}",
            constraint.kind()
        )))
    }
}

/// Registry of constraint handlers, kept sorted ascending by priority.
pub struct ConstraintEngine {
    handlers: Vec<Box<dyn ConstraintHandler>>,
    fallback: DefaultConstraintHandler,
}

impl ConstraintEngine {
    /// Engine with no handlers registered; every constraint falls through
    /// to the failing default.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            fallback: DefaultConstraintHandler,
        }
    }

    /// Register a handler, replacing any existing handler of the same kind.
    pub fn register(&mut self, handler: Box<dyn ConstraintHandler>) {
        self.handlers.retain(|existing| existing.kind() != handler.kind());
        self.handlers.push(handler);
        self.handlers.sort_by_key(|handler| handler.priority());
    }

    /// Remove the handler for `kind`, if any.
    pub fn unregister(&mut self, kind: &str) {
        self.handlers.retain(|handler| handler.kind() != kind);
    }

    pub fn handler_kinds(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.kind()).collect()
    }

    /// Run the resolution sweep for one selection request.
    ///
    /// The sweep covers the full constraint universe of the product — every
    /// constraint on every choice — checked against every trigger id in the
    /// request, not just constraints on choices the request tries to
    /// select. Handlers run in priority order; within a handler, every
    /// constraint it accepts is applied; leftovers go to the default
    /// handler, which fails.
    pub fn resolve(
        &self,
        choices: &mut PartChoices,
        triggers: &[ChoiceId],
    ) -> CustomizationResult<()> {
        // Snapshot the universe up front: handlers mutate choice flags
        // through the context while the sweep runs.
        let universe: Vec<Constraint> = choices
            .iter()
            .flat_map(|choice| choice.constraints().iter().cloned())
            .collect();

        for &trigger in triggers {
            let mut ctx = ResolutionContext::new(choices, trigger);
            let mut handled = vec![false; universe.len()];

            for handler in &self.handlers {
                for (idx, constraint) in universe.iter().enumerate() {
                    if !handled[idx] && handler.can_handle(constraint) {
                        handler.apply(constraint, &mut ctx)?;
                        handled[idx] = true;
                    }
                }
            }

            for (idx, constraint) in universe.iter().enumerate() {
                if !handled[idx] {
                    self.fallback.apply(constraint, &mut ctx)?;
                }
            }
        }

        Ok(())
    }
}

impl Default for ConstraintEngine {
    /// Engine with the built-in handlers: incompatible (priority 0), price
    /// (priority 10).
    fn default() -> Self {
        let mut engine = Self::empty();
        engine.register(Box::new(IncompatibleConstraintHandler));
        engine.register(Box::new(PriceConstraintHandler));
        engine
    }
}
