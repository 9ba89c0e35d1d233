//! Mutation hooks.
//!
//! Every dispatched action that changed state is offered to the
//! registered hooks after persistence. The system-log collection is
//! intentionally not written here; audit capture semantics are still
//! undecided, so the hook seam is the extension point a future
//! implementation plugs into.

use crate::action::Action;
use crate::state::AppState;

/// Observer invoked after each state-changing dispatch.
pub trait MutationHook: Send + Sync {
    fn on_mutation(&self, action: &Action, state: &AppState);
}

/// Hook that emits a structured tracing event per mutation.
#[derive(Debug, Default)]
pub struct TracingHook;

impl MutationHook for TracingHook {
    fn on_mutation(&self, action: &Action, state: &AppState) {
        tracing::info!(
            action = action.kind(),
            projects = state.projects.len(),
            quotations = state.quotations.len(),
            "state mutated"
        );
    }
}
