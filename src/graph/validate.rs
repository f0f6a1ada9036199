//! Whole-definition validation that reports every problem at once.
//!
//! Construction stops at the first error. Validation instead checks every
//! transition, initial state and terminal state and accumulates ALL
//! failures, so a definition can be fixed in a single pass.

use super::aggregate::check_endpoints;
use super::error::GraphError;
use crate::core::MachineDefinition;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate a definition, accumulating every structural problem.
pub fn validate<D: MachineDefinition + ?Sized>(
    definition: &D,
) -> Validation<(), NonEmptyVec<GraphError>> {
    let states = definition.states();
    let known: HashSet<&str> = states.iter().map(|s| s.id.as_str()).collect();
    let mut checks: Vec<Validation<(), NonEmptyVec<GraphError>>> = Vec::new();

    let mut check_reference = |state: &str, referenced_by: String| {
        let check = if known.contains(state) {
            Validation::success(())
        } else {
            Validation::fail(GraphError::UnknownStateReference {
                state: state.to_string(),
                referenced_by,
            })
        };
        checks.push(check);
    };

    for id in definition.initial_states() {
        check_reference(&id, "initial states".to_string());
    }

    for transition in definition.transitions() {
        for state in transition.from.iter().chain(transition.to.iter()) {
            check_reference(state, format!("transition '{}'", transition.event));
        }
    }

    for id in definition.terminal_states() {
        check_reference(&id, "terminal states".to_string());
    }

    for transition in definition.transitions() {
        let check = match check_endpoints(&transition) {
            Ok(()) => Validation::success(()),
            Err(error) => Validation::fail(error),
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
