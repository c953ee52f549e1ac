//! Validation gate: required-field checks.
//!
//! Mirrors native browser required-field checks. Cross-field rules (for
//! example a diagnosis date after the birth date) are not part of the gate.

use serde::Serialize;

use crate::models::{FormSchema, StepSpec};

use super::store::FieldStore;

/// Outcome of a gate check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GateReport {
    /// Required fields that are still empty, in declaration order
    pub missing: Vec<String>,
}

impl GateReport {
    pub fn is_open(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Stateless required-field checker.
pub struct ValidationGate;

impl ValidationGate {
    /// Check the required fields of a single step.
    pub fn check_step(step: &StepSpec, store: &FieldStore) -> GateReport {
        GateReport {
            missing: step
                .required
                .iter()
                .filter(|name| store.is_empty(name))
                .cloned()
                .collect(),
        }
    }

    /// Whether the user may leave `step` going forward.
    pub fn can_advance(step: &StepSpec, store: &FieldStore) -> bool {
        step.required.iter().all(|name| !store.is_empty(name))
    }

    /// Check the required fields of every step, in step order.
    pub fn check_all(schema: &FormSchema, store: &FieldStore) -> GateReport {
        GateReport {
            missing: schema
                .steps
                .iter()
                .flat_map(|step| Self::check_step(step, store).missing)
                .collect(),
        }
    }
}
