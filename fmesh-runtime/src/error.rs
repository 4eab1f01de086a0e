//! Errors and the run result returned by [`crate::mesh::Mesh::run`] (§7).

use fmesh_core::{ActivationCode, ComponentName, Cycle, LimitError, ValidationError};
use std::time::Duration;
use thiserror::Error;

/// The result of a completed run (§6 "RuntimeInfo"): every cycle executed,
/// in order, and the total wall-clock duration.
#[derive(Debug)]
pub struct RuntimeInfo {
    /// Every cycle executed, in order.
    pub cycles: Vec<Cycle>,
    /// Total wall-clock duration of the run, from `BeforeRun` to `AfterRun`.
    pub duration: Duration,
}

impl RuntimeInfo {
    /// Number of cycles executed.
    pub fn cycle_count(&self) -> u64 {
        self.cycles.len() as u64
    }
}

/// Why a run did not end in natural quiesce (§7 "Run verdict": exactly one
/// of success, validation-failed, policy-stop, limit-stop).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RunError {
    /// Validation failed before cycle 1 — an orphan component, an unknown
    /// port, a duplicate name, or an unresolved chainable error.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configured `ErrorHandlingStrategy` tripped on a component's
    /// activation result.
    #[error("run stopped by error-handling policy: component {component} returned {code:?}")]
    PolicyStop {
        /// The component whose activation result tripped the policy.
        component: ComponentName,
        /// The activation code that tripped it.
        code: ActivationCode,
    },

    /// A configured cycles or time limit was reached before the mesh
    /// quiesced.
    #[error(transparent)]
    Limit(#[from] LimitError),

    /// Catch-all for errors surfaced by application code.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
