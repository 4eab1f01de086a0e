//! The activation-result taxonomy (§3 "ActivationResult", §4.4) and the
//! outcome type an [`crate::component::Activation`] implementation returns.

use crate::error::ActivationError;
use crate::id::ComponentName;
use serde::{Deserialize, Serialize};

/// What an activation function decided to do this cycle. Returned from
/// [`crate::component::Activation::activate`]. The two `Wait*` variants are
/// sentinels, not errors (§9 "Waiting sentinels") — the scheduler recognizes
/// them explicitly and never routes them through error handling.
#[derive(Debug, Clone)]
pub enum ActivationOutcome {
    /// The activation ran to completion without error.
    Ok,
    /// The activation returned an application error.
    Err(ActivationError),
    /// The activation cannot make progress yet; clear inputs and try again
    /// with whatever arrives next cycle.
    WaitClear,
    /// The activation cannot make progress yet; keep inputs and try again
    /// next cycle, combined with anything newly delivered.
    WaitKeep,
}

/// The code recorded on an [`ActivationResult`] (§3).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationCode {
    /// The component activated and its function returned successfully.
    Ok,
    /// The component was not eligible: no input port had a signal.
    NoInput,
    /// The component was not eligible: it has no activation function set.
    NoFunction,
    /// The activation function returned an application error.
    ReturnedError,
    /// The activation function panicked.
    Panicked,
    /// The activation function asked to wait, clearing inputs.
    WaitingForInputsClear,
    /// The activation function asked to wait, keeping inputs.
    WaitingForInputsKeep,
}

impl ActivationCode {
    /// Whether this code corresponds to the component actually having run
    /// its activation function (§3 `activated` field): true for `Ok`,
    /// `ReturnedError`, and `Panicked`; false for everything else,
    /// including both waiting codes (§4.4: waiting sets `activated=false`).
    pub fn activated(self) -> bool {
        matches!(self, Self::Ok | Self::ReturnedError | Self::Panicked)
    }
}

/// Immutable record of one component's activation attempt in one cycle (§3).
/// Produced exactly once per component per cycle, whether or not the
/// component actually activated.
#[derive(Debug, Clone)]
pub struct ActivationResult {
    /// The component this result describes.
    pub component_name: ComponentName,
    /// Whether the activation function actually ran (see [`ActivationCode::activated`]).
    pub activated: bool,
    /// The outcome code.
    pub code: ActivationCode,
    /// The error payload, present iff `code` is `ReturnedError` or `Panicked`.
    pub error: Option<ActivationError>,
}

impl ActivationResult {
    /// Build a result for a code that carries no error.
    pub fn new(component_name: ComponentName, code: ActivationCode) -> Self {
        Self {
            component_name,
            activated: code.activated(),
            code,
            error: None,
        }
    }

    /// Build a result for a code that carries an error (`ReturnedError` or
    /// `Panicked`).
    pub fn with_error(component_name: ComponentName, code: ActivationCode, error: ActivationError) -> Self {
        Self {
            component_name,
            activated: code.activated(),
            code,
            error: Some(error),
        }
    }
}
