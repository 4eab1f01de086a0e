//! Error taxonomy (§7): validation errors, activation errors, limit errors,
//! and the chainable error that a signal/port/component/mesh can carry.

use crate::id::{ComponentName, PortName};
use thiserror::Error;

/// Errors found while validating a mesh before the first cycle (§7
/// "Validation errors"). Mirrors the builder-time checks a chainable
/// error carries — see [`MeshError::Validation`].
#[non_exhaustive]
#[derive(Debug, Error, Clone)]
pub enum ValidationError {
    /// A pipe or lookup referenced a port name that does not exist on the
    /// named component.
    #[error("port not found: {component}/{port}")]
    PortNotFound {
        /// The component the lookup was performed against.
        component: ComponentName,
        /// The port name that did not exist.
        port: PortName,
    },

    /// A pipe endpoint names a component that was never registered with
    /// the mesh (§7, §8 Scenario E — "orphan component").
    #[error("component not registered with mesh: {0}")]
    OrphanComponent(ComponentName),

    /// Two components were registered under the same name.
    #[error("duplicate component name: {0}")]
    DuplicateComponent(ComponentName),

    /// Two ports of the same direction were declared with the same name
    /// on one component.
    #[error("duplicate port name on {component}: {port}")]
    DuplicatePort {
        /// The component the duplicate was declared on.
        component: ComponentName,
        /// The duplicated port name.
        port: PortName,
    },

    /// A signal, port, component, or mesh carried an unresolved chainable
    /// error at the time `Run` was called.
    #[error("unresolved chainable error: {0}")]
    UnresolvedChainableError(String),
}

/// Errors returned by an activation function (§4.4). `Panicked` and
/// `ReturnedError` are the only two codes that carry one of these.
#[non_exhaustive]
#[derive(Debug, Error, Clone)]
pub enum ActivationError {
    /// The activation function returned a non-nil error.
    #[error("{0}")]
    Returned(String),

    /// The activation function panicked. Carries the captured panic
    /// message and, if available, a short backtrace-style note.
    #[error("panicked: {message}")]
    Panicked {
        /// The captured panic payload, converted to a string.
        message: String,
    },
}

/// Limit conditions that stop a run (§7 "Limit errors").
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// `CyclesLimit` was reached before the mesh quiesced.
    #[error("cycles limit reached after {0} cycles")]
    CyclesLimitReached(u64),

    /// `TimeLimit` was reached before the mesh quiesced.
    #[error("time limit reached after {0:?}")]
    TimeLimitReached(std::time::Duration),
}

/// The mesh-level chainable error (§7 "Propagation"): an error set on a
/// signal propagates to its port, a port error to its component, a
/// component error to the mesh. The mesh refuses to `Run` while any of
/// these carry an error.
#[non_exhaustive]
#[derive(Debug, Error, Clone)]
pub enum MeshError {
    /// A validation error found before cycle 1.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A policy-stop: the configured `ErrorHandlingStrategy` tripped on an
    /// activation's result (§4.6 step e).
    #[error("run stopped by error-handling policy: component {component} returned {code:?}")]
    PolicyStop {
        /// The component whose activation result tripped the policy.
        component: ComponentName,
        /// The activation code that tripped it.
        code: crate::activation::ActivationCode,
    },

    /// A cycles/time limit was reached.
    #[error(transparent)]
    Limit(#[from] LimitError),

    /// Catch-all for errors carried in by application code.
    #[error("{0}")]
    Other(String),
}

/// The error type returned by [`crate::port::Port::signals`]-style lookups
/// that fail because the named port doesn't exist — see
/// [`ValidationError::PortNotFound`]. Kept as a type alias so call sites read
/// naturally (`Result<_, PortLookupError>`).
pub type PortLookupError = ValidationError;
