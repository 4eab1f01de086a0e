//! The Hook interface (§4.5, §4.6) — observation of the run/cycle/activation
//! lifecycle. Hooks are pure observers here: unlike a short-circuiting
//! pipeline, nothing a hook returns can alter scheduling (§4.5: "Hooks must
//! not panic; if they do ... must not corrupt the scheduler").

use crate::activation::ActivationResult;
use crate::component::Component;
use crate::cycle::Cycle;
use async_trait::async_trait;

/// Context handed to the post-activation outcome hooks (§4.5).
pub struct ActivationContext<'a> {
    /// The component that was activated.
    pub component: &'a Component,
    /// The result of that activation.
    pub result: &'a ActivationResult,
}

/// Hooks registered on a single component (§4.5). Firing discipline:
/// `before_activation` → function body → exactly one of `on_success` /
/// `on_error` / `on_panic` / `on_waiting` → `after_activation`. Hooks fire
/// only when the component actually enters the activation attempt — never
/// on `NoInput` or `NoFunction`.
///
/// All methods default to no-ops so an implementation only needs to
/// override the events it cares about.
#[async_trait]
pub trait ComponentHook: Send + Sync {
    /// Fires immediately before the activation function is invoked.
    async fn before_activation(&self, _component: &Component) {}

    /// Fires when the activation returned `Ok` (code `Ok`).
    async fn on_success(&self, _ctx: &ActivationContext<'_>) {}

    /// Fires when the activation returned an application error.
    async fn on_error(&self, _ctx: &ActivationContext<'_>) {}

    /// Fires when the activation panicked.
    async fn on_panic(&self, _ctx: &ActivationContext<'_>) {}

    /// Fires when the activation returned a waiting sentinel (either flavor).
    async fn on_waiting(&self, _ctx: &ActivationContext<'_>) {}

    /// Fires after the outcome hook, unconditionally, for every attempted
    /// activation.
    async fn after_activation(&self, _ctx: &ActivationContext<'_>) {}
}

/// Hooks registered on a mesh (§4.6): run and cycle boundaries.
#[async_trait]
pub trait MeshHook: Send + Sync {
    /// Fires once, before cycle 1 (after successful validation).
    async fn before_run(&self) {}

    /// Fires once, after the final cycle (or immediately, if validation failed).
    async fn after_run(&self) {}

    /// Fires at the start of each cycle, before activation.
    async fn cycle_begin(&self, _cycle_number: u64) {}

    /// Fires at the end of each cycle, after every component's
    /// `ActivationResult` has been collected.
    async fn cycle_end(&self, _cycle: &Cycle) {}
}
