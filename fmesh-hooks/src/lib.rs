#![deny(missing_docs)]
//! Ordered hook registries for fmesh (§4.5, §4.6).
//!
//! [`ComponentHookRegistry`] and [`MeshHookRegistry`] each collect an ordered
//! list of hooks and fan every event out to all of them in registration
//! order. Unlike a middleware pipeline, hooks here are pure observers:
//! nothing they do can change scheduling, so there is no short-circuit
//! and no action to propagate back. A hook that panics propagates like any
//! other panic in the per-component worker task; `fmesh-runtime::Mesh::run`
//! catches that at the task boundary and records it as a synthetic
//! `Panicked` result rather than letting it take down the whole run (§4.5).

use fmesh_core::hook::{ActivationContext, ComponentHook, MeshHook};
use fmesh_core::{Component, Cycle};
use std::sync::Arc;

/// An ordered collection of [`ComponentHook`]s, dispatched together as one
/// logical hook attached to a component.
pub struct ComponentHookRegistry {
    hooks: Vec<Arc<dyn ComponentHook>>,
}

impl ComponentHookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook at the end of the pipeline.
    pub fn add(&mut self, hook: Arc<dyn ComponentHook>) {
        self.hooks.push(hook);
    }

    /// The registered hooks, in registration order.
    pub fn hooks(&self) -> &[Arc<dyn ComponentHook>] {
        &self.hooks
    }
}

impl Default for ComponentHookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ComponentHook for ComponentHookRegistry {
    async fn before_activation(&self, component: &Component) {
        for hook in &self.hooks {
            hook.before_activation(component).await;
        }
    }

    async fn on_success(&self, ctx: &ActivationContext<'_>) {
        for hook in &self.hooks {
            hook.on_success(ctx).await;
        }
    }

    async fn on_error(&self, ctx: &ActivationContext<'_>) {
        for hook in &self.hooks {
            hook.on_error(ctx).await;
        }
    }

    async fn on_panic(&self, ctx: &ActivationContext<'_>) {
        for hook in &self.hooks {
            hook.on_panic(ctx).await;
        }
    }

    async fn on_waiting(&self, ctx: &ActivationContext<'_>) {
        for hook in &self.hooks {
            hook.on_waiting(ctx).await;
        }
    }

    async fn after_activation(&self, ctx: &ActivationContext<'_>) {
        for hook in &self.hooks {
            hook.after_activation(ctx).await;
        }
    }
}

/// An ordered collection of [`MeshHook`]s, dispatched together as one
/// logical hook attached to a mesh.
pub struct MeshHookRegistry {
    hooks: Vec<Arc<dyn MeshHook>>,
}

impl MeshHookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook at the end of the pipeline.
    pub fn add(&mut self, hook: Arc<dyn MeshHook>) {
        self.hooks.push(hook);
    }

    /// The registered hooks, in registration order.
    pub fn hooks(&self) -> &[Arc<dyn MeshHook>] {
        &self.hooks
    }
}

impl Default for MeshHookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MeshHook for MeshHookRegistry {
    async fn before_run(&self) {
        for hook in &self.hooks {
            hook.before_run().await;
        }
    }

    async fn after_run(&self) {
        for hook in &self.hooks {
            hook.after_run().await;
        }
    }

    async fn cycle_begin(&self, cycle_number: u64) {
        for hook in &self.hooks {
            hook.cycle_begin(cycle_number).await;
        }
    }

    async fn cycle_end(&self, cycle: &Cycle) {
        for hook in &self.hooks {
            hook.cycle_end(cycle).await;
        }
    }
}

/// A built-in [`MeshHook`] that mirrors cycle boundaries into `tracing`
/// events: `debug!` for per-cycle detail, `info!` for run start/stop —
/// the same level split `neuron-runtime::TracingHook` uses for
/// loop-iteration vs. session-level events. Registered automatically when
/// [`fmesh_core::config::MeshConfig::debug`] is set.
#[derive(Debug, Default)]
pub struct TracingMeshHook;

impl TracingMeshHook {
    /// Construct a new tracing hook.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl MeshHook for TracingMeshHook {
    async fn before_run(&self) {
        tracing::info!("mesh run starting");
    }

    async fn after_run(&self) {
        tracing::info!("mesh run finished");
    }

    async fn cycle_begin(&self, cycle_number: u64) {
        tracing::debug!(cycle = cycle_number, "cycle begin");
    }

    async fn cycle_end(&self, cycle: &Cycle) {
        tracing::debug!(
            cycle = cycle.number,
            activated = cycle.any_activated(),
            results = cycle.activation_results.len(),
            "cycle end"
        );
    }
}

/// A built-in [`ComponentHook`] mirroring per-activation outcomes into
/// `tracing` events at `debug!` level, also registered when
/// [`fmesh_core::config::MeshConfig::debug`] is set.
#[derive(Debug, Default)]
pub struct TracingComponentHook;

impl TracingComponentHook {
    /// Construct a new tracing hook.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ComponentHook for TracingComponentHook {
    async fn before_activation(&self, component: &Component) {
        tracing::debug!(component = component.name().as_str(), "before activation");
    }

    async fn on_success(&self, ctx: &ActivationContext<'_>) {
        tracing::debug!(component = ctx.component.name().as_str(), "activation ok");
    }

    async fn on_error(&self, ctx: &ActivationContext<'_>) {
        tracing::debug!(
            component = ctx.component.name().as_str(),
            error = ?ctx.result.error,
            "activation returned error"
        );
    }

    async fn on_panic(&self, ctx: &ActivationContext<'_>) {
        tracing::debug!(
            component = ctx.component.name().as_str(),
            error = ?ctx.result.error,
            "activation panicked"
        );
    }

    async fn on_waiting(&self, ctx: &ActivationContext<'_>) {
        tracing::debug!(
            component = ctx.component.name().as_str(),
            code = ?ctx.result.code,
            "activation waiting for inputs"
        );
    }

    async fn after_activation(&self, ctx: &ActivationContext<'_>) {
        tracing::debug!(
            component = ctx.component.name().as_str(),
            code = ?ctx.result.code,
            "after activation"
        );
    }
}
