//! In-memory test doubles for the activation protocol and hooks.
//!
//! Available behind the `test-utils` feature flag. These are minimal
//! implementations that prove the trait APIs are usable, mirroring the
//! teacher's own `EchoOperator`/`LoggingHook` test doubles.

use crate::activation::ActivationOutcome;
use crate::component::{Activation, Component};
use crate::error::ActivationError;
use crate::hook::{ActivationContext, ComponentHook};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An activation that copies its single `"in"` input port to its single
/// `"out"` output port, unchanged. Used for testing transport and FIFO
/// ordering (§8 property 7).
pub struct PassthroughActivation;

#[async_trait]
impl Activation for PassthroughActivation {
    async fn activate(&self, component: &Component) -> ActivationOutcome {
        let input = match component.input("in") {
            Ok(p) => p,
            Err(e) => return ActivationOutcome::Err(ActivationError::Returned(e.to_string())),
        };
        let output = match component.output("out") {
            Ok(p) => p,
            Err(e) => return ActivationOutcome::Err(ActivationError::Returned(e.to_string())),
        };
        let signals = input.signals().await;
        output.put_signals(signals).await;
        ActivationOutcome::Ok
    }
}

/// An activation that always panics. Used for testing panic isolation
/// (§8 property 6, Scenario C).
pub struct PanickingActivation;

#[async_trait]
impl Activation for PanickingActivation {
    async fn activate(&self, _component: &Component) -> ActivationOutcome {
        panic!("PanickingActivation always panics");
    }
}

/// An activation that always returns an application error.
pub struct FailingActivation;

#[async_trait]
impl Activation for FailingActivation {
    async fn activate(&self, _component: &Component) -> ActivationOutcome {
        ActivationOutcome::Err(ActivationError::Returned("always fails".into()))
    }
}

/// A hook that records how many times each event fired. Used to assert the
/// firing discipline in §4.5.
#[derive(Default)]
pub struct CountingHook {
    /// Count of `before_activation` firings.
    pub before: AtomicUsize,
    /// Count of `on_success` firings.
    pub success: AtomicUsize,
    /// Count of `on_error` firings.
    pub error: AtomicUsize,
    /// Count of `on_panic` firings.
    pub panic: AtomicUsize,
    /// Count of `on_waiting` firings.
    pub waiting: AtomicUsize,
    /// Count of `after_activation` firings.
    pub after: AtomicUsize,
}

impl CountingHook {
    /// Create a fresh, zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComponentHook for CountingHook {
    async fn before_activation(&self, _component: &Component) {
        self.before.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_success(&self, _ctx: &ActivationContext<'_>) {
        self.success.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_error(&self, _ctx: &ActivationContext<'_>) {
        self.error.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_panic(&self, _ctx: &ActivationContext<'_>) {
        self.panic.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_waiting(&self, _ctx: &ActivationContext<'_>) {
        self.waiting.fetch_add(1, Ordering::SeqCst);
    }

    async fn after_activation(&self, _ctx: &ActivationContext<'_>) {
        self.after.fetch_add(1, Ordering::SeqCst);
    }
}
