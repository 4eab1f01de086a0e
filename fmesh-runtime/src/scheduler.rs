//! The per-component activation attempt (§4.4, §4.5) and the per-cycle stop
//! decision (§4.6 step e).

use crate::error::RunError;
use fmesh_core::hook::ActivationContext;
use fmesh_core::{
    ActivationCode, ActivationError, ActivationOutcome, ActivationResult, Component, Cycle,
    CyclesLimit, ErrorHandlingStrategy, LimitError, MeshConfig, TimeLimit,
};
use std::sync::Arc;
use std::time::Instant;

/// Run one component's activation attempt for the current cycle (§4.4).
///
/// The activation function itself runs inside a nested `tokio::spawn`, not
/// the outer per-component worker: this isolates exactly the user code from
/// a panic, the same boundary `LocalOrch::dispatch_many` draws around each
/// dispatched operator call, while letting the surrounding readiness check
/// and hook firing run as ordinary (non-panicking) scheduler code.
pub(crate) async fn run_activation(component: Arc<Component>) -> ActivationResult {
    let name = component.name().clone();

    if !component.has_any_input().await {
        return ActivationResult::new(name, ActivationCode::NoInput);
    }

    let Some(activation) = component.activation().cloned() else {
        return ActivationResult::new(name, ActivationCode::NoFunction);
    };

    for hook in component.hooks().await {
        hook.before_activation(&component).await;
    }

    let task_component = Arc::clone(&component);
    let handle = tokio::spawn(async move { activation.activate(&task_component).await });

    let (code, error) = match handle.await {
        Ok(ActivationOutcome::Ok) => (ActivationCode::Ok, None),
        Ok(ActivationOutcome::Err(err)) => (ActivationCode::ReturnedError, Some(err)),
        Ok(ActivationOutcome::WaitClear) => (ActivationCode::WaitingForInputsClear, None),
        Ok(ActivationOutcome::WaitKeep) => (ActivationCode::WaitingForInputsKeep, None),
        Err(join_err) => (
            ActivationCode::Panicked,
            Some(ActivationError::Panicked {
                message: panic_message(join_err),
            }),
        ),
    };

    // Inputs are cleared after every outcome except WaitingForInputsKeep (§4.4).
    if code != ActivationCode::WaitingForInputsKeep {
        component.clear_inputs().await;
    }

    let result = match error {
        Some(err) => ActivationResult::with_error(component.name().clone(), code, err),
        None => ActivationResult::new(component.name().clone(), code),
    };

    let ctx = ActivationContext {
        component: &component,
        result: &result,
    };
    for hook in component.hooks().await {
        match code {
            ActivationCode::Ok => hook.on_success(&ctx).await,
            ActivationCode::ReturnedError => hook.on_error(&ctx).await,
            ActivationCode::Panicked => hook.on_panic(&ctx).await,
            ActivationCode::WaitingForInputsClear | ActivationCode::WaitingForInputsKeep => {
                hook.on_waiting(&ctx).await
            }
            ActivationCode::NoInput | ActivationCode::NoFunction => {}
            _ => {}
        }
        hook.after_activation(&ctx).await;
    }

    result
}

/// Convert a `JoinError` caused by a panicking activation into the captured
/// message, downcasting the panic payload the way `std::panic::catch_unwind`
/// callers conventionally do. Falls back to the join error's own message if
/// the task was cancelled rather than panicked (should not happen here,
/// since the scheduler never aborts activation tasks).
pub(crate) fn panic_message(join_err: tokio::task::JoinError) -> String {
    match join_err.try_into_panic() {
        Ok(payload) => {
            if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "activation panicked with a non-string payload".to_string()
            }
        }
        Err(cancelled) => cancelled.to_string(),
    }
}

/// Decide, from one cycle's results and the mesh config, whether the run
/// should stop (§4.6 step e). Returns `None` to continue (and transport),
/// `Some(Ok(()))` on natural quiesce, `Some(Err(_))` on a policy or limit
/// stop. Checked in the order the spec lists: error-handling policy first,
/// then quiescence, then cycles limit, then time limit.
pub(crate) fn stop_decision(
    cycle: &Cycle,
    cycle_number: u64,
    start: Instant,
    config: &MeshConfig,
) -> Option<Result<(), RunError>> {
    use ActivationCode::{Panicked, ReturnedError};

    let policy_violation = cycle.activation_results.iter().find(|r| {
        matches!(
            (config.error_handling_strategy, r.code),
            (ErrorHandlingStrategy::StopOnFirstError, ReturnedError)
                | (ErrorHandlingStrategy::StopOnFirstErrorOrPanic, ReturnedError)
                | (ErrorHandlingStrategy::StopOnFirstErrorOrPanic, Panicked)
                | (ErrorHandlingStrategy::StopOnFirstPanic, Panicked)
        )
    });
    if let Some(result) = policy_violation {
        return Some(Err(RunError::PolicyStop {
            component: result.component_name.clone(),
            code: result.code,
        }));
    }

    if !cycle.any_activated() {
        return Some(Ok(()));
    }

    if let CyclesLimit::Limited(n) = config.cycles_limit {
        if cycle_number >= n {
            return Some(Err(RunError::Limit(LimitError::CyclesLimitReached(
                cycle_number,
            ))));
        }
    }

    if let TimeLimit::Limited(limit) = config.time_limit {
        let elapsed = start.elapsed();
        if elapsed >= limit {
            return Some(Err(RunError::Limit(LimitError::TimeLimitReached(elapsed))));
        }
    }

    None
}
