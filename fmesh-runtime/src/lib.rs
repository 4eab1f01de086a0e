//! # fmesh-runtime — the synchronous-cycle scheduler
//!
//! [`Mesh`] drives the cycle loop described in `fmesh-core`'s data model:
//! validate once, then repeat { fire every eligible component in parallel,
//! apply the configured error-handling strategy, transport, decide whether
//! to continue } until the mesh quiesces, a policy trips, or a configured
//! limit is reached.
//!
//! Parallel activation is one `tokio::spawn` per component per cycle
//! (mirroring `LocalOrch::dispatch_many`'s per-target spawn), with a nested
//! spawn around just the user-supplied activation call so a panic there
//! converts to `ActivationCode::Panicked` via `JoinError` without taking
//! down the surrounding scheduler task or any other component's worker.

#![deny(missing_docs)]

mod error;
mod mesh;
mod scheduler;

pub use error::{RunError, RuntimeInfo};
pub use mesh::Mesh;
