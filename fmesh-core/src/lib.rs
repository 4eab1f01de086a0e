//! # fmesh-core — data model and traits for the fmesh dataflow runtime
//!
//! A mesh is a set of [`component::Component`]s connected by typed
//! [`pipe::Pipe`]s between named [`port::Port`]s. A [`signal::Signal`] is the
//! opaque unit of data pushed onto an input port; the scheduler (in
//! `fmesh-runtime`) advances the mesh one synchronous [`cycle::Cycle`] at a
//! time, firing every eligible component's [`component::Activation`] in
//! parallel, then transporting buffered output signals across pipes before
//! the next cycle begins.
//!
//! This crate defines the data model and the seams the scheduler and the
//! builder surface are built against — it has no scheduler of its own.
//!
//! ## Dependency notes
//!
//! Signal payloads are `Arc<serde_json::Value>` rather than a generic `T`:
//! a mesh is inherently untyped at the wire level (§ "Non-goals: no payload
//! type system"), and `serde_json::Value` is the de facto opaque-payload
//! choice already used for extension data elsewhere in this ecosystem.
//! `async-trait` is used for the two object-safe traits ([`component::Activation`],
//! [`hook::ComponentHook`], [`hook::MeshHook`]) until native `async fn` in
//! `dyn Trait` stabilizes with the `Send` bounds this crate needs.

#![deny(missing_docs)]

pub mod activation;
pub mod component;
pub mod config;
pub mod cycle;
pub mod error;
pub mod hook;
pub mod id;
pub mod pipe;
pub mod port;
pub mod signal;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use activation::{ActivationCode, ActivationOutcome, ActivationResult};
pub use component::{Activation, Component, FnActivation, State};
pub use config::{CyclesLimit, ErrorHandlingStrategy, MeshConfig, MeshConfigBuilder, TimeLimit};
pub use cycle::Cycle;
pub use error::{ActivationError, LimitError, MeshError, PortLookupError, ValidationError};
pub use hook::{ActivationContext, ComponentHook, MeshHook};
pub use id::{ComponentName, MeshName, PortName};
pub use pipe::Pipe;
pub use port::{Direction, Port};
pub use signal::{Signal, SignalBuffer};
