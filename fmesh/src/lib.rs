//! # fmesh — a synchronous-cycle dataflow mesh runtime
//!
//! Facade crate: re-exports [`fmesh_core`]'s data model, [`fmesh_hooks`]'s
//! hook registries, and [`fmesh_runtime`]'s scheduler, plus the chainable
//! builder surface ([`ComponentBuilder`], [`builder::PipeBuilder`],
//! [`MeshBuilder`]) callers use to assemble a mesh before calling
//! [`fmesh_runtime::Mesh::run`].
//!
//! ```no_run
//! use fmesh::prelude::*;
//!
//! # async fn build() -> Result<(), fmesh_core::ValidationError> {
//! let c1 = ComponentBuilder::new("c1")
//!     .input("num")
//!     .output("res")
//!     .build()?;
//! let mesh = MeshBuilder::new("demo").component(c1).build().await?;
//! let _info = mesh.run().await;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

mod builder;

pub use builder::{ComponentBuilder, MeshBuilder, PipeBuilder};
pub use fmesh_core as core;
pub use fmesh_hooks as hooks;
pub use fmesh_runtime as runtime;

#[cfg(feature = "export")]
pub use fmesh_export as export;

/// Happy-path imports for building and running a mesh.
pub mod prelude {
    pub use crate::{ComponentBuilder, MeshBuilder, PipeBuilder};
    pub use fmesh_core::{
        Activation, ActivationCode, ActivationContext, ActivationError, ActivationOutcome,
        ActivationResult, Component, ComponentHook, ComponentName, Cycle, CyclesLimit,
        ErrorHandlingStrategy, MeshConfig, MeshError, MeshHook, MeshName, Pipe, Port, PortName,
        Signal, TimeLimit, ValidationError,
    };
    pub use fmesh_hooks::{ComponentHookRegistry, MeshHookRegistry, TracingComponentHook, TracingMeshHook};
    pub use fmesh_runtime::{Mesh, RunError, RuntimeInfo};

    #[cfg(feature = "export")]
    pub use fmesh_export::{to_dot, to_dot_with_cycle};
}
