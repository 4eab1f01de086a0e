//! Mesh — the top-level scheduler entry point (§3 "Mesh", §4.6).

use crate::error::{RunError, RuntimeInfo};
use crate::scheduler::{panic_message, run_activation, stop_decision};
use fmesh_core::{
    ActivationCode, ActivationError, ActivationResult, Component, ComponentName, Cycle,
    MeshConfig, MeshError, MeshHook, MeshName, ValidationError,
};
use fmesh_hooks::{MeshHookRegistry, TracingComponentHook, TracingMeshHook};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// A mesh: a fixed set of components, wired by pipes the components'
/// output ports already hold, plus the config and hooks that govern one
/// run. Components cannot be added or removed after construction — the
/// component set is immutable for the mesh's lifetime (§4.6 step c:
/// "snapshot once at the start of the cycle" is then trivially true for
/// every cycle, not just one).
pub struct Mesh {
    name: MeshName,
    description: String,
    components: HashMap<ComponentName, Arc<Component>>,
    config: MeshConfig,
    hooks: MeshHookRegistry,
    chainable_error: Option<MeshError>,
}

impl Mesh {
    /// Build a mesh from its already-constructed components. Fails if two
    /// components share a name.
    ///
    /// With `config.debug` set, this also attaches a `TracingComponentHook`
    /// to every component, alongside the mesh-level `TracingMeshHook` —
    /// the per-component half of the `Debug` option (§6: "per-component
    /// logger output").
    pub async fn new(
        name: MeshName,
        description: impl Into<String>,
        components: Vec<Arc<Component>>,
        config: MeshConfig,
    ) -> Result<Self, ValidationError> {
        let mut map: HashMap<ComponentName, Arc<Component>> = HashMap::with_capacity(components.len());
        for component in components {
            let key = component.name().clone();
            if map.insert(key.clone(), component).is_some() {
                return Err(ValidationError::DuplicateComponent(key));
            }
        }

        let mut hooks = MeshHookRegistry::new();
        if config.debug {
            hooks.add(Arc::new(TracingMeshHook::new()));
            for component in map.values() {
                component.add_hook(Arc::new(TracingComponentHook::new())).await;
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            components: map,
            config,
            hooks,
            chainable_error: None,
        })
    }

    /// This mesh's name.
    pub fn name(&self) -> &MeshName {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The mesh's resolved configuration.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Look up a registered component by name.
    pub fn component(&self, name: &str) -> Option<&Arc<Component>> {
        self.components.get(&ComponentName::new(name))
    }

    /// All registered components.
    pub fn components(&self) -> impl Iterator<Item = &Arc<Component>> {
        self.components.values()
    }

    /// Register a mesh-level hook, fired at run and cycle boundaries.
    pub fn add_hook(&mut self, hook: Arc<dyn MeshHook>) {
        self.hooks.add(hook);
    }

    /// Attach a chainable error discovered before `run` — e.g. a signal
    /// carrying a pre-existing error placed on a port ahead of time. A
    /// mesh carrying one refuses to run (§7 "Propagation").
    pub fn with_chainable_error(mut self, error: MeshError) -> Self {
        self.chainable_error = Some(error);
        self
    }

    /// Validate the mesh before cycle 1 (§4.6 step 1): every pipe
    /// destination names a registered component, and no port currently
    /// holds a signal carrying an unresolved chainable error.
    async fn validate(&self) -> Result<(), ValidationError> {
        if let Some(error) = &self.chainable_error {
            return Err(ValidationError::UnresolvedChainableError(error.to_string()));
        }

        for component in self.components.values() {
            for port in component.outputs() {
                for pipe in port.pipes().await {
                    let destination_owner = pipe.destination().owner();
                    if !self.components.contains_key(destination_owner) {
                        return Err(ValidationError::OrphanComponent(destination_owner.clone()));
                    }
                }
            }
            for port in component.inputs().chain(component.outputs()) {
                for signal in port.signals().await {
                    if let Some(error) = signal.chainable_error() {
                        return Err(ValidationError::UnresolvedChainableError(error.to_string()));
                    }
                }
            }
        }

        Ok(())
    }

    /// Run the mesh to completion (§4.6). Returns the executed cycles and
    /// total duration on natural quiesce; returns an error identifying the
    /// cause on validation failure, a policy stop, or a limit stop.
    pub async fn run(&self) -> Result<RuntimeInfo, RunError> {
        if let Err(validation_error) = self.validate().await {
            self.hooks.after_run().await;
            return Err(RunError::Validation(validation_error));
        }

        self.hooks.before_run().await;
        let start = Instant::now();
        let mut cycles: Vec<Cycle> = Vec::new();
        let mut cycle_number: u64 = 0;

        let outcome: Result<(), RunError> = loop {
            cycle_number += 1;
            let mut cycle = Cycle::new(cycle_number);
            self.hooks.cycle_begin(cycle_number).await;

            let tasks: Vec<(ComponentName, tokio::task::JoinHandle<ActivationResult>)> = self
                .components
                .values()
                .cloned()
                .map(|component| {
                    let name = component.name().clone();
                    (name, tokio::spawn(run_activation(component)))
                })
                .collect();

            for (name, handle) in tasks {
                let result = match handle.await {
                    Ok(result) => result,
                    Err(join_err) => ActivationResult::with_error(
                        name,
                        ActivationCode::Panicked,
                        ActivationError::Panicked {
                            message: panic_message(join_err),
                        },
                    ),
                };
                cycle.activation_results.push(result);
            }

            self.hooks.cycle_end(&cycle).await;

            let stop = stop_decision(&cycle, cycle_number, start, &self.config);
            cycles.push(cycle);

            match stop {
                Some(result) => break result,
                None => {
                    // Transport only happens if the run continues (§4.6 step f).
                    for component in self.components.values() {
                        component.flush_outputs().await;
                    }
                }
            }
        };

        self.hooks.after_run().await;

        outcome.map(|()| RuntimeInfo {
            cycles,
            duration: start.elapsed(),
        })
    }
}
