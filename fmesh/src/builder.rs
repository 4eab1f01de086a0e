//! The chainable builder surface (§6 "Declarative surface"): assemble
//! components, wire pipes between their ports, and build a mesh — all
//! external collaborators to the core, not implemented by it, but shipped
//! here since nothing in `fmesh-core`/`fmesh-runtime` can be exercised
//! without a way to construct one.

use fmesh_core::{
    Activation, Component, ComponentHook, ComponentName, Direction, MeshConfig, MeshHook,
    MeshName, Pipe, Port, PortName, ValidationError,
};
use fmesh_runtime::Mesh;
use std::collections::HashMap;
use std::sync::Arc;

struct PortSpec {
    name: PortName,
    description: String,
    labels: HashMap<String, String>,
}

/// Chainable builder for a single [`Component`]: ports, activation
/// function, initial state, and hooks.
pub struct ComponentBuilder {
    name: ComponentName,
    description: String,
    labels: HashMap<String, String>,
    input_specs: Vec<PortSpec>,
    output_specs: Vec<PortSpec>,
    activation: Option<Arc<dyn Activation>>,
    initial_state: HashMap<String, serde_json::Value>,
    hooks: Vec<Arc<dyn ComponentHook>>,
}

impl ComponentBuilder {
    /// Start building a component with the given name.
    pub fn new(name: impl Into<ComponentName>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            labels: HashMap::new(),
            input_specs: Vec::new(),
            output_specs: Vec::new(),
            activation: None,
            initial_state: HashMap::new(),
            hooks: Vec::new(),
        }
    }

    /// Set the human-readable description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a label.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Declare an input port.
    pub fn input(mut self, name: impl Into<PortName>) -> Self {
        self.input_specs.push(PortSpec {
            name: name.into(),
            description: String::new(),
            labels: HashMap::new(),
        });
        self
    }

    /// Declare an input port with a description and labels.
    pub fn input_described(
        mut self,
        name: impl Into<PortName>,
        description: impl Into<String>,
        labels: HashMap<String, String>,
    ) -> Self {
        self.input_specs.push(PortSpec {
            name: name.into(),
            description: description.into(),
            labels,
        });
        self
    }

    /// Declare an output port.
    pub fn output(mut self, name: impl Into<PortName>) -> Self {
        self.output_specs.push(PortSpec {
            name: name.into(),
            description: String::new(),
            labels: HashMap::new(),
        });
        self
    }

    /// Declare an output port with a description and labels.
    pub fn output_described(
        mut self,
        name: impl Into<PortName>,
        description: impl Into<String>,
        labels: HashMap<String, String>,
    ) -> Self {
        self.output_specs.push(PortSpec {
            name: name.into(),
            description: description.into(),
            labels,
        });
        self
    }

    /// Set the activation function.
    pub fn activation(mut self, activation: impl Activation + 'static) -> Self {
        self.activation = Some(Arc::new(activation));
        self
    }

    /// Seed a key in the component's initial state.
    pub fn state(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.initial_state.insert(key.into(), value.into());
        self
    }

    /// Register a component-level hook.
    pub fn hook(mut self, hook: impl ComponentHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Finish building. Fails if an input and an output share a name, or
    /// if two ports of the same direction share a name (§3 "port name sets
    /// are disjoint between inputs and outputs").
    pub fn build(self) -> Result<Arc<Component>, ValidationError> {
        let mut inputs = HashMap::with_capacity(self.input_specs.len());
        for spec in self.input_specs {
            let port = Arc::new(Port::new(
                spec.name.clone(),
                self.name.clone(),
                Direction::Input,
                spec.description,
                spec.labels,
            ));
            if inputs.insert(spec.name.clone(), port).is_some() {
                return Err(ValidationError::DuplicatePort {
                    component: self.name.clone(),
                    port: spec.name,
                });
            }
        }

        let mut outputs = HashMap::with_capacity(self.output_specs.len());
        for spec in self.output_specs {
            if inputs.contains_key(&spec.name) {
                return Err(ValidationError::DuplicatePort {
                    component: self.name.clone(),
                    port: spec.name,
                });
            }
            let port = Arc::new(Port::new(
                spec.name.clone(),
                self.name.clone(),
                Direction::Output,
                spec.description,
                spec.labels,
            ));
            if outputs.insert(spec.name.clone(), port).is_some() {
                return Err(ValidationError::DuplicatePort {
                    component: self.name.clone(),
                    port: spec.name,
                });
            }
        }

        Ok(Arc::new(Component::new(
            self.name,
            self.description,
            self.labels,
            inputs,
            outputs,
            self.activation,
            self.initial_state,
            self.hooks,
        )))
    }
}

/// Chainable builder for a [`Pipe`] wiring one component's output port to
/// another's input port (or back to its own, for self-loops — §3, §9).
pub struct PipeBuilder<'a> {
    source: &'a Arc<Component>,
    source_port: PortName,
    destination: &'a Arc<Component>,
    destination_port: PortName,
}

impl<'a> PipeBuilder<'a> {
    /// Start building a pipe from `source`'s `source_port` output port.
    pub fn from(source: &'a Arc<Component>, source_port: impl Into<PortName>) -> Self {
        Self {
            source,
            source_port: source_port.into(),
            destination: source,
            destination_port: PortName::new(""),
        }
    }

    /// Wire the pipe to `destination`'s `destination_port` input port.
    pub fn to(mut self, destination: &'a Arc<Component>, destination_port: impl Into<PortName>) -> Self {
        self.destination = destination;
        self.destination_port = destination_port.into();
        self
    }

    /// Finish building: looks up both ports and wires the pipe onto the
    /// source's output port.
    pub async fn build(self) -> Result<(), ValidationError> {
        let out_port = self.source.output(self.source_port.as_str())?;
        let in_port = self.destination.input(self.destination_port.as_str())?;
        let pipe = Arc::new(Pipe::new(
            self.source.name().clone(),
            self.source_port,
            Arc::clone(in_port),
        ));
        out_port.add_pipe(pipe).await
    }
}

/// Chainable builder for a [`Mesh`]: name, description, config, components,
/// and mesh-level hooks.
pub struct MeshBuilder {
    name: MeshName,
    description: String,
    config: MeshConfig,
    components: Vec<Arc<Component>>,
    hooks: Vec<Arc<dyn MeshHook>>,
}

impl MeshBuilder {
    /// Start building a mesh with the given name.
    pub fn new(name: impl Into<MeshName>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            config: MeshConfig::default(),
            components: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Set the human-readable description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the mesh configuration.
    pub fn config(mut self, config: MeshConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a component with the mesh.
    pub fn component(mut self, component: Arc<Component>) -> Self {
        self.components.push(component);
        self
    }

    /// Register a mesh-level hook.
    pub fn hook(mut self, hook: impl MeshHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Finish building.
    pub async fn build(self) -> Result<Mesh, ValidationError> {
        let mut mesh =
            Mesh::new(self.name, self.description, self.components, self.config).await?;
        for hook in self.hooks {
            mesh.add_hook(hook);
        }
        Ok(mesh)
    }
}
