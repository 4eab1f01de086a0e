//! Component — ports + an activation function + state + hooks (§3, §4.4, §4.7).

use crate::error::ValidationError;
use crate::hook::ComponentHook;
use crate::id::{ComponentName, PortName};
use crate::port::{Direction, Port};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::activation::ActivationOutcome;

/// A component's exclusively-owned key/value mapping (§4.7). Readable and
/// writable only from within the component's own activation function and
/// hooks; the scheduler never snapshots or inspects it.
#[derive(Debug, Default)]
pub struct State {
    values: Mutex<HashMap<String, serde_json::Value>>,
}

impl State {
    /// Create an empty state map, optionally seeded at construction time.
    pub fn new(initial: HashMap<String, serde_json::Value>) -> Self {
        Self {
            values: Mutex::new(initial),
        }
    }

    /// Read a value by key.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values.lock().await.get(key).cloned()
    }

    /// Write a value. Creates or overwrites.
    pub async fn set(&self, key: impl Into<String>, value: serde_json::Value) {
        self.values.lock().await.insert(key.into(), value);
    }
}

/// The activation function protocol (§4.4). Object-safe, `async-trait`-boxed,
/// mirroring the single-method shape of the teacher's `Turn`/`Operator`
/// traits: one call in, one outcome out, no assumption about what happens
/// inside (how many ports are read, how long it blocks, what it computes).
#[async_trait]
pub trait Activation: Send + Sync {
    /// Run one activation, given read/write access to the component's own
    /// ports and state.
    async fn activate(&self, component: &Component) -> ActivationOutcome;
}

/// Adapter so a boxed async closure can be used as an [`Activation`] without
/// a dedicated struct + impl — convenient for tests and small components.
pub struct FnActivation<F>(F)
where
    F: for<'a> Fn(&'a Component) -> BoxFuture<'a, ActivationOutcome> + Send + Sync;

impl<F> FnActivation<F>
where
    F: for<'a> Fn(&'a Component) -> BoxFuture<'a, ActivationOutcome> + Send + Sync,
{
    /// Wrap a closure as an `Activation`.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Activation for FnActivation<F>
where
    F: for<'a> Fn(&'a Component) -> BoxFuture<'a, ActivationOutcome> + Send + Sync,
{
    async fn activate(&self, component: &Component) -> ActivationOutcome {
        (self.0)(component).await
    }
}

/// A component: ports, an optional activation function, state, and hooks
/// (§3). Port name sets are disjoint between inputs and outputs. Lives as
/// long as the mesh it's registered with; never destroyed by the runtime.
pub struct Component {
    name: ComponentName,
    description: String,
    labels: HashMap<String, String>,
    inputs: HashMap<PortName, Arc<Port>>,
    outputs: HashMap<PortName, Arc<Port>>,
    activation: Option<Arc<dyn Activation>>,
    state: State,
    hooks: RwLock<Vec<Arc<dyn ComponentHook>>>,
}

impl Component {
    /// Construct a component from its already-built ports. Used by the
    /// builder surface.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: ComponentName,
        description: impl Into<String>,
        labels: HashMap<String, String>,
        inputs: HashMap<PortName, Arc<Port>>,
        outputs: HashMap<PortName, Arc<Port>>,
        activation: Option<Arc<dyn Activation>>,
        initial_state: HashMap<String, serde_json::Value>,
        hooks: Vec<Arc<dyn ComponentHook>>,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            labels,
            inputs,
            outputs,
            activation,
            state: State::new(initial_state),
            hooks: RwLock::new(hooks),
        }
    }

    /// This component's name, unique within its mesh.
    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Labels attached at build time.
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Look up an input port by name.
    pub fn input(&self, name: &str) -> Result<&Arc<Port>, ValidationError> {
        self.inputs
            .get(&PortName::new(name))
            .ok_or_else(|| ValidationError::PortNotFound {
                component: self.name.clone(),
                port: PortName::new(name),
            })
    }

    /// Look up an output port by name.
    pub fn output(&self, name: &str) -> Result<&Arc<Port>, ValidationError> {
        self.outputs
            .get(&PortName::new(name))
            .ok_or_else(|| ValidationError::PortNotFound {
                component: self.name.clone(),
                port: PortName::new(name),
            })
    }

    /// All input ports.
    pub fn inputs(&self) -> impl Iterator<Item = &Arc<Port>> {
        self.inputs.values()
    }

    /// All output ports.
    pub fn outputs(&self) -> impl Iterator<Item = &Arc<Port>> {
        self.outputs.values()
    }

    /// This component's exclusively-owned state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The hooks registered on this component, in registration order.
    pub async fn hooks(&self) -> Vec<Arc<dyn ComponentHook>> {
        self.hooks.read().await.clone()
    }

    /// Register an additional hook on this component. Used by the mesh
    /// builder to attach `Debug`-only hooks after the component is built.
    pub async fn add_hook(&self, hook: Arc<dyn ComponentHook>) {
        self.hooks.write().await.push(hook);
    }

    /// Whether this component has an activation function set (§4.4 step 2).
    pub fn has_activation(&self) -> bool {
        self.activation.is_some()
    }

    /// The activation function, if set.
    pub fn activation(&self) -> Option<&Arc<dyn Activation>> {
        self.activation.as_ref()
    }

    /// Whether at least one input port currently holds a signal (§4.4 step 1).
    pub async fn has_any_input(&self) -> bool {
        for port in self.inputs.values() {
            if !port.is_empty().await {
                return true;
            }
        }
        false
    }

    /// Clear every input port's buffer (§4.4: done after all activation
    /// outcomes except `WaitingForInputsKeep`).
    pub async fn clear_inputs(&self) {
        for port in self.inputs.values() {
            port.clear().await;
        }
    }

    /// Flush every output port with signals and at least one pipe (§4.6
    /// step f: transport).
    pub async fn flush_outputs(&self) {
        for port in self.outputs.values() {
            debug_assert_eq!(port.direction(), Direction::Output);
            port.flush().await;
        }
    }
}
