//! Port — a named input or output endpoint on a component (§3, §4.2).

use crate::error::ValidationError;
use crate::id::{ComponentName, PortName};
use crate::pipe::Pipe;
use crate::signal::{Signal, SignalBuffer};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A port's direction never changes once created (§3 invariant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// An input port — receives signals via transport, consumed by activation.
    Input,
    /// An output port — receives signals from activation, flushed via transport.
    Output,
}

/// A named endpoint on a component. Belongs to exactly one component and
/// lives as long as it does (§3). Input ports never carry outgoing pipes;
/// output ports carry the ordered set of pipes they fan out to.
#[derive(Debug)]
pub struct Port {
    name: PortName,
    owner: ComponentName,
    direction: Direction,
    labels: HashMap<String, String>,
    description: String,
    buffer: SignalBuffer,
    pipes: RwLock<Vec<Arc<Pipe>>>,
}

impl Port {
    /// Construct a new, empty port. Used by the builder surface when
    /// assembling a component.
    pub fn new(
        name: PortName,
        owner: ComponentName,
        direction: Direction,
        description: impl Into<String>,
        labels: HashMap<String, String>,
    ) -> Self {
        Self {
            name,
            owner,
            direction,
            labels,
            description: description.into(),
            buffer: SignalBuffer::new(),
            pipes: RwLock::new(Vec::new()),
        }
    }

    /// This port's name.
    pub fn name(&self) -> &PortName {
        &self.name
    }

    /// The component this port belongs to.
    pub fn owner(&self) -> &ComponentName {
        &self.owner
    }

    /// Input or output.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Labels attached at build time.
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Human-readable description attached at build time.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Signals currently waiting for consumption (input ports) or produced
    /// this cycle and not yet flushed (output ports) — §3.
    pub async fn signals(&self) -> Vec<Signal> {
        self.buffer.all().await
    }

    /// Append signals to this port, preserving the author's append order.
    pub async fn put_signals(&self, signals: impl IntoIterator<Item = Signal>) {
        self.buffer.append_all(signals).await;
    }

    /// The first signal's payload, or `default` if the port currently holds
    /// none.
    pub async fn first_signal_payload_or_default(
        &self,
        default: serde_json::Value,
    ) -> serde_json::Value {
        match self.buffer.first().await {
            Some(signal) => signal.payload().clone(),
            None => default,
        }
    }

    /// Whether this port currently holds no signals.
    pub async fn is_empty(&self) -> bool {
        self.buffer.is_empty().await
    }

    /// Clear this port's buffer.
    pub async fn clear(&self) {
        self.buffer.clear().await;
    }

    /// Wire an outgoing pipe from this (output) port. Called by the builder
    /// surface; order of calls is the deterministic tie-break order used at
    /// fan-in destinations (§3).
    pub async fn add_pipe(&self, pipe: Arc<Pipe>) -> Result<(), ValidationError> {
        if self.direction != Direction::Output {
            return Err(ValidationError::PortNotFound {
                component: self.owner.clone(),
                port: self.name.clone(),
            });
        }
        self.pipes.write().await.push(pipe);
        Ok(())
    }

    /// The outgoing pipes wired to this output port, in declaration order.
    pub async fn pipes(&self) -> Vec<Arc<Pipe>> {
        self.pipes.read().await.clone()
    }

    /// Transport this output port's buffered signals across every outgoing
    /// pipe, then clear the buffer (§4.3: "After all pipes of an output port
    /// have been visited, that output port's buffer is cleared."). A no-op
    /// if the port is empty or has no pipes.
    pub async fn flush(&self) {
        let pipes = self.pipes.read().await;
        if pipes.is_empty() {
            return;
        }
        let signals = self.buffer.all().await;
        if signals.is_empty() {
            return;
        }
        for pipe in pipes.iter() {
            pipe.destination().put_signals(signals.clone()).await;
        }
        drop(pipes);
        self.buffer.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(name: &str, dir: Direction) -> Port {
        Port::new(
            PortName::new(name),
            ComponentName::new("c"),
            dir,
            "",
            HashMap::new(),
        )
    }

    #[tokio::test]
    async fn clear_then_read_empty() {
        let p = port("in", Direction::Input);
        p.put_signals([Signal::new(1)]).await;
        p.clear().await;
        assert!(p.signals().await.is_empty());
    }

    #[tokio::test]
    async fn first_signal_payload_or_default() {
        let p = port("in", Direction::Input);
        assert_eq!(
            p.first_signal_payload_or_default(serde_json::json!(0)).await,
            serde_json::json!(0)
        );
        p.put_signals([Signal::new(7)]).await;
        assert_eq!(
            p.first_signal_payload_or_default(serde_json::json!(0)).await,
            serde_json::json!(7)
        );
    }

    #[tokio::test]
    async fn adding_pipe_to_input_port_fails() {
        let p = port("in", Direction::Input);
        let dest = Arc::new(port("out", Direction::Input));
        let pipe = Arc::new(Pipe::new(
            ComponentName::new("a"),
            PortName::new("in"),
            dest,
        ));
        assert!(p.add_pipe(pipe).await.is_err());
    }
}
