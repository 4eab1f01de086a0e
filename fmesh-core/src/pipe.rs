//! Pipe — a directed edge carrying signals from one output port to one
//! input port (§3, §4.3). Pipes carry no state between cycles; the source
//! port's buffer is the pipe's queue.

use crate::id::{ComponentName, PortName};
use crate::port::Port;
use std::sync::Arc;

/// A directed pair `(source output port, destination input port)`. A source
/// port may have many pipes (fan-out); a destination port may receive from
/// many pipes (fan-in). Self-loops — an output piped back to an input on the
/// same component — are permitted and used for iteration patterns (§3, §9).
#[derive(Debug)]
pub struct Pipe {
    source_component: ComponentName,
    source_port: PortName,
    destination: Arc<Port>,
}

impl Pipe {
    /// Construct a pipe. `source_component`/`source_port` are descriptive —
    /// the actual transport queue is the source port's own buffer, reached
    /// by the scheduler via the source port itself (which owns this `Pipe`),
    /// not through this struct.
    pub fn new(source_component: ComponentName, source_port: PortName, destination: Arc<Port>) -> Self {
        Self {
            source_component,
            source_port,
            destination,
        }
    }

    /// The component that owns this pipe's source output port.
    pub fn source_component(&self) -> &ComponentName {
        &self.source_component
    }

    /// The name of this pipe's source output port.
    pub fn source_port(&self) -> &PortName {
        &self.source_port
    }

    /// The destination input port this pipe delivers to.
    pub fn destination(&self) -> &Arc<Port> {
        &self.destination
    }
}
