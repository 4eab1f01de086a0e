//! Signal — the opaque value-object transported between components — and
//! SignalBuffer, the ordered sequence of signals a port holds between cycles.

use crate::error::MeshError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// An opaque value carried between components. Immutable from the runtime's
/// perspective once placed on a port — the runtime never inspects or mutates
/// `payload`, only replaces, appends, or transports whole signals.
///
/// `payload` is `Arc<serde_json::Value>` rather than an owned `Value`: fan-out
/// delivery (§4.3) shares the same signal *instance* across every downstream
/// port, and cloning an `Arc` is how that sharing is implemented without a
/// real copy. Two signals built from identical payloads are still distinct
/// instances (no deduplication) because each carries its own `Arc` allocation
/// and its own labels.
#[derive(Debug, Clone)]
pub struct Signal {
    payload: Arc<serde_json::Value>,
    labels: HashMap<String, String>,
    chainable_error: Option<Arc<MeshError>>,
}

impl Signal {
    /// Create a new signal carrying `payload`, with no labels and no error.
    pub fn new(payload: impl Into<serde_json::Value>) -> Self {
        Self {
            payload: Arc::new(payload.into()),
            labels: HashMap::new(),
            chainable_error: None,
        }
    }

    /// The signal's payload. Treat as read-only — it may be shared with
    /// other downstream ports via fan-out.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Clone the underlying `Arc` handle to the payload (cheap).
    pub fn payload_arc(&self) -> Arc<serde_json::Value> {
        Arc::clone(&self.payload)
    }

    /// Attach or replace a label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Read a label by key.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// All labels on this signal.
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Attach a chainable error to this signal. A signal carrying an error
    /// makes the mesh refuse to run (§7) once attached to a port.
    pub fn with_error(mut self, error: MeshError) -> Self {
        self.chainable_error = Some(Arc::new(error));
        self
    }

    /// The chainable error carried by this signal, if any.
    pub fn chainable_error(&self) -> Option<&MeshError> {
        self.chainable_error.as_deref()
    }
}

/// An ordered, append-only-during-a-cycle sequence of signals held by a port.
///
/// Appends are serialized behind a `tokio::sync::Mutex`: during transport,
/// multiple upstream pipes may flush into the same downstream buffer (fan-in)
/// and must not interleave their appends. Within one activation's own writes
/// to its own output port, append order is naturally preserved because a
/// component's ports are exclusively its own during the activation (§5).
#[derive(Debug, Default)]
pub struct SignalBuffer {
    signals: Mutex<Vec<Signal>>,
}

impl SignalBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            signals: Mutex::new(Vec::new()),
        }
    }

    /// Append one signal.
    pub async fn append(&self, signal: Signal) {
        self.signals.lock().await.push(signal);
    }

    /// Append many signals, preserving their relative order.
    pub async fn append_all(&self, signals: impl IntoIterator<Item = Signal>) {
        self.signals.lock().await.extend(signals);
    }

    /// Number of signals currently buffered.
    pub async fn len(&self) -> usize {
        self.signals.lock().await.len()
    }

    /// Whether the buffer currently holds no signals.
    pub async fn is_empty(&self) -> bool {
        self.signals.lock().await.is_empty()
    }

    /// The first signal in the buffer, if any.
    pub async fn first(&self) -> Option<Signal> {
        self.signals.lock().await.first().cloned()
    }

    /// All signals currently in the buffer, in order.
    pub async fn all(&self) -> Vec<Signal> {
        self.signals.lock().await.clone()
    }

    /// All payloads currently in the buffer, in order.
    pub async fn payloads_all(&self) -> Vec<Arc<serde_json::Value>> {
        self.signals
            .lock()
            .await
            .iter()
            .map(Signal::payload_arc)
            .collect()
    }

    /// Clear the buffer. After this, `is_empty` is true and `all` returns `[]`.
    pub async fn clear(&self) {
        self.signals.lock().await.clear();
    }

    /// Drain all signals out of the buffer, leaving it empty, returning what
    /// was taken. Used by transport: take the source buffer's contents once,
    /// then fan them out to every destination pipe.
    pub async fn drain_all(&self) -> Vec<Signal> {
        std::mem::take(&mut *self.signals.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_preserves_order() {
        let buf = SignalBuffer::new();
        buf.append(Signal::new(1)).await;
        buf.append(Signal::new(2)).await;
        buf.append(Signal::new(3)).await;
        let all = buf.all().await;
        let values: Vec<_> = all.iter().map(|s| s.payload().clone()).collect();
        assert_eq!(values, vec![serde_json::json!(1), serde_json::json!(2), serde_json::json!(3)]);
    }

    #[tokio::test]
    async fn clear_then_read_is_empty() {
        let buf = SignalBuffer::new();
        buf.append(Signal::new("x")).await;
        buf.clear().await;
        assert!(buf.is_empty().await);
        assert!(buf.all().await.is_empty());
    }

    #[tokio::test]
    async fn distinct_instances_no_dedup() {
        let buf = SignalBuffer::new();
        buf.append(Signal::new(42)).await;
        buf.append(Signal::new(42)).await;
        assert_eq!(buf.len().await, 2);
    }

    #[test]
    fn labels_round_trip() {
        let s = Signal::new("hi").with_label("priority", "high");
        assert_eq!(s.label("priority"), Some("high"));
        assert_eq!(s.label("missing"), None);
    }
}
