//! End-to-end exercise of the chainable builder surface: assemble two
//! components, wire a pipe between them with the facade's prelude, and run.

use fmesh::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

struct Doubler;

#[async_trait::async_trait]
impl Activation for Doubler {
    async fn activate(&self, component: &Component) -> ActivationOutcome {
        let input = component.input("in").unwrap();
        let value = input
            .first_signal_payload_or_default(serde_json::json!(0))
            .await
            .as_i64()
            .unwrap_or(0);
        component
            .output("out")
            .unwrap()
            .put_signals([Signal::new(value * 2)])
            .await;
        ActivationOutcome::Ok
    }
}

struct RecordingSink {
    last: Arc<AtomicI64>,
}

#[async_trait::async_trait]
impl Activation for RecordingSink {
    async fn activate(&self, component: &Component) -> ActivationOutcome {
        let value = component
            .input("in")
            .unwrap()
            .first_signal_payload_or_default(serde_json::json!(0))
            .await
            .as_i64()
            .unwrap_or(0);
        self.last.store(value, Ordering::SeqCst);
        ActivationOutcome::Ok
    }
}

#[tokio::test]
async fn builder_wires_components_and_runs_to_quiescence() {
    let last = Arc::new(AtomicI64::new(-1));

    let doubler = ComponentBuilder::new("doubler")
        .description("doubles its input")
        .input("in")
        .output("out")
        .activation(Doubler)
        .build()
        .unwrap();

    let sink = ComponentBuilder::new("sink")
        .input("in")
        .activation(RecordingSink {
            last: Arc::clone(&last),
        })
        .build()
        .unwrap();

    PipeBuilder::from(&doubler, "out")
        .to(&sink, "in")
        .build()
        .await
        .unwrap();

    doubler
        .input("in")
        .unwrap()
        .put_signals([Signal::new(21)])
        .await;

    let mesh = MeshBuilder::new("doubling-mesh")
        .component(doubler)
        .component(sink)
        .build()
        .await
        .unwrap();

    let info = mesh.run().await.unwrap();

    assert_eq!(last.load(Ordering::SeqCst), 42);
    assert_eq!(info.cycle_count(), 3); // doubler activates, sink activates, then quiesce
}

#[tokio::test]
async fn duplicate_port_name_rejected_by_builder() {
    let err = ComponentBuilder::new("bad").input("x").output("x").build();
    assert!(matches!(err, Err(ValidationError::DuplicatePort { .. })));
}

#[tokio::test]
async fn mesh_builder_rejects_duplicate_component_names() {
    let a = ComponentBuilder::new("dup").build().unwrap();
    let b = ComponentBuilder::new("dup").build().unwrap();

    let err = MeshBuilder::new("m").component(a).component(b).build().await;
    assert!(matches!(err, Err(ValidationError::DuplicateComponent(_))));
}
