use fmesh_core::test_utils::{FailingActivation, PanickingActivation, PassthroughActivation};
use fmesh_core::{
    Component, ComponentName, Direction, ErrorHandlingStrategy, MeshConfig, Pipe, Port, PortName,
    Signal,
};
use fmesh_runtime::{Mesh, RunError};
use std::collections::HashMap;
use std::sync::Arc;

fn passthrough(name: &str) -> Arc<Component> {
    let owner = ComponentName::new(name);
    let mut inputs = HashMap::new();
    inputs.insert(
        PortName::new("in"),
        Arc::new(Port::new(
            PortName::new("in"),
            owner.clone(),
            Direction::Input,
            "",
            HashMap::new(),
        )),
    );
    let mut outputs = HashMap::new();
    outputs.insert(
        PortName::new("out"),
        Arc::new(Port::new(
            PortName::new("out"),
            owner.clone(),
            Direction::Output,
            "",
            HashMap::new(),
        )),
    );
    Arc::new(Component::new(
        owner,
        "",
        HashMap::new(),
        inputs,
        outputs,
        Some(Arc::new(PassthroughActivation)),
        HashMap::new(),
        Vec::new(),
    ))
}

#[tokio::test]
async fn mesh_with_no_eligible_components_quiesces_in_one_cycle() {
    let mesh = Mesh::new(
        "m".into(),
        "",
        vec![passthrough("a")],
        MeshConfig::default(),
    )
    .await
    .unwrap();

    let info = mesh.run().await.unwrap();
    assert_eq!(info.cycle_count(), 1);
    assert!(!info.cycles[0].any_activated());
}

#[tokio::test]
async fn orphan_pipe_destination_fails_validation() {
    let a = passthrough("a");
    let b = passthrough("b");

    let out_port = a.output("out").unwrap();
    let pipe = Arc::new(Pipe::new(
        a.name().clone(),
        PortName::new("out"),
        Arc::clone(b.input("in").unwrap()),
    ));
    out_port.add_pipe(pipe).await.unwrap();

    // Only "a" is registered; "b" is an orphan destination.
    let mesh = Mesh::new("m".into(), "", vec![a], MeshConfig::default())
        .await
        .unwrap();

    let err = mesh.run().await.unwrap_err();
    match err {
        RunError::Validation(fmesh_core::ValidationError::OrphanComponent(name)) => {
            assert_eq!(name.as_str(), "b");
        }
        other => panic!("expected OrphanComponent, got {other:?}"),
    }
}

#[tokio::test]
async fn policy_stop_on_first_error() {
    let owner = ComponentName::new("failer");
    let mut inputs = HashMap::new();
    inputs.insert(
        PortName::new("in"),
        Arc::new(Port::new(
            PortName::new("in"),
            owner.clone(),
            Direction::Input,
            "",
            HashMap::new(),
        )),
    );
    let component = Arc::new(Component::new(
        owner,
        "",
        HashMap::new(),
        inputs,
        HashMap::new(),
        Some(Arc::new(FailingActivation)),
        HashMap::new(),
        Vec::new(),
    ));
    component.input("in").unwrap().put_signals([Signal::new(1)]).await;

    let config = MeshConfig::builder()
        .error_handling_strategy(ErrorHandlingStrategy::StopOnFirstError)
        .build();
    let mesh = Mesh::new("m".into(), "", vec![component], config)
        .await
        .unwrap();

    let err = mesh.run().await.unwrap_err();
    assert!(matches!(err, RunError::PolicyStop { .. }));
}

#[tokio::test]
async fn panic_is_isolated_with_ignore_all() {
    let a_owner = ComponentName::new("panics");
    let mut a_inputs = HashMap::new();
    a_inputs.insert(
        PortName::new("in"),
        Arc::new(Port::new(
            PortName::new("in"),
            a_owner.clone(),
            Direction::Input,
            "",
            HashMap::new(),
        )),
    );
    let a = Arc::new(Component::new(
        a_owner,
        "",
        HashMap::new(),
        a_inputs,
        HashMap::new(),
        Some(Arc::new(PanickingActivation)),
        HashMap::new(),
        Vec::new(),
    ));
    a.input("in").unwrap().put_signals([Signal::new(1)]).await;

    let b = passthrough("b");
    b.input("in").unwrap().put_signals([Signal::new(2)]).await;

    let mesh = Mesh::new(
        "m".into(),
        "",
        vec![a, b],
        MeshConfig::builder()
            .error_handling_strategy(ErrorHandlingStrategy::IgnoreAll)
            .build(),
    )
    .await
    .unwrap();

    let info = mesh.run().await.unwrap();
    assert_eq!(info.cycle_count(), 2);
    let first = &info.cycles[0];
    assert_eq!(first.activation_results.len(), 2);
    assert!(first
        .activation_results
        .iter()
        .any(|r| r.code == fmesh_core::ActivationCode::Panicked));
    assert!(first
        .activation_results
        .iter()
        .any(|r| r.code == fmesh_core::ActivationCode::Ok));
}

#[tokio::test]
async fn cycles_limit_stops_before_quiescence() {
    let owner = ComponentName::new("looper");
    let mut inputs = HashMap::new();
    inputs.insert(
        PortName::new("in"),
        Arc::new(Port::new(
            PortName::new("in"),
            owner.clone(),
            Direction::Input,
            "",
            HashMap::new(),
        )),
    );
    let mut outputs = HashMap::new();
    outputs.insert(
        PortName::new("out"),
        Arc::new(Port::new(
            PortName::new("out"),
            owner.clone(),
            Direction::Output,
            "",
            HashMap::new(),
        )),
    );
    let component = Arc::new(Component::new(
        owner.clone(),
        "",
        HashMap::new(),
        inputs,
        outputs,
        Some(Arc::new(PassthroughActivation)),
        HashMap::new(),
        Vec::new(),
    ));
    // Self-loop: out -> in, keeps the component eligible forever.
    let pipe = Arc::new(Pipe::new(
        owner.clone(),
        PortName::new("out"),
        Arc::clone(component.input("in").unwrap()),
    ));
    component.output("out").unwrap().add_pipe(pipe).await.unwrap();
    component
        .input("in")
        .unwrap()
        .put_signals([Signal::new(1)])
        .await;

    let config = MeshConfig::builder().cycles_limit(3).build();
    let mesh = Mesh::new("m".into(), "", vec![component], config)
        .await
        .unwrap();

    let err = mesh.run().await.unwrap_err();
    match err {
        RunError::Limit(fmesh_core::LimitError::CyclesLimitReached(3)) => {}
        other => panic!("expected CyclesLimitReached(3), got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_component_name_rejected_at_construction() {
    let err = Mesh::new(
        "m".into(),
        "",
        vec![passthrough("dup"), passthrough("dup")],
        MeshConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, fmesh_core::ValidationError::DuplicateComponent(_)));
}
