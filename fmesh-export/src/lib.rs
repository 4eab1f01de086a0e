//! DOT-language diagram export for a built [`fmesh_runtime::Mesh`] (§6
//! "Optional export surface"). Not required for core correctness — a small
//! satellite crate over the runtime it observes, not linked by it.
//!
//! Node-id convention: `component/<name>/<input|output>/<port>`. Components
//! render as Graphviz clusters containing their port nodes; pipes render as
//! edges between the source output port node and the destination input
//! port node.

#![deny(missing_docs)]

use fmesh_core::{ActivationCode, Cycle};
use fmesh_runtime::Mesh;
use std::fmt::Write as _;

/// Build the node id for a port, following the `component/<name>/<input|output>/<port>`
/// convention.
fn port_node_id(component: &str, direction: &str, port: &str) -> String {
    format!("\"component/{component}/{direction}/{port}\"")
}

/// Render `mesh`'s structure (components, ports, pipes) as a DOT directed
/// graph. No per-cycle coloring.
pub async fn to_dot(mesh: &Mesh) -> String {
    render(mesh, None).await
}

/// Render `mesh`'s structure as a DOT directed graph, coloring each
/// component cluster by the activation code it received in `cycle`.
/// Components not present in `cycle.activation_results` (should not happen
/// for a well-formed run, see invariant 1) render uncolored.
pub async fn to_dot_with_cycle(mesh: &Mesh, cycle: &Cycle) -> String {
    render(mesh, Some(cycle)).await
}

fn activation_color(code: ActivationCode) -> &'static str {
    match code {
        ActivationCode::Ok => "palegreen",
        ActivationCode::ReturnedError => "orange",
        ActivationCode::Panicked => "red",
        ActivationCode::WaitingForInputsClear | ActivationCode::WaitingForInputsKeep => "lightyellow",
        ActivationCode::NoInput | ActivationCode::NoFunction => "lightgray",
        _ => "white",
    }
}

async fn render(mesh: &Mesh, cycle: Option<&Cycle>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph \"{}\" {{", mesh.name());
    let _ = writeln!(out, "  rankdir=LR;");

    for component in mesh.components() {
        let name = component.name().as_str();
        let color = cycle
            .and_then(|c| {
                c.activation_results
                    .iter()
                    .find(|r| r.component_name.as_str() == name)
            })
            .map(|r| activation_color(r.code))
            .unwrap_or("white");

        let _ = writeln!(out, "  subgraph \"cluster_{name}\" {{");
        let _ = writeln!(out, "    label=\"{name}\";");
        let _ = writeln!(out, "    style=filled;");
        let _ = writeln!(out, "    fillcolor={color};");
        for port in component.inputs() {
            let _ = writeln!(
                out,
                "    {} [label=\"{}\"];",
                port_node_id(name, "input", port.name().as_str()),
                port.name()
            );
        }
        for port in component.outputs() {
            let _ = writeln!(
                out,
                "    {} [label=\"{}\"];",
                port_node_id(name, "output", port.name().as_str()),
                port.name()
            );
        }
        let _ = writeln!(out, "  }}");
    }

    for component in mesh.components() {
        let name = component.name().as_str();
        for port in component.outputs() {
            for pipe in port.pipes().await {
                let _ = writeln!(
                    out,
                    "  {} -> {};",
                    port_node_id(name, "output", port.name().as_str()),
                    port_node_id(
                        pipe.destination().owner().as_str(),
                        "input",
                        pipe.destination().name().as_str()
                    )
                );
            }
        }
    }

    let _ = writeln!(out, "}}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmesh_core::test_utils::PassthroughActivation;
    use fmesh_core::{Component, ComponentName, Direction, MeshConfig, Pipe, Port, PortName};
    use fmesh_runtime::Mesh;
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
    async fn renders_components_ports_and_pipes() {
        let a = passthrough("a");
        let b = passthrough("b");
        let pipe = Arc::new(Pipe::new(
            a.name().clone(),
            PortName::new("out"),
            Arc::clone(b.input("in").unwrap()),
        ));
        a.output("out").unwrap().add_pipe(pipe).await.unwrap();

        let mesh = Mesh::new("m".into(), "", vec![a, b], MeshConfig::default())
            .await
            .unwrap();
        let dot = to_dot(&mesh).await;

        assert!(dot.starts_with("digraph \"m\""));
        assert!(dot.contains("component/a/output/out"));
        assert!(dot.contains("component/b/input/in"));
        assert!(dot.contains("component/a/output/out\" -> \"component/b/input/in\""));
    }
}
