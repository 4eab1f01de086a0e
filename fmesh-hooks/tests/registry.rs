use async_trait::async_trait;
use fmesh_core::hook::{ActivationContext, ComponentHook, MeshHook};
use fmesh_core::test_utils::CountingHook;
use fmesh_core::{ActivationCode, ActivationResult, Component, ComponentName, Cycle};
use fmesh_hooks::{ComponentHookRegistry, MeshHookRegistry};
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

fn empty_component(name: &str) -> Component {
    Component::new(
        ComponentName::new(name),
        "",
        HashMap::new(),
        HashMap::new(),
        HashMap::new(),
        None,
        HashMap::new(),
        Vec::new(),
    )
}

#[tokio::test]
async fn empty_registry_is_a_no_op() {
    let registry = ComponentHookRegistry::new();
    let component = empty_component("c");
    registry.before_activation(&component).await;
    assert!(registry.hooks().is_empty());
}

#[tokio::test]
async fn component_hook_registry_fans_out_to_every_hook() {
    let mut registry = ComponentHookRegistry::new();
    let a = Arc::new(CountingHook::new());
    let b = Arc::new(CountingHook::new());
    registry.add(a.clone());
    registry.add(b.clone());

    let component = empty_component("c");
    registry.before_activation(&component).await;

    let result = ActivationResult::new(ComponentName::new("c"), ActivationCode::Ok);
    let ctx = ActivationContext {
        component: &component,
        result: &result,
    };
    registry.on_success(&ctx).await;
    registry.after_activation(&ctx).await;

    for hook in [&a, &b] {
        assert_eq!(hook.before.load(Ordering::SeqCst), 1);
        assert_eq!(hook.success.load(Ordering::SeqCst), 1);
        assert_eq!(hook.after.load(Ordering::SeqCst), 1);
        assert_eq!(hook.error.load(Ordering::SeqCst), 0);
    }
}

/// A hook that records its name, used to verify dispatch order.
struct NamedMeshHook {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl MeshHook for NamedMeshHook {
    async fn before_run(&self) {
        self.log.lock().unwrap().push(self.name);
    }
}

#[tokio::test]
async fn mesh_hook_registry_dispatches_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = MeshHookRegistry::new();
    registry.add(Arc::new(NamedMeshHook {
        name: "first",
        log: Arc::clone(&log),
    }));
    registry.add(Arc::new(NamedMeshHook {
        name: "second",
        log: Arc::clone(&log),
    }));

    registry.before_run().await;

    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}

#[tokio::test]
async fn mesh_hook_registry_cycle_end_reaches_every_hook() {
    struct CycleCounter(std::sync::atomic::AtomicUsize);

    #[async_trait]
    impl MeshHook for CycleCounter {
        async fn cycle_end(&self, _cycle: &Cycle) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let counter = Arc::new(CycleCounter(std::sync::atomic::AtomicUsize::new(0)));
    let mut registry = MeshHookRegistry::new();
    registry.add(counter.clone());
    registry.add(counter.clone());

    registry.cycle_end(&Cycle::new(1)).await;

    assert_eq!(counter.0.load(Ordering::SeqCst), 2);
}
