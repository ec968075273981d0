use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use skirmish_behaviors::{
    default_descriptors, empty_descriptor, generate_id, BehaviorDescriptor, BehaviorRegistry,
    BehaviorStore, MemoryBehaviorStore, NodeDef, StoreError,
};

struct FailingStore {
    loads: AtomicU32,
}

#[async_trait]
impl BehaviorStore for FailingStore {
    async fn load(&self) -> Result<Vec<BehaviorDescriptor>, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Exhausted)
    }

    async fn save(&self, _descriptors: &[BehaviorDescriptor]) -> Result<(), StoreError> {
        Err(StoreError::Exhausted)
    }
}

fn variant(id: &str, label: &str) -> BehaviorDescriptor {
    BehaviorDescriptor {
        id: id.to_string(),
        label: label.to_string(),
        root: NodeDef::Selector {
            name: "Root".to_string(),
            children: vec![],
        },
    }
}

#[test]
fn registry_is_seeded_before_any_load() {
    let registry = BehaviorRegistry::new();
    assert!(!registry.is_empty());
    let classic = registry.get("classic").expect("bundled variant");
    assert_eq!(classic.label, "Classic");
}

#[test]
fn upsert_then_get_yields_a_distinct_deep_copy() {
    let mut registry = BehaviorRegistry::new();
    let descriptor = variant("copy-me", "Copy Me");
    registry.upsert(descriptor.clone()).expect("valid");

    let mut fetched = registry.get("copy-me").expect("present");
    assert_eq!(fetched, descriptor);

    // Mutating the returned copy must not reach registry state.
    fetched.label = "Tampered".to_string();
    assert_eq!(registry.get("copy-me").expect("present").label, "Copy Me");
}

#[test]
fn upsert_rejects_invalid_descriptors() {
    let mut registry = BehaviorRegistry::new();
    let before = registry.len();
    let bad = variant("", "Nameless");
    assert!(registry.upsert(bad).is_err());
    assert_eq!(registry.len(), before);
}

#[test]
fn remove_reports_presence() {
    let mut registry = BehaviorRegistry::new();
    registry.upsert(variant("temp", "Temp")).expect("valid");
    assert!(registry.remove("temp"));
    assert!(!registry.remove("temp"));
    assert!(registry.get("temp").is_none());
}

#[test]
fn export_import_round_trip() {
    let mut registry = BehaviorRegistry::new();
    registry.upsert(variant("extra", "Extra")).expect("valid");
    let payload = registry.export_json(true).expect("serializable");

    let mut other = BehaviorRegistry::new();
    other.import_json(&payload).expect("valid payload");
    assert_eq!(other.len(), registry.len());
    assert_eq!(other.get("extra"), registry.get("extra"));

    assert!(other.import_json("not json").is_err());
}

#[tokio::test]
async fn ensure_prefers_the_store_and_runs_once() {
    let remote = vec![variant("remote", "Remote Only")];
    let store = Arc::new(MemoryBehaviorStore::new(remote));
    let mut registry = BehaviorRegistry::new().with_store(store.clone());

    registry.ensure().await;
    assert_eq!(registry.len(), 1);
    assert!(registry.get("remote").is_some());
    assert!(registry.get("classic").is_none());

    // A second call must not re-fetch over local edits.
    registry.upsert(variant("local", "Local")).expect("valid");
    registry.ensure().await;
    assert!(registry.get("local").is_some());
}

#[tokio::test]
async fn ensure_falls_back_to_defaults_and_never_retries() {
    let store = Arc::new(FailingStore {
        loads: AtomicU32::new(0),
    });
    let mut registry = BehaviorRegistry::new().with_store(store.clone());

    registry.ensure().await;
    assert_eq!(registry.len(), default_descriptors().len());
    registry.ensure().await;
    assert_eq!(store.loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn writes_persist_to_the_store_without_blocking() {
    let store = Arc::new(MemoryBehaviorStore::default());
    let mut registry = BehaviorRegistry::new().with_store(store.clone());

    registry.upsert(variant("saved", "Saved")).expect("valid");
    // The write is fire-and-forget; let the spawned task run.
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert!(store.snapshot().iter().any(|d| d.id == "saved"));

    registry.remove("saved");
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert!(store.snapshot().iter().all(|d| d.id != "saved"));
}

#[test]
fn writes_without_a_runtime_do_not_panic() {
    let store = Arc::new(MemoryBehaviorStore::default());
    let mut registry = BehaviorRegistry::new().with_store(store);
    // No tokio runtime here: the persist is skipped, the mutation sticks.
    registry.upsert(variant("offline", "Offline")).expect("valid");
    assert!(registry.get("offline").is_some());
}

#[test]
fn generated_ids_carry_the_prefix_and_vary() {
    let a = generate_id("copy");
    let b = generate_id("copy");
    assert!(a.starts_with("copy-"));
    assert_eq!(a.len(), "copy-".len() + 6);
    assert_ne!(a, b);

    let fresh = empty_descriptor();
    assert!(fresh.id.starts_with("custom-"));
    assert!(matches!(fresh.root, NodeDef::Selector { ref name, ref children } if name == "Root" && children.is_empty()));
}
