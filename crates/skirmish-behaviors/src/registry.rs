//! The authoritative in-memory descriptor collection.
//!
//! Exactly one registry is live per game session. It is usable immediately
//! after construction (seeded from the bundled defaults) and synchronizes
//! with an external store lazily and at most once via [`BehaviorRegistry::ensure`].

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::defaults::default_descriptors;
use crate::descriptor::{BehaviorDescriptor, BehaviorOption};
use crate::store::BehaviorStore;
use crate::validate::{parse_descriptor_json, validate, ValidateError};

pub struct BehaviorRegistry {
    entries: BTreeMap<String, BehaviorDescriptor>,
    store: Option<Arc<dyn BehaviorStore>>,
    synced: bool,
}

impl BehaviorRegistry {
    /// Seed synchronously from the bundled defaults so the game can start
    /// before (or without) any asynchronous load.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: BTreeMap::new(),
            store: None,
            synced: false,
        };
        registry.replace_entries(default_descriptors());
        registry
    }

    pub fn with_store(mut self, store: Arc<dyn BehaviorStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// One-time synchronization with the external store.
    ///
    /// The first call attempts a load (the store itself walks its sources in
    /// order); any failure keeps the current seed and is only logged. Every
    /// later call reuses that outcome; the fetch is never repeated.
    pub async fn ensure(&mut self) {
        if self.synced {
            return;
        }
        self.synced = true;

        let Some(store) = self.store.clone() else {
            debug!("no behavior store configured; keeping bundled defaults");
            return;
        };
        match store.load().await {
            Ok(descriptors) => {
                self.replace_entries(descriptors);
                debug!(count = self.entries.len(), "behavior registry synchronized");
            }
            Err(err) => {
                warn!(%err, "behavior store unreadable; keeping bundled defaults");
            }
        }
    }

    /// `{id, label}` rows for selection UIs, in stable id order.
    pub fn options(&self) -> Vec<BehaviorOption> {
        self.entries
            .values()
            .map(|d| BehaviorOption {
                id: d.id.clone(),
                label: d.label.clone(),
            })
            .collect()
    }

    /// Deep copy of one descriptor. Absence is an ordinary `None`.
    pub fn get(&self, id: &str) -> Option<BehaviorDescriptor> {
        self.entries.get(id).cloned()
    }

    /// Deep copies of the full set, in stable id order.
    pub fn descriptors(&self) -> Vec<BehaviorDescriptor> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the full set, in stable id order.
    pub fn export_json(&self, pretty: bool) -> serde_json::Result<String> {
        let snapshot: Vec<&BehaviorDescriptor> = self.entries.values().collect();
        if pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        }
    }

    /// Replace the whole set from a serialized payload, then persist.
    pub fn import_json(&mut self, payload: &str) -> Result<(), ValidateError> {
        let descriptors = parse_descriptor_json(payload)?;
        self.replace_entries(descriptors);
        self.persist();
        Ok(())
    }

    /// Drop everything and restore the bundled defaults, then persist.
    pub fn reset_to_defaults(&mut self) {
        self.replace_entries(default_descriptors());
        self.persist();
    }

    /// Insert or replace by id. The stored value is a deep copy; later
    /// mutation of the argument's source never reaches the registry.
    pub fn upsert(&mut self, descriptor: BehaviorDescriptor) -> Result<(), ValidateError> {
        validate(&descriptor)?;
        self.entries.insert(descriptor.id.clone(), descriptor);
        self.persist();
        Ok(())
    }

    /// Delete by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    fn replace_entries(&mut self, descriptors: Vec<BehaviorDescriptor>) {
        self.entries.clear();
        for descriptor in descriptors {
            if let Err(err) = validate(&descriptor) {
                warn!(id = %descriptor.id, %err, "dropping invalid descriptor");
                continue;
            }
            self.entries.insert(descriptor.id.clone(), descriptor);
        }
    }

    /// Fire-and-forget write-back of a snapshot taken now.
    ///
    /// Runs on the ambient tokio runtime when one exists; otherwise the write
    /// is skipped with a warning. Failures are logged, never raised, and the
    /// in-memory set is never rolled back. Rapid successive edits may reach
    /// the store out of order; the external copy converges to the last
    /// completed write.
    fn persist(&self) {
        let Some(store) = self.store.clone() else {
            return;
        };
        let snapshot: Vec<BehaviorDescriptor> = self.entries.values().cloned().collect();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = store.save(&snapshot).await {
                        warn!(%err, "behavior store write failed; in-memory set unaffected");
                    }
                });
            }
            Err(_) => {
                warn!("no async runtime; skipping behavior store write");
            }
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `{prefix}-{6-char suffix}` id. Practically unique, nothing stronger: the
/// suffix is random and no collision check is made against existing ids.
pub fn generate_id(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &suffix[..6])
}
