use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Owner of a declared class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub namespace: String,
    pub project_name: String,
}

/// A registry key that was claimed by a different owner and overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCollision {
    pub key: String,
    pub previous: RegistryEntry,
    pub replacement: RegistryEntry,
}

/// Mutable half of the registry, only alive during phase one.
///
/// Every class is stored under its bare name and, when it has a namespace,
/// under `namespace.name`. A key always maps to the most recent registration.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, RegistryEntry>,
    collisions: Vec<RegistryCollision>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, class_name: &str, namespace: &str, project_name: &str) {
        let entry = RegistryEntry {
            namespace: namespace.to_string(),
            project_name: project_name.to_string(),
        };
        if !namespace.is_empty() {
            self.insert(format!("{namespace}.{class_name}"), entry.clone());
        }
        self.insert(class_name.to_string(), entry);
    }

    fn insert(&mut self, key: String, entry: RegistryEntry) {
        if let Some(previous) = self.entries.get(&key) {
            if *previous != entry {
                warn!(
                    key = %key,
                    previous_project = %previous.project_name,
                    previous_namespace = %previous.namespace,
                    project = %entry.project_name,
                    namespace = %entry.namespace,
                    "registry key overwritten by a different owner"
                );
                self.collisions.push(RegistryCollision {
                    key: key.clone(),
                    previous: previous.clone(),
                    replacement: entry.clone(),
                });
            }
        }
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the builder. The collisions seen while building are handed back
    /// alongside the read-only registry.
    pub fn build(self) -> (SymbolRegistry, Vec<RegistryCollision>) {
        (
            SymbolRegistry {
                entries: self.entries,
            },
            self.collisions,
        )
    }
}

/// Read-only, corpus-wide map from class name to owner.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl SymbolRegistry {
    pub fn lookup(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
