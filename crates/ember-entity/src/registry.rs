//! Identifier-to-entity lookup.
//!
//! The [`Registry`] is the single source of truth for "does an entity with
//! this ID exist". It never removes entries. Absence of a key is an ordinary
//! answer, not an error.

use std::collections::HashMap;

use crate::entity::EntityHandle;
use crate::id::EntityId;

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Map from [`EntityId`] to the shared [`EntityHandle`].
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<EntityId, EntityHandle>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Whether an entity is registered under `id`.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Resolve `id` to its handle, or `None` if nothing was registered under it.
    pub fn get(&self, id: EntityId) -> Option<&EntityHandle> {
        self.entries.get(&id)
    }

    /// Register `handle` under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already present. Callers must pick an ID the
    /// construction protocol has verified unique; a duplicate here means that
    /// protocol is broken.
    pub(crate) fn insert(&mut self, id: EntityId, handle: EntityHandle) {
        if self.entries.contains_key(&id) {
            panic!("entity id {} is already registered", id);
        }
        self.entries.insert(id, handle);
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all registered entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &EntityHandle)> {
        self.entries.iter().map(|(&id, handle)| (id, handle))
    }

    /// All registered IDs, ascending.
    pub fn sorted_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
