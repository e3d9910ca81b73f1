//! Registry for pages running several rotations keyed by a host type.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::time::Instant;

use super::state::Rotation;

/// Keyed store of [`Rotation`] instances.
///
/// Generic over the host's key type; a page typically keys by a section enum,
/// possibly carrying an id for instances built per opened view.
#[derive(Debug, Clone, Default)]
pub struct RotationRegistry<K> {
    states: HashMap<K, Rotation>,
}

impl<K: Eq + Hash + Clone> RotationRegistry<K> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&Rotation> {
        self.states.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Rotation> {
        self.states.get_mut(key)
    }

    /// Get a mutable reference, creating with the factory when absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, init: F) -> &mut Rotation
    where
        F: FnOnce() -> Rotation,
    {
        self.states.entry(key).or_insert_with(init)
    }

    /// Bring a rotation in sync with the host's current item count.
    ///
    /// An item-set replacement rebuilds the instance from the factory (fresh
    /// index, cleared guard, stopped timer) rather than patching the count in
    /// place, per the rebuild-on-replace lifecycle.
    pub fn ensure<F>(&mut self, key: K, len: usize, init: F) -> &mut Rotation
    where
        F: FnOnce() -> Rotation,
    {
        match self.states.entry(key) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().len() != len {
                    occupied.insert(init());
                }
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(init()),
        }
    }

    /// Drop a rotation, clearing its timer with it.
    pub fn remove(&mut self, key: &K) -> Option<Rotation> {
        self.states.remove(key)
    }

    /// Tick every rotation, collecting `(key, committed_index)` pairs.
    pub fn tick_all(&mut self, now: Instant) -> Vec<(K, usize)> {
        let mut committed = Vec::new();
        for (key, rotation) in self.states.iter_mut() {
            if let Some(index) = rotation.tick(now) {
                committed.push((key.clone(), index));
            }
        }
        committed
    }

    /// Snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<K> {
        self.states.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
