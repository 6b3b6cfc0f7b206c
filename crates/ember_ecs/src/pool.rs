//! Sparse-set component storage.
//!
//! One [`ComponentPool`] exists per component type, pairing a sparse
//! id-indexed indirection array with a dense value array. Add, remove, and
//! lookup are O(1); iteration walks only the dense tail, never the id space.
//! The [`World`](crate::World) stores pools type-erased behind `AnyPool`
//! and hands out typed access by downcasting.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Marker trait for component data.
///
/// Any plain `Send + Sync + 'static` type qualifies — components carry no
/// required behaviour, only data. The blanket impl means user types never
/// implement this by hand.
pub trait Component: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Component for T {}

/// Sentinel in the sparse array for "id has no component".
const NONE: u32 = u32::MAX;

/// Sparse-set storage for components of a single type.
///
/// Three parallel structures: `sparse[id]` holds the dense index for `id`
/// (or `NONE`), `dense` holds the values packed contiguously, and
/// `dense_to_id` maps each dense slot back to its entity id. For every id
/// with a component, `dense_to_id[sparse[id]] == id`.
///
/// Removal swap-moves the dense tail into the vacated slot, so the dense
/// array stays contiguous at O(1) cost and iteration order is not preserved
/// across removals.
#[derive(Debug)]
pub struct ComponentPool<T: Component> {
    /// Entity id → dense index, `NONE` where absent.
    sparse: Vec<u32>,
    /// Densely packed component values.
    dense: Vec<T>,
    /// Dense index → entity id, parallel to `dense`.
    dense_to_id: Vec<u32>,
}

impl<T: Component> ComponentPool<T> {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            dense: Vec::new(),
            dense_to_id: Vec::new(),
        }
    }

    /// Attach `value` to `id`, overwriting in place if `id` already has a
    /// component.
    ///
    /// Grows the sparse array to cover `id` (at least doubling, so repeated
    /// adds stay amortised O(1)).
    pub fn add(&mut self, id: u32, value: T) {
        if let Some(slot) = self.slot_of(id) {
            self.dense[slot] = value;
            return;
        }

        let index = id as usize;
        if index >= self.sparse.len() {
            let new_len = (index + 1).max(self.sparse.len() * 2);
            self.sparse.resize(new_len, NONE);
        }

        self.sparse[index] = self.dense.len() as u32;
        self.dense.push(value);
        self.dense_to_id.push(id);
    }

    /// Returns the component for `id`, or `None` if absent.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&T> {
        self.slot_of(id).and_then(|slot| self.dense.get(slot))
    }

    /// Returns mutable access to the component for `id`, or `None` if absent.
    #[must_use]
    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.slot_of(id).and_then(|slot| self.dense.get_mut(slot))
    }

    /// Returns `true` if `id` has a component. Out-of-range ids are absent,
    /// never an error.
    #[must_use]
    pub fn has(&self, id: u32) -> bool {
        self.slot_of(id).is_some()
    }

    /// Detach and return the component for `id`, or `None` if absent.
    ///
    /// The dense tail is swap-moved into the vacated slot; every other id's
    /// value stays reachable under its id, only dense order changes.
    pub fn remove(&mut self, id: u32) -> Option<T> {
        let slot = self.slot_of(id)?;

        self.sparse[id as usize] = NONE;
        let value = self.dense.swap_remove(slot);
        self.dense_to_id.swap_remove(slot);

        // Re-point the moved tail entry, unless the removed slot was the tail.
        if let Some(&moved_id) = self.dense_to_id.get(slot) {
            self.sparse[moved_id as usize] = slot as u32;
        }

        Some(value)
    }

    /// Returns the number of stored components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns `true` if the pool stores no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Iterate the dense array as `(id, &component)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.dense_to_id.iter().copied().zip(self.dense.iter())
    }

    /// Iterate the dense array as `(id, &mut component)` pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.dense_to_id.iter().copied().zip(self.dense.iter_mut())
    }

    /// The dense slot for `id`, or `None` when `id` has no component.
    fn slot_of(&self, id: u32) -> Option<usize> {
        match self.sparse.get(id as usize) {
            Some(&slot) if slot != NONE => Some(slot as usize),
            _ => None,
        }
    }
}

impl<T: Component> Default for ComponentPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased pool interface the world stores.
///
/// Only the operations the world applies uniformly across every pool live
/// here; typed access goes through `as_any` downcasts.
pub(crate) trait AnyPool: Any + Send + Sync {
    /// Non-generic presence check, used by filter predicates.
    fn has(&self, id: u32) -> bool;

    /// Purge `id`'s component as part of entity destruction.
    fn on_entity_destroyed(&mut self, id: u32);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> AnyPool for ComponentPool<T> {
    fn has(&self, id: u32) -> bool {
        ComponentPool::has(self, id)
    }

    fn on_entity_destroyed(&mut self, id: u32) {
        self.remove(id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The world's pool table: one type-erased pool per component type, keyed by
/// the type's stable runtime token.
pub(crate) type PoolMap = HashMap<TypeId, Box<dyn AnyPool>>;
