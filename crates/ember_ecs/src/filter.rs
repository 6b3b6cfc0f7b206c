//! Incrementally maintained entity filters.
//!
//! A filter caches the set of entity ids matching an include/exclude type
//! predicate. The [`World`](crate::World) re-evaluates that predicate for a
//! single id after every component mutation and evicts ids outright on
//! destruction, so reading a filter never rescans storage. The cost of a
//! query is paid where it is cheapest: on the (comparatively rare) writes
//! instead of the every-tick reads.

use std::any::TypeId;
use std::collections::HashSet;

use crate::pool::{Component, PoolMap};

/// Declares the component types a filter requires and rejects.
///
/// Both sets are fixed once the filter is created. Build one with the
/// chaining constructors and pass it to
/// [`World::create_filter`](crate::World::create_filter):
///
/// ```rust
/// use ember_ecs::FilterSpec;
///
/// struct Position;
/// struct Velocity;
/// struct Frozen;
///
/// let spec = FilterSpec::new()
///     .with::<Position>()
///     .with::<Velocity>()
///     .without::<Frozen>();
/// ```
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Types an entity must have, all of them.
    include: Vec<TypeId>,
    /// Types an entity must not have, any of them.
    exclude: Vec<TypeId>,
}

impl FilterSpec {
    /// Create an empty spec. With no include types, every live entity
    /// matches (minus exclusions).
    #[must_use]
    pub fn new() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Require component type `T`.
    #[must_use]
    pub fn with<T: Component>(mut self) -> Self {
        self.include.push(TypeId::of::<T>());
        self
    }

    /// Reject entities carrying component type `T`.
    #[must_use]
    pub fn without<T: Component>(mut self) -> Self {
        self.exclude.push(TypeId::of::<T>());
        self
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a filter registered with a [`World`](crate::World).
///
/// Filters are world-owned and live for the world's lifetime; the handle is
/// a plain index into that world's append-only filter list and is only
/// meaningful for the world that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(usize);

impl FilterId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A filter's predicate plus its cached set of matching entity ids.
///
/// The world upholds the invariant that `matched` holds exactly the live
/// ids satisfying the predicate: [`refresh`](Self::refresh) after every
/// component change, [`evict`](Self::evict) on every destroy.
#[derive(Debug)]
pub(crate) struct Filter {
    spec: FilterSpec,
    matched: HashSet<u32>,
}

impl Filter {
    pub(crate) fn new(spec: FilterSpec) -> Self {
        Self {
            spec,
            matched: HashSet::new(),
        }
    }

    /// Evaluate the predicate for `id` against the given pools.
    fn matches(&self, pools: &PoolMap, id: u32) -> bool {
        self.spec.include.iter().all(|ty| pool_has(pools, ty, id))
            && !self.spec.exclude.iter().any(|ty| pool_has(pools, ty, id))
    }

    /// Re-evaluate the predicate for `id` and add or drop it accordingly.
    /// Idempotent; safe to call for ids the filter has never seen.
    pub(crate) fn refresh(&mut self, pools: &PoolMap, id: u32) {
        if self.matches(pools, id) {
            self.matched.insert(id);
        } else {
            self.matched.remove(&id);
        }
    }

    /// Drop `id` without consulting the predicate. Used on destruction,
    /// when the entity no longer exists to evaluate.
    pub(crate) fn evict(&mut self, id: u32) {
        self.matched.remove(&id);
    }

    /// The cached matching ids, in no particular order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.matched.iter().copied()
    }
}

fn pool_has(pools: &PoolMap, type_id: &TypeId, id: u32) -> bool {
    pools.get(type_id).is_some_and(|pool| pool.has(id))
}
