//! The world: entity allocator, component pools, and filter registry.

use std::any::{TypeId, type_name};
use std::collections::VecDeque;

use crate::entity::Entity;
use crate::error::EcsError;
use crate::filter::{Filter, FilterId, FilterSpec};
use crate::pool::{Component, ComponentPool, PoolMap};

/// Owns every entity, component, and filter of one simulation.
///
/// Entity ids index into `generations`; destroyed ids go onto the free
/// queue and come back (oldest first) with a bumped generation, which is
/// what invalidates stale [`Entity`] handles. Component data lives in one
/// type-erased [`ComponentPool`] per component type, created lazily on
/// first insert. Filters are maintained incrementally: every component
/// add/remove re-evaluates the touched entity against each filter, and
/// destruction evicts it from all of them, so filter reads never scan.
#[derive(Default)]
pub struct World {
    /// Current generation per entity id. Never shrinks.
    generations: Vec<u32>,
    /// Destroyed ids awaiting reuse, oldest first.
    free_ids: VecDeque<u32>,
    active_count: usize,
    pools: PoolMap,
    filters: Vec<Filter>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Entity lifecycle --

    /// Create a new entity, reusing the oldest destroyed id if one exists.
    ///
    /// Fresh ids start at generation 1, so a handle never equals
    /// [`Entity::NULL`]. Creation does not touch filters; an entity joins
    /// an empty-include filter only once one of its components changes or
    /// the filter is built while it is alive.
    pub fn create_entity(&mut self) -> Entity {
        let id = match self.free_ids.pop_front() {
            Some(id) => id,
            None => {
                let id = self.generations.len() as u32;
                self.generations.push(1);
                id
            }
        };
        self.active_count += 1;
        Entity::new(id, self.generations[id as usize])
    }

    /// Destroy an entity, dropping all its components and evicting it from
    /// every filter. A dead or null handle is a no-op.
    pub fn destroy_entity(&mut self, entity: Entity) {
        if !self.is_alive(entity) {
            return;
        }
        let id = entity.id();
        for pool in self.pools.values_mut() {
            pool.on_entity_destroyed(id);
        }
        for filter in &mut self.filters {
            filter.evict(id);
        }
        // The bump is what kills outstanding handles to this id.
        self.generations[id as usize] = self.generations[id as usize].wrapping_add(1);
        self.free_ids.push_back(id);
        self.active_count -= 1;
    }

    /// True while the handle's generation matches the stored one.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations.get(entity.id() as usize) == Some(&entity.generation())
    }

    /// Count of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.active_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    // -- Component operations --

    /// Attach a component to an entity, replacing any existing `T`.
    ///
    /// Every filter re-evaluates the entity afterwards.
    pub fn add_component<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> Result<(), EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::EntityDead(entity));
        }
        self.pool_or_create::<T>().add(entity.id(), component);
        self.refresh_filters(entity.id());
        Ok(())
    }

    /// Detach and return an entity's `T`, if present.
    ///
    /// Returns `None` for a dead entity or a missing component. Filters
    /// re-evaluate the entity either way.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.is_alive(entity) {
            return None;
        }
        let removed = self
            .pool_mut::<T>()
            .and_then(|pool| pool.remove(entity.id()));
        self.refresh_filters(entity.id());
        removed
    }

    /// True if the entity's id currently holds a `T`.
    ///
    /// Keyed by id alone: a stale handle whose id was reused reports the
    /// successor's components. Callers that care must check
    /// [`is_alive`](Self::is_alive) first.
    #[must_use]
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.pool::<T>().is_some_and(|pool| pool.has(entity.id()))
    }

    /// Borrow an entity's `T`.
    pub fn get_component<T: Component>(&self, entity: Entity) -> Result<&T, EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::EntityDead(entity));
        }
        self.pool::<T>()
            .and_then(|pool| pool.get(entity.id()))
            .ok_or_else(|| EcsError::ComponentNotFound(type_name::<T>(), entity))
    }

    /// Mutably borrow an entity's `T`.
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::EntityDead(entity));
        }
        self.pool_mut::<T>()
            .and_then(|pool| pool.get_mut(entity.id()))
            .ok_or_else(|| EcsError::ComponentNotFound(type_name::<T>(), entity))
    }

    // -- Filters --

    /// Register a filter and seed it with every live entity that already
    /// matches. This is the only full scan a filter ever performs; from
    /// here on the world keeps it current incrementally.
    ///
    /// Each call registers a fresh filter, even for a spec identical to an
    /// earlier one.
    #[must_use]
    pub fn create_filter(&mut self, spec: FilterSpec) -> FilterId {
        let mut filter = Filter::new(spec);
        for id in 0..self.generations.len() as u32 {
            if self.free_ids.contains(&id) {
                continue;
            }
            filter.refresh(&self.pools, id);
        }
        self.filters.push(filter);
        FilterId::new(self.filters.len() - 1)
    }

    /// Iterate the entities currently matching a filter, in no particular
    /// order. The id must come from this world's
    /// [`create_filter`](Self::create_filter).
    ///
    /// Handles are rebuilt with each id's current generation, so everything
    /// yielded is alive at the time of the call.
    pub fn filter_entities(&self, filter: FilterId) -> impl Iterator<Item = Entity> + '_ {
        self.filters[filter.index()].ids().filter_map(|id| {
            self.generations
                .get(id as usize)
                .map(|&generation| Entity::new(id, generation))
        })
    }

    // -- Pool access --

    fn pool<T: Component>(&self) -> Option<&ComponentPool<T>> {
        self.pools
            .get(&TypeId::of::<T>())
            .and_then(|pool| pool.as_any().downcast_ref())
    }

    fn pool_mut<T: Component>(&mut self) -> Option<&mut ComponentPool<T>> {
        self.pools
            .get_mut(&TypeId::of::<T>())
            .and_then(|pool| pool.as_any_mut().downcast_mut())
    }

    fn pool_or_create<T: Component>(&mut self) -> &mut ComponentPool<T> {
        self.pools
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentPool::<T>::new()))
            .as_any_mut()
            .downcast_mut()
            .expect("pool stored under TypeId::of::<T> is always ComponentPool<T>")
    }

    /// Re-evaluate `id` against every registered filter.
    fn refresh_filters(&mut self, id: u32) {
        for filter in &mut self.filters {
            filter.refresh(&self.pools, id);
        }
    }
}
