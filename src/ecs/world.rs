// Copyright 2026 The sandbox-engine Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! World management
//!
//! The World is the central container for all ECS data. It allocates
//! entity handles, owns one component pool per component type, and
//! drives registered systems in registration order.
//!
//! Every operation is tolerant: asking about a missing entity or
//! component yields `None` or a no-op, never an error. A handle that was
//! destroyed behaves exactly like one that never had components.

use crate::ecs::component::{AnyComponentPool, Component, ComponentPool};
use crate::ecs::{Entity, System};
use tracing::{debug, trace};
use std::any::TypeId;
use std::collections::HashMap;

struct SystemSlot {
    type_id: TypeId,
    enabled: bool,
    system: Box<dyn System>,
}

/// The central ECS container
///
/// Owns entities, component pools, and systems. Component pools are
/// keyed by `TypeId`, so two component types can never alias the same
/// storage; type confusion is unrepresentable rather than merely
/// undetected.
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::World;
/// use sandbox_engine::ecs::components::Transform;
///
/// let mut world = World::new();
/// let player = world.create_entity_named("player");
///
/// world.add_component::<Transform>(player).position.y = 2.0;
/// assert!(world.has_component::<Transform>(player));
/// assert_eq!(world.entity_name(player), Some("player"));
/// ```
pub struct World {
    next_entity_id: u32,
    names: HashMap<Entity, String>,
    pools: HashMap<TypeId, Box<dyn AnyComponentPool>>,
    systems: Vec<SystemSlot>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        World {
            next_entity_id: 1,
            names: HashMap::new(),
            pools: HashMap::new(),
            systems: Vec::new(),
        }
    }

    // ---- entities ----

    /// Create a new entity
    ///
    /// Handles are allocated monotonically starting at 1; the raw value
    /// 0 stays reserved for [`Entity::NULL`].
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::from_raw(self.next_entity_id);
        // Wrapping skips the reserved 0.
        self.next_entity_id = self.next_entity_id.wrapping_add(1).max(1);
        entity
    }

    /// Create a new entity with a debug name
    pub fn create_entity_named(&mut self, name: impl Into<String>) -> Entity {
        let entity = self.create_entity();
        self.names.insert(entity, name.into());
        entity
    }

    /// Get the debug name of an entity, if one was assigned
    pub fn entity_name(&self, entity: Entity) -> Option<&str> {
        self.names.get(&entity).map(String::as_str)
    }

    /// Destroy an entity, sweeping its components from every pool
    ///
    /// The handle itself stays valid to pass around; it simply has no
    /// components afterwards. Destroying an unknown entity is a no-op.
    pub fn destroy_entity(&mut self, entity: Entity) {
        for pool in self.pools.values_mut() {
            pool.remove_entity(entity);
        }
        self.names.remove(&entity);
        trace!(%entity, "destroyed entity");
    }

    // ---- components ----

    /// Attach a default-constructed `T` to the entity
    ///
    /// Overwrites any prior `T` on the entity and returns a mutable
    /// reference for in-place setup.
    pub fn add_component<T: Component + Default>(&mut self, entity: Entity) -> &mut T {
        self.pool_mut::<T>().insert_and_get(entity, T::default())
    }

    /// Attach the given component value to the entity
    ///
    /// Overwrites any prior `T` on the entity and returns a mutable
    /// reference to the stored value.
    pub fn insert_component<T: Component>(&mut self, entity: Entity, component: T) -> &mut T {
        self.pool_mut::<T>().insert_and_get(entity, component)
    }

    /// Detach and return the entity's `T`, if it has one
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.pools
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<ComponentPool<T>>()?
            .remove(entity)
    }

    /// Get a reference to the entity's `T`, if it has one
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.pool::<T>()?.get(entity)
    }

    /// Get a mutable reference to the entity's `T`, if it has one
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.pools
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<ComponentPool<T>>()?
            .get_mut(entity)
    }

    /// Check whether the entity has a `T`
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.pool::<T>().is_some_and(|pool| pool.contains(entity))
    }

    /// Snapshot of all entities that currently have a `T`
    ///
    /// Order is unspecified. The snapshot stays valid across later
    /// structural changes; entries destroyed afterwards just stop
    /// resolving.
    pub fn entities_with_component<T: Component>(&self) -> Vec<Entity> {
        self.pool::<T>()
            .map(|pool| pool.entities().collect())
            .unwrap_or_default()
    }

    /// Number of entities that currently have a `T`
    pub fn component_count<T: Component>(&self) -> usize {
        self.pool::<T>().map_or(0, ComponentPool::len)
    }

    fn pool<T: Component>(&self) -> Option<&ComponentPool<T>> {
        self.pools
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<ComponentPool<T>>()
    }

    fn pool_mut<T: Component>(&mut self) -> &mut ComponentPool<T> {
        let pool = self
            .pools
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentPool::<T>::new()));
        match pool.as_any_mut().downcast_mut::<ComponentPool<T>>() {
            Some(pool) => pool,
            None => unreachable!("pool table is keyed by component TypeId"),
        }
    }

    // ---- systems ----

    /// Register a system, calling its `initialize` hook immediately
    ///
    /// Registration order is update order. Returns a mutable reference
    /// to the stored system for post-registration configuration.
    pub fn register_system<S: System>(&mut self, system: S) -> &mut S {
        let mut system = system;
        system.initialize(self);
        debug!(system = system.name(), "registered system");
        self.systems.push(SystemSlot {
            type_id: TypeId::of::<S>(),
            enabled: true,
            system: Box::new(system),
        });
        match self
            .systems
            .last_mut()
            .and_then(|slot| slot.system.as_any_mut().downcast_mut::<S>())
        {
            Some(system) => system,
            None => unreachable!("freshly registered system downcasts to its own type"),
        }
    }

    /// Get the first registered system of type `S`
    pub fn get_system<S: System>(&self) -> Option<&S> {
        let type_id = TypeId::of::<S>();
        self.systems
            .iter()
            .find(|slot| slot.type_id == type_id)
            .and_then(|slot| slot.system.as_any().downcast_ref::<S>())
    }

    /// Get the first registered system of type `S`, mutably
    pub fn get_system_mut<S: System>(&mut self) -> Option<&mut S> {
        let type_id = TypeId::of::<S>();
        self.systems
            .iter_mut()
            .find(|slot| slot.type_id == type_id)
            .and_then(|slot| slot.system.as_any_mut().downcast_mut::<S>())
    }

    /// Enable or disable the first registered system of type `S`
    ///
    /// Disabled systems are skipped by [`update`](World::update) but
    /// keep their state and registration slot. Returns whether a system
    /// of that type was found.
    pub fn set_system_enabled<S: System>(&mut self, enabled: bool) -> bool {
        let type_id = TypeId::of::<S>();
        match self.systems.iter_mut().find(|slot| slot.type_id == type_id) {
            Some(slot) => {
                slot.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Check whether the first registered system of type `S` is enabled
    pub fn is_system_enabled<S: System>(&self) -> Option<bool> {
        let type_id = TypeId::of::<S>();
        self.systems
            .iter()
            .find(|slot| slot.type_id == type_id)
            .map(|slot| slot.enabled)
    }

    /// Number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Advance every enabled system by `dt` seconds, in registration order
    ///
    /// Systems run with exclusive access to the world and are detached
    /// from it for the duration of the frame; a system registering
    /// further systems mid-update queues them to run from the next
    /// frame onwards.
    pub fn update(&mut self, dt: f32) {
        let mut systems = std::mem::take(&mut self.systems);
        for slot in &mut systems {
            if slot.enabled {
                slot.system.update(self, dt);
            }
        }
        systems.append(&mut self.systems);
        self.systems = systems;
    }

    /// Shut the world down
    ///
    /// Calls every system's `shutdown` hook in registration order, then
    /// drops all systems, component pools, and entity names. Entity ids
    /// are not reused afterwards.
    pub fn shutdown(&mut self) {
        let mut systems = std::mem::take(&mut self.systems);
        for slot in &mut systems {
            trace!(system = slot.system.name(), "shutting down system");
            slot.system.shutdown(self);
        }
        drop(systems);
        self.systems.clear();
        self.pools.clear();
        self.names.clear();
        debug!("world shut down");
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
