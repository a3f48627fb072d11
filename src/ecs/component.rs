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
//! Component storage
//!
//! Components are plain data attached to entities. Each component type
//! gets its own homogeneous pool; the [`World`](crate::World) keeps one
//! pool per `TypeId` behind the type-erased [`AnyComponentPool`] facade
//! so it can sweep every pool on entity destruction without knowing the
//! concrete types involved.

use crate::ecs::Entity;
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Marker trait for component types
///
/// Components should be plain data structures without behavior. Any
/// `'static + Send + Sync` type qualifies via the blanket impl; there is
/// nothing to derive or implement by hand.
pub trait Component: 'static + Send + Sync {}

impl<T: 'static + Send + Sync> Component for T {}

/// Homogeneous storage for one component type
///
/// Maps entities to their `T` values. Lookups, insertions and removals
/// are O(1) hash operations; iteration order is unspecified.
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::{ComponentPool, Entity};
///
/// let mut pool = ComponentPool::<f32>::new();
/// let entity = Entity::from_raw(1);
///
/// pool.insert(entity, 9.81);
/// assert!(pool.contains(entity));
/// assert_eq!(pool.remove(entity), Some(9.81));
/// ```
pub struct ComponentPool<T: Component> {
    components: HashMap<Entity, T>,
}

impl<T: Component> ComponentPool<T> {
    /// Create a new empty pool
    pub fn new() -> Self {
        ComponentPool {
            components: HashMap::new(),
        }
    }

    /// Insert a component for the given entity, returning any prior value
    pub fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        self.components.insert(entity, component)
    }

    /// Insert a component and return a mutable reference to the stored value
    ///
    /// Overwrites any prior component for the entity.
    pub fn insert_and_get(&mut self, entity: Entity, component: T) -> &mut T {
        match self.components.entry(entity) {
            Entry::Occupied(mut entry) => {
                entry.insert(component);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(component),
        }
    }

    /// Remove the component for the given entity
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.components.remove(&entity)
    }

    /// Get a reference to the component for the given entity
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.components.get(&entity)
    }

    /// Get a mutable reference to the component for the given entity
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut(&entity)
    }

    /// Check if an entity has a component in this pool
    pub fn contains(&self, entity: Entity) -> bool {
        self.components.contains_key(&entity)
    }

    /// Get the number of components stored
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over all entities that have a component in this pool
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.components.keys().copied()
    }

    /// Iterate over all (entity, component) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.components.iter().map(|(entity, value)| (*entity, value))
    }
}

impl<T: Component> Default for ComponentPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased view of a component pool
///
/// The world stores pools as `Box<dyn AnyComponentPool>` keyed by
/// `TypeId`, which keeps every pool strictly partitioned by component
/// type while still allowing whole-table operations like the destroy
/// sweep. The `as_any` pair allows downcasting back to the concrete
/// [`ComponentPool<T>`].
pub trait AnyComponentPool: Send + Sync {
    /// Remove the component for the given entity, reporting whether one existed
    fn remove_entity(&mut self, entity: Entity) -> bool;

    /// Get the number of components stored
    fn len(&self) -> usize;

    /// Clear all components
    fn clear(&mut self);

    /// Allow downcasting to the concrete pool type
    fn as_any(&self) -> &dyn Any;

    /// Allow mutable downcasting to the concrete pool type
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> AnyComponentPool for ComponentPool<T> {
    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.components.remove(&entity).is_some()
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn clear(&mut self) {
        self.components.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct TestComponent {
        x: f32,
        y: f32,
    }

    #[test]
    fn test_pool_insert_get_remove() {
        let mut pool = ComponentPool::<TestComponent>::new();
        let entity = Entity::from_raw(1);

        pool.insert(entity, TestComponent { x: 10.0, y: 20.0 });

        assert!(pool.contains(entity));
        assert_eq!(pool.get(entity).unwrap().x, 10.0);

        let removed = pool.remove(entity);
        assert_eq!(removed, Some(TestComponent { x: 10.0, y: 20.0 }));
        assert!(!pool.contains(entity));
        assert_eq!(pool.remove(entity), None);
    }

    #[test]
    fn test_pool_insert_overwrites() {
        let mut pool = ComponentPool::<TestComponent>::new();
        let entity = Entity::from_raw(1);

        pool.insert(entity, TestComponent { x: 1.0, y: 2.0 });
        let prior = pool.insert(entity, TestComponent { x: 3.0, y: 4.0 });

        assert_eq!(prior, Some(TestComponent { x: 1.0, y: 2.0 }));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(entity).unwrap().x, 3.0);
    }

    #[test]
    fn test_pool_get_mut() {
        let mut pool = ComponentPool::<TestComponent>::new();
        let entity = Entity::from_raw(1);

        pool.insert(entity, TestComponent { x: 1.0, y: 2.0 });
        if let Some(comp) = pool.get_mut(entity) {
            comp.x = 100.0;
        }

        assert_eq!(pool.get(entity).unwrap().x, 100.0);
    }

    #[test]
    fn test_pool_entities_iter() {
        let mut pool = ComponentPool::<TestComponent>::new();
        let e1 = Entity::from_raw(1);
        let e2 = Entity::from_raw(2);

        pool.insert(e1, TestComponent { x: 1.0, y: 2.0 });
        pool.insert(e2, TestComponent { x: 3.0, y: 4.0 });

        let entities: Vec<Entity> = pool.entities().collect();
        assert_eq!(entities.len(), 2);
        assert!(entities.contains(&e1));
        assert!(entities.contains(&e2));
    }

    #[test]
    fn test_erased_pool_sweep() {
        let mut pool = ComponentPool::<TestComponent>::new();
        let entity = Entity::from_raw(1);
        pool.insert(entity, TestComponent { x: 1.0, y: 2.0 });

        let erased: &mut dyn AnyComponentPool = &mut pool;
        assert_eq!(erased.len(), 1);
        assert!(erased.remove_entity(entity));
        assert!(!erased.remove_entity(entity));
        assert_eq!(erased.len(), 0);
    }

    #[test]
    fn test_erased_pool_downcast() {
        let mut pool: Box<dyn AnyComponentPool> =
            Box::new(ComponentPool::<TestComponent>::new());
        let entity = Entity::from_raw(1);

        let concrete = pool
            .as_any_mut()
            .downcast_mut::<ComponentPool<TestComponent>>()
            .unwrap();
        concrete.insert(entity, TestComponent { x: 5.0, y: 6.0 });

        let concrete = pool
            .as_any()
            .downcast_ref::<ComponentPool<TestComponent>>()
            .unwrap();
        assert_eq!(concrete.get(entity).unwrap().y, 6.0);

        // A downcast to the wrong pool type must fail, never alias.
        assert!(pool.as_any().downcast_ref::<ComponentPool<f32>>().is_none());
    }

    #[test]
    fn test_pool_clear() {
        let mut pool = ComponentPool::<TestComponent>::new();
        pool.insert(Entity::from_raw(1), TestComponent { x: 1.0, y: 2.0 });
        pool.insert(Entity::from_raw(2), TestComponent { x: 3.0, y: 4.0 });
        assert_eq!(pool.len(), 2);

        pool.clear();
        assert!(pool.is_empty());
    }
}
