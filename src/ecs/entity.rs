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
//! Entity handles
//!
//! Entities are lightweight identifiers that tie components together.
//! They carry no data of their own; everything interesting about an
//! entity lives in the component pools of the [`World`](crate::World).

use std::fmt;

/// Opaque handle identifying one entity in a [`World`](crate::World)
///
/// Handles are plain integers allocated monotonically by the world,
/// starting at 1. The raw value 0 is reserved as the [`Entity::NULL`]
/// sentinel and is never allocated, so a zeroed handle always means
/// "no entity".
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::Entity;
///
/// let entity = Entity::from_raw(42);
/// assert_eq!(entity.raw(), 42);
/// assert!(!entity.is_null());
/// assert!(Entity::NULL.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u32);

impl Entity {
    /// The reserved "no entity" sentinel
    pub const NULL: Entity = Entity(0);

    /// Create an entity handle from a raw u32 value
    ///
    /// Useful for tests and serialization; live handles should come from
    /// [`World::create_entity`](crate::World::create_entity).
    pub fn from_raw(id: u32) -> Self {
        Entity(id)
    }

    /// Get the raw u32 value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Check whether this handle is the [`Entity::NULL`] sentinel
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
