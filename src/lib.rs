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
//! # Sandbox Engine
//!
//! A real-time sandbox engine core built around an ECS (Entity Component
//! System) world and an impulse-based rigid body physics simulation that
//! reads and writes the world's components.
//!
//! ## Features
//!
//! - **ECS Architecture**: Type-erased component pools, named entities,
//!   and a frame-driven system scheduler
//! - **Rigid Body Physics**: Gravity, damping, ground plane and AABB
//!   collision resolution with restitution and friction
//! - **Raycasting**: Closest-hit queries against every registered collider
//! - **Events**: A typed publish/subscribe bus with deferred delivery
//! - **Pathfinding**: A* over a uniform grid in the XZ plane
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use sandbox_engine::ecs::World;
//! use sandbox_engine::ecs::components::{Collider, Rigidbody, Transform};
//! use sandbox_engine::physics::PhysicsWorld;
//!
//! let mut world = World::new();
//! let ball = world.create_entity_named("ball");
//! world.insert_component(ball, Transform::from_position(Vec3::new(0.0, 5.0, 0.0)));
//! world.insert_component(ball, Rigidbody::new(1.0));
//! world.insert_component(ball, Collider::sphere(0.5));
//!
//! let mut physics = PhysicsWorld::new();
//! physics.register_rigidbody(ball);
//! physics.update(&mut world, 1.0 / 60.0);
//! ```

#![warn(missing_docs)]

/// Entity Component System implementation
pub mod ecs;

/// Typed publish/subscribe event bus
pub mod events;

/// Grid-based A* pathfinding
pub mod pathfinding;

/// Rigid body simulation and spatial queries
pub mod physics;

/// Frame timing
pub mod time;

pub use ecs::{Entity, World};
pub use physics::PhysicsWorld;
