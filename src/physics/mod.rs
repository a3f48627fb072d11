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
//! Physics simulation
//!
//! A deliberately small rigid body layer for demo scenes: AABBs as the
//! sole collision primitive, an implicit ground plane, impulse-based
//! contact response, and slab-test raycasts. No narrow phase, no
//! constraint solver, no broad-phase acceleration structure.

mod collision;
mod world;

pub use collision::{Aabb, Ray, RaycastHit};
pub use world::{PhysicsWorld, StaticCollisionMode};
