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
//! System lifecycle trait
//!
//! Systems contain the per-frame logic that operates on entities and
//! components. The [`World`](crate::World) owns registered systems and
//! drives them through the lifecycle below: `initialize` once at
//! registration, `update` every frame in registration order, `shutdown`
//! once when the world winds down.

use crate::ecs::World;
use std::any::Any;

/// Trait for systems driven by the [`World`](crate::World)
///
/// Only [`update`](System::update) is mandatory; the lifecycle hooks
/// default to no-ops and [`name`](System::name) defaults to the type
/// name. Systems receive exclusive world access, so they can freely
/// create entities and mutate components mid-frame.
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::{System, World};
/// use std::any::Any;
///
/// struct FrameCounter {
///     frames: u64,
/// }
///
/// impl System for FrameCounter {
///     fn update(&mut self, _world: &mut World, _dt: f32) {
///         self.frames += 1;
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn as_any_mut(&mut self) -> &mut dyn Any {
///         self
///     }
/// }
///
/// let mut world = World::new();
/// world.register_system(FrameCounter { frames: 0 });
/// world.update(1.0 / 60.0);
/// assert_eq!(world.get_system::<FrameCounter>().unwrap().frames, 1);
/// ```
pub trait System: Send + Sync + 'static {
    /// Called once when the system is registered with a world
    fn initialize(&mut self, world: &mut World) {
        let _ = world;
    }

    /// Advance the system by `dt` seconds
    fn update(&mut self, world: &mut World, dt: f32);

    /// Called once when the world shuts down
    fn shutdown(&mut self, world: &mut World) {
        let _ = world;
    }

    /// Get the name of this system for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Allow downcasting to the concrete system type
    fn as_any(&self) -> &dyn Any;

    /// Allow mutable downcasting to the concrete system type
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
