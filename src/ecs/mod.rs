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
//! Entity Component System core
//!
//! This module provides the scene-state half of the engine:
//! - Entity handle allocation
//! - Per-type component pools behind a type-erased facade
//! - The [`World`] container with tolerant component queries
//! - The [`System`] lifecycle and registry
//! - The built-in [`components`] every demo scene is made of

mod component;
mod entity;
mod system;
mod world;

pub mod components;

pub use component::{AnyComponentPool, Component, ComponentPool};
pub use entity::Entity;
pub use system::System;
pub use world::World;
