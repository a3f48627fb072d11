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
//! Integration tests for world-level component and system behavior

use glam::Vec3;
use sandbox_engine::ecs::components::{Collider, Rigidbody, Transform};
use sandbox_engine::ecs::System;
use sandbox_engine::World;
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// System that appends lifecycle markers to a shared log
struct ProbeSystem {
    label: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl ProbeSystem {
    fn record(&self, stage: &str) {
        self.log.lock().unwrap().push(format!("{}:{}", stage, self.label));
    }
}

impl System for ProbeSystem {
    fn initialize(&mut self, _world: &mut World) {
        self.record("init");
    }

    fn update(&mut self, _world: &mut World, _dt: f32) {
        self.record("update");
    }

    fn shutdown(&mut self, _world: &mut World) {
        self.record("shutdown");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// System counting its update calls through shared state
struct TickSystem {
    ticks: Arc<AtomicUsize>,
}

impl System for TickSystem {
    fn update(&mut self, _world: &mut World, _dt: f32) {
        self.ticks.fetch_add(1, Ordering::SeqCst);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_collider_query_starts_empty_then_grows() {
    // A world with entities but no colliders queries empty; adding one
    // collider makes the query return exactly that entity.
    let mut world = World::new();
    world.create_entity();
    let prop = world.create_entity();
    world.insert_component(prop, Transform::default());

    assert!(world.entities_with_component::<Collider>().is_empty());

    world.insert_component(prop, Collider::sphere(0.5));
    let with_collider = world.entities_with_component::<Collider>();
    assert_eq!(with_collider, vec![prop]);
}

#[test]
fn test_component_isolation_across_types_and_entities() {
    let mut world = World::new();
    let player = world.create_entity();
    let enemy = world.create_entity();

    world.insert_component(player, Transform::from_position(Vec3::new(1.0, 0.0, 0.0)));
    world.insert_component(player, Rigidbody::new(2.0));
    world.insert_component(enemy, Rigidbody::new(3.0));

    // Removing one type from one entity leaves everything else alone.
    let removed = world.remove_component::<Rigidbody>(player);
    assert!(removed.is_some());

    assert!(world.has_component::<Transform>(player));
    assert!(!world.has_component::<Rigidbody>(player));
    assert_eq!(world.get_component::<Rigidbody>(enemy).unwrap().mass(), 3.0);
    assert_eq!(
        world.get_component::<Transform>(player).unwrap().position,
        Vec3::new(1.0, 0.0, 0.0)
    );
}

#[test]
fn test_destroy_entity_sweeps_every_pool() {
    let mut world = World::new();
    let doomed = world.create_entity_named("doomed");
    let bystander = world.create_entity();

    world.insert_component(doomed, Transform::default());
    world.insert_component(doomed, Rigidbody::default());
    world.insert_component(doomed, Collider::default());
    world.insert_component(bystander, Transform::default());

    world.destroy_entity(doomed);

    assert!(!world.has_component::<Transform>(doomed));
    assert!(!world.has_component::<Rigidbody>(doomed));
    assert!(!world.has_component::<Collider>(doomed));
    assert_eq!(world.entity_name(doomed), None);

    // The bystander and the pool counts for other entities survive.
    assert!(world.has_component::<Transform>(bystander));
    assert_eq!(world.component_count::<Transform>(), 1);
    assert_eq!(world.component_count::<Rigidbody>(), 0);
}

#[test]
fn test_systems_run_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = World::new();

    world.register_system(ProbeSystem {
        label: "movement",
        log: Arc::clone(&log),
    });
    world.register_system(ProbeSystem {
        label: "animation",
        log: Arc::clone(&log),
    });

    world.update(1.0 / 60.0);
    world.shutdown();

    let entries = log.lock().unwrap();
    assert_eq!(
        *entries,
        vec![
            "init:movement",
            "init:animation",
            "update:movement",
            "update:animation",
            "shutdown:movement",
            "shutdown:animation",
        ]
    );
}

#[test]
fn test_disabled_system_is_skipped() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let mut world = World::new();
    world.register_system(TickSystem {
        ticks: Arc::clone(&ticks),
    });

    world.update(1.0 / 60.0);
    assert_eq!(ticks.load(Ordering::SeqCst), 1);

    assert!(world.set_system_enabled::<TickSystem>(false));
    world.update(1.0 / 60.0);
    world.update(1.0 / 60.0);
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
    assert_eq!(world.is_system_enabled::<TickSystem>(), Some(false));

    assert!(world.set_system_enabled::<TickSystem>(true));
    world.update(1.0 / 60.0);
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
}

#[test]
fn test_shutdown_clears_entities_and_systems() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = World::new();
    let prop = world.create_entity_named("prop");
    world.insert_component(prop, Transform::default());
    world.register_system(ProbeSystem {
        label: "probe",
        log: Arc::clone(&log),
    });

    world.shutdown();

    assert!(log.lock().unwrap().contains(&"shutdown:probe".to_string()));
    assert_eq!(world.system_count(), 0);
    assert!(!world.has_component::<Transform>(prop));
    assert_eq!(world.entity_name(prop), None);
}

#[test]
fn test_systems_can_mutate_components() {
    // The frame loop contract: systems get exclusive world access and
    // can edit the same components physics reads.
    struct Drift;
    impl System for Drift {
        fn update(&mut self, world: &mut World, dt: f32) {
            for entity in world.entities_with_component::<Transform>() {
                if let Some(transform) = world.get_component_mut::<Transform>(entity) {
                    transform.position.x += dt;
                }
            }
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    let mut world = World::new();
    let prop = world.create_entity();
    world.insert_component(prop, Transform::default());
    world.register_system(Drift);

    world.update(0.5);
    world.update(0.5);

    let transform = world.get_component::<Transform>(prop).unwrap();
    assert!((transform.position.x - 1.0).abs() < 1e-6);
}
