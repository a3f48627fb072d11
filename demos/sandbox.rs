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
//! Headless sandbox scene
//!
//! Wires every engine subsystem into one frame loop: a named player
//! entity patrols a pathfinder route around pillar obstacles, an
//! overhead raycast picks entities by name, and an event on the bus
//! shuts the loop down once the player reaches the relic.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;
use sandbox_engine::ecs::components::{Collider, Rigidbody, Transform};
use sandbox_engine::ecs::System;
use sandbox_engine::events::EventBus;
use sandbox_engine::pathfinding::GridPathfinder;
use sandbox_engine::physics::{Ray, StaticCollisionMode};
use sandbox_engine::time::FrameClock;
use sandbox_engine::{Entity, PhysicsWorld, World};
use tracing_subscriber::EnvFilter;

const DT: f32 = 1.0 / 60.0;
const PLAYER_SPEED: f32 = 2.0;

/// Raised on the bus when the scene has nothing left to do.
struct ShutdownRequested;

/// Walks the player along a fixed list of waypoints, one segment per
/// frame step, leaving height to the physics pass.
struct PatrolSystem {
    player: Entity,
    waypoints: Vec<Vec3>,
    next_waypoint: usize,
    speed: f32,
}

impl PatrolSystem {
    fn arrived(&self) -> bool {
        self.next_waypoint >= self.waypoints.len()
    }
}

impl System for PatrolSystem {
    fn update(&mut self, world: &mut World, dt: f32) {
        let Some(&waypoint) = self.waypoints.get(self.next_waypoint) else {
            return;
        };
        let Some(transform) = world.get_component_mut::<Transform>(self.player) else {
            return;
        };
        let target = Vec3::new(waypoint.x, transform.position.y, waypoint.z);
        let offset = target - transform.position;
        let distance = offset.length();
        let step = self.speed * dt;
        if distance <= step {
            transform.position = target;
            self.next_waypoint += 1;
        } else {
            transform.position += offset * (step / distance);
        }
    }

    fn name(&self) -> &str {
        "PatrolSystem"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Sandbox Engine - Headless Sandbox Scene");
    println!("=======================================\n");

    let mut world = World::new();
    let mut physics = PhysicsWorld::new();
    physics.set_static_collision_mode(StaticCollisionMode::StaticAabb);
    let mut bus = EventBus::new();
    let pathfinder = GridPathfinder::new(1.0);
    let mut clock = FrameClock::new();

    // A wall of pillars between the player and the relic.
    println!("Scene setup:");
    let mut pillar_positions = Vec::new();
    for (i, x) in [-0.5_f32, 0.5, 1.5].into_iter().enumerate() {
        let pillar = world.create_entity_named(format!("pillar-{i}"));
        let position = Vec3::new(x, 1.0, 0.5);
        world.insert_component(pillar, Transform::from_position(position));
        world.insert_component(pillar, Collider::cuboid(Vec3::new(0.45, 1.0, 0.45)));
        physics.register_static_collider(pillar);
        pillar_positions.push(position);
        println!("  pillar-{i} at ({:.1}, {:.1})", position.x, position.z);
    }

    let player_start = Vec3::new(0.5, 0.3, -3.5);
    let player = world.create_entity_named("player");
    world.insert_component(player, Transform::from_position(player_start));
    let mut player_body = Rigidbody::new(1.0);
    player_body.is_kinematic = true;
    world.insert_component(player, player_body);
    world.insert_component(player, Collider::sphere(0.3));
    physics.register_rigidbody(player);
    println!("  player at ({:.1}, {:.1})", player_start.x, player_start.z);

    let relic_position = Vec3::new(0.5, 0.2, 4.5);
    let relic = world.create_entity_named("relic");
    world.insert_component(relic, Transform::from_position(relic_position));
    let mut relic_collider = Collider::cuboid(Vec3::new(0.2, 0.2, 0.2));
    relic_collider.is_trigger = true;
    world.insert_component(relic, relic_collider);
    physics.register_static_collider(relic);
    println!("  relic at ({:.1}, {:.1})", relic_position.x, relic_position.z);

    // Route the player around the pillars on the XZ grid.
    let route = pathfinder.find_path(player_start, relic_position, &pillar_positions);
    if route.is_empty() {
        println!("\nNo route to the relic, giving up.");
        return;
    }
    println!(
        "\nPathfinding: {} waypoints from ({:.1}, {:.1}) to ({:.1}, {:.1})",
        route.len(),
        route[0].x,
        route[0].z,
        route[route.len() - 1].x,
        route[route.len() - 1].z
    );

    world.register_system(PatrolSystem {
        player,
        waypoints: route,
        next_waypoint: 0,
        speed: PLAYER_SPEED,
    });

    // The bus closes the loop: anyone may request a shutdown, the main
    // loop only watches the flag.
    let running = Rc::new(Cell::new(true));
    let running_flag = Rc::clone(&running);
    bus.subscribe::<ShutdownRequested>(move |_| {
        println!("  shutdown requested, stopping the loop");
        running_flag.set(false);
    });

    // Picking sanity check before the loop starts.
    let pick = Ray::new(relic_position + Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
    match physics.raycast(&world, &pick, 10.0) {
        Some(hit) => println!(
            "\nPick above the relic hits `{}` at distance {:.2}",
            world.entity_name(hit.entity).unwrap_or("<unnamed>"),
            hit.distance
        ),
        None => println!("\nPick above the relic hits nothing"),
    }

    println!("\nPatrolling:");
    let mut frame: u32 = 0;
    while running.get() && frame < 3600 {
        clock.tick();
        world.update(DT);
        physics.update(&mut world, DT);

        // Overhead pick tracks the player, every two seconds.
        if frame % 120 == 0 {
            if let Some(transform) = world.get_component::<Transform>(player) {
                let overhead = Ray::new(
                    Vec3::new(transform.position.x, 10.0, transform.position.z),
                    Vec3::NEG_Y,
                );
                if let Some(hit) = physics.raycast(&world, &overhead, 20.0) {
                    println!(
                        "  t = {:4.1}s  pick: `{}` at ({:5.2}, {:5.2})",
                        frame as f32 * DT,
                        world.entity_name(hit.entity).unwrap_or("<unnamed>"),
                        hit.point.x,
                        hit.point.z
                    );
                }
            }
        }

        let arrived = world
            .get_system::<PatrolSystem>()
            .is_some_and(|patrol| patrol.arrived());
        if arrived {
            println!("  player reached the relic, collecting it");
            world.destroy_entity(relic);
            bus.queue(ShutdownRequested);
        }

        bus.process_queue();
        frame += 1;
    }

    println!(
        "\nSimulated {:.1}s in {:.3}s of wall time ({} frames)",
        frame as f32 * DT,
        clock.total_time(),
        clock.frame_count()
    );

    world.shutdown();
    println!("\nExample completed successfully!");
}
