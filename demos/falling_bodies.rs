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
//! Bouncing bodies on the ground plane
//!
//! Drops three spheres with different restitution values and traces
//! their heights as they bounce and come to rest.

use glam::Vec3;
use sandbox_engine::ecs::components::{Collider, Rigidbody, Transform};
use sandbox_engine::{PhysicsWorld, World};
use tracing_subscriber::EnvFilter;

const DT: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Sandbox Engine - Falling Bodies");
    println!("===============================\n");

    let mut world = World::new();
    let mut physics = PhysicsWorld::new();

    // One sphere per restitution: bouncy, middling, dead.
    let mut balls = Vec::new();
    for (i, restitution) in [0.9_f32, 0.5, 0.2].into_iter().enumerate() {
        let ball = world.create_entity_named(format!("ball-{i}"));
        world.insert_component(
            ball,
            Transform::from_position(Vec3::new(i as f32 * 2.0, 5.0, 0.0)),
        );
        let mut body = Rigidbody::new(1.0);
        body.restitution = restitution;
        world.insert_component(ball, body);
        world.insert_component(ball, Collider::sphere(0.5));
        physics.register_rigidbody(ball);
        balls.push(ball);
        println!("  spawned ball-{i} at y = 5.0 with restitution {restitution:.1}");
    }

    println!("\nSimulating at {} Hz:", (1.0 / DT) as u32);
    let total_frames = 900;
    for frame in 0..total_frames {
        physics.update(&mut world, DT);

        if frame % 60 == 59 {
            print!("  t = {:>2}s ", (frame + 1) / 60);
            for &ball in &balls {
                if let Some(transform) = world.get_component::<Transform>(ball) {
                    print!(" y = {:5.2}", transform.position.y);
                }
            }
            println!();
        }
    }

    println!("\nFinal state after {} frames:", total_frames);
    for &ball in &balls {
        let name = world.entity_name(ball).unwrap_or("?").to_string();
        if let (Some(transform), Some(body)) = (
            world.get_component::<Transform>(ball),
            world.get_component::<Rigidbody>(ball),
        ) {
            let state = if body.velocity == Vec3::ZERO {
                "at rest"
            } else {
                "still moving"
            };
            println!(
                "  {} y = {:.2}, |v| = {:.3} ({})",
                name,
                transform.position.y,
                body.velocity.length(),
                state
            );
        }
    }

    println!("\nExample completed successfully!");
}
