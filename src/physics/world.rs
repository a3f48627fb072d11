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
//! Rigid body simulation
//!
//! [`PhysicsWorld`] advances registered bodies through a fixed step of
//! four ordered phases: force application, integration, ground-plane
//! collision, and pairwise impulse resolution. It holds entity handles
//! only; all component state is resolved through the ECS [`World`] at
//! the moment it is needed, so destroyed entities degrade to skipped
//! registry entries instead of dangling references.
//!
//! The step never fails. Malformed registrations are skipped, bodies
//! with non-positive mass are immovable by convention, and there is no
//! error path a caller has to handle mid-frame.

use crate::ecs::components::{Collider, Rigidbody, Transform};
use crate::ecs::{Entity, World};
use crate::physics::collision::{Aabb, Ray, RaycastHit};
use glam::Vec3;
use tracing::{debug, trace};

/// How dynamic bodies collide with non-moving geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaticCollisionMode {
    /// Only the implicit ground plane at Y=0 stops falling bodies
    #[default]
    GroundPlaneOnly,
    /// Additionally resolve dynamic bodies against registered static colliders
    StaticAabb,
}

/// Snapshot of the three components a collision pair needs
///
/// All three are small `Copy` records; copying them out keeps the
/// borrow of the world short and lets a pair read one body while
/// writing the other.
struct BodyState {
    body: Rigidbody,
    collider: Collider,
    transform: Transform,
}

impl BodyState {
    fn capture(world: &World, entity: Entity) -> Option<Self> {
        Some(BodyState {
            body: *world.get_component::<Rigidbody>(entity)?,
            collider: *world.get_component::<Collider>(entity)?,
            transform: *world.get_component::<Transform>(entity)?,
        })
    }

    fn aabb(&self) -> Aabb {
        self.collider.world_aabb(&self.transform)
    }
}

/// Fixed-step rigid body simulation over entities in a [`World`]
///
/// Bodies take part in the step only after explicit registration:
/// [`register_rigidbody`] for simulated bodies,
/// [`register_static_collider`] for non-moving obstacles that exist for
/// raycasts (and, in [`StaticCollisionMode::StaticAabb`], for contact
/// resolution). Registries are append-only lists of handles; destroying
/// an entity elsewhere simply turns its entry into a tolerated skip.
///
/// [`register_rigidbody`]: PhysicsWorld::register_rigidbody
/// [`register_static_collider`]: PhysicsWorld::register_static_collider
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::components::{Collider, Rigidbody, Transform};
/// use sandbox_engine::{PhysicsWorld, World};
/// use glam::Vec3;
///
/// let mut world = World::new();
/// let ball = world.create_entity();
/// world.insert_component(ball, Transform::from_position(Vec3::new(0.0, 5.0, 0.0)));
/// world.insert_component(ball, Rigidbody::new(1.0));
/// world.insert_component(ball, Collider::sphere(0.5));
///
/// let mut physics = PhysicsWorld::new();
/// physics.register_rigidbody(ball);
/// physics.update(&mut world, 1.0 / 60.0);
///
/// let transform = world.get_component::<Transform>(ball).unwrap();
/// assert!(transform.position.y < 5.0);
/// ```
pub struct PhysicsWorld {
    gravity: Vec3,
    dynamic_bodies: Vec<Entity>,
    static_bodies: Vec<Entity>,
    static_collision_mode: StaticCollisionMode,
}

impl PhysicsWorld {
    /// Default downward pull applied to gravity-enabled bodies
    pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

    /// Fixed positional separation applied per overlapping pair
    pub const POSITION_CORRECTION: f32 = 0.01;

    /// Vertical speeds below this settle to zero on ground contact
    pub const REST_VELOCITY_THRESHOLD: f32 = 0.05;

    /// Horizontal speeds below this fully settle a grounded body
    pub const REST_HORIZONTAL_THRESHOLD: f32 = 0.1;

    /// Create a physics world with default gravity and ground-plane-only
    /// static collision
    pub fn new() -> Self {
        PhysicsWorld {
            gravity: Self::DEFAULT_GRAVITY,
            dynamic_bodies: Vec::new(),
            static_bodies: Vec::new(),
            static_collision_mode: StaticCollisionMode::default(),
        }
    }

    /// Get the global gravity vector
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Set the global gravity vector
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Get the static collision mode
    pub fn static_collision_mode(&self) -> StaticCollisionMode {
        self.static_collision_mode
    }

    /// Set how dynamic bodies collide with registered static colliders
    pub fn set_static_collision_mode(&mut self, mode: StaticCollisionMode) {
        self.static_collision_mode = mode;
    }

    /// Register an entity as a simulated body
    ///
    /// The entity is expected to carry [`Rigidbody`], [`Collider`] and
    /// [`Transform`] components; phases that find one missing skip the
    /// entry for that step.
    pub fn register_rigidbody(&mut self, entity: Entity) {
        debug!(%entity, "registered dynamic body");
        self.dynamic_bodies.push(entity);
    }

    /// Register an entity as a non-moving obstacle
    ///
    /// Static colliders need only [`Collider`] and [`Transform`]. They
    /// are raycastable and, in [`StaticCollisionMode::StaticAabb`],
    /// block dynamic bodies; they are never moved themselves.
    pub fn register_static_collider(&mut self, entity: Entity) {
        debug!(%entity, "registered static collider");
        self.static_bodies.push(entity);
    }

    /// Forget all registered bodies and obstacles
    ///
    /// Components are untouched; only the registries empty. This is the
    /// one way to drop entries left stale by entity destruction.
    pub fn clear(&mut self) {
        self.dynamic_bodies.clear();
        self.static_bodies.clear();
    }

    /// Number of registered dynamic bodies
    pub fn dynamic_body_count(&self) -> usize {
        self.dynamic_bodies.len()
    }

    /// Number of registered static colliders
    pub fn static_body_count(&self) -> usize {
        self.static_bodies.len()
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Runs the four phases in their fixed order: forces, integration,
    /// ground plane, pairwise contacts (plus the dynamic-versus-static
    /// pass when [`StaticCollisionMode::StaticAabb`] is selected).
    /// Collision volumes are rebuilt from live components per pair, so
    /// corrections applied early in the phase are visible to later
    /// pairs within the same step.
    pub fn update(&mut self, world: &mut World, dt: f32) {
        self.apply_forces(world, dt);
        self.integrate(world, dt);
        self.resolve_ground_plane(world);
        self.resolve_dynamic_pairs(world);
        if self.static_collision_mode == StaticCollisionMode::StaticAabb {
            self.resolve_static_contacts(world);
        }
    }

    /// Find the closest registered collider hit by a ray
    ///
    /// Tests the world AABB of every dynamic and static registry entry
    /// and returns the hit with the smallest distance within
    /// `max_distance`, or `None`. A ray starting inside a volume hits
    /// it at distance 0. Triggers are raycastable like any collider.
    pub fn raycast(&self, world: &World, ray: &Ray, max_distance: f32) -> Option<RaycastHit> {
        let mut closest: Option<RaycastHit> = None;
        for &entity in self.dynamic_bodies.iter().chain(&self.static_bodies) {
            let Some(collider) = world.get_component::<Collider>(entity) else {
                continue;
            };
            let Some(transform) = world.get_component::<Transform>(entity) else {
                continue;
            };
            let aabb = collider.world_aabb(transform);
            let Some(distance) = ray.intersect_aabb(&aabb) else {
                continue;
            };
            if distance > max_distance {
                continue;
            }
            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(RaycastHit {
                    entity,
                    point: ray.point_at(distance),
                    distance,
                });
            }
        }
        closest
    }

    /// Phase 1: turn accumulated forces (plus gravity) into velocity.
    ///
    /// Static bodies do not simulate; kinematic bodies keep whatever
    /// velocity script code gave them, untouched by forces and damping.
    fn apply_forces(&self, world: &mut World, dt: f32) {
        for &entity in &self.dynamic_bodies {
            let Some(body) = world.get_component_mut::<Rigidbody>(entity) else {
                trace!(%entity, "force phase: no rigidbody, skipping");
                continue;
            };
            if body.is_static || body.is_kinematic {
                continue;
            }
            if body.use_gravity {
                let weight = self.gravity * body.mass();
                body.add_force(weight);
            }
            let acceleration = body.force * body.inverse_mass();
            body.velocity += acceleration * dt;
            body.velocity *= 1.0 - body.linear_damping;
            body.clear_accumulators();
        }
    }

    /// Phase 2: move transforms by their body's velocity.
    ///
    /// Rotation integrates as a per-axis Euler rate in degrees, an
    /// approximation that holds up fine for tumbling demo props.
    fn integrate(&self, world: &mut World, dt: f32) {
        for &entity in &self.dynamic_bodies {
            let Some(body) = world.get_component::<Rigidbody>(entity).copied() else {
                continue;
            };
            if body.is_static {
                continue;
            }
            let Some(transform) = world.get_component_mut::<Transform>(entity) else {
                continue;
            };
            transform.position += body.velocity * dt;
            if body.angular_velocity.length_squared() > 0.0 {
                transform.rotation += body.angular_velocity * dt;
                if let Some(body) = world.get_component_mut::<Rigidbody>(entity) {
                    body.angular_velocity *= 1.0 - body.angular_damping;
                }
            }
        }
    }

    /// Phase 3: keep bodies above the implicit ground plane at Y=0.
    ///
    /// A body whose scaled bottom face dips to or below the plane is
    /// snapped on top of it. Downward velocity reflects through the
    /// body's restitution with dynamic friction applied horizontally;
    /// small residual speeds are zeroed so stacked bodies come to rest
    /// instead of jittering forever.
    fn resolve_ground_plane(&self, world: &mut World) {
        for &entity in &self.dynamic_bodies {
            let Some(body) = world.get_component::<Rigidbody>(entity).copied() else {
                continue;
            };
            if body.is_static {
                continue;
            }
            let Some(collider) = world.get_component::<Collider>(entity).copied() else {
                trace!(%entity, "ground phase: no collider, skipping");
                continue;
            };
            if collider.is_trigger {
                continue;
            }
            let Some(transform) = world.get_component_mut::<Transform>(entity) else {
                trace!(%entity, "ground phase: no transform, skipping");
                continue;
            };

            let half_height = collider.local_half_extents().y * transform.scale.y;
            let bottom = transform.position.y - half_height;
            if bottom > 0.0 {
                continue;
            }
            transform.position.y = half_height;

            if body.velocity.y < 0.0 {
                let mut velocity = body.velocity;
                velocity.y = -velocity.y * body.restitution;
                velocity.x *= 1.0 - body.dynamic_friction;
                velocity.z *= 1.0 - body.dynamic_friction;
                if velocity.y.abs() < Self::REST_VELOCITY_THRESHOLD {
                    velocity.y = 0.0;
                    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z).length();
                    if horizontal < Self::REST_HORIZONTAL_THRESHOLD {
                        velocity = Vec3::ZERO;
                    }
                }
                if let Some(body) = world.get_component_mut::<Rigidbody>(entity) {
                    body.velocity = velocity;
                }
            }
        }
    }

    /// Phase 4: resolve every unordered pair of dynamic bodies.
    ///
    /// Deliberately O(n²); the registry sizes this engine targets make
    /// a broad phase more structure than it is worth.
    fn resolve_dynamic_pairs(&self, world: &mut World) {
        for i in 0..self.dynamic_bodies.len() {
            for j in (i + 1)..self.dynamic_bodies.len() {
                self.resolve_pair(world, self.dynamic_bodies[i], self.dynamic_bodies[j]);
            }
        }
    }

    fn resolve_pair(&self, world: &mut World, first: Entity, second: Entity) {
        let (Some(a), Some(b)) = (
            BodyState::capture(world, first),
            BodyState::capture(world, second),
        ) else {
            return;
        };
        if a.collider.is_trigger || b.collider.is_trigger {
            return;
        }
        if a.body.is_static && b.body.is_static {
            return;
        }

        let aabb_a = a.aabb();
        let aabb_b = b.aabb();
        if !aabb_a.intersects(&aabb_b) {
            return;
        }

        // Separation direction points from the second body toward the
        // first; coincident centers fall back to world-up.
        let normal = (aabb_a.center() - aabb_b.center())
            .try_normalize()
            .unwrap_or(Vec3::Y);

        if !a.body.is_static {
            if let Some(transform) = world.get_component_mut::<Transform>(first) {
                transform.position += normal * Self::POSITION_CORRECTION;
            }
        }
        if !b.body.is_static {
            if let Some(transform) = world.get_component_mut::<Transform>(second) {
                transform.position -= normal * Self::POSITION_CORRECTION;
            }
        }

        let relative = a.body.velocity - b.body.velocity;
        let approach = relative.dot(normal);
        if approach > 0.0 {
            // Already separating; the correction above is enough.
            return;
        }

        let restitution = 0.5 * (a.body.restitution + b.body.restitution);
        let inv_a = if a.body.is_static { 0.0 } else { a.body.inverse_mass() };
        let inv_b = if b.body.is_static { 0.0 } else { b.body.inverse_mass() };
        let inv_sum = inv_a + inv_b;
        if inv_sum <= 0.0 {
            return;
        }
        let impulse = -(1.0 + restitution) * approach / inv_sum;

        if inv_a > 0.0 {
            if let Some(body) = world.get_component_mut::<Rigidbody>(first) {
                body.velocity += normal * (impulse * inv_a);
            }
        }
        if inv_b > 0.0 {
            if let Some(body) = world.get_component_mut::<Rigidbody>(second) {
                body.velocity -= normal * (impulse * inv_b);
            }
        }
    }

    /// Optional pass: dynamic bodies against registered static colliders.
    fn resolve_static_contacts(&self, world: &mut World) {
        for &entity in &self.dynamic_bodies {
            for &obstacle in &self.static_bodies {
                self.resolve_static_contact(world, entity, obstacle);
            }
        }
    }

    fn resolve_static_contact(&self, world: &mut World, entity: Entity, obstacle: Entity) {
        let Some(dynamic) = BodyState::capture(world, entity) else {
            return;
        };
        if dynamic.body.is_static || dynamic.collider.is_trigger {
            return;
        }
        let Some(obstacle_collider) = world.get_component::<Collider>(obstacle).copied() else {
            return;
        };
        if obstacle_collider.is_trigger {
            return;
        }
        let Some(obstacle_transform) = world.get_component::<Transform>(obstacle).copied() else {
            return;
        };

        let dynamic_aabb = dynamic.aabb();
        let obstacle_aabb = obstacle_collider.world_aabb(&obstacle_transform);
        if !dynamic_aabb.intersects(&obstacle_aabb) {
            return;
        }

        let normal = (dynamic_aabb.center() - obstacle_aabb.center())
            .try_normalize()
            .unwrap_or(Vec3::Y);

        if let Some(transform) = world.get_component_mut::<Transform>(entity) {
            transform.position += normal * Self::POSITION_CORRECTION;
        }

        // The obstacle is at rest, so the body's own velocity is the
        // relative velocity; its own restitution decides the bounce.
        let approach = dynamic.body.velocity.dot(normal);
        if approach > 0.0 {
            return;
        }
        let inverse_mass = dynamic.body.inverse_mass();
        if inverse_mass <= 0.0 {
            return;
        }
        let impulse = -(1.0 + dynamic.body.restitution) * approach / inverse_mass;

        if let Some(body) = world.get_component_mut::<Rigidbody>(entity) {
            body.velocity += normal * (impulse * inverse_mass);
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
