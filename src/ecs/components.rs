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
//! Built-in engine components
//!
//! The components every demo scene is made of: spatial pose, rigid body
//! state, and collision volumes. All of them are small `Copy` records in
//! single-precision floats, matching what a renderer and a fixed-step
//! physics pass want to consume.

use crate::physics::Aabb;
use glam::{Mat4, Vec3};

/// Spatial pose of an entity: position, orientation, and scale
///
/// Rotation is stored as Euler angles in degrees (applied Y, then X,
/// then Z), which is what level editors and demo scripts want to type.
/// Scale is per-axis; negative or zero scale is not rejected but the
/// physics pass assumes positive extents.
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::components::Transform;
/// use glam::Vec3;
///
/// let transform = Transform::from_position(Vec3::new(0.0, 5.0, 0.0));
/// assert_eq!(transform.scale, Vec3::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position
    pub position: Vec3,
    /// Euler angles in degrees, applied in Y-X-Z order
    pub rotation: Vec3,
    /// Per-axis scale factor
    pub scale: Vec3,
}

impl Transform {
    /// Create a transform at the given position with no rotation and unit scale
    pub fn from_position(position: Vec3) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }

    /// Compose the local-to-world model matrix
    ///
    /// Applies translation, then the Y-X-Z Euler rotation, then scale,
    /// matching the column-major convention renderers expect.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Rigid body state for the physics step
///
/// Carries the integrated quantities (velocity, angular velocity), the
/// per-step force and torque accumulators, and the material/response
/// parameters. The mass is paired with a cached inverse so the hot loop
/// never divides; the pair is kept consistent through [`set_mass`].
///
/// Immovable bodies are expressed through the inverse mass: any mass
/// that is not a positive finite number maps to an inverse mass of 0,
/// and impulses scale by the inverse, so such bodies simply never move.
/// This is a convention, not an error.
///
/// [`set_mass`]: Rigidbody::set_mass
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::components::Rigidbody;
///
/// let mut body = Rigidbody::new(2.0);
/// assert_eq!(body.inverse_mass(), 0.5);
///
/// body.set_mass(0.0);
/// assert!(body.is_immovable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rigidbody {
    mass: f32,
    inverse_mass: f32,
    /// Linear velocity in units per second
    pub velocity: Vec3,
    /// Force accumulator, cleared at the end of every force phase
    pub force: Vec3,
    /// Angular velocity in degrees per second (Euler-rate approximation)
    pub angular_velocity: Vec3,
    /// Torque accumulator, cleared alongside the force accumulator
    pub torque: Vec3,
    /// Bounciness in `[0, 1]`: 0 sticks, 1 reflects at full speed
    pub restitution: f32,
    /// Friction coefficient while at rest against a surface
    pub static_friction: f32,
    /// Friction coefficient while sliding; damps horizontal velocity on ground contact
    pub dynamic_friction: f32,
    /// Per-step multiplicative velocity damping in `[0, 1)`
    pub linear_damping: f32,
    /// Per-step multiplicative angular velocity damping in `[0, 1)`
    pub angular_damping: f32,
    /// Whether the gravity force is applied each step
    pub use_gravity: bool,
    /// Kinematic bodies ignore forces but still move by their velocity
    pub is_kinematic: bool,
    /// Static bodies are never displaced or velocity-modified
    pub is_static: bool,
}

impl Rigidbody {
    /// Create a rigid body with the given mass and default material values
    pub fn new(mass: f32) -> Self {
        let mut body = Rigidbody::default();
        body.set_mass(mass);
        body
    }

    /// Get the mass
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Get the cached inverse mass (0 for immovable bodies)
    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// Set the mass, keeping the cached inverse consistent
    ///
    /// A mass that is not positive and finite selects the immovable
    /// convention: the inverse mass becomes 0 and impulses stop
    /// affecting the body.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.inverse_mass = if mass > 0.0 && mass.is_finite() {
            1.0 / mass
        } else {
            0.0
        };
    }

    /// Check whether impulses can move this body
    pub fn is_immovable(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Accumulate a force for the next physics step
    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Accumulate a torque for the next physics step
    pub fn add_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    /// Zero the force and torque accumulators
    pub fn clear_accumulators(&mut self) {
        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;
    }
}

impl Default for Rigidbody {
    fn default() -> Self {
        Rigidbody {
            mass: 1.0,
            inverse_mass: 1.0,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            torque: Vec3::ZERO,
            restitution: 0.5,
            static_friction: 0.5,
            dynamic_friction: 0.3,
            linear_damping: 0.01,
            angular_damping: 0.05,
            use_gravity: true,
            is_kinematic: false,
            is_static: false,
        }
    }
}

/// Shape of a collision volume
///
/// Whatever the declared shape, the collision pass only ever tests
/// world-space AABBs; the shape determines the local half-extents that
/// AABB is built from. `Mesh` stands in for arbitrary geometry and
/// collides as its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Axis-aligned box with the given half-extents
    Box {
        /// Half-extents along each local axis
        half_extents: Vec3,
    },
    /// Sphere, bounded by a cube of side `2 * radius`
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Upright capsule, bounded by a box of its radius and full height
    Capsule {
        /// Capsule radius
        radius: f32,
        /// Total height including the caps
        height: f32,
    },
    /// Arbitrary mesh approximated by its bounding half-extents
    Mesh {
        /// Half-extents of the mesh's local bounding box
        half_extents: Vec3,
    },
}

impl Default for ColliderShape {
    fn default() -> Self {
        ColliderShape::Box {
            half_extents: Vec3::splat(0.5),
        }
    }
}

/// Collision volume attached to an entity
///
/// Combines a [`ColliderShape`] with a local center offset and the
/// trigger flag. Triggers keep their volume for queries (raycasts still
/// hit them) but are skipped by collision resolution.
///
/// # Examples
///
/// ```
/// use sandbox_engine::ecs::components::Collider;
///
/// let collider = Collider::sphere(0.5);
/// assert!(!collider.is_trigger);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// The collision shape
    pub shape: ColliderShape,
    /// Offset of the volume's center from the entity's position
    pub center: Vec3,
    /// Triggers are detected but never physically resolved
    pub is_trigger: bool,
}

impl Collider {
    /// Create a collider with the given shape, centered on the entity
    pub fn new(shape: ColliderShape) -> Self {
        Collider {
            shape,
            center: Vec3::ZERO,
            is_trigger: false,
        }
    }

    /// Create a box collider with the given half-extents
    pub fn cuboid(half_extents: Vec3) -> Self {
        Collider::new(ColliderShape::Box { half_extents })
    }

    /// Create a sphere collider with the given radius
    pub fn sphere(radius: f32) -> Self {
        Collider::new(ColliderShape::Sphere { radius })
    }

    /// Create an upright capsule collider
    pub fn capsule(radius: f32, height: f32) -> Self {
        Collider::new(ColliderShape::Capsule { radius, height })
    }

    /// Half-extents of the local-space bounding box for this shape
    pub fn local_half_extents(&self) -> Vec3 {
        match self.shape {
            ColliderShape::Box { half_extents } => half_extents,
            ColliderShape::Sphere { radius } => Vec3::splat(radius),
            ColliderShape::Capsule { radius, height } => {
                Vec3::new(radius, height * 0.5, radius)
            }
            ColliderShape::Mesh { half_extents } => half_extents,
        }
    }

    /// World-space AABB of this collider under the given transform
    ///
    /// The center offset shifts with the entity but is not scaled; the
    /// half-extents scale per-axis. Rotation is deliberately ignored,
    /// the AABB is the engine's sole collision primitive.
    pub fn world_aabb(&self, transform: &Transform) -> Aabb {
        let center = transform.position + self.center;
        let half_extents = self.local_half_extents() * transform.scale;
        Aabb::from_center_half_extents(center, half_extents)
    }
}

impl Default for Collider {
    fn default() -> Self {
        Collider::new(ColliderShape::default())
    }
}
