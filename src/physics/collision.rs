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
//! Collision primitives
//!
//! The engine collides exactly one kind of volume: the world-space
//! axis-aligned bounding box. Everything here is a value type; the
//! [`PhysicsWorld`](crate::PhysicsWorld) rebuilds boxes from live
//! components every step rather than caching them.

use crate::ecs::Entity;
use glam::Vec3;

/// Axis-aligned bounding box described by its min and max corners
///
/// Overlap tests use closed intervals: boxes that merely touch on a
/// face count as intersecting.
///
/// # Examples
///
/// ```
/// use sandbox_engine::physics::Aabb;
/// use glam::Vec3;
///
/// let a = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
/// let b = Aabb::from_center_size(Vec3::new(1.5, 0.0, 0.0), Vec3::splat(2.0));
/// assert!(a.intersects(&b));
/// assert!(b.intersects(&a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners
    ///
    /// The caller is responsible for `min <= max` on every axis; a box
    /// violating that is empty for every test below.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb { min, max }
    }

    /// Create a box from its center and full size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    /// Create a box from its center and half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size of the box
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check whether this box overlaps another on all three axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Check whether a point lies inside the box (boundary included)
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Grow the box just enough to contain the given point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

/// Half-line through space, used for picking and line-of-sight queries
///
/// The direction is normalized at construction, so the `t` values
/// returned by [`intersect_aabb`](Ray::intersect_aabb) are distances in
/// world units.
///
/// # Examples
///
/// ```
/// use sandbox_engine::physics::{Aabb, Ray};
/// use glam::Vec3;
///
/// let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
/// let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
/// assert_eq!(ray.intersect_aabb(&aabb), Some(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a direction
    ///
    /// The direction is normalized; a zero direction stays zero and
    /// such a ray misses everything meaningful.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the ray origin
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the normalized ray direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point on the ray at distance `t` from the origin
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray at which it enters the box, if it hits
    ///
    /// Classic three-slab test: per axis the entry/exit times are
    /// computed from the inverse direction (swapped when the direction
    /// is negative) and intersected into a running interval; the ray
    /// misses when that interval empties. The entry time starts at 0,
    /// so a ray whose origin is inside the box reports a hit at
    /// distance 0, and boxes entirely behind the origin are missed.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_near = 0.0_f32;
        let mut t_far = f32::MAX;

        for axis in 0..3 {
            let inv = 1.0 / self.direction[axis];
            let mut t0 = (aabb.min[axis] - self.origin[axis]) * inv;
            let mut t1 = (aabb.max[axis] - self.origin[axis]) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_far < t_near {
                return None;
            }
        }

        Some(t_near)
    }
}

/// Result of a [`PhysicsWorld::raycast`](crate::PhysicsWorld::raycast)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The entity whose collider was hit
    pub entity: Entity,
    /// World-space point where the ray enters the collider's AABB
    pub point: Vec3,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(4.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.size(), Vec3::splat(4.0));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        let b = Aabb::from_center_size(Vec3::new(1.5, 0.5, -0.5), Vec3::splat(2.0));
        let c = Aabb::from_center_size(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(2.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separation_on_any_axis_means_miss() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        // Overlapping on x and z, separated on y.
        let b = Aabb::new(Vec3::new(0.5, 2.0, 0.5), Vec3::new(1.5, 3.0, 1.5));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
        assert!(aabb.contains(Vec3::ONE));
        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::splat(2.0)));
        assert!(!aabb.contains(Vec3::new(1.0, 2.1, 1.0)));
    }

    #[test]
    fn test_expand() {
        let mut aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        aabb.expand(Vec3::new(-1.0, 0.5, 3.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(ray.direction(), Vec3::Y);
        assert_eq!(ray.point_at(2.5), Vec3::new(0.0, 2.5, 0.0));
    }

    #[test]
    fn test_ray_hits_box_ahead() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(ray.intersect_aabb(&aabb), Some(9.0));
    }

    #[test]
    fn test_ray_negative_direction_swaps_slabs() {
        let ray = Ray::new(Vec3::new(10.0, 0.5, 0.5), -Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(ray.intersect_aabb(&aabb), Some(9.0));
    }

    #[test]
    fn test_ray_misses_offset_box() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, -10.0), Vec3::Z);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(ray.intersect_aabb(&aabb), None);
    }

    #[test]
    fn test_ray_misses_box_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(ray.intersect_aabb(&aabb), None);
    }

    #[test]
    fn test_ray_inside_box_hits_at_zero() {
        let ray = Ray::new(Vec3::new(0.2, 0.3, 0.4), Vec3::X);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(ray.intersect_aabb(&aabb), Some(0.0));
    }

    #[test]
    fn test_ray_diagonal_hit() {
        let ray = Ray::new(Vec3::new(-4.0, -4.0, 0.5), Vec3::new(1.0, 1.0, 0.0));
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let distance = ray.intersect_aabb(&aabb).unwrap();
        // Entry at the corner (0, 0, 0.5), 4 * sqrt(2) away.
        assert!((distance - 4.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
