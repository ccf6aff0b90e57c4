// Copyright 2025 John Brosnihan
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
//! Convex polygon with cached centroid and rotation state
//!
//! # Geometry background
//!
//! Signed area comes from the shoelace formula,
//!
//! **A = ½ Σ (vᵢ × vᵢ₊₁)**
//!
//! summing the 2D cross product over consecutive vertex pairs (wrapping at
//! the end). The centroid of the polygon is
//!
//! **C = (1 / 6A) Σ (vᵢ + vᵢ₊₁)(vᵢ × vᵢ₊₁)**
//!
//! per component. Both formulas assume a consistent winding order; the engine
//! expects counterclockwise vertices, which makes the signed area positive.
//! Feeding clockwise vertices flips both signs and is undefined behavior as
//! far as callers of the physics step are concerned.

use super::color::Rgb;
use crate::math::Vec2;
use std::f64::consts::TAU;

/// An ordered set of convex polygon vertices plus motion state
///
/// The polygon caches its centroid and keeps a running total rotation angle
/// normalized into `[0, 2π)`. Translation shifts the cached center directly
/// (the centroid of a translated polygon is the translated centroid);
/// rotation recomputes it from the rotated vertices since the pivot need not
/// be the center.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    center: Vec2,
    total_rotation: f64,
    rotation_speed: f64,
    velocity: Vec2,
    color: Rgb,
}

impl Polygon {
    /// Create a polygon at rest
    ///
    /// Vertices must be in counterclockwise order and describe a convex
    /// shape.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 vertices are supplied.
    pub fn new(vertices: Vec<Vec2>, color: Rgb) -> Self {
        Self::with_motion(vertices, Vec2::ZERO, 0.0, color)
    }

    /// Create a polygon with an initial velocity and rotation speed
    ///
    /// Rotation speed is radians per unit time about the polygon's own
    /// center, applied by [`step`](Self::step).
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 vertices are supplied.
    pub fn with_motion(
        vertices: Vec<Vec2>,
        velocity: Vec2,
        rotation_speed: f64,
        color: Rgb,
    ) -> Self {
        assert!(
            vertices.len() >= 3,
            "a polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        let mut polygon = Polygon {
            vertices,
            center: Vec2::ZERO,
            total_rotation: 0.0,
            rotation_speed,
            velocity,
            color,
        };
        polygon.center = polygon.centroid();
        polygon
    }

    /// The polygon's vertices in counterclockwise order
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Signed area via the shoelace formula
    ///
    /// Positive for counterclockwise winding.
    pub fn area(&self) -> f64 {
        let mut area = 0.0;
        for (i, v) in self.vertices.iter().enumerate() {
            let next = self.vertices[(i + 1) % self.vertices.len()];
            area += v.cross(next);
        }
        area / 2.0
    }

    /// Centroid computed from the current vertex set
    ///
    /// This always recomputes; [`center`](Self::center) returns the cached
    /// value, which the translate/rotate operations keep equal to this.
    pub fn centroid(&self) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for (i, v) in self.vertices.iter().enumerate() {
            let next = self.vertices[(i + 1) % self.vertices.len()];
            sum += (*v + next) * v.cross(next);
        }
        sum * (1.0 / (6.0 * self.area()))
    }

    /// The cached centroid
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Translate the polygon so its centroid lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        let translation = center - self.center;
        self.translate(translation);
    }

    /// Shift every vertex (and the cached center) by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.center += delta;
    }

    /// Rotate the polygon by `angle` radians about `pivot`
    ///
    /// Accumulates `angle` into the total rotation, normalized into
    /// `[0, 2π)`, and recomputes the center from the rotated vertices.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        for v in &mut self.vertices {
            *v = (*v - pivot).rotate(angle) + pivot;
        }
        self.total_rotation = (self.total_rotation + angle).rem_euclid(TAU);
        self.center = self.centroid();
    }

    /// The accumulated rotation angle in `[0, 2π)`
    pub fn rotation(&self) -> f64 {
        self.total_rotation
    }

    /// Rotate the polygon to an absolute angle about its center
    ///
    /// Rotates by the difference to the current total, then stores `angle`
    /// exactly rather than the normalized accumulation, so repeated absolute
    /// sets do not drift.
    pub fn set_rotation(&mut self, angle: f64) {
        let center = self.center;
        self.rotate(angle - self.total_rotation, center);
        self.total_rotation = angle;
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Rotation speed in radians per unit time
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Set the rotation speed
    pub fn set_rotation_speed(&mut self, rotation_speed: f64) {
        self.rotation_speed = rotation_speed;
    }

    /// Display color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Set the display color
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Advance the polygon by `dt`: rotate by `rotation_speed * dt` about the
    /// center, then translate by `velocity * dt`
    pub fn step(&mut self, dt: f64) {
        let center = self.center;
        self.rotate(self.rotation_speed * dt, center);
        self.translate(self.velocity * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn unit_square_at(center: Vec2, side: f64) -> Polygon {
        let h = side / 2.0;
        Polygon::new(
            vec![
                Vec2::new(center.x - h, center.y - h),
                Vec2::new(center.x + h, center.y - h),
                Vec2::new(center.x + h, center.y + h),
                Vec2::new(center.x - h, center.y + h),
            ],
            Rgb::new(1.0, 1.0, 1.0),
        )
    }

    fn triangle() -> Polygon {
        Polygon::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(0.0, 3.0),
            ],
            Rgb::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_square_area() {
        let square = unit_square_at(Vec2::ZERO, 10.0);
        assert!((square.area() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_area_and_centroid() {
        let tri = triangle();
        assert!((tri.area() - 6.0).abs() < EPSILON);
        let c = tri.centroid();
        assert!((c.x - 4.0 / 3.0).abs() < EPSILON);
        assert!((c.y - 1.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_too_few_vertices_panics() {
        Polygon::new(
            vec![Vec2::ZERO, Vec2::new(1.0, 0.0)],
            Rgb::new(0.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_translate_shifts_centroid_by_delta() {
        let mut square = unit_square_at(Vec2::ZERO, 10.0);
        let before = square.centroid();
        let delta = Vec2::new(7.5, -3.25);
        square.translate(delta);
        let after = square.centroid();
        assert!((after.x - (before.x + delta.x)).abs() < EPSILON);
        assert!((after.y - (before.y + delta.y)).abs() < EPSILON);
        // cached center tracks the recomputed centroid
        assert!((square.center() - after).length() < EPSILON);
    }

    #[test]
    fn test_rotation_preserves_area() {
        let mut tri = triangle();
        let before = tri.area();
        tri.rotate(1.2345, Vec2::new(-5.0, 2.0));
        assert!((tri.area() - before).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_accumulates_and_normalizes() {
        let mut square = unit_square_at(Vec2::ZERO, 2.0);
        let center = square.center();
        square.rotate(1.5 * PI, center);
        square.rotate(PI, center);
        // 2.5π normalizes to 0.5π
        assert!((square.rotation() - 0.5 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_about_pivot_moves_center() {
        let mut square = unit_square_at(Vec2::new(2.0, 0.0), 2.0);
        square.rotate(PI, Vec2::ZERO);
        let c = square.center();
        assert!((c.x - -2.0).abs() < EPSILON);
        assert!((c.y - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_rotation_is_exact() {
        let mut square = unit_square_at(Vec2::ZERO, 2.0);
        square.rotate(0.7, square.center());
        square.set_rotation(3.0);
        assert_eq!(square.rotation(), 3.0);
        square.set_rotation(0.0);
        assert_eq!(square.rotation(), 0.0);
    }

    #[test]
    fn test_set_center() {
        let mut tri = triangle();
        tri.set_center(Vec2::new(10.0, 10.0));
        let c = tri.centroid();
        assert!((c.x - 10.0).abs() < EPSILON);
        assert!((c.y - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_step_translates_by_velocity() {
        let mut square = unit_square_at(Vec2::ZERO, 2.0);
        square.set_velocity(Vec2::new(3.0, -1.0));
        square.step(0.5);
        let c = square.center();
        assert!((c.x - 1.5).abs() < EPSILON);
        assert!((c.y - -0.5).abs() < EPSILON);
    }

    #[test]
    fn test_step_spins_at_rotation_speed() {
        let vertices = unit_square_at(Vec2::ZERO, 2.0).vertices().to_vec();
        let mut square =
            Polygon::with_motion(vertices, Vec2::ZERO, PI, Rgb::new(1.0, 0.0, 0.0));
        square.step(0.5);
        assert!((square.rotation() - PI / 2.0).abs() < EPSILON);
    }
}
