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
//! Rigid body and its numerical integrator
//!
//! # Physics background
//!
//! A body accumulates forces and impulses between ticks; [`Body::tick`]
//! converts them into a velocity update,
//!
//! **v_new = v + (dt / m) F + J / m**
//!
//! and then advances position with a Simpson's-rule blend of velocity
//! samples rather than plain Euler. With `v_prev` the velocity saved before
//! the previous tick's update, the displacement for this step uses
//!
//! **v̄ = (v_prev + 4 v + v_new) / 6**
//!
//! which approximates the integral of velocity over the step with higher
//! accuracy than the trapezoid rule while costing only one extra stored
//! sample per body. The body's observable velocity after the step is
//! `v_new`; the blended value exists only for the position update.
//!
//! On the very first tick there is no history, so `v_prev` is zero — a
//! deliberate first-frame-only approximation.
//!
//! # Immovable bodies
//!
//! A mass of `f64::INFINITY` marks a body immovable: `dt / m` and `J / m`
//! are both zero, so forces and impulses accumulate but never move it. Such
//! bodies are repositioned only explicitly via [`Body::set_centroid`].

use crate::geometry::{Polygon, Rgb};
use crate::math::Vec2;
use std::any::Any;

/// A rigid body: polygon, mass, accumulators, and an opaque tag
///
/// Bodies are created in the active state and transition exactly once to
/// removed via [`remove`](Self::remove); the owning scene frees removed
/// bodies during its next tick.
pub struct Body {
    polygon: Polygon,
    mass: f64,
    force: Vec2,
    impulse: Vec2,
    prev_vel: Vec2,
    removed: bool,
    info: Option<Box<dyn Any + Send + Sync>>,
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("centroid", &self.centroid())
            .field("velocity", &self.velocity())
            .field("mass", &self.mass)
            .field("removed", &self.removed)
            .finish_non_exhaustive()
    }
}

impl Body {
    /// Create a body with no tag
    ///
    /// # Panics
    ///
    /// Panics unless `mass > 0`. `f64::INFINITY` is allowed and marks the
    /// body immovable.
    pub fn new(polygon: Polygon, mass: f64) -> Self {
        assert!(
            mass > 0.0,
            "body mass must be positive (INFINITY marks an immovable body), got {mass}"
        );
        Body {
            polygon,
            mass,
            force: Vec2::ZERO,
            impulse: Vec2::ZERO,
            prev_vel: Vec2::ZERO,
            removed: false,
            info: None,
        }
    }

    /// Create a body carrying an opaque tag
    ///
    /// The engine never inspects the tag; game layers use it to identify
    /// body kinds and downcast via [`info`](Self::info). It is dropped with
    /// the body.
    ///
    /// # Panics
    ///
    /// Panics unless `mass > 0`.
    pub fn with_info(
        polygon: Polygon,
        mass: f64,
        info: Box<dyn Any + Send + Sync>,
    ) -> Self {
        let mut body = Body::new(polygon, mass);
        body.info = Some(info);
        body
    }

    /// The body's polygon
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Mutable access to the body's polygon
    ///
    /// Used for presentation-driven adjustments such as spinning an aiming
    /// marker via the rotation speed.
    pub fn polygon_mut(&mut self) -> &mut Polygon {
        &mut self.polygon
    }

    /// A copy of the current vertex positions
    ///
    /// Callers that need a snapshot across ticks must copy, since the scene
    /// may mutate or free the body during a tick.
    pub fn shape(&self) -> Vec<Vec2> {
        self.polygon.vertices().to_vec()
    }

    /// Current centroid
    pub fn centroid(&self) -> Vec2 {
        self.polygon.center()
    }

    /// Move the body so its centroid lands on `centroid`
    pub fn set_centroid(&mut self, centroid: Vec2) {
        self.polygon.set_center(centroid);
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.polygon.velocity()
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.polygon.set_velocity(velocity);
    }

    /// Accumulated rotation angle in `[0, 2π)`
    pub fn rotation(&self) -> f64 {
        self.polygon.rotation()
    }

    /// Rotate the body to an absolute angle about its centroid
    pub fn set_rotation(&mut self, angle: f64) {
        self.polygon.set_rotation(angle);
    }

    /// Display color
    pub fn color(&self) -> Rgb {
        self.polygon.color()
    }

    /// Set the display color
    pub fn set_color(&mut self, color: Rgb) {
        self.polygon.set_color(color);
    }

    /// The body's mass (`f64::INFINITY` for immovable bodies)
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether the body has infinite mass
    pub fn is_immovable(&self) -> bool {
        self.mass.is_infinite()
    }

    /// The opaque tag, if any
    pub fn info(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.info.as_deref()
    }

    /// Mutable access to the opaque tag, if any
    pub fn info_mut(&mut self) -> Option<&mut (dyn Any + Send + Sync)> {
        self.info.as_deref_mut()
    }

    /// Kinetic energy `½ m v²`
    ///
    /// Immovable bodies report zero regardless of any velocity set on them.
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_immovable() {
            return 0.0;
        }
        0.5 * self.mass * self.velocity().length_squared()
    }

    /// Add to the force accumulator
    ///
    /// Accumulators are cleared only by [`tick`](Self::tick).
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Add to the impulse accumulator
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }

    /// Clear both accumulators without integrating
    pub fn reset(&mut self) {
        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
    }

    /// Mark the body for removal (idempotent)
    ///
    /// Removal is a logical mark; the owning scene frees the body, and every
    /// force creator tracking it, during its next tick.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    /// Whether the body has been marked removed
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Integrate one step of length `dt`
    ///
    /// Applies the accumulated force and impulse to the velocity, moves the
    /// polygon by the Simpson-blended velocity (see the module docs), leaves
    /// the post-update velocity observable, clears both accumulators, and
    /// records the pre-update velocity as the next tick's history sample.
    pub fn tick(&mut self, dt: f64) {
        let curr_vel = self.velocity();
        let force_contribution = self.force * (dt / self.mass);
        let impulse_contribution = self.impulse * (1.0 / self.mass);
        let new_vel = curr_vel + force_contribution + impulse_contribution;

        let blended = (self.prev_vel + curr_vel * 4.0 + new_vel) * (1.0 / 6.0);

        self.polygon.set_velocity(blended);
        self.polygon.step(dt);
        self.polygon.set_velocity(new_vel);

        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
        self.prev_vel = curr_vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn square_body(mass: f64) -> Body {
        let square = Polygon::new(
            vec![
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ],
            Rgb::new(1.0, 1.0, 1.0),
        );
        Body::new(square, mass)
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn test_zero_mass_panics() {
        square_body(0.0);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn test_negative_mass_panics() {
        square_body(-2.0);
    }

    #[test]
    fn test_infinite_mass_allowed() {
        let body = square_body(f64::INFINITY);
        assert!(body.is_immovable());
    }

    #[test]
    fn test_first_tick_velocity_from_force() {
        let mut body = square_body(2.0);
        body.add_force(Vec2::new(10.0, 0.0));
        body.tick(0.5);
        // v = F dt / m
        let v = body.velocity();
        assert!((v.x - 2.5).abs() < EPSILON);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_first_tick_displacement_is_simpson_blend() {
        let mut body = square_body(2.0);
        body.add_force(Vec2::new(10.0, 0.0));
        body.tick(0.5);
        // prev = curr = 0, so x = (F dt / 6 m) dt = F dt^2 / (6 m)
        let c = body.centroid();
        assert!((c.x - 10.0 * 0.25 / 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_impulse_changes_velocity_by_j_over_m() {
        let mut body = square_body(4.0);
        body.add_impulse(Vec2::new(8.0, -4.0));
        body.tick(0.1);
        let v = body.velocity();
        assert!((v.x - 2.0).abs() < EPSILON);
        assert!((v.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_accumulators_clear_after_tick() {
        let mut body = square_body(1.0);
        body.add_force(Vec2::new(3.0, 0.0));
        body.tick(1.0);
        let v = body.velocity();
        body.tick(1.0);
        // no new force, velocity unchanged
        assert!((body.velocity() - v).length() < EPSILON);
    }

    #[test]
    fn test_reset_discards_accumulated_force() {
        let mut body = square_body(1.0);
        body.add_force(Vec2::new(100.0, 100.0));
        body.add_impulse(Vec2::new(-5.0, 0.0));
        body.reset();
        body.tick(1.0);
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_immovable_body_ignores_force_and_impulse() {
        let mut body = square_body(f64::INFINITY);
        let start = body.centroid();
        body.add_force(Vec2::new(1e6, 0.0));
        body.add_impulse(Vec2::new(1e6, 0.0));
        body.tick(1.0);
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert_eq!(body.centroid(), start);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut body = square_body(1.0);
        assert!(!body.is_removed());
        body.remove();
        body.remove();
        assert!(body.is_removed());
    }

    #[test]
    fn test_info_downcast() {
        #[derive(Debug, PartialEq)]
        enum Tag {
            Ball,
        }
        let square = Polygon::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
            ],
            Rgb::new(0.0, 0.0, 0.0),
        );
        let body = Body::with_info(square, 1.0, Box::new(Tag::Ball));
        let tag = body.info().and_then(|i| i.downcast_ref::<Tag>());
        assert_eq!(tag, Some(&Tag::Ball));
    }

    #[test]
    fn test_kinetic_energy() {
        let mut body = square_body(2.0);
        body.set_velocity(Vec2::new(3.0, 4.0));
        assert!((body.kinetic_energy() - 25.0).abs() < EPSILON);

        let mut wall = square_body(f64::INFINITY);
        wall.set_velocity(Vec2::new(1.0, 0.0));
        assert_eq!(wall.kinetic_energy(), 0.0);
    }
}
