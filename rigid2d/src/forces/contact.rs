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
//! Collision-driven force creators and their response handlers
//!
//! Two creators live here with different firing disciplines:
//!
//! - [`ContactForce`] is edge-triggered. It latches while two bodies
//!   overlap so its handler runs exactly once per contact, which is what an
//!   impulse exchange needs; re-applying a bounce impulse every tick while
//!   the shapes interpenetrate would pump energy into the pair.
//! - [`RampForce`] is level-triggered. A ramp is not a bounce but a slope:
//!   its handler re-applies a restoring impulse every tick the body stays on
//!   the ramp, while a separate latch emits the contact event only on entry.
//!
//! # Impulse background
//!
//! The one-dimensional collision of masses m₁, m₂ with approach velocities
//! u₁, u₂ along the contact normal and restitution e exchanges the impulse
//!
//! **J = m_r (1 + e) (u₂ − u₁)**,  **m_r = m₁ m₂ / (m₁ + m₂)**
//!
//! where the reduced mass m_r degenerates to the finite mass when the other
//! body is immovable. e = 0 is perfectly inelastic, e = 1 elastic, e > 1
//! energy-gaining (the bouncy obstacle).

use super::{CollisionHandler, ContactEvent, ForceContext, ForceCreator, SurfaceKind};
use crate::arena::BodyHandle;
use crate::body::Body;
use crate::collision::find_collision;
use crate::math::Vec2;
use crate::scene::Scene;

/// Edge-triggered collision response between two bodies
///
/// Runs SAT every tick; on the transition into overlap, invokes its handler
/// with the contact normal and coefficient and emits one [`ContactEvent`].
/// The latch resets on the transition out of overlap.
pub struct ContactForce {
    body1: BodyHandle,
    body2: BodyHandle,
    handler: CollisionHandler,
    force_const: f64,
    surface: SurfaceKind,
    collided: bool,
}

impl ContactForce {
    /// Create a latched collision creator
    pub fn new(
        body1: BodyHandle,
        body2: BodyHandle,
        handler: CollisionHandler,
        surface: SurfaceKind,
        force_const: f64,
    ) -> Self {
        ContactForce {
            body1,
            body2,
            handler,
            force_const,
            surface,
            collided: false,
        }
    }
}

impl ForceCreator for ContactForce {
    fn apply(&mut self, ctx: &mut ForceContext<'_>) {
        let Some((body1, body2)) = ctx.body_pair_mut(self.body1, self.body2) else {
            return;
        };

        match find_collision(body1, body2) {
            Some(contact) => {
                if !self.collided {
                    (self.handler)(body1, body2, contact.axis, self.force_const);
                    self.collided = true;
                    ctx.emit(ContactEvent {
                        bodies: (self.body1, self.body2),
                        axis: contact.axis,
                        surface: self.surface,
                    });
                }
            }
            None => self.collided = false,
        }
    }

    fn name(&self) -> &str {
        "contact"
    }
}

/// Geometry of a ramp interaction
///
/// `height` is the ramp's vertical extent; `ball_radius` sizes the moving
/// body. Both normalize the penetration depth into an impulse fraction.
#[derive(Debug, Clone, Copy)]
pub struct RampProfile {
    /// Vertical extent of the ramp surface
    pub height: f64,
    /// Radius of the body riding the ramp
    pub ball_radius: f64,
}

/// Level-triggered ramp response between a body and an immovable ramp
///
/// Invokes its handler every tick the bodies overlap; emits a
/// [`SurfaceKind::Ramp`] event once per overlap entry via an independent
/// latch.
pub struct RampForce {
    body1: BodyHandle,
    body2: BodyHandle,
    handler: CollisionHandler,
    slope: f64,
    collided: bool,
}

impl RampForce {
    /// Create a ramp creator with the given slope constant
    pub fn new(body1: BodyHandle, body2: BodyHandle, handler: CollisionHandler, slope: f64) -> Self {
        RampForce {
            body1,
            body2,
            handler,
            slope,
            collided: false,
        }
    }
}

impl ForceCreator for RampForce {
    fn apply(&mut self, ctx: &mut ForceContext<'_>) {
        let Some((body1, body2)) = ctx.body_pair_mut(self.body1, self.body2) else {
            return;
        };

        match find_collision(body1, body2) {
            Some(contact) => {
                // restoring impulse fires every overlapping tick
                (self.handler)(body1, body2, contact.axis, self.slope);
                if !self.collided {
                    self.collided = true;
                    ctx.emit(ContactEvent {
                        bodies: (self.body1, self.body2),
                        axis: contact.axis,
                        surface: SurfaceKind::Ramp,
                    });
                }
            }
            None => self.collided = false,
        }
    }

    fn name(&self) -> &str {
        "ramp"
    }
}

/// Impulse-based collision response along the contact normal
///
/// See the module docs for the formula. Usable directly as a
/// [`CollisionHandler`] when boxed.
pub fn physics_collision_handler(body1: &mut Body, body2: &mut Body, axis: Vec2, elasticity: f64) {
    let m1 = body1.mass();
    let m2 = body2.mass();
    let reduced_mass = if m1.is_infinite() {
        m2
    } else if m2.is_infinite() {
        m1
    } else {
        m1 * m2 / (m1 + m2)
    };

    let u1 = body1.velocity().dot(axis);
    let u2 = body2.velocity().dot(axis);

    let impulse = axis * (reduced_mass * (1.0 + elasticity) * (u2 - u1));
    body1.add_impulse(impulse);
    body2.add_impulse(-impulse);
}

/// Build a ramp response handler for the given geometry
///
/// The handler treats the immovable body as the ramp and applies a vertical
/// impulse proportional to how far the moving body has sunk past the ramp's
/// half-height, scaled by `slope / (height + ball_radius)`. A positive slope
/// constant pushes the body up, a negative one pulls it down.
pub fn ramp_collision_handler(profile: RampProfile) -> CollisionHandler {
    Box::new(move |body1, body2, _axis, slope| {
        let (ramp_y, ball_y) = if body1.is_immovable() {
            (body1.centroid().y, body2.centroid().y)
        } else {
            (body2.centroid().y, body1.centroid().y)
        };

        let half_height = profile.height / 2.0;
        let penetration = if slope > 0.0 {
            (ramp_y - ball_y + half_height).max(0.0)
        } else {
            (ball_y - ramp_y + half_height).max(0.0)
        };

        let impulse =
            Vec2::UP * (penetration / (profile.height + profile.ball_radius) * slope);
        body1.add_impulse(impulse);
        body2.add_impulse(-impulse);
    })
}

/// Register a latched collision with a custom handler
///
/// `surface` classifies the contact for event consumers; `force_const` is
/// passed through to the handler on every invocation.
pub fn create_collision(
    scene: &mut Scene,
    body1: BodyHandle,
    body2: BodyHandle,
    handler: CollisionHandler,
    surface: SurfaceKind,
    force_const: f64,
) {
    scene.add_bodies_force_creator(
        Box::new(ContactForce::new(body1, body2, handler, surface, force_const)),
        vec![body1, body2],
    );
}

/// Register an impulse-exchange collision with restitution `elasticity`
pub fn create_physics_collision(
    scene: &mut Scene,
    body1: BodyHandle,
    body2: BodyHandle,
    elasticity: f64,
    surface: SurfaceKind,
) {
    create_collision(
        scene,
        body1,
        body2,
        Box::new(physics_collision_handler),
        surface,
        elasticity,
    );
}

/// Register a collision that removes both bodies on first contact
///
/// No latch protection is needed beyond the standard one: removal is
/// terminal, so the pair can never collide again.
pub fn create_destructive_collision(scene: &mut Scene, body1: BodyHandle, body2: BodyHandle) {
    create_collision(
        scene,
        body1,
        body2,
        Box::new(|body1: &mut Body, body2: &mut Body, _axis, _k| {
            body1.remove();
            body2.remove();
        }),
        SurfaceKind::Wall,
        0.0,
    );
}

/// Register a collision that bounces off `body2` and then removes it
pub fn create_breakout_collision(
    scene: &mut Scene,
    body1: BodyHandle,
    body2: BodyHandle,
    elasticity: f64,
    surface: SurfaceKind,
) {
    create_collision(
        scene,
        body1,
        body2,
        Box::new(move |body1: &mut Body, body2: &mut Body, axis, k| {
            physics_collision_handler(body1, body2, axis, k);
            body2.remove();
        }),
        surface,
        elasticity,
    );
}

/// Register a level-triggered ramp interaction
///
/// `slope` sets direction and strength (positive pushes up); `profile`
/// supplies the ramp geometry the impulse is normalized against.
pub fn create_ramp_collision(
    scene: &mut Scene,
    body1: BodyHandle,
    body2: BodyHandle,
    slope: f64,
    profile: RampProfile,
) {
    scene.add_bodies_force_creator(
        Box::new(RampForce::new(
            body1,
            body2,
            ramp_collision_handler(profile),
            slope,
        )),
        vec![body1, body2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, Polygon, Rgb, Scene, Vec2};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn square_body(center: Vec2, side: f64, mass: f64) -> Body {
        let h = side / 2.0;
        let polygon = Polygon::new(
            vec![
                Vec2::new(center.x - h, center.y - h),
                Vec2::new(center.x + h, center.y - h),
                Vec2::new(center.x + h, center.y + h),
                Vec2::new(center.x - h, center.y + h),
            ],
            Rgb::new(1.0, 1.0, 1.0),
        );
        Body::new(polygon, mass)
    }

    #[test]
    fn test_latch_fires_once_while_overlapping() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::ZERO, 10.0, f64::INFINITY));
        let b = scene.add_body(square_body(Vec2::new(5.0, 0.0), 10.0, f64::INFINITY));

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        create_collision(
            &mut scene,
            a,
            b,
            Box::new(move |_b1: &mut Body, _b2: &mut Body, _axis, _k| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            SurfaceKind::Wall,
            0.0,
        );

        scene.tick(0.01);
        scene.tick(0.01);
        scene.tick(0.01);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_latch_resets_after_separation() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::ZERO, 10.0, f64::INFINITY));
        let b = scene.add_body(square_body(Vec2::new(5.0, 0.0), 10.0, f64::INFINITY));

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        create_collision(
            &mut scene,
            a,
            b,
            Box::new(move |_b1: &mut Body, _b2: &mut Body, _axis, _k| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            SurfaceKind::Wall,
            0.0,
        );

        scene.tick(0.01);
        // separate, then re-overlap
        scene.get_mut(b).unwrap().set_centroid(Vec2::new(50.0, 0.0));
        scene.tick(0.01);
        scene.get_mut(b).unwrap().set_centroid(Vec2::new(5.0, 0.0));
        scene.tick(0.01);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_contact_event_carries_surface_kind() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_body(Vec2::ZERO, 10.0, f64::INFINITY));
        let b = scene.add_body(square_body(Vec2::new(5.0, 0.0), 10.0, 1.0));
        create_physics_collision(&mut scene, a, b, 2.5, SurfaceKind::Bouncy);

        scene.tick(0.01);

        let events = scene.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].surface, SurfaceKind::Bouncy);
        assert_eq!(events[0].bodies, (a, b));
        assert!(scene.drain_events().is_empty());
    }

    #[test]
    fn test_physics_handler_elastic_swap_for_equal_masses() {
        // equal masses, elastic: velocities along the axis swap
        let mut b1 = square_body(Vec2::ZERO, 2.0, 1.0);
        let mut b2 = square_body(Vec2::new(1.5, 0.0), 2.0, 1.0);
        b1.set_velocity(Vec2::new(3.0, 0.0));
        b2.set_velocity(Vec2::new(-1.0, 0.0));

        physics_collision_handler(&mut b1, &mut b2, Vec2::new(1.0, 0.0), 1.0);
        b1.tick(1.0);
        b2.tick(1.0);

        assert!((b1.velocity().x - -1.0).abs() < 1e-9);
        assert!((b2.velocity().x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_handler_pushes_up_inside_half_height() {
        let profile = RampProfile {
            height: 30.0,
            ball_radius: 15.0,
        };
        let mut handler = ramp_collision_handler(profile);

        let mut ramp = square_body(Vec2::ZERO, 30.0, f64::INFINITY);
        let mut ball = square_body(Vec2::new(0.0, 5.0), 10.0, 1.0);
        handler(&mut ball, &mut ramp, Vec2::UP, 9.0);
        ball.tick(1.0);

        // ramp_y - ball_y + h/2 = 0 - 5 + 15 = 10; impulse = 10/45 * 9 = 2 up
        assert!((ball.velocity().y - 2.0).abs() < 1e-9);
        assert_eq!(ramp.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_ramp_handler_negative_slope_pulls_down() {
        let profile = RampProfile {
            height: 30.0,
            ball_radius: 15.0,
        };
        let mut handler = ramp_collision_handler(profile);

        let mut ramp = square_body(Vec2::ZERO, 30.0, f64::INFINITY);
        let mut ball = square_body(Vec2::new(0.0, -5.0), 10.0, 1.0);
        handler(&mut ball, &mut ramp, Vec2::UP, -9.0);
        ball.tick(1.0);

        // ball_y - ramp_y + h/2 = -5 + 15 = 10; impulse = 10/45 * -9 = -2
        assert!((ball.velocity().y - -2.0).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_refires_every_overlapping_tick() {
        let mut scene = Scene::new();
        let ramp = scene.add_body(square_body(Vec2::ZERO, 30.0, f64::INFINITY));
        let ball = scene.add_body(square_body(Vec2::new(0.0, 5.0), 10.0, 1.0));
        create_ramp_collision(
            &mut scene,
            ball,
            ramp,
            9.0,
            RampProfile {
                height: 30.0,
                ball_radius: 15.0,
            },
        );

        scene.tick(0.01);
        let after_one = scene.get(ball).unwrap().velocity().y;
        scene.tick(0.01);
        let after_two = scene.get(ball).unwrap().velocity().y;

        assert!(after_one > 0.0);
        assert!(after_two > after_one);

        // the event latch still fires only once
        assert_eq!(scene.drain_events().len(), 1);
    }
}
