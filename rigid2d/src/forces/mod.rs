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
//! Force creators: per-tick callbacks that drive the simulation
//!
//! A force creator is registered once with the scene, together with the
//! handles of the bodies it works on, and is invoked at the start of every
//! tick. Creators do all force and impulse accumulation; the scene then
//! integrates. Built-in creators cover inverse-square gravity, Hookean
//! springs, linear drag, latched collision response, and continuous ramp
//! response; anything else implements [`ForceCreator`] directly.
//!
//! Creators never call into the presentation layer. When something
//! audible/visible happens (a new contact), the creator emits a
//! [`ContactEvent`] through its [`ForceContext`]; the driving loop drains
//! events from the scene after each tick and decides what to do with them.

mod contact;
mod drag;
mod gravity;
mod spring;

pub use contact::{
    create_breakout_collision, create_collision, create_destructive_collision,
    create_physics_collision, create_ramp_collision, physics_collision_handler,
    ramp_collision_handler, ContactForce, RampForce, RampProfile,
};
pub use drag::{create_drag, Drag};
pub use gravity::{create_newtonian_gravity, NewtonianGravity, MIN_GRAVITY_DISTANCE};
pub use spring::{create_spring, Spring};

use crate::arena::{BodyArena, BodyHandle};
use crate::body::Body;
use crate::math::Vec2;

/// Which class of surface a contact happened against
///
/// Carried on [`ContactEvent`] so the presentation layer can pick a sound
/// (or particle effect, or nothing) per surface class. This is an explicit
/// classification chosen at registration time, not something inferred from
/// physical coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// An ordinary wall or obstacle
    Wall,
    /// A high-restitution bouncy obstacle
    Bouncy,
    /// A sloped ramp surface
    Ramp,
}

/// A contact the engine detected during a tick
///
/// Emitted once per transition into overlap, never repeatedly while two
/// bodies stay interpenetrating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    /// The two bodies involved, in registration order
    pub bodies: (BodyHandle, BodyHandle),
    /// The contact normal at the moment of first overlap
    pub axis: Vec2,
    /// The surface class the collision was registered with
    pub surface: SurfaceKind,
}

/// Scoped access handed to a force creator for one tick
///
/// Exposes body lookup by handle and event emission, nothing else; creators
/// cannot add or free bodies or re-enter the scene tick.
pub struct ForceContext<'a> {
    bodies: &'a mut BodyArena,
    events: &'a mut Vec<ContactEvent>,
}

impl<'a> ForceContext<'a> {
    pub(crate) fn new(bodies: &'a mut BodyArena, events: &'a mut Vec<ContactEvent>) -> Self {
        ForceContext { bodies, events }
    }

    /// Look up a body by handle
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Look up a body mutably by handle
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Look up two distinct bodies mutably at once
    ///
    /// # Panics
    ///
    /// Panics if both handles name the same body.
    pub fn body_pair_mut(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Option<(&mut Body, &mut Body)> {
        self.bodies.get_pair_mut(a, b)
    }

    /// Queue an event for the driving loop to drain after the tick
    pub fn emit(&mut self, event: ContactEvent) {
        self.events.push(event);
    }
}

/// A per-tick force/impulse callback
///
/// Implementations mutate their tracked bodies' accumulators (or mark them
/// removed) through the [`ForceContext`]. The scene guarantees every tracked
/// body is alive when `apply` runs; once any tracked body is removed, the
/// creator is dropped in the same tick.
pub trait ForceCreator: Send {
    /// Run one tick's worth of force/impulse accumulation
    fn apply(&mut self, ctx: &mut ForceContext<'_>);

    /// A descriptive name used in diagnostics
    fn name(&self) -> &str;
}

/// A collision response callback
///
/// Invoked with both bodies, the contact normal, and the scalar coefficient
/// the collision was registered with (restitution for impulse handlers,
/// slope for ramps).
pub type CollisionHandler = Box<dyn FnMut(&mut Body, &mut Body, Vec2, f64) + Send>;
