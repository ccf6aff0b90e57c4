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
//! Newtonian gravity between two bodies
//!
//! # Physics background
//!
//! Newton's law of universal gravitation: two bodies attract along the line
//! between their centroids with magnitude
//!
//! **F = G m₁ m₂ / r²**
//!
//! The force diverges as r → 0, so rather than softening the denominator
//! this creator simply applies no force once the centroids are closer than
//! [`MIN_GRAVITY_DISTANCE`]. That matches the needs of a game scene, where
//! two overlapping bodies should not slingshot each other to enormous
//! velocities.

use super::{ForceContext, ForceCreator};
use crate::arena::BodyHandle;
use crate::scene::Scene;

/// Centroid distance below which gravity is not applied
///
/// Guards the 1/r² singularity; see the module docs.
pub const MIN_GRAVITY_DISTANCE: f64 = 5.0;

/// Inverse-square attraction between two bodies
pub struct NewtonianGravity {
    g: f64,
    body1: BodyHandle,
    body2: BodyHandle,
}

impl NewtonianGravity {
    /// Create a gravity creator with gravitational constant `g`
    pub fn new(g: f64, body1: BodyHandle, body2: BodyHandle) -> Self {
        NewtonianGravity { g, body1, body2 }
    }
}

impl ForceCreator for NewtonianGravity {
    fn apply(&mut self, ctx: &mut ForceContext<'_>) {
        let Some((body1, body2)) = ctx.body_pair_mut(self.body1, self.body2) else {
            return;
        };

        let displacement = body1.centroid() - body2.centroid();
        let distance = displacement.length();
        if distance <= MIN_GRAVITY_DISTANCE {
            return;
        }

        let unit = displacement * (1.0 / distance);
        let magnitude = self.g * body1.mass() * body2.mass() / displacement.length_squared();
        let force = unit * magnitude;

        // force points from body2 toward body1; attraction pulls body2 along
        // it and body1 against it
        body2.add_force(force);
        body1.add_force(-force);
    }

    fn name(&self) -> &str {
        "newtonian_gravity"
    }
}

/// Register gravity between `body1` and `body2` with constant `g`
pub fn create_newtonian_gravity(scene: &mut Scene, g: f64, body1: BodyHandle, body2: BodyHandle) {
    scene.add_bodies_force_creator(
        Box::new(NewtonianGravity::new(g, body1, body2)),
        vec![body1, body2],
    );
}
