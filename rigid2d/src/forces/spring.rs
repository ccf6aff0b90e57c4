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
//! Hookean spring force between two bodies

use super::{ForceContext, ForceCreator};
use crate::arena::BodyHandle;
use crate::scene::Scene;

/// A zero-rest-length spring: `F = -k (c₁ - c₂)` between centroids
///
/// Applied with opposite sign to each body, so two finite-mass bodies
/// oscillate about their shared center of mass.
pub struct Spring {
    k: f64,
    body1: BodyHandle,
    body2: BodyHandle,
}

impl Spring {
    /// Create a spring with stiffness `k`
    pub fn new(k: f64, body1: BodyHandle, body2: BodyHandle) -> Self {
        Spring { k, body1, body2 }
    }
}

impl ForceCreator for Spring {
    fn apply(&mut self, ctx: &mut ForceContext<'_>) {
        let Some((body1, body2)) = ctx.body_pair_mut(self.body1, self.body2) else {
            return;
        };

        let displacement = body1.centroid() - body2.centroid();
        let force = displacement * -self.k;

        body1.add_force(force);
        body2.add_force(-force);
    }

    fn name(&self) -> &str {
        "spring"
    }
}

/// Register a spring of stiffness `k` between `body1` and `body2`
pub fn create_spring(scene: &mut Scene, k: f64, body1: BodyHandle, body2: BodyHandle) {
    scene.add_bodies_force_creator(Box::new(Spring::new(k, body1, body2)), vec![body1, body2]);
}
