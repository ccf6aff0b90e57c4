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
//! Linear drag on a single body

use super::{ForceContext, ForceCreator};
use crate::arena::BodyHandle;
use crate::scene::Scene;

/// Velocity-proportional drag: `F = -γ v`
///
/// The workhorse that brings a rolling ball to rest on the green.
pub struct Drag {
    gamma: f64,
    body: BodyHandle,
}

impl Drag {
    /// Create a drag creator with coefficient `gamma`
    pub fn new(gamma: f64, body: BodyHandle) -> Self {
        Drag { gamma, body }
    }
}

impl ForceCreator for Drag {
    fn apply(&mut self, ctx: &mut ForceContext<'_>) {
        let Some(body) = ctx.body_mut(self.body) else {
            return;
        };
        let force = body.velocity() * -self.gamma;
        body.add_force(force);
    }

    fn name(&self) -> &str {
        "drag"
    }
}

/// Register drag with coefficient `gamma` on `body`
pub fn create_drag(scene: &mut Scene, gamma: f64, body: BodyHandle) {
    scene.add_bodies_force_creator(Box::new(Drag::new(gamma, body)), vec![body]);
}
