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
//! The scene: bodies, force creators, and the per-frame tick
//!
//! A [`Scene`] owns every body (in a generational arena) and every force
//! creator, and drives the simulation in two phases per tick:
//!
//! 1. **Accumulate** — every force creator runs and adds forces/impulses to
//!    its bodies. Collision handlers run here too and may mark bodies
//!    removed.
//! 2. **Integrate or remove** — bodies marked removed are freed, along with
//!    every force creator tracking any of them; every surviving body
//!    integrates one step.
//!
//! The ordering guarantees a body sees this tick's forces exactly once
//! before it is either integrated or freed, and that a removal requested by
//! a phase-1 collision handler takes effect in the same tick with no
//! one-frame lag.
//!
//! Force creator callbacks run sequentially and must not call back into
//! [`Scene::tick`]. Body integration is independent per body and runs in
//! parallel under the `parallel` feature; the observable behavior is
//! identical either way.

use crate::arena::{BodyArena, BodyHandle};
use crate::body::Body;
use crate::forces::{ContactEvent, ForceContext, ForceCreator};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

struct ForceEntry {
    creator: Box<dyn ForceCreator>,
    tracked: Vec<BodyHandle>,
}

/// Owner of all bodies and force creators
///
/// Bodies are reachable both by stable [`BodyHandle`] and by insertion-order
/// index (the index view is what rendering loops iterate).
pub struct Scene {
    bodies: BodyArena,
    order: Vec<BodyHandle>,
    forces: Vec<ForceEntry>,
    events: Vec<ContactEvent>,
    /// Warn on stderr when a force creator is skipped because one of its
    /// tracked bodies no longer resolves
    ///
    /// The removal cascade makes this unreachable through the public API;
    /// the warning exists to surface bookkeeping bugs instead of silently
    /// dropping physics.
    pub warn_on_dead_bodies: bool,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Scene {
            bodies: BodyArena::new(),
            order: Vec::new(),
            forces: Vec::new(),
            events: Vec::new(),
            warn_on_dead_bodies: true,
        }
    }

    /// Number of bodies currently in the scene
    pub fn body_count(&self) -> usize {
        self.order.len()
    }

    /// Number of registered force creators
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// The handle of the `index`-th body in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn handle(&self, index: usize) -> BodyHandle {
        assert!(
            index < self.order.len(),
            "body index {index} out of range for scene of {} bodies",
            self.order.len()
        );
        self.order[index]
    }

    /// The `index`-th body in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn body(&self, index: usize) -> &Body {
        let handle = self.handle(index);
        self.bodies
            .get(handle)
            .expect("ordered handles always resolve to live bodies")
    }

    /// The `index`-th body, mutably
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn body_mut(&mut self, index: usize) -> &mut Body {
        let handle = self.handle(index);
        self.bodies
            .get_mut(handle)
            .expect("ordered handles always resolve to live bodies")
    }

    /// Look up a body by handle
    ///
    /// Returns `None` once the body has been removed and freed.
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Look up a body mutably by handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Iterate over bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.order.iter().map(|&handle| {
            (
                handle,
                self.bodies
                    .get(handle)
                    .expect("ordered handles always resolve to live bodies"),
            )
        })
    }

    /// Add a body and return its stable handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = self.bodies.insert(body);
        self.order.push(handle);
        handle
    }

    /// Mark the `index`-th body for removal
    ///
    /// The body and every force creator tracking it are freed during the
    /// next [`tick`](Self::tick).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_body(&mut self, index: usize) {
        self.body_mut(index).remove();
    }

    /// Register a force creator tracking no bodies
    ///
    /// Such a creator runs every tick for the lifetime of the scene.
    pub fn add_force_creator(&mut self, creator: Box<dyn ForceCreator>) {
        self.add_bodies_force_creator(creator, Vec::new());
    }

    /// Register a force creator together with the bodies it works on
    ///
    /// `tracked` must contain every handle the creator holds; the scene
    /// removes the creator in the same tick any tracked body is removed,
    /// which is what lets creators assume their bodies are always alive.
    pub fn add_bodies_force_creator(
        &mut self,
        creator: Box<dyn ForceCreator>,
        tracked: Vec<BodyHandle>,
    ) {
        self.forces.push(ForceEntry { creator, tracked });
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the simulation by `dt`
    ///
    /// Runs every force creator, then frees removed bodies (cascading to
    /// their force creators), then integrates every surviving body. After
    /// this returns, no removed body remains and no force creator references
    /// one.
    pub fn tick(&mut self, dt: f64) {
        for entry in &mut self.forces {
            if entry.tracked.iter().any(|&h| !self.bodies.contains(h)) {
                if self.warn_on_dead_bodies {
                    eprintln!(
                        "Warning: skipping force creator '{}': tracked body no longer exists",
                        entry.creator.name()
                    );
                }
                continue;
            }
            let mut ctx = ForceContext::new(&mut self.bodies, &mut self.events);
            entry.creator.apply(&mut ctx);
        }

        let removed: Vec<BodyHandle> = self
            .order
            .iter()
            .copied()
            .filter(|&handle| {
                self.bodies
                    .get(handle)
                    .map_or(true, |body| body.is_removed())
            })
            .collect();

        if !removed.is_empty() {
            self.forces
                .retain(|entry| !entry.tracked.iter().any(|h| removed.contains(h)));
            self.order.retain(|h| !removed.contains(h));
            for handle in removed {
                self.bodies.remove(handle);
            }
        }

        #[cfg(feature = "parallel")]
        self.bodies.par_iter_mut().for_each(|body| body.tick(dt));

        #[cfg(not(feature = "parallel"))]
        for body in self.bodies.iter_mut() {
            body.tick(dt);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
