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
//! Body storage with generational handles
//!
//! Bodies live in an arena of reusable slots. A [`BodyHandle`] pairs a slot
//! index with a generation counter; removing a body bumps the slot's
//! generation so every outstanding handle to it stops resolving instead of
//! silently aliasing whatever body reuses the slot. Force creators hold
//! handles, never references, which is what makes mid-simulation removal
//! safe.

use crate::body::Body;
use std::fmt;

/// Handle to a body stored in a [`BodyArena`]
///
/// Handles are cheap to copy and compare. A handle goes stale when its body
/// is removed; stale handles resolve to `None` forever, even if the slot is
/// later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    /// The slot index within the arena
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The generation the slot had when this handle was issued
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({}, gen: {})", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    body: Option<Body>,
}

/// Slotted storage for bodies with stable generational indices
#[derive(Debug, Default)]
pub struct BodyArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl BodyArena {
    /// Create an empty arena
    pub fn new() -> Self {
        BodyArena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a body and return its handle
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            BodyHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                body: Some(body),
            });
            BodyHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Look up a body, returning `None` for stale handles
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_ref()
    }

    /// Look up a body mutably, returning `None` for stale handles
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_mut()
    }

    /// Look up two distinct bodies mutably at once
    ///
    /// Two-body force creators need simultaneous mutable access; this splits
    /// the borrow safely. Returns `None` if either handle is stale.
    ///
    /// # Panics
    ///
    /// Panics if both handles name the same slot.
    pub fn get_pair_mut(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Option<(&mut Body, &mut Body)> {
        assert!(
            a.index != b.index,
            "cannot borrow the same body slot twice ({a})"
        );
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (lo, hi) = if a.index < b.index { (a, b) } else { (b, a) };
        let (left, right) = self.slots.split_at_mut(hi.index as usize);
        let lo_body = left[lo.index as usize].body.as_mut()?;
        let hi_body = right[0].body.as_mut()?;
        if a.index < b.index {
            Some((lo_body, hi_body))
        } else {
            Some((hi_body, lo_body))
        }
    }

    /// Remove a body, bumping the slot generation
    ///
    /// Returns the body, or `None` if the handle was already stale. The slot
    /// index is recycled for later insertions.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation || slot.body.is_none() {
            return None;
        }
        let body = slot.body.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        body
    }

    /// Whether the handle still resolves to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena holds no bodies
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over live bodies with their handles
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let body = slot.body.as_ref()?;
            Some((
                BodyHandle {
                    index: index as u32,
                    generation: slot.generation,
                },
                body,
            ))
        })
    }

    /// Iterate mutably over live bodies
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        self.slots.iter_mut().filter_map(|slot| slot.body.as_mut())
    }

    /// Parallel mutable iteration over live bodies
    #[cfg(feature = "parallel")]
    pub(crate) fn par_iter_mut(
        &mut self,
    ) -> impl rayon::iter::ParallelIterator<Item = &mut Body> + '_ {
        use rayon::prelude::*;
        self.slots
            .par_iter_mut()
            .filter_map(|slot| slot.body.as_mut())
    }
}
