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
//! Convex polygon collision detection via the Separating Axis Theorem
//!
//! # Background
//!
//! Two convex shapes are disjoint if and only if some axis exists onto which
//! their projections do not overlap, and for polygons it suffices to test
//! the normals of every edge of both shapes. For each candidate axis we
//! project all vertices of both polygons to `[min, max]` intervals and
//! compute
//!
//! **overlap = min(maxA, maxB) − max(minA, minB)**
//!
//! A negative overlap on any axis proves separation and short-circuits the
//! test. If every axis overlaps, the shapes collide and the axis with the
//! smallest overlap is the minimum-translation direction, which collision
//! handlers use as the contact normal.
//!
//! This is O(edges × vertices) per pair with no broad phase; scenes here
//! hold tens of bodies, not thousands, so every registered pair is simply
//! tested every tick.

use crate::body::Body;
use crate::math::Vec2;

/// Result of a positive collision test
///
/// `axis` is the unit-length separating axis of minimum overlap. Its
/// direction convention follows from the edge winding of whichever polygon
/// produced it; impulse handlers use it consistently for the relative sign
/// of the two bodies' impulses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit minimum-overlap axis (the contact normal)
    pub axis: Vec2,
    /// Penetration depth along `axis`
    pub overlap: f64,
}

/// Test two bodies' polygons for intersection
///
/// Returns `None` if a separating axis exists, otherwise the minimum-overlap
/// contact. Shapes that exactly touch (zero overlap) count as colliding.
/// The `collided` outcome is symmetric in argument order.
pub fn find_collision(body1: &Body, body2: &Body) -> Option<Contact> {
    find_polygon_collision(body1.polygon().vertices(), body2.polygon().vertices())
}

/// Test two vertex sets for intersection
///
/// Both must describe convex polygons with counterclockwise winding.
pub fn find_polygon_collision(shape1: &[Vec2], shape2: &[Vec2]) -> Option<Contact> {
    let first = project_onto_edge_normals(shape1, shape2)?;
    let second = project_onto_edge_normals(shape2, shape1)?;
    if first.overlap < second.overlap {
        Some(first)
    } else {
        Some(second)
    }
}

/// Run the one-sided SAT pass using `axes_from`'s edge normals
///
/// Returns `None` as soon as any axis separates the shapes, otherwise the
/// minimum-overlap contact among this edge set.
fn project_onto_edge_normals(axes_from: &[Vec2], other: &[Vec2]) -> Option<Contact> {
    let mut best: Option<Contact> = None;

    for (i, vertex) in axes_from.iter().enumerate() {
        let next = axes_from[(i + 1) % axes_from.len()];
        let edge = *vertex - next;
        let axis = edge.perpendicular().normalized();

        let (min1, max1) = project(axes_from, axis);
        let (min2, max2) = project(other, axis);

        let overlap = max1.min(max2) - min1.max(min2);
        if overlap < 0.0 {
            return None;
        }
        if best.map_or(true, |b| overlap < b.overlap) {
            best = Some(Contact { axis, overlap });
        }
    }

    best
}

/// Project every vertex onto `axis` and return the `[min, max]` interval
fn project(shape: &[Vec2], axis: Vec2) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for vertex in shape {
        let p = vertex.dot(axis);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}
