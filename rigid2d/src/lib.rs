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
//! # rigid2d
//!
//! A 2D rigid-body physics engine for small interactive scenes: convex
//! polygon bodies, Separating-Axis-Theorem collision detection, a
//! Simpson's-rule velocity-blend integrator, and an extensible force-creator
//! framework with safe mid-simulation removal.
//!
//! ## Features
//!
//! - **Polygon bodies**: convex polygons with mass, velocity, rotation, and
//!   force/impulse accumulators; infinite mass marks walls and obstacles
//! - **SAT collisions**: minimum-translation contact normals for convex pairs
//! - **Force creators**: gravity, springs, drag, latched impulse collisions,
//!   continuous ramps, destructive contacts, or any custom per-tick callback
//! - **Generational handles**: bodies are addressed by stable handles that go
//!   stale on removal instead of dangling
//! - **Contact events**: the engine reports new contacts per surface class;
//!   sounds and effects stay in the driving loop
//!
//! ## Example
//!
//! ```rust
//! use rigid2d::forces::create_drag;
//! use rigid2d::{Body, Polygon, Rgb, Scene, Vec2};
//!
//! let green = Polygon::new(
//!     vec![
//!         Vec2::new(0.0, 0.0),
//!         Vec2::new(10.0, 0.0),
//!         Vec2::new(10.0, 10.0),
//!         Vec2::new(0.0, 10.0),
//!     ],
//!     Rgb::new(1.0, 1.0, 1.0),
//! );
//!
//! let mut scene = Scene::new();
//! let ball = scene.add_body(Body::new(green, 1.0));
//! scene.get_mut(ball).unwrap().set_velocity(Vec2::new(5.0, 0.0));
//! create_drag(&mut scene, 0.5, ball);
//!
//! for _ in 0..60 {
//!     scene.tick(1.0 / 60.0);
//! }
//!
//! assert!(scene.get(ball).unwrap().velocity().length() < 5.0);
//! ```

#![warn(missing_docs)]

/// 2D vector algebra
pub mod math;

/// Convex polygon geometry and color
pub mod geometry;

/// Body storage with generational handles
pub mod arena;

/// Rigid bodies and the integrator
pub mod body;

/// SAT collision detection
pub mod collision;

/// Force creators and collision handlers
pub mod forces;

/// The scene graph and per-tick driver
pub mod scene;

pub use arena::{BodyArena, BodyHandle};
pub use body::Body;
pub use collision::{find_collision, Contact};
pub use forces::{ContactEvent, ForceCreator, SurfaceKind};
pub use geometry::{Polygon, Rgb};
pub use math::Vec2;
pub use scene::Scene;
