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
//! 2D vector algebra primitives
//!
//! Everything in the engine (polygon geometry, SAT projections, force and
//! impulse accumulation) is built on [`Vec2`]. The operations here are exact
//! floating-point arithmetic with no tolerances; correctness of the collision
//! detector and the integrator depends on that.

mod vec2;

pub use vec2::Vec2;
