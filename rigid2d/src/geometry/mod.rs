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
//! Convex polygon geometry
//!
//! A [`Polygon`] is the only shape the engine knows about. It carries its own
//! velocity, rotation state, and display color so that a body is nothing more
//! than a polygon plus mass and accumulators.

mod color;
mod polygon;

pub use color::Rgb;
pub use polygon::Polygon;
