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
//! Display color carried by polygons

/// An RGB color with components in `[0, 1]`
///
/// The engine never inspects colors; they ride along on polygons for the
/// rendering layer to read back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red component in `[0, 1]`
    pub r: f64,
    /// Green component in `[0, 1]`
    pub g: f64,
    /// Blue component in `[0, 1]`
    pub b: f64,
}

impl Rgb {
    /// Create a color from components
    ///
    /// # Panics
    ///
    /// Panics if any component lies outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b),
            "color components must lie in [0, 1]"
        );
        Rgb { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_color() {
        let c = Rgb::new(0.25, 0.5, 1.0);
        assert_eq!(c.r, 0.25);
        assert_eq!(c.g, 0.5);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    #[should_panic(expected = "color components")]
    fn test_out_of_range_panics() {
        Rgb::new(1.5, 0.0, 0.0);
    }
}
