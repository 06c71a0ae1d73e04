//! Radially distributed ray bundles.

use std::f64::consts::TAU;

use rayline_math::Vec2;

use crate::{Ray, TraceError};

/// A bundle of rays sharing an origin, distributed at equal angular
/// steps over a full turn.
///
/// With `n` rays the step is `2π / n` and ray `i` has direction
/// `(cos(i·step), sin(i·step))`. Directions are generated when the count
/// is set and only rebuilt when it changes; moving the origin updates
/// every ray's origin in place and leaves directions untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RayBundle {
    origin: Vec2,
    rays: Vec<Ray>,
}

impl RayBundle {
    /// Create a bundle of `count` rays around `origin`.
    pub fn new(origin: Vec2, count: usize) -> Self {
        Self {
            origin,
            rays: Self::generate(origin, count),
        }
    }

    fn generate(origin: Vec2, count: usize) -> Vec<Ray> {
        let mut rays = Vec::with_capacity(count);
        if count == 0 {
            return rays;
        }
        let step = TAU / count as f64;
        for i in 0..count {
            let angle = i as f64 * step;
            rays.push(Ray::new(origin, Vec2::new(angle.cos(), angle.sin())));
        }
        rays
    }

    /// The bundle's origin.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Move the bundle: every ray's origin is updated, directions are
    /// left unchanged.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        for ray in &mut self.rays {
            ray.origin = origin;
        }
    }

    /// Number of rays.
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    /// Check if the bundle has no rays. A valid state: evaluation over
    /// an empty bundle simply yields nothing.
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Rebuild the bundle with `count` rays.
    ///
    /// A count of zero or one equal to the current ray count leaves the
    /// bundle untouched; any other count regenerates all directions.
    pub fn resize(&mut self, count: usize) {
        if count == 0 || count == self.rays.len() {
            return;
        }
        self.rays = Self::generate(self.origin, count);
    }

    /// Bounds-checked access to a ray by generation index.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::RayIndexOutOfBounds`] when `index` is past
    /// the end; never clamps.
    pub fn ray(&self, index: usize) -> Result<&Ray, TraceError> {
        self.rays.get(index).ok_or(TraceError::RayIndexOutOfBounds {
            index,
            count: self.rays.len(),
        })
    }

    /// All rays, in generation order.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_ray_directions() {
        let bundle = RayBundle::new(Vec2::ZERO, 4);
        assert_eq!(bundle.len(), 4);
        let expected = [
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ];
        for (ray, want) in bundle.rays().iter().zip(expected) {
            assert!((ray.direction.x - want.x).abs() < 1e-12);
            assert!((ray.direction.y - want.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_set_origin_preserves_directions() {
        let mut bundle = RayBundle::new(Vec2::ZERO, 8);
        let dirs: Vec<_> = bundle.rays().iter().map(|r| r.direction).collect();
        bundle.set_origin(Vec2::new(42.0, -7.0));
        assert_eq!(bundle.origin(), Vec2::new(42.0, -7.0));
        for (ray, dir) in bundle.rays().iter().zip(dirs) {
            assert_eq!(ray.origin, Vec2::new(42.0, -7.0));
            assert_eq!(ray.direction, dir);
        }
    }

    #[test]
    fn test_resize() {
        let mut bundle = RayBundle::new(Vec2::ZERO, 4);
        bundle.resize(6);
        assert_eq!(bundle.len(), 6);

        // Zero and unchanged counts are no-ops.
        bundle.resize(0);
        assert_eq!(bundle.len(), 6);
        let before = bundle.clone();
        bundle.resize(6);
        assert_eq!(bundle, before);
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = RayBundle::new(Vec2::ZERO, 0);
        assert!(bundle.is_empty());
        assert_eq!(
            bundle.ray(0),
            Err(TraceError::RayIndexOutOfBounds { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_ray_out_of_bounds() {
        let bundle = RayBundle::new(Vec2::ZERO, 3);
        assert!(bundle.ray(2).is_ok());
        assert_eq!(
            bundle.ray(3),
            Err(TraceError::RayIndexOutOfBounds { index: 3, count: 3 })
        );
    }
}
