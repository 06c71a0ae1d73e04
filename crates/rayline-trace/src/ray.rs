//! Ray representation and the ray-segment cast.

use rayline_math::Vec2;

use crate::Segment;

/// A ray defined by an origin and a direction.
///
/// The direction is not required to be unit length and is never
/// renormalized: the cast solves for a scalar multiple of it, so
/// magnitude affects only the parameter scale, not which points hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vec2,
    /// Direction of the ray.
    pub direction: Vec2,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `u`: `origin + u * direction`.
    #[inline]
    pub fn at(&self, u: f64) -> Vec2 {
        self.origin + self.direction * u
    }

    /// Reciprocal of the direction components, for slab-style box tests
    /// in future acceleration structures. Zero components map to
    /// `f64::INFINITY`.
    ///
    /// Computed on demand rather than cached so it can never go stale
    /// when the direction is reassigned.
    #[inline]
    pub fn inv_direction(&self) -> Vec2 {
        let inv = |c: f64| if c == 0.0 { f64::INFINITY } else { 1.0 / c };
        Vec2::new(inv(self.direction.x), inv(self.direction.y))
    }

    /// Cast this ray against a segment.
    ///
    /// Solves the two-line parametric intersection in determinant form,
    /// with `t` the position along the segment and `u` the position along
    /// the ray (`u = 1` at `origin + direction`). A hit requires:
    ///
    /// - a non-zero denominator — parallel or coincident lines never hit,
    /// - `0 < t < 1` — strictly inside the segment, so a ray grazing an
    ///   endpoint misses and shared vertices are never double-counted,
    /// - `u > 0` — forward half-line, unbounded above (infinite ray).
    ///
    /// Pure and deterministic; returns `None` on a miss.
    pub fn cast(&self, segment: &Segment) -> Option<RayHit> {
        let (x1, y1) = (segment.start.x, segment.start.y);
        let (x2, y2) = (segment.end.x, segment.end.y);
        let (x3, y3) = (self.origin.x, self.origin.y);
        let x4 = x3 + self.direction.x;
        let y4 = y3 + self.direction.y;

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        if t > 0.0 && t < 1.0 && u > 0.0 {
            let point = Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1));
            Some(RayHit { point, t, u })
        } else {
            None
        }
    }
}

/// Result of a successful ray-segment cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point, computed from `t` along the segment.
    pub point: Vec2,
    /// Parameter along the segment, strictly in `(0, 1)`.
    pub t: f64,
    /// Parameter along the ray, strictly positive and unbounded.
    pub u: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 0.0));
        assert_eq!(ray.at(2.0), Vec2::new(7.0, 2.0));
    }

    #[test]
    fn test_inv_direction() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(2.0, -4.0));
        assert_eq!(ray.inv_direction(), Vec2::new(0.5, -0.25));

        let axis = Ray::new(Vec2::ZERO, Vec2::new(0.0, 1.0));
        let inv = axis.inv_direction();
        assert_eq!(inv.x, f64::INFINITY);
        assert_eq!(inv.y, 1.0);
    }

    #[test]
    fn test_cast_hit() {
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let ray = Ray::new(Vec2::new(5.0, -5.0), Vec2::new(0.0, 1.0));
        let hit = ray.cast(&seg).expect("should hit");
        assert!((hit.point.x - 5.0).abs() < 1e-12);
        assert!(hit.point.y.abs() < 1e-12);
        assert!(hit.t > 0.0 && hit.t < 1.0);
        assert!(hit.u > 0.0);
    }

    #[test]
    fn test_cast_pointing_away() {
        // Same line of support, direction reversed: u would be negative.
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let ray = Ray::new(Vec2::new(5.0, 5.0), Vec2::new(0.0, 1.0));
        assert!(ray.cast(&seg).is_none());
    }

    #[test]
    fn test_cast_parallel() {
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let ray = Ray::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        assert!(ray.cast(&seg).is_none());
    }

    #[test]
    fn test_cast_coincident() {
        // Ray lying on the segment's own line still counts as parallel.
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let ray = Ray::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        assert!(ray.cast(&seg).is_none());
    }

    #[test]
    fn test_cast_endpoint_graze_misses() {
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        // Straight up at the start endpoint: t == 0.
        let at_start = Ray::new(Vec2::new(0.0, -5.0), Vec2::new(0.0, 1.0));
        assert!(at_start.cast(&seg).is_none());
        // Straight up at the end endpoint: t == 1.
        let at_end = Ray::new(Vec2::new(10.0, -5.0), Vec2::new(0.0, 1.0));
        assert!(at_end.cast(&seg).is_none());
    }

    #[test]
    fn test_cast_beyond_direction_length() {
        // The ray is infinite: a hit far past origin + direction still counts.
        let seg = Segment::from_coords(0.0, 100.0, 10.0, 100.0);
        let ray = Ray::new(Vec2::new(5.0, 0.0), Vec2::new(0.0, 1.0));
        let hit = ray.cast(&seg).expect("should hit");
        assert!((hit.u - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cast_direction_magnitude_irrelevant() {
        let seg = Segment::from_coords(0.0, 10.0, 10.0, 10.0);
        let unit = Ray::new(Vec2::new(5.0, 0.0), Vec2::new(0.0, 1.0));
        let scaled = Ray::new(Vec2::new(5.0, 0.0), Vec2::new(0.0, 250.0));
        let a = unit.cast(&seg).expect("hit");
        let b = scaled.cast(&seg).expect("hit");
        assert_eq!(a.point, b.point);
    }

    #[test]
    fn test_cast_deterministic() {
        let seg = Segment::from_coords(-3.0, 7.0, 12.0, 2.0);
        let ray = Ray::new(Vec2::new(1.0, -1.0), Vec2::new(0.3, 0.9));
        let a = ray.cast(&seg);
        let b = ray.cast(&seg);
        assert_eq!(a, b);
    }
}
