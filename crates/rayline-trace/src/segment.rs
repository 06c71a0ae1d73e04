//! Line segment obstacles.

use rayline_math::Vec2;

/// An opaque, infinitely thin line segment a ray may intersect.
///
/// Rendering concerns such as stroke styling live in the scene document,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start endpoint.
    pub start: Vec2,
    /// End endpoint.
    pub end: Vec2,
}

impl Segment {
    /// Create a segment from two endpoints.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Create a segment from endpoint coordinates.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    /// Vector from start to end.
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Check if both endpoints coincide exactly.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
