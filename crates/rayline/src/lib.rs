#![warn(missing_docs)]

//! High-level scene facade for the rayline 2D ray-casting kernel.
//!
//! Provides the [`Scene`] type — a set of boundary segments plus one or
//! more radial ray sources, with per-frame tracing against the current
//! boundary list.
//!
//! # Example
//!
//! ```
//! use rayline::{Scene, Vec2};
//!
//! let mut scene = Scene::new(640.0, 480.0);
//! let source = scene.add_ray_source(Vec2::new(320.0, 240.0), 360);
//!
//! // Per frame: follow the pointer, then trace.
//! scene.move_ray_source(source, Vec2::new(100.0, 120.0)).unwrap();
//! let traces = scene.trace();
//! assert_eq!(traces[source].len(), 360);
//! ```

pub use rayline_math;
pub use rayline_trace;

pub use rayline_math::{MathError, Vec2};
pub use rayline_trace::{
    evaluate_bundle, nearest_hit, Ray, RayBundle, RayHit, ResolvedRay, Segment, TraceError,
};

use thiserror::Error;

/// Errors from scene-level indexed access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Indexed access past the end of the boundary list.
    #[error("boundary index {index} out of bounds ({count} boundaries)")]
    BoundaryIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of boundaries in the scene.
        count: usize,
    },

    /// Indexed access past the end of the ray source list.
    #[error("ray source index {index} out of bounds ({count} sources)")]
    SourceIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of ray sources in the scene.
        count: usize,
    },
}

/// Number of frame segments managed by [`Scene::set_boundary_rect`].
const FRAME_SEGMENTS: usize = 4;

/// A 2D scene: boundary segments plus radial ray sources.
///
/// The first four boundaries form the frame rectangle bounding ray
/// travel and are repositioned together on resize; obstacles appended
/// after them are never moved or removed. Single-threaded and
/// synchronous: tracing reads the boundary list, mutation happens
/// between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    boundaries: Vec<Segment>,
    sources: Vec<RayBundle>,
}

impl Scene {
    /// Create a scene bounded by the rectangle `(0, 0)`–`(width, height)`.
    ///
    /// The four frame segments are seeded immediately so the scene is
    /// closed from the start.
    pub fn new(width: f64, height: f64) -> Self {
        let mut scene = Self {
            boundaries: vec![Segment::from_coords(0.0, 0.0, 0.0, 0.0); FRAME_SEGMENTS],
            sources: Vec::new(),
        };
        scene.set_boundary_rect(width, height);
        scene
    }

    /// Reposition the four frame segments to the rectangle
    /// `(0, 0)`–`(width, height)`, e.g. after a viewport resize.
    ///
    /// Obstacles appended after the frame are left untouched.
    pub fn set_boundary_rect(&mut self, width: f64, height: f64) {
        self.boundaries[0] = Segment::from_coords(0.0, 0.0, width, 0.0);
        self.boundaries[1] = Segment::from_coords(width, 0.0, width, height);
        self.boundaries[2] = Segment::from_coords(0.0, height, width, height);
        self.boundaries[3] = Segment::from_coords(0.0, 0.0, 0.0, height);
    }

    /// Append an obstacle segment.
    ///
    /// The boundary list is append-only; results are reflected on the
    /// next trace.
    pub fn add_boundary(&mut self, segment: Segment) {
        self.boundaries.push(segment);
    }

    /// Add a radial ray source and return its index.
    pub fn add_ray_source(&mut self, origin: Vec2, ray_count: usize) -> usize {
        self.sources.push(RayBundle::new(origin, ray_count));
        self.sources.len() - 1
    }

    /// Move one ray source's origin in place, directions unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::SourceIndexOutOfBounds`] for an unknown
    /// index; never clamps.
    pub fn move_ray_source(&mut self, index: usize, origin: Vec2) -> Result<(), SceneError> {
        let count = self.sources.len();
        let source = self
            .sources
            .get_mut(index)
            .ok_or(SceneError::SourceIndexOutOfBounds { index, count })?;
        source.set_origin(origin);
        Ok(())
    }

    /// Bounds-checked access to a boundary segment.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::BoundaryIndexOutOfBounds`] for an unknown
    /// index.
    pub fn boundary(&self, index: usize) -> Result<&Segment, SceneError> {
        self.boundaries
            .get(index)
            .ok_or(SceneError::BoundaryIndexOutOfBounds {
                index,
                count: self.boundaries.len(),
            })
    }

    /// Bounds-checked access to a ray source.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::SourceIndexOutOfBounds`] for an unknown
    /// index.
    pub fn source(&self, index: usize) -> Result<&RayBundle, SceneError> {
        self.sources
            .get(index)
            .ok_or(SceneError::SourceIndexOutOfBounds {
                index,
                count: self.sources.len(),
            })
    }

    /// All boundary segments, frame first, then obstacles in insertion
    /// order.
    pub fn boundaries(&self) -> &[Segment] {
        &self.boundaries
    }

    /// All ray sources, in insertion order.
    pub fn sources(&self) -> &[RayBundle] {
        &self.sources
    }

    /// Trace every source against the current boundary list.
    ///
    /// Returns one entry per source, each with one [`ResolvedRay`] per
    /// ray in generation order. Pure over the current scene state.
    pub fn trace(&self) -> Vec<Vec<ResolvedRay>> {
        self.sources
            .iter()
            .map(|bundle| evaluate_bundle(bundle, &self.boundaries))
            .collect()
    }
}
