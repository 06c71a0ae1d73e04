#![warn(missing_docs)]

//! Ray-segment casting for the rayline kernel.
//!
//! This crate provides the computational core: line segments as opaque
//! obstacles, rays cast against them, radially distributed ray bundles,
//! and nearest-hit resolution over a segment collection.
//!
//! # Example
//!
//! ```
//! use rayline_math::Vec2;
//! use rayline_trace::{nearest_hit, Ray, Segment};
//!
//! let wall = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
//! let ray = Ray::new(Vec2::new(5.0, -5.0), Vec2::new(0.0, 1.0));
//!
//! let hit = nearest_hit(&ray, &[wall]).unwrap();
//! assert!((hit.x - 5.0).abs() < 1e-12);
//! assert!(hit.y.abs() < 1e-12);
//! ```

mod bundle;
mod ray;
mod resolve;
mod segment;

pub use bundle::RayBundle;
pub use ray::{Ray, RayHit};
pub use resolve::{evaluate_bundle, nearest_hit, ResolvedRay};
pub use segment::Segment;

use thiserror::Error;

/// Errors from ray bundle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Indexed access past the end of a bundle's ray list.
    #[error("ray index {index} out of bounds for bundle of {count} rays")]
    RayIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of rays in the bundle.
        count: usize,
    },
}
