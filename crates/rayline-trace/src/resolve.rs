//! Nearest-hit resolution over a segment collection.

use rayline_math::Vec2;

use crate::{Ray, RayBundle, Segment};

/// Resolve the closest intersection of `ray` against all of `segments`.
///
/// Scans every segment with no early exit and no spatial index,
/// tracking the minimum Euclidean distance from the ray origin. Exact
/// distance ties keep the first segment encountered (stable over the
/// collection's iteration order). Returns `None` when nothing is hit —
/// a normal outcome, not an error.
///
/// Pure over its inputs: calling it twice with unchanged inputs yields
/// the identical result.
pub fn nearest_hit(ray: &Ray, segments: &[Segment]) -> Option<Vec2> {
    let mut nearest: Option<(f64, Vec2)> = None;
    for segment in segments {
        if let Some(hit) = ray.cast(segment) {
            let dist = (hit.point - ray.origin).length();
            if nearest.map_or(true, |(best, _)| dist < best) {
                nearest = Some((dist, hit.point));
            }
        }
    }
    nearest.map(|(_, point)| point)
}

/// One ray of a bundle evaluation, with its resolved endpoint if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRay {
    /// The ray that was cast.
    pub ray: Ray,
    /// Nearest hit point, or `None` when no segment was struck.
    pub hit: Option<Vec2>,
}

/// Evaluate every ray of a bundle against a segment collection.
///
/// Rays are independent of one another; the result has one entry per
/// ray in generation order. An unresolved ray is represented with
/// `hit: None`, never an error.
pub fn evaluate_bundle(bundle: &RayBundle, segments: &[Segment]) -> Vec<ResolvedRay> {
    bundle
        .rays()
        .iter()
        .map(|ray| ResolvedRay {
            ray: *ray,
            hit: nearest_hit(ray, segments),
        })
        .collect()
}
