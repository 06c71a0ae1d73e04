//! Declarative scene description for the rayline ecosystem.
//!
//! This crate defines the JSON document format consumed by host tooling.
//! It is purely declarative — no geometry math, just frame dimensions,
//! obstacle segments, and ray sources. Building a live scene and tracing
//! it is handled separately by the kernel.
//!
//! Display styling (stroke colors) lives here rather than in the kernel,
//! which treats every boundary as an opaque line regardless of how it is
//! drawn.

use serde::{Deserialize, Serialize};

/// An obstacle segment with optional display styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDoc {
    /// Start X coordinate.
    pub x1: f64,
    /// Start Y coordinate.
    pub y1: f64,
    /// End X coordinate.
    pub x2: f64,
    /// End Y coordinate.
    pub y2: f64,
    /// Stroke color for rendering, e.g. `"#4db8ff"`. Ignored by the
    /// kernel; renderers fall back to their default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl BoundaryDoc {
    /// Create an unstyled boundary from endpoint coordinates.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke: None,
        }
    }
}

/// A radial ray source: an emission point plus a ray count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDoc {
    /// Emission point X coordinate.
    pub x: f64,
    /// Emission point Y coordinate.
    pub y: f64,
    /// Number of rays, distributed at equal angular steps.
    pub rays: u32,
}

/// A complete scene document: frame dimensions, obstacles, ray sources.
///
/// The frame rectangle `(0, 0)`–`(width, height)` is implicit and always
/// bounds ray travel; `boundaries` lists only the obstacles inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDoc {
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
    /// Obstacle segments inside the frame.
    #[serde(default)]
    pub boundaries: Vec<BoundaryDoc>,
    /// Ray sources.
    #[serde(default)]
    pub sources: Vec<SourceDoc>,
}

impl SceneDoc {
    /// Create an empty document with the given frame dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            boundaries: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
