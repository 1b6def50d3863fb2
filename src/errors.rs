//! Error types for object construction and window navigation.
//!
//! Nothing in the viewing pipeline itself is fatal: degenerate geometry is
//! refused here before objects ever enter a scene, and numeric edge cases
//! inside clipping degrade to "not visible" instead of erroring.

use thiserror::Error;

/// Rejected object definitions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Line endpoints coincide.
    #[error("line endpoints must be distinct")]
    DegenerateLine,

    /// Polygon with fewer than three vertices.
    #[error("a polygon needs at least 3 vertices, got {got}")]
    PolygonTooSmall { got: usize },

    /// Curve with fewer than four control points.
    #[error("a curve needs at least 4 control points, got {got}")]
    CurveTooSmall { got: usize },

    /// Window corners that do not span a positive area on both axes.
    #[error("window corners must span a positive area")]
    EmptyWindow,
}

/// Rejected window navigation commands. The window state is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NavigationError {
    /// A zoom-in step at least half the window width would cross the
    /// corners over each other.
    #[error("zoom step {step} would invert a window of width {width}")]
    ZoomStepTooLarge { step: f64, width: f64 },
}
