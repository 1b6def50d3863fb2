//! Scene object variants and their shared behavior.
//!
//! The editor's object family is a closed set: Point, Line, Polygon, Curve
//! and Window. Each variant owns its ordered world-space vertices; the
//! normalized view of those vertices lives in the per-frame
//! [`Frame`](crate::pipeline::Frame) output, never on the object itself, so
//! the world and normalized representations can never alias.
//!
//! Constructors are the validation boundary: degenerate geometry (a
//! zero-length line, a two-vertex "polygon") is rejected here, and the
//! viewing pipeline assumes every object it receives is well formed.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::errors::GeometryError;
use crate::window::Window;

/// Type tag identifying an object variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Point,
    Line,
    Polygon,
    Curve,
    Window,
}

/// Common behavior for every object the editor can hold.
#[enum_dispatch]
pub trait Graphic {
    /// User-facing object name.
    fn name(&self) -> &str;

    /// Which variant this is.
    fn kind(&self) -> ObjectKind;

    /// Ordered world-space vertices. Never empty.
    fn vertices(&self) -> &[DVec2];

    /// Mutable vertex access for the transform engine.
    fn vertices_mut(&mut self) -> &mut [DVec2];

    /// Geometric center: the arithmetic mean of the vertices.
    fn center(&self) -> DVec2 {
        let vertices = self.vertices();
        vertices.iter().copied().sum::<DVec2>() / vertices.len() as f64
    }
}

/// A single world-space point.
#[derive(Debug, Clone)]
pub struct Point {
    name: String,
    position: [DVec2; 1],
}

impl Point {
    pub fn new(name: impl Into<String>, position: DVec2) -> Self {
        Point {
            name: name.into(),
            position: [position],
        }
    }
}

impl Graphic for Point {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Point
    }

    fn vertices(&self) -> &[DVec2] {
        &self.position
    }

    fn vertices_mut(&mut self) -> &mut [DVec2] {
        &mut self.position
    }
}

/// A segment between two distinct endpoints.
#[derive(Debug, Clone)]
pub struct Line {
    name: String,
    endpoints: [DVec2; 2],
}

impl Line {
    /// Coincident endpoints are refused: line clipping needs a direction.
    pub fn new(name: impl Into<String>, from: DVec2, to: DVec2) -> Result<Self, GeometryError> {
        if from == to {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(Line {
            name: name.into(),
            endpoints: [from, to],
        })
    }
}

impl Graphic for Line {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Line
    }

    fn vertices(&self) -> &[DVec2] {
        &self.endpoints
    }

    fn vertices_mut(&mut self) -> &mut [DVec2] {
        &mut self.endpoints
    }
}

/// A closed polygon with at least three vertices.
#[derive(Debug, Clone)]
pub struct Polygon {
    name: String,
    vertices: Vec<DVec2>,
    filled: bool,
}

impl Polygon {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<DVec2>,
        filled: bool,
    ) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::PolygonTooSmall {
                got: vertices.len(),
            });
        }
        Ok(Polygon {
            name: name.into(),
            vertices,
            filled,
        })
    }

    /// Whether the renderer should fill the interior.
    pub fn filled(&self) -> bool {
        self.filled
    }
}

impl Graphic for Polygon {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Polygon
    }

    fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut [DVec2] {
        &mut self.vertices
    }
}

/// A parametric curve described by at least four control points.
///
/// Tessellation happens downstream; this crate only transforms the control
/// points and decides visibility from the control polygon.
#[derive(Debug, Clone)]
pub struct Curve {
    name: String,
    control_points: Vec<DVec2>,
}

impl Curve {
    pub fn new(name: impl Into<String>, control_points: Vec<DVec2>) -> Result<Self, GeometryError> {
        if control_points.len() < 4 {
            return Err(GeometryError::CurveTooSmall {
                got: control_points.len(),
            });
        }
        Ok(Curve {
            name: name.into(),
            control_points,
        })
    }
}

impl Graphic for Curve {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Curve
    }

    fn vertices(&self) -> &[DVec2] {
        &self.control_points
    }

    fn vertices_mut(&mut self) -> &mut [DVec2] {
        &mut self.control_points
    }
}

/// Any object a scene can hold, dispatching [`Graphic`] statically.
#[enum_dispatch(Graphic)]
#[derive(Debug, Clone)]
pub enum SceneObject {
    Point(Point),
    Line(Line),
    Polygon(Polygon),
    Curve(Curve),
    Window(Window),
}
