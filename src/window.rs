//! The viewing window: a movable, zoomable, rotatable region of the world.
//!
//! The window is itself a scene object (two vertices, the min/max corners)
//! but it is the only one with navigation state: the corners captured at
//! construction are immutable and serve as the recenter target, and the
//! accumulated rotation angle tilts the whole view.

use glam::DVec2;

use crate::errors::{GeometryError, NavigationError};
use crate::object::{Graphic, ObjectKind};

/// The eight pan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl PanDirection {
    /// Per-axis step multipliers. Diagonal pans apply the full step on both
    /// axes, so they move the window by sqrt(2) times the step.
    fn offset(self) -> DVec2 {
        match self {
            PanDirection::Up => DVec2::new(0.0, 1.0),
            PanDirection::Down => DVec2::new(0.0, -1.0),
            PanDirection::Left => DVec2::new(-1.0, 0.0),
            PanDirection::Right => DVec2::new(1.0, 0.0),
            PanDirection::UpLeft => DVec2::new(-1.0, 1.0),
            PanDirection::UpRight => DVec2::new(1.0, 1.0),
            PanDirection::DownLeft => DVec2::new(-1.0, -1.0),
            PanDirection::DownRight => DVec2::new(1.0, -1.0),
        }
    }
}

/// The visible area of the graphical world.
#[derive(Debug, Clone)]
pub struct Window {
    name: String,
    /// Current min/max corners, mutated by navigation only.
    corners: [DVec2; 2],
    /// Corners captured at construction; never mutated afterwards.
    default_corners: [DVec2; 2],
    /// Accumulated rotation in radians.
    angle: f64,
}

impl Window {
    /// Corners are the min and max of the viewing rectangle and must span a
    /// positive area on both axes.
    pub fn new(name: impl Into<String>, min: DVec2, max: DVec2) -> Result<Self, GeometryError> {
        if min.x >= max.x || min.y >= max.y {
            return Err(GeometryError::EmptyWindow);
        }
        Ok(Window {
            name: name.into(),
            corners: [min, max],
            default_corners: [min, max],
            angle: 0.0,
        })
    }

    pub fn min(&self) -> DVec2 {
        self.corners[0]
    }

    pub fn max(&self) -> DVec2 {
        self.corners[1]
    }

    /// Accumulated rotation in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Half of the window extent on each axis. Positive as long as the
    /// corners stay ordered, which zoom validation guarantees.
    pub fn half_extent(&self) -> DVec2 {
        (self.corners[1] - self.corners[0]) / 2.0
    }

    /// Move the window by `step` along a direction.
    pub fn pan(&mut self, direction: PanDirection, step: f64) {
        let delta = direction.offset() * step;
        self.corners[0] += delta;
        self.corners[1] += delta;
    }

    /// Shrink the window by `step` on every side.
    ///
    /// A step of at least half the window width would cross the corners
    /// over each other; such steps are rejected with the window untouched.
    pub fn zoom_in(&mut self, step: f64) -> Result<(), NavigationError> {
        let width = self.corners[1].x - self.corners[0].x;
        if self.corners[0].x + step >= self.corners[1].x - step {
            return Err(NavigationError::ZoomStepTooLarge { step, width });
        }
        self.corners[0] += DVec2::splat(step);
        self.corners[1] -= DVec2::splat(step);
        Ok(())
    }

    /// Grow the window by `step` on every side.
    pub fn zoom_out(&mut self, step: f64) {
        self.corners[0] -= DVec2::splat(step);
        self.corners[1] += DVec2::splat(step);
    }

    /// Add `delta` radians to the accumulated rotation.
    pub fn rotate(&mut self, delta: f64) {
        self.angle += delta;
    }

    /// Restore the corners captured at construction and zero the angle.
    pub fn recenter(&mut self) {
        self.corners = self.default_corners;
        self.angle = 0.0;
    }
}

impl Graphic for Window {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Window
    }

    fn vertices(&self) -> &[DVec2] {
        &self.corners
    }

    fn vertices_mut(&mut self) -> &mut [DVec2] {
        &mut self.corners
    }
}
