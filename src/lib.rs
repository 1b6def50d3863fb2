//! Viewing and clipping pipeline for interactive 2D vector editors.
//!
//! World-space objects — points, lines, polygons, parametric curves — are
//! viewed through a movable, zoomable, rotatable [`Window`]. Each redraw,
//! [`render_frame`] maps every object into the window's normalized frame
//! (where the visible region is exactly [-1,1] x [-1,1]) and clips it
//! against that rectangle:
//!
//! - points: closed-boundary containment test
//! - lines: Cohen-Sutherland or Liang-Barsky, selectable per frame
//! - polygons: Sutherland-Hodgman, one half-plane pass per rectangle edge
//! - curves: conservative control-polygon test
//!
//! The output [`Frame`] carries, per object, a visibility flag and the
//! possibly reshaped normalized vertex list, ready for a viewport mapping
//! this crate does not perform. The GUI, rasterization, and scene
//! persistence are external collaborators; the [`transform`] module
//! additionally offers translation, centroid-anchored scaling, and pivoted
//! rotation of objects in world space.
//!
//! ```
//! use glam::DVec2;
//! use viewclip::{render_frame, Line, LineClipAlgorithm, SceneObject, Window};
//!
//! let window = Window::new("view", DVec2::new(-10.0, -10.0), DVec2::new(10.0, 10.0))?;
//! let line = Line::new("l1", DVec2::new(0.0, 0.0), DVec2::new(40.0, 0.0))?;
//! let scene = vec![SceneObject::from(line)];
//!
//! let frame = render_frame(&window, &scene, LineClipAlgorithm::CohenSutherland);
//! assert!(frame.objects[0].visible);
//! // the line is cut at the right clip boundary
//! assert_eq!(frame.objects[0].vertices[1], DVec2::new(1.0, 0.0));
//! # Ok::<(), viewclip::GeometryError>(())
//! ```

pub mod clip;
pub mod errors;
pub mod log;
pub mod object;
pub mod pipeline;
pub mod scn;
pub mod transform;
pub mod window;

pub use clip::{CLIP_MAX, CLIP_MIN, LineClipAlgorithm, Outcode};
pub use errors::{GeometryError, NavigationError};
pub use object::{Curve, Graphic, Line, ObjectKind, Point, Polygon, SceneObject};
pub use pipeline::{Frame, FrameObject, render_frame};
pub use scn::ScnMapping;
pub use transform::RotationPivot;
pub use window::{PanDirection, Window};
