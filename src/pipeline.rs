//! The per-redraw pass: normalize every object, clip it, hand the result
//! to rendering.
//!
//! One call to [`render_frame`] is one synchronous redraw cycle. Every
//! field of the returned [`Frame`] is re-derived from the objects' world
//! vertices and the current window state; nothing is cached across frames,
//! and dropping a frame releases every vertex the clipper allocated for it.

use glam::DVec2;

use crate::clip::{self, LineClipAlgorithm};
use crate::log::debug;
use crate::object::{Graphic, ObjectKind, SceneObject};
use crate::scn::ScnMapping;
use crate::window::Window;

/// One object's contribution to a frame: a visibility flag plus the
/// normalized, possibly clip-reshaped vertex list.
#[derive(Debug, Clone)]
pub struct FrameObject {
    pub name: String,
    pub kind: ObjectKind,
    pub visible: bool,
    /// Normalized vertices. For visible clipped lines and polygons this is
    /// the reshaped outline; for everything else (including trivially
    /// rejected lines) it is the mapped input, untouched.
    pub vertices: Vec<DVec2>,
    /// Fill request carried through for polygons; false for every other
    /// kind.
    pub filled: bool,
}

/// The result of one redraw cycle.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The window's own corners in normalized space.
    pub window_corners: [DVec2; 2],
    /// One entry per scene object, in scene order.
    pub objects: Vec<FrameObject>,
}

/// Run one redraw cycle: derive the SCN mapping from the window, map the
/// window itself, then map and clip every scene object against the
/// canonical clip rectangle. Lines use the per-frame `algorithm` choice.
pub fn render_frame(
    window: &Window,
    scene: &[SceneObject],
    algorithm: LineClipAlgorithm,
) -> Frame {
    let mapping = ScnMapping::from_window(window);

    let mapped = mapping.map_object(window);
    let window_corners = [mapped[0], mapped[1]];

    let objects = scene
        .iter()
        .map(|object| clip_object(object, &mapping, algorithm))
        .collect();

    Frame {
        window_corners,
        objects,
    }
}

fn clip_object(
    object: &SceneObject,
    mapping: &ScnMapping,
    algorithm: LineClipAlgorithm,
) -> FrameObject {
    let normalized = mapping.map_object(object);

    let filled = match object {
        SceneObject::Polygon(polygon) => polygon.filled(),
        _ => false,
    };

    let (visible, vertices) = match object {
        SceneObject::Point(_) => (clip::point_visible(normalized[0]), normalized),
        SceneObject::Line(_) => {
            let clipped = match algorithm {
                LineClipAlgorithm::CohenSutherland => {
                    clip::cohen_sutherland(normalized[0], normalized[1])
                }
                LineClipAlgorithm::LiangBarsky => {
                    clip::liang_barsky(normalized[0], normalized[1])
                }
            };
            match clipped {
                Some([from, to]) => (true, vec![from, to]),
                None => (false, normalized),
            }
        }
        SceneObject::Polygon(_) => {
            let clipped = clip::clip_polygon(&normalized);
            if clipped.is_empty() {
                debug!("polygon {} clipped away entirely", object.name());
                (false, normalized)
            } else {
                (true, clipped)
            }
        }
        SceneObject::Curve(_) => (clip::curve_visible(&normalized), normalized),
        SceneObject::Window(_) => {
            // the active window arrives through render_frame; a window
            // inside the scene list is inert
            debug!("ignoring window object {} in the scene list", object.name());
            (false, normalized)
        }
    };

    FrameObject {
        name: object.name().to_string(),
        kind: object.kind(),
        visible,
        vertices,
        filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Curve, Line, Point, Polygon};
    use glam::dvec2;

    fn window() -> Window {
        Window::new("view", dvec2(-10.0, -10.0), dvec2(10.0, 10.0)).unwrap()
    }

    #[test]
    fn window_corners_are_normalized() {
        let frame = render_frame(&window(), &[], LineClipAlgorithm::CohenSutherland);
        assert_eq!(frame.window_corners, [dvec2(-1.0, -1.0), dvec2(1.0, 1.0)]);
    }

    #[test]
    fn point_visibility_follows_the_window() {
        let scene = vec![
            SceneObject::from(Point::new("in", dvec2(5.0, 5.0))),
            SceneObject::from(Point::new("out", dvec2(15.0, 0.0))),
        ];
        let frame = render_frame(&window(), &scene, LineClipAlgorithm::CohenSutherland);
        assert!(frame.objects[0].visible);
        assert_eq!(frame.objects[0].vertices, vec![dvec2(0.5, 0.5)]);
        assert!(!frame.objects[1].visible);
    }

    #[test]
    fn line_is_reshaped_by_the_selected_algorithm() {
        let scene = vec![SceneObject::from(
            Line::new("l", dvec2(0.0, 0.0), dvec2(40.0, 0.0)).unwrap(),
        )];
        for algorithm in [
            LineClipAlgorithm::CohenSutherland,
            LineClipAlgorithm::LiangBarsky,
        ] {
            let frame = render_frame(&window(), &scene, algorithm);
            let line = &frame.objects[0];
            assert!(line.visible);
            assert_eq!(line.vertices[0], dvec2(0.0, 0.0));
            assert!((line.vertices[1] - dvec2(1.0, 0.0)).length() < 1e-12);
        }
    }

    #[test]
    fn rejected_line_keeps_unclipped_coordinates() {
        let scene = vec![SceneObject::from(
            Line::new("l", dvec2(20.0, 0.0), dvec2(30.0, 5.0)).unwrap(),
        )];
        let frame = render_frame(&window(), &scene, LineClipAlgorithm::CohenSutherland);
        let line = &frame.objects[0];
        assert!(!line.visible);
        assert_eq!(line.vertices, vec![dvec2(2.0, 0.0), dvec2(3.0, 0.5)]);
    }

    #[test]
    fn offscreen_polygon_is_invisible() {
        let polygon = Polygon::new(
            "p",
            vec![dvec2(20.0, 20.0), dvec2(30.0, 20.0), dvec2(25.0, 30.0)],
            true,
        )
        .unwrap();
        let scene = vec![SceneObject::from(polygon)];
        let frame = render_frame(&window(), &scene, LineClipAlgorithm::CohenSutherland);
        assert!(!frame.objects[0].visible);
        assert!(frame.objects[0].filled);
    }

    #[test]
    fn curve_visibility_uses_the_control_polygon() {
        let visible = Curve::new(
            "c1",
            vec![dvec2(-5.0, 0.0), dvec2(-2.0, 8.0), dvec2(2.0, -8.0), dvec2(5.0, 0.0)],
        )
        .unwrap();
        let hidden = Curve::new(
            "c2",
            vec![dvec2(20.0, 0.0), dvec2(25.0, 5.0), dvec2(30.0, -5.0), dvec2(35.0, 0.0)],
        )
        .unwrap();
        let scene = vec![SceneObject::from(visible), SceneObject::from(hidden)];
        let frame = render_frame(&window(), &scene, LineClipAlgorithm::CohenSutherland);
        assert!(frame.objects[0].visible);
        assert!(!frame.objects[1].visible);
    }

    #[test]
    fn window_in_scene_list_is_inert() {
        let stray = Window::new("stray", dvec2(0.0, 0.0), dvec2(1.0, 1.0)).unwrap();
        let scene = vec![SceneObject::from(stray)];
        let frame = render_frame(&window(), &scene, LineClipAlgorithm::CohenSutherland);
        assert!(!frame.objects[0].visible);
        assert_eq!(frame.objects[0].kind, ObjectKind::Window);
    }
}
