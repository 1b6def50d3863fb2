//! World-to-normalized (SCN) mapping.
//!
//! Once per frame the window yields a single mapping: translate relative to
//! the window center, counter-rotate by the window angle, divide by the
//! per-axis half extents. In the resulting normalized space the window's
//! current view occupies exactly [-1,1] x [-1,1] — the precondition every
//! clipping routine depends on.
//!
//! The mapping reads world vertices and produces fresh normalized lists;
//! it never writes back into the objects.

use glam::DVec2;

use crate::object::Graphic;
use crate::window::Window;

/// The per-frame world-to-normalized transform.
#[derive(Debug, Clone, Copy)]
pub struct ScnMapping {
    center: DVec2,
    /// Unit vector encoding the counter-rotation by the window angle.
    rotation: DVec2,
    half_extent: DVec2,
}

impl ScnMapping {
    /// Derive the mapping from the window's current center, angle and
    /// extent.
    pub fn from_window(window: &Window) -> Self {
        ScnMapping {
            center: window.center(),
            rotation: DVec2::from_angle(-window.angle()),
            half_extent: window.half_extent(),
        }
    }

    /// Map one world-space point into normalized coordinates.
    ///
    /// Dividing by the half extents (instead of multiplying by a
    /// precomputed reciprocal) keeps the window's own corners at exactly
    /// +/-1 in IEEE arithmetic.
    pub fn map_point(&self, world: DVec2) -> DVec2 {
        self.rotation.rotate(world - self.center) / self.half_extent
    }

    /// Map an object's world vertices into a fresh normalized list.
    pub fn map_object(&self, object: &impl Graphic) -> Vec<DVec2> {
        object.vertices().iter().map(|&v| self.map_point(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    #[test]
    fn window_corners_map_to_unit_square_exactly() {
        // arbitrary size and position: the corners must land on exactly +/-1
        let window = Window::new("w", dvec2(3.0, -7.5), dvec2(42.0, 13.25)).unwrap();
        let mapping = ScnMapping::from_window(&window);
        assert_eq!(mapping.map_point(window.min()), dvec2(-1.0, -1.0));
        assert_eq!(mapping.map_point(window.max()), dvec2(1.0, 1.0));
    }

    #[test]
    fn window_center_maps_to_origin() {
        let window = Window::new("w", dvec2(10.0, 20.0), dvec2(30.0, 60.0)).unwrap();
        let mapping = ScnMapping::from_window(&window);
        assert_eq!(mapping.map_point(dvec2(20.0, 40.0)), dvec2(0.0, 0.0));
    }

    #[test]
    fn scale_is_reciprocal_half_extent_per_axis() {
        let window = Window::new("w", dvec2(-200.0, -100.0), dvec2(200.0, 100.0)).unwrap();
        let mapping = ScnMapping::from_window(&window);
        assert_eq!(mapping.map_point(dvec2(100.0, 50.0)), dvec2(0.5, 0.5));
        assert_eq!(mapping.map_point(dvec2(-300.0, 0.0)), dvec2(-1.5, 0.0));
    }

    #[test]
    fn rotated_window_counter_rotates_objects() {
        let mut window = Window::new("w", dvec2(-1.0, -1.0), dvec2(1.0, 1.0)).unwrap();
        window.rotate(FRAC_PI_2);
        let mapping = ScnMapping::from_window(&window);
        // a point east of the center appears at the bottom of a view that
        // was turned a quarter counter-clockwise
        let mapped = mapping.map_point(dvec2(1.0, 0.0));
        assert!((mapped - dvec2(0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn map_object_leaves_world_vertices_untouched() {
        use crate::object::{Graphic, Point};

        let window = Window::new("w", dvec2(-2.0, -2.0), dvec2(2.0, 2.0)).unwrap();
        let mapping = ScnMapping::from_window(&window);
        let point = Point::new("p", dvec2(1.0, 1.0));
        let normalized = mapping.map_object(&point);
        assert_eq!(normalized, vec![dvec2(0.5, 0.5)]);
        assert_eq!(point.vertices(), &[dvec2(1.0, 1.0)]);
    }
}
