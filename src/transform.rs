//! Object transformations: 3x3 homogeneous affine matrices applied to an
//! object's world vertices.
//!
//! Scaling and rotation are anchored: `M = T(ref) * X * T(-ref)`, so the
//! reference point stays fixed while everything else moves around it.
//! Applying the bare scale or rotation matrix instead would drag the object
//! toward the origin.

use glam::{DMat3, DVec2};

use crate::object::Graphic;

/// Reference point for a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationPivot {
    /// Rotate about the world origin.
    Origin,
    /// Rotate about the object's own geometric center.
    Center,
    /// Rotate about an arbitrary world-space point.
    Point(DVec2),
}

/// Move every vertex by `delta`. A zero delta is the identity, not an error.
pub fn translate(object: &mut impl Graphic, delta: DVec2) {
    apply(object, DMat3::from_translation(delta));
}

/// Scale by per-axis `factors`, anchored at the object's geometric center:
/// the center keeps its coordinates while the extent stretches around it.
pub fn scale(object: &mut impl Graphic, factors: DVec2) {
    let center = object.center();
    let matrix = DMat3::from_translation(center)
        * DMat3::from_scale(factors)
        * DMat3::from_translation(-center);
    apply(object, matrix);
}

/// Rotate by `angle` radians counter-clockwise about the chosen pivot.
pub fn rotate(object: &mut impl Graphic, angle: f64, pivot: RotationPivot) {
    let reference = match pivot {
        RotationPivot::Origin => DVec2::ZERO,
        RotationPivot::Center => object.center(),
        RotationPivot::Point(point) => point,
    };
    let matrix = DMat3::from_translation(reference)
        * DMat3::from_angle(angle)
        * DMat3::from_translation(-reference);
    apply(object, matrix);
}

fn apply(object: &mut impl Graphic, matrix: DMat3) {
    for vertex in object.vertices_mut() {
        *vertex = matrix.transform_point2(*vertex);
    }
}
