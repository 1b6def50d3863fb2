//! Clipping against the canonical [-1,1] x [-1,1] rectangle.
//!
//! Every routine here operates purely on normalized coordinates: it takes
//! points produced by the SCN pass and returns new values, leaving the
//! input untouched. Visibility is expressed through the return type
//! (`bool`, `Option`, or list emptiness); nothing in this module errors.
//! Numeric degeneracy (axis-aligned segments, boundary-collinear polygon
//! edges) is guarded before every division and degrades to "no
//! intersection, drop the point".

use bitflags::bitflags;
use glam::DVec2;

/// Lower-left corner of the clip rectangle.
pub const CLIP_MIN: DVec2 = DVec2::new(-1.0, -1.0);
/// Upper-right corner of the clip rectangle.
pub const CLIP_MAX: DVec2 = DVec2::new(1.0, 1.0);

/// Clip-rectangle corners in counter-clockwise order; consecutive pairs
/// form the four directed boundary edges for the polygon passes.
const CLIP_CORNERS: [DVec2; 4] = [
    DVec2::new(-1.0, -1.0),
    DVec2::new(1.0, -1.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(-1.0, 1.0),
];

/// Line-clipping algorithm selection, applied uniformly to all lines in a
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineClipAlgorithm {
    #[default]
    CohenSutherland,
    LiangBarsky,
}

bitflags! {
    /// Region code of a point relative to the four clip boundaries.
    ///
    /// An empty code means the point is inside the rectangle (boundaries
    /// included).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 1;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

impl Outcode {
    /// Classify a normalized point against the clip boundaries.
    pub fn of(point: DVec2) -> Self {
        let mut code = Outcode::empty();
        if point.x < CLIP_MIN.x {
            code |= Outcode::LEFT;
        }
        if point.x > CLIP_MAX.x {
            code |= Outcode::RIGHT;
        }
        if point.y < CLIP_MIN.y {
            code |= Outcode::BOTTOM;
        }
        if point.y > CLIP_MAX.y {
            code |= Outcode::TOP;
        }
        code
    }
}

/// Point visibility: inside or on the clip rectangle.
pub fn point_visible(point: DVec2) -> bool {
    Outcode::of(point).is_empty()
}

/// Cohen-Sutherland line clipping.
///
/// Returns the clipped endpoints, or `None` when the segment lies outside
/// the rectangle. Trivially accepted segments come back unchanged.
pub fn cohen_sutherland(from: DVec2, to: DVec2) -> Option<[DVec2; 2]> {
    let code_from = Outcode::of(from);
    let code_to = Outcode::of(to);

    if (code_from | code_to).is_empty() {
        return Some([from, to]);
    }
    if !(code_from & code_to).is_empty() {
        return None;
    }

    let delta = to - from;
    let clipped_from = if code_from.is_empty() {
        from
    } else {
        correct_endpoint(from, code_from, delta)?
    };
    let clipped_to = if code_to.is_empty() {
        to
    } else {
        correct_endpoint(to, code_to, delta)?
    };

    if !code_from.is_empty() && !code_to.is_empty() {
        // both endpoints moved: re-run the trivial tests on the corrected
        // pair before accepting
        let recoded_from = Outcode::of(clipped_from);
        let recoded_to = Outcode::of(clipped_to);
        if !(recoded_from & recoded_to).is_empty()
            || (!recoded_from.is_empty() && !recoded_to.is_empty())
        {
            return None;
        }
    }

    Some([clipped_from, clipped_to])
}

/// Replace an out-of-window endpoint with its crossing of a violated
/// boundary.
///
/// Boundaries are tried in the order LEFT, RIGHT, TOP, BOTTOM; the first
/// candidate whose crossing lies within the adjacent boundary's range wins,
/// which resolves outcodes with two bits set. `None` means the segment's
/// crossings all fall outside the rectangle, i.e. the segment misses it.
fn correct_endpoint(point: DVec2, code: Outcode, delta: DVec2) -> Option<DVec2> {
    if code.contains(Outcode::LEFT) && delta.x != 0.0 {
        let y = point.y + delta.y / delta.x * (CLIP_MIN.x - point.x);
        if (CLIP_MIN.y..=CLIP_MAX.y).contains(&y) {
            return Some(DVec2::new(CLIP_MIN.x, y));
        }
    }
    if code.contains(Outcode::RIGHT) && delta.x != 0.0 {
        let y = point.y + delta.y / delta.x * (CLIP_MAX.x - point.x);
        if (CLIP_MIN.y..=CLIP_MAX.y).contains(&y) {
            return Some(DVec2::new(CLIP_MAX.x, y));
        }
    }
    if code.contains(Outcode::TOP) && delta.y != 0.0 {
        let x = point.x + delta.x / delta.y * (CLIP_MAX.y - point.y);
        if (CLIP_MIN.x..=CLIP_MAX.x).contains(&x) {
            return Some(DVec2::new(x, CLIP_MAX.y));
        }
    }
    if code.contains(Outcode::BOTTOM) && delta.y != 0.0 {
        let x = point.x + delta.x / delta.y * (CLIP_MIN.y - point.y);
        if (CLIP_MIN.x..=CLIP_MAX.x).contains(&x) {
            return Some(DVec2::new(x, CLIP_MIN.y));
        }
    }
    None
}

/// Liang-Barsky parametric line clipping.
///
/// Same contract as [`cohen_sutherland`]; the two agree on visibility and
/// on clipped endpoints up to floating-point tolerance.
pub fn liang_barsky(from: DVec2, to: DVec2) -> Option<[DVec2; 2]> {
    let delta = to - from;

    // boundary order: left, right, bottom, top
    let p = [-delta.x, delta.x, -delta.y, delta.y];
    let q = [
        from.x - CLIP_MIN.x,
        CLIP_MAX.x - from.x,
        from.y - CLIP_MIN.y,
        CLIP_MAX.y - from.y,
    ];

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for boundary in 0..4 {
        if p[boundary] == 0.0 {
            // parallel to this boundary; outside means invisible
            if q[boundary] < 0.0 {
                return None;
            }
        } else {
            let t = q[boundary] / p[boundary];
            if p[boundary] < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }
        }
    }

    if t_enter > t_exit {
        return None;
    }

    Some([from + delta * t_enter, from + delta * t_exit])
}

/// Sutherland-Hodgman polygon clipping: one half-plane pass per rectangle
/// edge.
///
/// Returns the clipped outline; an empty result means the polygon is
/// entirely outside. Intersection vertices are freshly computed normalized
/// points. A polygon fully outside one boundary empties on that pass and
/// stays empty.
pub fn clip_polygon(vertices: &[DVec2]) -> Vec<DVec2> {
    let mut output = vertices.to_vec();
    for corner in 0..CLIP_CORNERS.len() {
        if output.is_empty() {
            break;
        }
        let edge_from = CLIP_CORNERS[corner];
        let edge_to = CLIP_CORNERS[(corner + 1) % CLIP_CORNERS.len()];
        output = clip_against_edge(&output, edge_from, edge_to);
    }
    output
}

/// One half-plane pass: keep what lies on or left of the directed boundary
/// edge.
fn clip_against_edge(vertices: &[DVec2], edge_from: DVec2, edge_to: DVec2) -> Vec<DVec2> {
    let edge = edge_to - edge_from;
    let mut output = Vec::with_capacity(vertices.len() + 1);

    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];

        // cross product sign: >= 0 is on the inside/boundary side
        let a_inside = edge.perp_dot(a - edge_from) >= 0.0;
        let b_inside = edge.perp_dot(b - edge_from) >= 0.0;

        match (a_inside, b_inside) {
            // both inside: keep the second point
            (true, true) => output.push(b),
            // entering: intersection, then the second point
            (false, true) => {
                if let Some(crossing) = line_intersection(edge_from, edge_to, a, b) {
                    output.push(crossing);
                }
                output.push(b);
            }
            // leaving: intersection only
            (true, false) => {
                if let Some(crossing) = line_intersection(edge_from, edge_to, a, b) {
                    output.push(crossing);
                }
            }
            // both outside: nothing
            (false, false) => {}
        }
    }

    output
}

/// Intersection of the infinite lines through (p1,p2) and (p3,p4), by the
/// determinant formula. `None` when the lines are parallel or collinear
/// (zero determinant): the caller drops the point rather than dividing.
fn line_intersection(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<DVec2> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < f64::EPSILON {
        return None;
    }

    let det12 = p1.x * p2.y - p1.y * p2.x;
    let det34 = p3.x * p4.y - p3.y * p4.x;

    Some(DVec2::new(
        (det12 * (p3.x - p4.x) - (p1.x - p2.x) * det34) / denom,
        (det12 * (p3.y - p4.y) - (p1.y - p2.y) * det34) / denom,
    ))
}

/// Conservative curve visibility.
///
/// The curve never leaves the convex hull of its control points, so an
/// axis-aligned bounding-box overlap test on the control polygon can
/// only over-report visibility, never hide a visible curve.
pub fn curve_visible(control_points: &[DVec2]) -> bool {
    let mut min = control_points[0];
    let mut max = control_points[0];
    for &point in &control_points[1..] {
        min = min.min(point);
        max = max.max(point);
    }
    min.x <= CLIP_MAX.x && max.x >= CLIP_MIN.x && min.y <= CLIP_MAX.y && max.y >= CLIP_MIN.y
}
