//! Orthographic projection to the viewing plane
//!
//! Rotated points are projected onto their first two coordinates and scaled
//! so the whole polytope fits a fixed viewport. The scale comes from the
//! unrotated geometry, so it stays constant while the shape spins.

use crate::rotation::{in_enumerator_order, precompute, rotate_with};
use crate::{PlaneAngle, Point2, PointN};

/// Scale used when there is nothing to measure
pub const DEFAULT_SCALE: f64 = 150.0;

/// Radius, in viewport units, that the furthest vertex is scaled to
///
/// The viewport has a half-extent of about 175 units; 140 leaves padding.
pub const TARGET_RADIUS: f64 = 140.0;

/// Rotate every point through `plane_angles`, then project to 2D and scale
///
/// The input points are not modified. A missing coordinate projects as 0.
pub fn project(points: &[PointN], plane_angles: &[PlaneAngle], scale: f64) -> Vec<Point2> {
    let ordered = in_enumerator_order(plane_angles);
    let rotations = precompute(&ordered);
    points
        .iter()
        .map(|p| rotate_with(p, &rotations).xy() * scale)
        .collect()
}

/// Largest Euclidean norm in `points`, or 0 for an empty set
pub fn max_norm(points: &[PointN]) -> f64 {
    points
        .iter()
        .map(PointN::norm_squared)
        .fold(0.0, f64::max)
        .sqrt()
}

/// Uniform scale that maps the furthest vertex to [`TARGET_RADIUS`]
///
/// Returns [`DEFAULT_SCALE`] for an empty set, or when every point sits at
/// the origin.
pub fn scale(points: &[PointN]) -> f64 {
    let radius = max_norm(points);
    if points.is_empty() || radius <= 0.0 {
        return DEFAULT_SCALE;
    }
    TARGET_RADIUS / radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, planes, PolytopeFamily, Polytope, RotationPlane};
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_projection() {
        let points = [PointN::from([1.0, 2.0, 3.0])];
        let projected = project(&points, &[], 10.0);
        assert_eq!(projected, vec![Point2::new(10.0, 20.0)]);
    }

    #[test]
    fn test_zero_angles_are_identity() {
        let points = [PointN::from([1.0, 2.0, 3.0, 4.0])];
        let angles: Vec<PlaneAngle> = planes(4).into_iter().map(|p| PlaneAngle::new(p, 0.0)).collect();
        let projected = project(&points, &angles, 2.0);
        assert_eq!(projected, vec![Point2::new(2.0, 4.0)]);
    }

    #[test]
    fn test_quarter_turn_in_xy() {
        let points = [PointN::from([1.0, 0.0, 0.0])];
        let xy = RotationPlane::new(0, 1).unwrap();
        let projected = project(&points, &[PlaneAngle::new(xy, PI / 2.0)], 1.0);
        assert!(approx_eq(projected[0].x, 0.0));
        assert!(approx_eq(projected[0].y, 1.0));
    }

    #[test]
    fn test_rotation_into_view() {
        // A point along Z swings into the Y axis through the YZ plane
        let points = [PointN::from([0.0, 0.0, 1.0])];
        let yz = RotationPlane::new(1, 2).unwrap();
        let projected = project(&points, &[PlaneAngle::new(yz, -PI / 2.0)], 5.0);
        assert!(approx_eq(projected[0].x, 0.0));
        assert!(approx_eq(projected[0].y, 5.0));
    }

    #[test]
    fn test_one_dimensional_point_projects_with_zero_y() {
        let points = [PointN::from([0.5])];
        let projected = project(&points, &[], 4.0);
        assert_eq!(projected, vec![Point2::new(2.0, 0.0)]);
    }

    #[test]
    fn test_projection_keeps_point_count() {
        let g = generate(PolytopeFamily::Orthoplex, 6);
        let angles: Vec<PlaneAngle> = planes(6).into_iter().map(|p| PlaneAngle::new(p, 0.4)).collect();
        let projected = project(g.vertices(), &angles, 1.0);
        assert_eq!(projected.len(), g.vertex_count());
    }

    #[test]
    fn test_scale_empty() {
        assert_eq!(scale(&[]), DEFAULT_SCALE);
    }

    #[test]
    fn test_scale_from_max_norm() {
        let points = [PointN::from([2.0, 0.0]), PointN::from([0.0, 2.0])];
        assert!(approx_eq(scale(&points), 70.0));
    }

    #[test]
    fn test_scale_of_origin_only_uses_default() {
        assert_eq!(scale(&[PointN::zeros(3)]), DEFAULT_SCALE);
    }

    #[test]
    fn test_scaled_geometry_fits_viewport() {
        for family in PolytopeFamily::ALL {
            for n in 1..=12 {
                let g = generate(family, n);
                let s = scale(g.vertices());
                let angles: Vec<PlaneAngle> = planes(n)
                    .into_iter()
                    .enumerate()
                    .map(|(k, p)| PlaneAngle::new(p, 0.1 * k as f64))
                    .collect();
                for p in project(g.vertices(), &angles, s) {
                    assert!(p.length() <= TARGET_RADIUS + 1e-6, "{:?} n = {}: {:?}", family, n, p);
                }
            }
        }
    }

    #[test]
    fn test_max_norm() {
        let points = [PointN::from([3.0, 4.0]), PointN::from([1.0, 1.0])];
        assert!(approx_eq(max_norm(&points), 5.0));
        assert_eq!(max_norm(&[]), 0.0);
    }
}
