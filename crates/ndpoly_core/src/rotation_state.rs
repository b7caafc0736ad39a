//! Per-plane rotation angles
//!
//! Angles are keyed by plane identity `(i, j)`, not by position, so a plane
//! that exists before and after a dimension change keeps its angle.

use std::f64::consts::TAU;
use ndpoly_math::{planes, PlaneAngle, RotationPlane};

/// Wrap an angle into `[0, 2π)`
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Current angle of every rotation plane of one dimension
///
/// Always holds exactly the planes of `planes(dimension)`, in that order.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationState {
    dimension: usize,
    angles: Vec<PlaneAngle>,
}

impl RotationState {
    /// Create a state for dimension `n` with every angle at 0
    pub fn new(n: usize) -> Self {
        Self {
            dimension: n,
            angles: planes(n).into_iter().map(|p| PlaneAngle::new(p, 0.0)).collect(),
        }
    }

    /// Dimension the plane set was built for
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of planes
    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether there are no planes (dimension below 2)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Rebuild the plane set for dimension `n`
    ///
    /// Planes present in both dimensions keep their angle; new planes start at 0.
    pub fn resize(&mut self, n: usize) {
        if n == self.dimension {
            return;
        }
        let angles = planes(n)
            .into_iter()
            .map(|p| PlaneAngle::new(p, self.angle(p).unwrap_or(0.0)))
            .collect();
        self.dimension = n;
        self.angles = angles;
    }

    /// Angle of `plane`, or `None` if the plane does not exist here
    pub fn angle(&self, plane: RotationPlane) -> Option<f64> {
        self.find(plane).map(|k| self.angles[k].angle)
    }

    /// Set the angle of `plane`, normalized into `[0, 2π)`
    ///
    /// Returns false if the plane does not exist in this dimension.
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f64) -> bool {
        match self.find(plane) {
            Some(k) => {
                self.angles[k].angle = normalize_angle(angle);
                true
            }
            None => false,
        }
    }

    /// Advance plane `k` by `delta_k` for every k
    ///
    /// `deltas` is indexed like [`RotationState::plane_angles`]; missing
    /// entries leave the plane unchanged.
    pub fn advance(&mut self, deltas: impl IntoIterator<Item = f64>) {
        for (pa, delta) in self.angles.iter_mut().zip(deltas) {
            pa.angle = normalize_angle(pa.angle + delta);
        }
    }

    /// Set every angle back to 0
    pub fn reset(&mut self) {
        for pa in &mut self.angles {
            pa.angle = 0.0;
        }
    }

    /// Planes and angles in enumerator order
    #[inline]
    pub fn plane_angles(&self) -> &[PlaneAngle] {
        &self.angles
    }

    fn find(&self, plane: RotationPlane) -> Option<usize> {
        // Planes are stored sorted
        self.angles.binary_search_by_key(&plane, |pa| pa.plane).ok()
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    fn plane(i: usize, j: usize) -> RotationPlane {
        RotationPlane::new(i, j).unwrap()
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < EPSILON);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < EPSILON);
        assert_eq!(normalize_angle(TAU), 0.0);
        let tiny = normalize_angle(-1e-20);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_new_state_is_zeroed() {
        let s = RotationState::new(4);
        assert_eq!(s.len(), 6);
        assert!(s.plane_angles().iter().all(|pa| pa.angle == 0.0));
    }

    #[test]
    fn test_low_dimensions_have_no_planes() {
        assert!(RotationState::new(0).is_empty());
        assert!(RotationState::new(1).is_empty());
        assert_eq!(RotationState::new(2).len(), 1);
    }

    #[test]
    fn test_set_angle() {
        let mut s = RotationState::new(3);
        assert!(s.set_angle(plane(1, 2), 0.75));
        assert_eq!(s.angle(plane(1, 2)), Some(0.75));
        assert!(!s.set_angle(plane(0, 3), 1.0));
        assert_eq!(s.angle(plane(0, 3)), None);
    }

    #[test]
    fn test_set_angle_normalizes() {
        let mut s = RotationState::new(2);
        s.set_angle(plane(0, 1), -PI);
        assert!((s.angle(plane(0, 1)).unwrap() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_resize_preserves_surviving_planes() {
        let mut s = RotationState::new(3);
        s.set_angle(plane(0, 1), 1.25);
        s.set_angle(plane(1, 2), 0.5);

        s.resize(5);
        assert_eq!(s.len(), 10);
        assert_eq!(s.angle(plane(0, 1)), Some(1.25));
        assert_eq!(s.angle(plane(1, 2)), Some(0.5));
        assert_eq!(s.angle(plane(3, 4)), Some(0.0));
        s.set_angle(plane(3, 4), 2.0);

        s.resize(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.angle(plane(0, 1)), Some(1.25));
        assert_eq!(s.angle(plane(1, 2)), Some(0.5));
        assert_eq!(s.angle(plane(3, 4)), None);
    }

    #[test]
    fn test_resize_keeps_enumerator_order() {
        let mut s = RotationState::new(2);
        s.resize(4);
        let order: Vec<RotationPlane> = s.plane_angles().iter().map(|pa| pa.plane).collect();
        assert_eq!(order, planes(4));
    }

    #[test]
    fn test_advance_wraps() {
        let mut s = RotationState::new(3);
        s.advance([TAU - 0.1 + 0.3, 0.2]);
        let a = s.plane_angles();
        assert!((a[0].angle - 0.2).abs() < 1e-9);
        assert!((a[1].angle - 0.2).abs() < EPSILON);
        assert_eq!(a[2].angle, 0.0);
    }

    #[test]
    fn test_reset() {
        let mut s = RotationState::new(4);
        s.advance(std::iter::repeat(0.3));
        s.reset();
        assert!(s.plane_angles().iter().all(|pa| pa.angle == 0.0));
    }
}
