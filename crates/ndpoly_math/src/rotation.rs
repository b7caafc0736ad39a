//! Rotation planes in n dimensions
//!
//! In n dimensions, rotations happen in planes rather than around axes.
//! Each pair of coordinate axes spans one independent plane, so there are
//! `n·(n-1)/2` of them: 1 in 2D, 3 in 3D, 6 in 4D (XY, XZ, XW, YZ, YW, ZW).
//!
//! Planar rotations do not commute, so they are always composed in the
//! enumerator's order: ascending first axis, then ascending second axis.

use serde::{Serialize, Deserialize};
use crate::PointN;

/// Axis letters for the first 17 axes
const AXIS_NAMES: [&str; 17] = [
    "X", "Y", "Z", "W", "V", "U", "T", "S", "R", "Q", "P", "O", "N", "M", "L", "K", "J",
];

/// Display name of a coordinate axis ("X", "Y", ..., then "A17", "A18", ...)
pub fn axis_name(axis: usize) -> String {
    match AXIS_NAMES.get(axis) {
        Some(name) => (*name).to_string(),
        None => format!("A{}", axis),
    }
}

/// A rotation plane spanned by axes `i` and `j`, with `i < j`
///
/// Ordering follows the enumerator: by `i`, then by `j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RotationPlane {
    pub i: usize,
    pub j: usize,
}

impl RotationPlane {
    /// Create the plane spanned by axes `a` and `b`, in canonical order
    ///
    /// Returns `None` if both axes are the same.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { i: a, j: b }),
            std::cmp::Ordering::Greater => Some(Self { i: b, j: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Whether this plane exists in `n` dimensions
    #[inline]
    pub fn fits(&self, n: usize) -> bool {
        self.j < n
    }

    /// Label such as "XY" or "ZW"
    pub fn label(&self) -> String {
        format!("{}{}", axis_name(self.i), axis_name(self.j))
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A rotation plane together with its current angle in radians
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneAngle {
    pub plane: RotationPlane,
    pub angle: f64,
}

impl PlaneAngle {
    /// Create a new plane/angle pair
    #[inline]
    pub fn new(plane: RotationPlane, angle: f64) -> Self {
        Self { plane, angle }
    }
}

/// Enumerate every rotation plane of dimension `n`
///
/// Ordered by ascending `i`, then ascending `j`. Empty for `n < 2`.
pub fn planes(n: usize) -> Vec<RotationPlane> {
    let mut result = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            result.push(RotationPlane { i, j });
        }
    }
    result
}

/// Rotate a copy of `point` through every plane in `plane_angles`
///
/// Planes are applied in enumerator order regardless of slice order. A plane
/// naming an axis the point does not have is skipped for that point.
pub fn rotate_point(point: &PointN, plane_angles: &[PlaneAngle]) -> PointN {
    let ordered = in_enumerator_order(plane_angles);
    let rotations = precompute(&ordered);
    rotate_with(point, &rotations)
}

/// Sort plane angles into enumerator order without touching the input
pub(crate) fn in_enumerator_order(plane_angles: &[PlaneAngle]) -> Vec<PlaneAngle> {
    let mut ordered = plane_angles.to_vec();
    ordered.sort_by_key(|pa| pa.plane);
    ordered
}

/// A plane with its angle already reduced to (sin, cos)
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlaneRotation {
    plane: RotationPlane,
    sin: f64,
    cos: f64,
}

pub(crate) fn precompute(ordered: &[PlaneAngle]) -> Vec<PlaneRotation> {
    ordered
        .iter()
        .filter(|pa| pa.angle != 0.0)
        .map(|pa| {
            let (sin, cos) = pa.angle.sin_cos();
            PlaneRotation { plane: pa.plane, sin, cos }
        })
        .collect()
}

pub(crate) fn rotate_with(point: &PointN, rotations: &[PlaneRotation]) -> PointN {
    let mut v = point.clone();
    let n = v.dim();
    for r in rotations {
        if !r.plane.fits(n) {
            continue;
        }
        let (i, j) = (r.plane.i, r.plane.j);
        let old_i = v[i];
        let old_j = v[j];
        v[i] = r.cos * old_i - r.sin * old_j;
        v[j] = r.sin * old_i + r.cos * old_j;
    }
    v
}
