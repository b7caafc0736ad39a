//! n-Cube (hypercube) geometry
//!
//! Vertex `i` has coordinate `j` at +0.5 when bit `j` of `i` is set and at
//! -0.5 otherwise, the same binary counting used for the tesseract.
//! Neighbours differ in exactly one bit, so edges come from flipping each bit
//! in turn instead of comparing every vertex pair.
//!
//! Above [`CUBE_DIMENSION_CAP`] only the first `CUBE_DIMENSION_CAP` axes are
//! populated; the remaining coordinates stay at 0 so every vertex still has
//! length n.

use crate::{Edge, PointN, PolytopeFamily, PolytopeGeometry, CUBE_DIMENSION_CAP};

/// Half the side length of the generated hypercube
const HALF_SIZE: f64 = 0.5;

/// Generate the n-cube, capped at [`CUBE_DIMENSION_CAP`] populated axes
///
/// `n == 0` yields an empty geometry.
pub fn hypercube(n: usize) -> PolytopeGeometry {
    if n == 0 {
        return PolytopeGeometry::empty(PolytopeFamily::Cube, n);
    }

    let effective = n.min(CUBE_DIMENSION_CAP);
    let count = 1usize << effective;

    let vertices: Vec<PointN> = (0..count)
        .map(|i| {
            let mut v = PointN::zeros(n);
            for axis in 0..effective {
                v[axis] = if i & (1 << axis) != 0 { HALF_SIZE } else { -HALF_SIZE };
            }
            v
        })
        .collect();

    let mut edges = Vec::with_capacity(effective * (count >> 1));
    for i in 0..count {
        for axis in 0..effective {
            let neighbor = i ^ (1 << axis);
            if i < neighbor {
                edges.push(Edge { source: i, target: neighbor });
            }
        }
    }

    PolytopeGeometry::new(PolytopeFamily::Cube, n, effective, vertices, edges)
}
