//! n-Simplex geometry
//!
//! The n-simplex is built from the origin plus the n standard basis points,
//! then shifted so its centroid sits at the origin. Every pair of vertices is
//! joined by an edge, giving `(n+1)·n/2` edges.

use crate::{Edge, PointN, PolytopeFamily, PolytopeGeometry};

/// Generate the n-simplex
///
/// `n == 0` yields an empty geometry.
pub fn simplex(n: usize) -> PolytopeGeometry {
    if n == 0 {
        return PolytopeGeometry::empty(PolytopeFamily::Simplex, n);
    }

    let mut vertices = Vec::with_capacity(n + 1);
    vertices.push(PointN::zeros(n));
    vertices.extend((0..n).map(|axis| PointN::unit(n, axis)));

    // Re-center on the centroid so rotation spins the shape in place
    let centroid = centroid(&vertices, n);
    for v in &mut vertices {
        for (c, m) in v.coords_mut().iter_mut().zip(&centroid) {
            *c -= m;
        }
    }

    let count = vertices.len();
    let mut edges = Vec::with_capacity(count * (count - 1) / 2);
    for a in 0..count {
        for b in (a + 1)..count {
            edges.push(Edge { source: a, target: b });
        }
    }

    PolytopeGeometry::new(PolytopeFamily::Simplex, n, n, vertices, edges)
}

/// Per-coordinate arithmetic mean of `points`
fn centroid(points: &[PointN], n: usize) -> Vec<f64> {
    let mut sum = vec![0.0; n];
    for p in points {
        for (s, c) in sum.iter_mut().zip(p.coords()) {
            *s += c;
        }
    }
    let count = points.len() as f64;
    sum.iter().map(|s| s / count).collect()
}
