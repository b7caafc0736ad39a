//! n-Orthoplex (cross-polytope) geometry
//!
//! One vertex pair per axis at +1 and -1. Every vertex is adjacent to every
//! other vertex except its own negation.

use crate::{Edge, PointN, PolytopeFamily, PolytopeGeometry};

/// Generate the n-orthoplex
///
/// `n == 0` yields an empty geometry.
pub fn orthoplex(n: usize) -> PolytopeGeometry {
    if n == 0 {
        return PolytopeGeometry::empty(PolytopeFamily::Orthoplex, n);
    }

    let mut vertices = Vec::with_capacity(2 * n);
    for axis in 0..n {
        let positive = PointN::unit(n, axis);
        let mut negative = PointN::zeros(n);
        negative[axis] = -1.0;
        vertices.push(positive);
        vertices.push(negative);
    }

    let count = vertices.len();
    let mut edges = Vec::with_capacity(count * (count - 1) / 2 - n);
    for a in 0..count {
        for b in (a + 1)..count {
            if !vertices[a].is_opposite(&vertices[b]) {
                edges.push(Edge { source: a, target: b });
            }
        }
    }

    PolytopeGeometry::new(PolytopeFamily::Orthoplex, n, n, vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Polytope;

    #[test]
    fn test_orthoplex_counts() {
        for n in 1..=17 {
            let o = orthoplex(n);
            assert_eq!(o.vertex_count(), 2 * n, "n = {}", n);
            assert_eq!(o.edge_count(), 2 * n * (2 * n - 1) / 2 - n, "n = {}", n);
        }
    }

    #[test]
    fn test_no_edge_joins_opposites() {
        let o = orthoplex(5);
        for e in o.edges() {
            let a = &o.vertices()[e.source];
            let b = &o.vertices()[e.target];
            assert!(!a.is_opposite(b), "edge {:?} joins opposite vertices", e);
        }
    }

    #[test]
    fn test_one_dimensional_orthoplex_has_no_edges() {
        let o = orthoplex(1);
        assert_eq!(o.vertex_count(), 2);
        assert_eq!(o.edge_count(), 0);
    }

    #[test]
    fn test_octahedron() {
        let o = orthoplex(3);
        assert_eq!(o.vertex_count(), 6);
        assert_eq!(o.edge_count(), 12);
        assert_eq!(o.vertices()[0].coords(), &[1.0, 0.0, 0.0]);
        assert_eq!(o.vertices()[1].coords(), &[-1.0, 0.0, 0.0]);
        // Every vertex has degree 2n - 2
        for v in 0..6 {
            let degree = o.edges().iter().filter(|e| e.contains(v)).count();
            assert_eq!(degree, 4);
        }
    }
}
