//! Edges and the polytope trait
//!
//! A polytope is viewed only through its 1-skeleton: a vertex list and the
//! edges between those vertices. Shapes are pure geometric data - no colors,
//! styling, or rendering info.

use serde::{Serialize, Deserialize};
use crate::PointN;

/// An edge defined by two vertex indices
///
/// Indices refer to the vertex list of the geometry that produced the edge.
/// Edges built with [`Edge::new`] are canonical: `source < target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller vertex index
    pub source: usize,
    /// Larger vertex index
    pub target: usize,
}

impl Edge {
    /// Create an edge in canonical order
    ///
    /// Returns `None` for a self-loop.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { source: a, target: b }),
            std::cmp::Ordering::Greater => Some(Self { source: b, target: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Get the endpoints as a sorted pair
    #[inline]
    pub fn canonical(&self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }

    /// Whether `index` is one of the endpoints
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.source == index || self.target == index
    }
}

/// Trait for shapes viewed as a vertex set plus 1-skeleton
///
/// Every edge index must be valid for [`Polytope::vertices`] of the same value.
pub trait Polytope: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[PointN];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Number of coordinates per vertex
    fn dimension(&self) -> usize;

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new_orders_indices() {
        let e = Edge::new(5, 2).unwrap();
        assert_eq!(e.source, 2);
        assert_eq!(e.target, 5);
    }

    #[test]
    fn test_edge_rejects_self_loop() {
        assert!(Edge::new(3, 3).is_none());
    }

    #[test]
    fn test_edge_canonical() {
        let e = Edge { source: 7, target: 1 };
        assert_eq!(e.canonical(), (1, 7));
    }

    #[test]
    fn test_edge_contains() {
        let e = Edge::new(0, 4).unwrap();
        assert!(e.contains(0));
        assert!(e.contains(4));
        assert!(!e.contains(2));
    }
}
