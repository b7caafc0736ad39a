//! Polytope families and generated geometry
//!
//! The three regular polytope families that exist in every dimension:
//! the simplex, the hypercube, and the orthoplex (cross-polytope).

use serde::{Serialize, Deserialize};
use crate::{Edge, PointN, Polytope};

/// Smallest dimension offered to viewers
pub const MIN_DIMENSION: usize = 1;

/// Largest dimension offered to viewers
pub const MAX_DIMENSION: usize = 17;

/// Highest dimension for which hypercube vertices are generated in full
///
/// A hypercube has `2^n` vertices; above this cap only the first
/// `CUBE_DIMENSION_CAP` axes are populated.
pub const CUBE_DIMENSION_CAP: usize = 11;

/// A family of regular polytopes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolytopeFamily {
    /// n-simplex: n+1 mutually adjacent vertices
    #[default]
    Simplex,
    /// n-cube: 2^n vertices at ±0.5 on every axis
    Cube,
    /// n-orthoplex: 2n vertices at ±1 on each axis
    Orthoplex,
}

impl PolytopeFamily {
    /// All families, in display order
    pub const ALL: [PolytopeFamily; 3] = [
        PolytopeFamily::Simplex,
        PolytopeFamily::Cube,
        PolytopeFamily::Orthoplex,
    ];

    /// Human readable family name
    pub fn name(&self) -> &'static str {
        match self {
            PolytopeFamily::Simplex => "Simplex",
            PolytopeFamily::Cube => "Hypercube",
            PolytopeFamily::Orthoplex => "Orthoplex",
        }
    }

    /// Suffix used in descriptions such as "4-cube"
    fn suffix(&self) -> &'static str {
        match self {
            PolytopeFamily::Simplex => "simplex",
            PolytopeFamily::Cube => "cube",
            PolytopeFamily::Orthoplex => "orthoplex",
        }
    }

    /// Generate this family's geometry in dimension `n`
    pub fn generate(&self, n: usize) -> PolytopeGeometry {
        match self {
            PolytopeFamily::Simplex => crate::simplex::simplex(n),
            PolytopeFamily::Cube => crate::hypercube::hypercube(n),
            PolytopeFamily::Orthoplex => crate::orthoplex::orthoplex(n),
        }
    }
}

impl std::fmt::Display for PolytopeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PolytopeFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simplex" => Ok(PolytopeFamily::Simplex),
            "cube" | "hypercube" => Ok(PolytopeFamily::Cube),
            "orthoplex" | "cross-polytope" => Ok(PolytopeFamily::Orthoplex),
            other => Err(format!("unknown polytope family '{}'", other)),
        }
    }
}

/// Generate the geometry of `family` in dimension `n`
///
/// Pure and deterministic. `n == 0` yields an empty geometry.
#[inline]
pub fn generate(family: PolytopeFamily, n: usize) -> PolytopeGeometry {
    family.generate(n)
}

/// Vertices and 1-skeleton edges of one family at one dimension
///
/// Created wholesale by a generator; a dimension change means a new value,
/// never an update of this one.
#[derive(Clone, Debug, PartialEq)]
pub struct PolytopeGeometry {
    family: PolytopeFamily,
    /// Requested dimension (length of every vertex)
    dimension: usize,
    /// Number of axes actually populated
    effective_dimension: usize,
    vertices: Vec<PointN>,
    edges: Vec<Edge>,
}

impl PolytopeGeometry {
    pub(crate) fn new(
        family: PolytopeFamily,
        dimension: usize,
        effective_dimension: usize,
        vertices: Vec<PointN>,
        edges: Vec<Edge>,
    ) -> Self {
        debug_assert!(edges.iter().all(|e| e.source < e.target && e.target < vertices.len()));
        Self {
            family,
            dimension,
            effective_dimension,
            vertices,
            edges,
        }
    }

    /// Empty geometry for a dimension with no polytope
    pub(crate) fn empty(family: PolytopeFamily, dimension: usize) -> Self {
        Self::new(family, dimension, 0, Vec::new(), Vec::new())
    }

    /// The family this geometry belongs to
    #[inline]
    pub fn family(&self) -> PolytopeFamily {
        self.family
    }

    /// Number of axes actually populated by the generator
    ///
    /// Equal to [`Polytope::dimension`] unless the hypercube cap applied.
    #[inline]
    pub fn effective_dimension(&self) -> usize {
        self.effective_dimension
    }

    /// Whether the generator had to cap the dimension
    #[inline]
    pub fn is_capped(&self) -> bool {
        self.effective_dimension < self.dimension
    }

    /// Short description, annotated when the geometry is an approximation
    pub fn description(&self) -> String {
        if self.is_capped() {
            format!(
                "{}-{} (capped to {} dimensions for performance)",
                self.dimension,
                self.family.suffix(),
                self.effective_dimension
            )
        } else {
            format!("{}-{}", self.dimension, self.family.suffix())
        }
    }

    /// Split into owned vertices and edges
    pub fn into_parts(self) -> (Vec<PointN>, Vec<Edge>) {
        (self.vertices, self.edges)
    }
}

impl Polytope for PolytopeGeometry {
    fn vertices(&self) -> &[PointN] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
