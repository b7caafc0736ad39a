//! n-dimensional and projected 2D point types

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// A point with an arbitrary number of coordinates
///
/// Generators produce these and never touch them again; rotation always
/// works on a copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointN {
    coords: Vec<f64>,
}

impl PointN {
    /// Create a point from its coordinates
    #[inline]
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// The origin in `n` dimensions
    #[inline]
    pub fn zeros(n: usize) -> Self {
        Self { coords: vec![0.0; n] }
    }

    /// The standard basis point along `axis` in `n` dimensions
    ///
    /// If `axis >= n` the result is the origin.
    pub fn unit(n: usize, axis: usize) -> Self {
        let mut p = Self::zeros(n);
        if let Some(c) = p.coords.get_mut(axis) {
            *c = 1.0;
        }
        p
    }

    /// Number of coordinates
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate `axis`, treating a missing coordinate as 0
    #[inline]
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords.get(axis).copied().unwrap_or(0.0)
    }

    /// Borrow all coordinates
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Mutably borrow all coordinates
    #[inline]
    pub fn coords_mut(&mut self) -> &mut [f64] {
        &mut self.coords
    }

    /// Consume the point, returning its coordinates
    #[inline]
    pub fn into_coords(self) -> Vec<f64> {
        self.coords
    }

    /// Euclidean length squared (faster than length)
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.coords.iter().map(|c| c * c).sum()
    }

    /// Euclidean length
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Whether `other` is exactly this point negated
    ///
    /// Points of different dimension are never opposite.
    pub fn is_opposite(&self, other: &Self) -> bool {
        self.dim() == other.dim()
            && self.coords.iter().zip(&other.coords).all(|(a, b)| *a == -*b)
    }

    /// Project onto the first two coordinates
    #[inline]
    pub fn xy(&self) -> Point2 {
        Point2::new(self.coord(0), self.coord(1))
    }
}

impl From<Vec<f64>> for PointN {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for PointN {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl std::ops::Index<usize> for PointN {
    type Output = f64;
    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl std::ops::IndexMut<usize> for PointN {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.coords[axis]
    }
}

/// A projected point in the viewing plane
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Point2
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Mul<f64> for Point2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit() {
        let p = PointN::unit(3, 1);
        assert_eq!(p.coords(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_unit_out_of_range_is_origin() {
        let p = PointN::unit(2, 5);
        assert_eq!(p.coords(), &[0.0, 0.0]);
    }

    #[test]
    fn test_missing_coord_is_zero() {
        let p = PointN::from([4.0]);
        assert_eq!(p.coord(0), 4.0);
        assert_eq!(p.coord(1), 0.0);
        assert_eq!(p.xy(), Point2::new(4.0, 0.0));
    }

    #[test]
    fn test_norm() {
        let p = PointN::from([3.0, 4.0, 0.0]);
        assert_eq!(p.norm_squared(), 25.0);
        assert_eq!(p.norm(), 5.0);
    }

    #[test]
    fn test_is_opposite() {
        let a = PointN::from([1.0, 0.0]);
        let b = PointN::from([-1.0, 0.0]);
        let c = PointN::from([0.0, -1.0]);
        assert!(a.is_opposite(&b));
        assert!(!a.is_opposite(&c));
        assert!(!a.is_opposite(&PointN::from([-1.0])));
    }

    #[test]
    fn test_point2_scale() {
        let p = Point2::new(1.0, -2.0) * 3.0;
        assert_eq!(p, Point2::new(3.0, -6.0));
    }

    #[test]
    fn test_point2_is_pod() {
        let points = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let raw: &[f64] = bytemuck::cast_slice(&points);
        assert_eq!(raw, &[1.0, 2.0, 3.0, 4.0]);
    }
}
