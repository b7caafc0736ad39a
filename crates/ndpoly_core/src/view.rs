//! The polytope view
//!
//! A [`PolytopeView`] owns everything needed to draw one polytope: the
//! generated geometry, its viewport scale, and the rotation angles. Geometry
//! is regenerated wholesale on every family or dimension change; the scale is
//! recomputed from the unrotated vertices at the same time.

use bitflags::bitflags;
use ndpoly_math::{
    generate, project, scale, Edge, Point2, Polytope, PolytopeFamily, PolytopeGeometry,
    RotationPlane, MAX_DIMENSION, MIN_DIMENSION,
};
use crate::{Animator, RotationState, ViewError};

bitflags! {
    /// Flags indicating which parts of the view changed since the last frame
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Vertices, edges and scale were regenerated
        const GEOMETRY = 1 << 0;
        /// At least one rotation angle changed
        const ROTATION = 1 << 1;
        /// Everything needs redrawing
        const ALL = Self::GEOMETRY.bits() | Self::ROTATION.bits();
    }
}

/// One projected frame, ready to draw
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Projected and scaled vertex positions
    pub points: Vec<Point2>,
    /// Edges indexing into `points`
    pub edges: &'a [Edge],
    /// Description of the geometry, annotated if approximated
    pub description: String,
    /// Dimension of the polytope
    pub dimension: usize,
}

/// Current polytope, scale and rotation
pub struct PolytopeView {
    family: PolytopeFamily,
    geometry: PolytopeGeometry,
    scale: f64,
    rotation: RotationState,
    dirty: DirtyFlags,
}

impl PolytopeView {
    /// Create a view of `family` in dimension `n`
    pub fn new(family: PolytopeFamily, n: usize) -> Result<Self, ViewError> {
        check_dimension(n)?;
        let geometry = generate(family, n);
        let scale = scale(geometry.vertices());
        log_geometry(&geometry);
        Ok(Self {
            family,
            geometry,
            scale,
            rotation: RotationState::new(n),
            dirty: DirtyFlags::ALL,
        })
    }

    /// Current family
    #[inline]
    pub fn family(&self) -> PolytopeFamily {
        self.family
    }

    /// Current dimension
    #[inline]
    pub fn dimension(&self) -> usize {
        self.geometry.dimension()
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> &PolytopeGeometry {
        &self.geometry
    }

    /// Viewport scale of the current geometry
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current rotation angles
    #[inline]
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Mutable access to the rotation angles
    ///
    /// Marks the rotation dirty.
    pub fn rotation_mut(&mut self) -> &mut RotationState {
        self.dirty |= DirtyFlags::ROTATION;
        &mut self.rotation
    }

    /// Advance the angles by one animator step
    ///
    /// Marks the rotation dirty only if an angle moved.
    pub fn advance(&mut self, animator: &Animator, dt: f64) -> bool {
        let moved = animator.tick(&mut self.rotation, dt);
        if moved {
            self.dirty |= DirtyFlags::ROTATION;
        }
        moved
    }

    /// Change dimension, keeping the angles of surviving planes
    ///
    /// Out-of-range dimensions are rejected and the view is left unchanged.
    pub fn set_dimension(&mut self, n: usize) -> Result<(), ViewError> {
        self.reshape(self.family, n)
    }

    /// Change family at the current dimension
    pub fn set_family(&mut self, family: PolytopeFamily) {
        let n = self.dimension();
        if let Err(e) = self.reshape(family, n) {
            log::error!("Keeping {}: {}", self.geometry.description(), e);
        }
    }

    /// Switch to `family` at dimension `n`, regenerating at most once
    pub(crate) fn reshape(&mut self, family: PolytopeFamily, n: usize) -> Result<(), ViewError> {
        check_dimension(n)?;
        if family == self.family && n == self.dimension() {
            return Ok(());
        }
        if family != self.family {
            log::info!("Changing family {} -> {}", self.family, family);
        }
        if n != self.dimension() {
            log::info!("Changing dimension {} -> {}", self.dimension(), n);
            self.rotation.resize(n);
        }
        self.regenerate(family, n);
        Ok(())
    }

    /// Set the angle of one plane; returns false if the plane does not exist
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f64) -> bool {
        let changed = self.rotation.set_angle(plane, angle);
        if changed {
            self.dirty |= DirtyFlags::ROTATION;
        }
        changed
    }

    /// Rotate, project and scale the current geometry
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            points: project(self.geometry.vertices(), self.rotation.plane_angles(), self.scale),
            edges: self.geometry.edges(),
            description: self.geometry.description(),
            dimension: self.dimension(),
        }
    }

    /// What changed since the last [`PolytopeView::clear_dirty`]
    #[inline]
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Whether anything needs redrawing
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Mark everything as drawn
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }

    /// Replace the geometry for `family` at dimension `n`
    fn regenerate(&mut self, family: PolytopeFamily, n: usize) {
        let geometry = generate(family, n);
        self.scale = scale(geometry.vertices());
        log_geometry(&geometry);
        self.family = family;
        self.geometry = geometry;
        self.dirty |= DirtyFlags::GEOMETRY;
    }
}

fn check_dimension(n: usize) -> Result<(), ViewError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&n) {
        Ok(())
    } else {
        Err(ViewError::DimensionOutOfRange {
            requested: n,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        })
    }
}

fn log_geometry(geometry: &PolytopeGeometry) {
    log::info!(
        "Generated {}: {} vertices, {} edges",
        geometry.description(),
        geometry.vertex_count(),
        geometry.edge_count()
    );
    if geometry.is_capped() {
        log::warn!(
            "{}-cube approximated: only {} of {} axes populated",
            geometry.dimension(),
            geometry.effective_dimension(),
            geometry.dimension()
        );
    }
}
