//! Saveable view state
//!
//! A snapshot records the family, dimension and plane angles so a view can be
//! restored later. Snapshots are stored as RON.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use ndpoly_math::{PlaneAngle, PolytopeFamily};
use crate::{PolytopeView, ViewError};

/// Serializable view state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Polytope family
    pub family: PolytopeFamily,
    /// Polytope dimension
    pub dimension: usize,
    /// Plane angles in radians
    #[serde(default)]
    pub angles: Vec<PlaneAngle>,
}

impl ViewSnapshot {
    /// Serialize to a RON string
    pub fn to_ron(&self) -> Result<String, ViewError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Parse from a RON string
    pub fn from_ron(s: &str) -> Result<Self, ViewError> {
        Ok(ron::from_str(s)?)
    }

    /// Load a snapshot from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ViewError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Save a snapshot to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ViewError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}

impl PolytopeView {
    /// Capture the current view state
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            family: self.family(),
            dimension: self.dimension(),
            angles: self.rotation().plane_angles().to_vec(),
        }
    }

    /// Restore a captured state
    ///
    /// The dimension is validated first; on error the view is unchanged.
    /// Angles for planes that do not exist in the snapshot's dimension are
    /// ignored, and planes missing from the snapshot keep their angle.
    pub fn restore(&mut self, snapshot: &ViewSnapshot) -> Result<(), ViewError> {
        self.reshape(snapshot.family, snapshot.dimension)?;
        for pa in &snapshot.angles {
            if !self.set_angle(pa.plane, pa.angle) {
                log::debug!("Ignoring snapshot angle for missing plane {}", pa.plane);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndpoly_math::{Polytope, RotationPlane};

    #[test]
    fn test_ron_round_trip_keeps_angles() {
        let mut view = PolytopeView::new(PolytopeFamily::Cube, 4).unwrap();
        view.set_angle(RotationPlane::new(1, 3).unwrap(), 0.625);
        let snapshot = view.snapshot();

        let text = snapshot.to_ron().unwrap();
        assert!(text.contains("cube"));
        let parsed = ViewSnapshot::from_ron(&text).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_restore() {
        let snapshot = ViewSnapshot {
            family: PolytopeFamily::Orthoplex,
            dimension: 5,
            angles: vec![
                PlaneAngle::new(RotationPlane::new(0, 4).unwrap(), 1.5),
                PlaneAngle::new(RotationPlane::new(2, 9).unwrap(), 0.5),
            ],
        };
        let mut view = PolytopeView::new(PolytopeFamily::Simplex, 3).unwrap();
        view.restore(&snapshot).unwrap();
        assert_eq!(view.family(), PolytopeFamily::Orthoplex);
        assert_eq!(view.dimension(), 5);
        assert_eq!(view.rotation().angle(RotationPlane::new(0, 4).unwrap()), Some(1.5));
    }

    #[test]
    fn test_restore_switches_family_and_dimension_in_one_step() {
        let snapshot = ViewSnapshot {
            family: PolytopeFamily::Cube,
            dimension: 5,
            angles: Vec::new(),
        };
        let mut view = PolytopeView::new(PolytopeFamily::Simplex, 3).unwrap();
        view.clear_dirty();
        view.restore(&snapshot).unwrap();
        assert_eq!(view.geometry().family(), PolytopeFamily::Cube);
        assert_eq!(view.geometry().vertex_count(), 32);
        assert_eq!(view.geometry().edge_count(), 80);
        assert_eq!(view.rotation().len(), 10);
    }

    #[test]
    fn test_restore_rejects_bad_dimension() {
        let snapshot = ViewSnapshot {
            family: PolytopeFamily::Cube,
            dimension: 99,
            angles: Vec::new(),
        };
        let mut view = PolytopeView::new(PolytopeFamily::Simplex, 3).unwrap();
        assert!(view.restore(&snapshot).is_err());
        assert_eq!(view.family(), PolytopeFamily::Simplex);
        assert_eq!(view.dimension(), 3);
    }

    #[test]
    fn test_from_ron_reports_parse_errors() {
        let err = ViewSnapshot::from_ron("ViewSnapshot(family: dodecaplex)").unwrap_err();
        assert!(matches!(err, ViewError::Parse(_)));
    }
}
