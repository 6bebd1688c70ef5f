//! Thin wrapper around proj4rs for EPSG:4326 ↔ UTM transforms.
//!
//! proj4rs works in radians for geographic CRS; callers here work in degrees
//! (lon, lat) and metres (easting, northing). This wrapper auto-converts and
//! checks transform outputs for finiteness.

use proj4rs::Proj;

use crate::error::ProjError;
use crate::proj::zone::ProjectedCrs;

/// Forward/inverse transform between geographic degrees and one UTM zone.
///
/// Built once per resampling call from the selected `ProjectedCrs` and used
/// for both directions, so forward and inverse are guaranteed to agree on
/// the zone.
pub struct CrsTransform {
    geo: Proj,
    utm: Proj,
}

impl CrsTransform {
    /// Construct the transform pair for the given UTM CRS.
    pub fn new(crs: ProjectedCrs) -> Result<Self, ProjError> {
        let geo = Proj::from_user_string("+proj=longlat +datum=WGS84 +no_defs")
            .map_err(|e| ProjError::UnknownCrs(format!("EPSG:4326: {e}")))?;
        let utm = Proj::from_user_string(&crs.proj_string())
            .map_err(|e| ProjError::UnknownCrs(format!("{crs}: {e}")))?;
        Ok(Self { geo, utm })
    }

    /// Forward: (lon°, lat°) → (easting m, northing m).
    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let mut point = (lon.to_radians(), lat.to_radians());
        proj4rs::transform::transform(&self.geo, &self.utm, &mut point)
            .map_err(|e| ProjError::TransformFailed(e.to_string()))?;
        check_finite(point)?;
        Ok(point)
    }

    /// Inverse: (easting m, northing m) → (lon°, lat°).
    pub fn unproject(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let mut point = (x, y);
        proj4rs::transform::transform(&self.utm, &self.geo, &mut point)
            .map_err(|e| ProjError::TransformFailed(e.to_string()))?;
        check_finite(point)?;
        Ok((point.0.to_degrees(), point.1.to_degrees()))
    }

    /// Batch forward transform, degrees → metres in-place.
    pub fn project_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            c.0 = c.0.to_radians();
            c.1 = c.1.to_radians();
        }
        proj4rs::transform::transform(&self.geo, &self.utm, coords)
            .map_err(|e| ProjError::TransformFailed(e.to_string()))?;
        for &c in coords.iter() {
            check_finite(c)?;
        }
        Ok(())
    }

    /// Batch inverse transform, metres → degrees in-place.
    pub fn unproject_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        proj4rs::transform::transform(&self.utm, &self.geo, coords)
            .map_err(|e| ProjError::TransformFailed(e.to_string()))?;
        for c in coords.iter_mut() {
            check_finite(*c)?;
            c.0 = c.0.to_degrees();
            c.1 = c.1.to_degrees();
        }
        Ok(())
    }
}

fn check_finite(point: (f64, f64)) -> Result<(), ProjError> {
    if point.0.is_finite() && point.1.is_finite() {
        Ok(())
    } else {
        Err(ProjError::TransformFailed(format!(
            "non-finite transform result ({}, {})",
            point.0, point.1
        )))
    }
}
