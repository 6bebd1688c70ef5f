//! Input and output geometry types.
//!
//! `RouteGeometry` is the dense elevation-tagged polyline as delivered by the
//! routing collaborator (GeoJSON-style `[lon, lat, elev]` vertex order).
//! `Sample` is one row of the resampled output; its field order matches the
//! CSV column order `distance_m, latitude, longitude, elevation_m`.

use crate::error::ResampleError;

/// A single vertex of the dense input geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutePoint {
    /// Longitude in degrees, [-180, 180].
    pub lon: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Elevation in metres.
    pub elevation: f64,
}

impl RoutePoint {
    pub fn new(lon: f64, lat: f64, elevation: f64) -> Self {
        Self {
            lon,
            lat,
            elevation,
        }
    }
}

/// A validated, ordered route polyline with at least two vertices.
///
/// Consumed read-only by the resampler; construction is the only place
/// coordinate domains are checked.
#[derive(Clone, Debug)]
pub struct RouteGeometry {
    points: Vec<RoutePoint>,
}

impl RouteGeometry {
    /// Validate and wrap a vertex sequence.
    ///
    /// Fails with `InvalidGeometry` if fewer than two vertices are given or
    /// any coordinate is non-finite or outside its valid domain.
    pub fn new(points: Vec<RoutePoint>) -> Result<Self, ResampleError> {
        if points.len() < 2 {
            return Err(ResampleError::InvalidGeometry(format!(
                "need at least 2 vertices, got {}",
                points.len()
            )));
        }
        for (i, p) in points.iter().enumerate() {
            if !p.lon.is_finite() || !p.lat.is_finite() || !p.elevation.is_finite() {
                return Err(ResampleError::InvalidGeometry(format!(
                    "non-finite coordinate at vertex {i}"
                )));
            }
            if !(-180.0..=180.0).contains(&p.lon) {
                return Err(ResampleError::InvalidGeometry(format!(
                    "longitude {} out of range at vertex {i}",
                    p.lon
                )));
            }
            if !(-90.0..=90.0).contains(&p.lat) {
                return Err(ResampleError::InvalidGeometry(format!(
                    "latitude {} out of range at vertex {i}",
                    p.lat
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build from `(lon, lat, elevation)` triples, the layout of a GeoJSON
    /// LineString coordinate array with elevation.
    pub fn from_lon_lat_elev(coords: impl IntoIterator<Item = (f64, f64, f64)>) -> Result<Self, ResampleError> {
        Self::new(
            coords
                .into_iter()
                .map(|(lon, lat, elevation)| RoutePoint {
                    lon,
                    lat,
                    elevation,
                })
                .collect(),
        )
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Number of vertices (always ≥ 2).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The reference vertex used for projection selection.
    pub fn first(&self) -> RoutePoint {
        self.points[0]
    }
}

/// One resampled output record.
///
/// Field order is the output column order: cumulative planar arc length from
/// the route start, then latitude before longitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub distance_m: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_m: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimal_route() {
        let route = RouteGeometry::from_lon_lat_elev([(0.0, 0.0, 1.0), (0.001, 0.0, 2.0)]);
        assert!(route.is_ok());
        assert_eq!(route.unwrap().len(), 2);
    }

    #[test]
    fn test_rejects_single_vertex() {
        let err = RouteGeometry::from_lon_lat_elev([(0.0, 0.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ResampleError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_empty() {
        let err = RouteGeometry::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ResampleError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        let err =
            RouteGeometry::from_lon_lat_elev([(181.0, 0.0, 0.0), (0.0, 0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ResampleError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        let err =
            RouteGeometry::from_lon_lat_elev([(0.0, 0.0, 0.0), (0.0, -90.5, 0.0)]).unwrap_err();
        assert!(matches!(err, ResampleError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_nan_coordinate() {
        let err = RouteGeometry::from_lon_lat_elev([(0.0, f64::NAN, 0.0), (0.0, 1.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, ResampleError::InvalidGeometry(_)));
    }

    #[test]
    fn test_domain_boundaries_are_valid() {
        let route =
            RouteGeometry::from_lon_lat_elev([(-180.0, -90.0, 0.0), (180.0, 90.0, 0.0)]);
        assert!(route.is_ok());
    }
}
