//! UTM zone selection.
//!
//! Pure zone/hemisphere arithmetic, kept free of any transform library so it
//! can be unit-tested on its own:
//!   zone = floor((lon + 180) / 6) + 1, clamped to 1..=60
//!   EPSG = 32600 + zone (northern) or 32700 + zone (southern)

/// A UTM zone + hemisphere, selected once per resampling call from the
/// route's first vertex and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectedCrs {
    zone: u8,
    north: bool,
}

impl ProjectedCrs {
    /// Select the UTM CRS covering the given point.
    ///
    /// The zone is derived from longitude only; hemisphere from the sign of
    /// latitude (lat = 0 counts as northern). lon = +180 falls into zone 60
    /// rather than the nonexistent zone 61. Poles get no special handling.
    pub fn for_point(lon: f64, lat: f64) -> Self {
        let zone = (((lon + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8;
        Self {
            zone,
            north: lat >= 0.0,
        }
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn is_northern(&self) -> bool {
        self.north
    }

    /// EPSG code of this zone (326xx north, 327xx south).
    pub fn epsg(&self) -> u32 {
        let base = if self.north { 32600 } else { 32700 };
        base + self.zone as u32
    }

    /// Classic proj-string definition of this zone, equivalent to its EPSG
    /// code.
    pub fn proj_string(&self) -> String {
        let south = if self.north { "" } else { " +south" };
        format!(
            "+proj=utm +zone={}{south} +datum=WGS84 +units=m +no_defs",
            self.zone
        )
    }
}

impl std::fmt::Display for ProjectedCrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darwin_zone_52_south() {
        // Darwin, Australia: 130.84°E, 12.46°S
        let crs = ProjectedCrs::for_point(130.837806, -12.463056);
        assert_eq!(crs.zone(), 52);
        assert!(!crs.is_northern());
        assert_eq!(crs.epsg(), 32752);
    }

    #[test]
    fn test_adelaide_zone_54_south() {
        let crs = ProjectedCrs::for_point(138.620964, -34.931087);
        assert_eq!(crs.epsg(), 32754);
    }

    #[test]
    fn test_oslo_zone_32_north() {
        let crs = ProjectedCrs::for_point(10.75, 59.91);
        assert_eq!(crs.zone(), 32);
        assert!(crs.is_northern());
        assert_eq!(crs.epsg(), 32632);
    }

    #[test]
    fn test_equator_counts_as_northern() {
        let crs = ProjectedCrs::for_point(0.0, 0.0);
        assert_eq!(crs.epsg(), 32631);
    }

    #[test]
    fn test_zone_boundaries() {
        // Zone 1 starts at -180°, zone 60 ends at +180°
        assert_eq!(ProjectedCrs::for_point(-180.0, 10.0).zone(), 1);
        assert_eq!(ProjectedCrs::for_point(-174.001, 10.0).zone(), 1);
        assert_eq!(ProjectedCrs::for_point(-174.0, 10.0).zone(), 2);
        assert_eq!(ProjectedCrs::for_point(179.999, 10.0).zone(), 60);
    }

    #[test]
    fn test_antimeridian_clamps_to_zone_60() {
        // floor((180 + 180) / 6) + 1 = 61, which is not a real zone
        assert_eq!(ProjectedCrs::for_point(180.0, 10.0).zone(), 60);
        assert_eq!(ProjectedCrs::for_point(180.0, 10.0).epsg(), 32660);
    }

    #[test]
    fn test_stable_for_identical_input() {
        let a = ProjectedCrs::for_point(15.0, 52.0);
        let b = ProjectedCrs::for_point(15.0, 52.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pole_uses_longitude_only() {
        assert_eq!(ProjectedCrs::for_point(15.0, 90.0).epsg(), 32633);
        assert_eq!(ProjectedCrs::for_point(15.0, -90.0).epsg(), 32733);
    }

    #[test]
    fn test_proj_string() {
        assert_eq!(
            ProjectedCrs::for_point(10.75, 59.91).proj_string(),
            "+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs"
        );
        assert_eq!(
            ProjectedCrs::for_point(130.84, -12.46).proj_string(),
            "+proj=utm +zone=52 +south +datum=WGS84 +units=m +no_defs"
        );
    }
}
