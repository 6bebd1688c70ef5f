//! Constant-interval route resampling.
//!
//! Projects the route into a UTM zone chosen from its first vertex, walks
//! the planar polyline at fixed arc-length steps, projects the samples back
//! to geographic degrees and attaches the nearest known elevation to each.

use log::debug;

use crate::curve::PlanarCurve;
use crate::elevation::ElevationIndex;
use crate::error::ResampleError;
use crate::geometry::{RouteGeometry, Sample};
use crate::proj::{CrsTransform, ProjectedCrs};

/// Resampling parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResampleConfig {
    /// Spacing between output samples along the planar curve, in metres.
    pub interval_m: f64,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self { interval_m: 100.0 }
    }
}

/// Resample `route` at fixed arc-length intervals.
///
/// Output samples are ordered by strictly increasing distance starting at 0.
/// The sample count is `floor(L / interval) + 1` for planar arc length L:
/// the last sample never lands past `floor(L / interval) * interval`, so the
/// route end is only hit when L is an exact multiple of the interval. A
/// route shorter than one interval yields a single sample at the start.
///
/// Pure function of its inputs; all-or-nothing on error.
pub fn resample_route(
    route: &RouteGeometry,
    config: ResampleConfig,
) -> Result<Vec<Sample>, ResampleError> {
    let interval = config.interval_m;
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ResampleError::InvalidInterval(interval));
    }

    let first = route.first();
    let crs = ProjectedCrs::for_point(first.lon, first.lat);
    let transform = CrsTransform::new(crs)?;

    let mut planar: Vec<(f64, f64)> = route.points().iter().map(|p| (p.lon, p.lat)).collect();
    transform.project_batch(&mut planar)?;

    let curve = PlanarCurve::new(planar);
    let total_len = curve.length();
    let count = (total_len / interval).floor() as usize + 1;
    debug!(
        "resampling {} vertices in {crs}: arc length {total_len:.1} m, {count} samples every {interval} m",
        route.len()
    );

    let mut coords: Vec<(f64, f64)> = (0..count)
        .map(|i| curve.point_at(i as f64 * interval))
        .collect();
    transform.unproject_batch(&mut coords)?;

    let index = ElevationIndex::build(route);
    let samples = coords
        .iter()
        .enumerate()
        .map(|(i, &(lon, lat))| Sample {
            distance_m: i as f64 * interval,
            latitude: lat,
            longitude: lon,
            elevation_m: index.nearest(lon, lat),
        })
        .collect();

    Ok(samples)
}
