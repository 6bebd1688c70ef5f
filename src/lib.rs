//! Constant-interval resampling of geographic routes.
//!
//! Takes a dense elevation-tagged polyline (as delivered by a routing
//! service) and produces evenly spaced `(distance, latitude, longitude,
//! elevation)` samples along it. Arc-length math runs in a UTM zone picked
//! from the route's first vertex; elevations come from a nearest-neighbor
//! lookup against the original vertices.
//!
//! ```no_run
//! use route_resample::{resample_route, ResampleConfig, RouteGeometry};
//!
//! # fn main() -> Result<(), route_resample::ResampleError> {
//! let route = RouteGeometry::from_lon_lat_elev([
//!     (130.837806, -12.463056, 30.0),
//!     (131.630864, -13.630916, 80.0),
//! ])?;
//! let samples = resample_route(&route, ResampleConfig { interval_m: 100.0 })?;
//! for s in &samples {
//!     println!("{},{},{},{}", s.distance_m, s.latitude, s.longitude, s.elevation_m);
//! }
//! # Ok(())
//! # }
//! ```

pub mod curve;
pub mod elevation;
pub mod error;
pub mod geometry;
pub mod proj;
pub mod resample;

pub use error::{ProjError, ResampleError};
pub use geometry::{RouteGeometry, RoutePoint, Sample};
pub use resample::{resample_route, ResampleConfig};
