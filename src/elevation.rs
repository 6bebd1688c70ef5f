//! Nearest-neighbor elevation lookup over the dense input geometry.
//!
//! The k-d tree is built over raw (lon, lat) degree pairs, not projected
//! coordinates — matching the arc-length math would require projecting the
//! reference set too, but queries sit within metres of the reference
//! vertices, so the unprojected approximation holds and is kept as observed
//! upstream behavior.

use kiddo::{KdTree, SquaredEuclidean};

use crate::geometry::RouteGeometry;

/// Static spatial index mapping horizontal position to elevation.
///
/// Built once per resampling call; queries copy the nearest vertex's
/// elevation verbatim, never interpolating between neighbors. Exact distance
/// ties break by insertion order.
pub struct ElevationIndex {
    tree: KdTree<f64, 2>,
    elevations: Vec<f64>,
}

impl ElevationIndex {
    /// Index every vertex of the route.
    pub fn build(route: &RouteGeometry) -> Self {
        let entries: Vec<[f64; 2]> = route.points().iter().map(|p| [p.lon, p.lat]).collect();
        let tree: KdTree<f64, 2> = (&entries).into();
        let elevations = route.points().iter().map(|p| p.elevation).collect();
        Self { tree, elevations }
    }

    /// Elevation of the vertex nearest to (lon°, lat°).
    pub fn nearest(&self, lon: f64, lat: f64) -> f64 {
        let found = self.tree.nearest_one::<SquaredEuclidean>(&[lon, lat]);
        self.elevations[found.item as usize]
    }
}
