//! Piecewise-linear planar curve with arc-length lookup.
//!
//! The curve is the projected route polyline. Arc length and interpolation
//! are plain Euclidean math in the planar CRS; the projection being local to
//! the route keeps the distortion small.

/// An ordered polyline in planar (metre) coordinates.
///
/// Vertex order is preserved as given. Duplicate and collinear vertices are
/// tolerated; zero-length segments contribute nothing to the arc length and
/// are skipped during lookup.
///
/// Invariant: at least one vertex (callers construct from validated route
/// geometry, which guarantees two or more).
#[derive(Clone, Debug)]
pub struct PlanarCurve {
    vertices: Vec<(f64, f64)>,
    /// Cumulative arc length up to each vertex; `cum[0] == 0`.
    cum: Vec<f64>,
}

impl PlanarCurve {
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        debug_assert!(!vertices.is_empty());
        let mut cum = Vec::with_capacity(vertices.len());
        let mut total = 0.0;
        cum.push(0.0);
        for w in vertices.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            total += (x1 - x0).hypot(y1 - y0);
            cum.push(total);
        }
        Self { vertices, cum }
    }

    /// Total arc length in metres.
    pub fn length(&self) -> f64 {
        self.cum[self.cum.len() - 1]
    }

    /// Point at arc length `dist` from the start.
    ///
    /// `dist` is clamped to `[0, length()]`; interpolation is linear within
    /// the segment containing the requested arc length.
    pub fn point_at(&self, dist: f64) -> (f64, f64) {
        if dist <= 0.0 {
            return self.vertices[0];
        }
        if dist >= self.length() {
            return self.vertices[self.vertices.len() - 1];
        }
        // Last vertex whose cumulative length does not exceed dist. The
        // early returns above guarantee a strictly longer segment follows,
        // even in the presence of zero-length segments.
        let i = self.cum.partition_point(|&c| c <= dist) - 1;
        let t = (dist - self.cum[i]) / (self.cum[i + 1] - self.cum[i]);
        let (x0, y0) = self.vertices[i];
        let (x1, y1) = self.vertices[i + 1];
        (x0 + t * (x1 - x0), y0 + t * (y1 - y0))
    }
}
