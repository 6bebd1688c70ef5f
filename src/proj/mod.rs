//! Local planar projection: UTM zone selection and EPSG:4326 ↔ UTM transforms.

pub mod crs;
pub mod zone;

pub use crs::CrsTransform;
pub use zone::ProjectedCrs;
