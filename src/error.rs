use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResampleError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid interval: {0} (must be positive and finite)")]
    InvalidInterval(f64),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),
}

#[derive(Error, Debug)]
pub enum ProjError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("Transform failed: {0}")]
    TransformFailed(String),
}
