//! Error types for d20kit.
//!
//! Every fallible operation returns `d20kit::Result<T>`. Nothing is retried;
//! the whole pipeline is deterministic, so any of these means a precondition
//! was violated and the run should be abandoned.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A point collapsed onto the origin, or a face normal has no direction.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Texture is empty, or not square.
    #[error("Malformed texture: {0}")]
    MalformedTexture(String),

    /// A `Spec` value is out of range or inconsistent with another.
    #[error("Invalid spec: {0}")]
    InvalidSpec(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
