/// Errors raised while assembling a scene
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene has no root node")]
    MissingRoot,

    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    #[error("scene source failed: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;
