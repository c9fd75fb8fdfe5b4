//! 错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("resource `{0}` not found")]
    ResourceNotFound(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("{given} icons supplied but the bar only has {items} items")]
    TooManyIcons { given: usize, items: usize },

    #[error("canvas error: {0}")]
    Canvas(&'static str),
}
