use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid color '{value}': expected #RRGGBB")]
    InvalidColor { value: String },

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// Backend failures, including fonts that cannot be loaded.
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

pub(crate) fn drawing_err(err: impl std::fmt::Display) -> RenderError {
    RenderError::Drawing(err.to_string())
}
