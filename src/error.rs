/// Crate-wide result alias.
pub type CrossboxResult<T> = Result<T, CrossboxError>;

/// Errors surfaced at the render/IO boundary. The animation state machine
/// itself is infallible: all of its inputs are internally generated.
#[derive(thiserror::Error, Debug)]
pub enum CrossboxError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrossboxError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
