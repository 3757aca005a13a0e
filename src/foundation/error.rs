/// Convenience result type used across the crate.
pub type MondrianResult<T> = Result<T, MondrianError>;

/// Top-level error taxonomy used by generator, codec, render and route APIs.
#[derive(thiserror::Error, Debug)]
pub enum MondrianError {
    /// Invalid caller-provided parameters or palette edits.
    #[error("validation error: {0}")]
    Validation(String),

    /// Export or route format token that is not served.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Errors while encoding or decoding shared query-string state.
    #[error("codec error: {0}")]
    Codec(String),

    /// Errors while building a vector document or rasterizing it.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MondrianError {
    /// Build a [`MondrianError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MondrianError::UnsupportedFormat`] value.
    pub fn unsupported_format(token: impl Into<String>) -> Self {
        Self::UnsupportedFormat(token.into())
    }

    /// Build a [`MondrianError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Build a [`MondrianError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// True when the caller supplied something the crate refuses to serve, as opposed to an
    /// internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_) | Self::Codec(_) | Self::Validation(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
