//! Top-level error wrapper types.

use crate::{ConfigError, DistributionError, RenderError, RequestError};

/// Every failure the workspace can report.
///
/// # Examples
///
/// ```
/// use dicestats_error::{ConfigError, DicestatsError};
///
/// let err: DicestatsError = ConfigError::new("bad file").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DicestatsErrorKind {
    /// Distribution engine error
    #[from(DistributionError)]
    Distribution(DistributionError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chart rendering error
    #[from(RenderError)]
    Render(RenderError),
    /// Request outside configured limits
    #[from(RequestError)]
    Request(RequestError),
}

/// Dicestats error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Dicestats Error: {}", _0)]
pub struct DicestatsError(Box<DicestatsErrorKind>);

impl DicestatsError {
    /// Create a new error from a kind.
    pub fn new(kind: DicestatsErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DicestatsErrorKind {
        &self.0
    }

    /// Whether this wraps the empty-distribution failure.
    pub fn is_empty_distribution(&self) -> bool {
        matches!(self.kind(), DicestatsErrorKind::Distribution(e) if e.is_empty_distribution())
    }
}

impl<T> From<T> for DicestatsError
where
    T: Into<DicestatsErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for dicestats operations.
pub type DicestatsResult<T> = std::result::Result<T, DicestatsError>;
