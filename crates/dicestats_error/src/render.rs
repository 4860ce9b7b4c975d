//! Chart rendering error types.

/// Kinds of rendering errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RenderErrorKind {
    /// Writing the rendered chart failed
    #[display("I/O failure: {}", _0)]
    Io(String),
    /// The chart could not be encoded
    #[display("Encoding failure: {}", _0)]
    Encoding(String),
}

/// Rendering error with location tracking.
///
/// # Examples
///
/// ```
/// use dicestats_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::Encoding("no points".to_string()));
/// assert!(format!("{}", err).contains("no points"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<std::io::Error> for RenderError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(RenderErrorKind::Io(err.to_string()))
    }
}
