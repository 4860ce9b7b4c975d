//! Distribution engine error types.

/// Kinds of distribution errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DistributionErrorKind {
    /// Normalization found a total mass of zero.
    #[display("Empty distribution: total probability mass is zero")]
    Empty,
}

/// Distribution error with location tracking.
///
/// # Examples
///
/// ```
/// use dicestats_error::{DistributionError, DistributionErrorKind};
///
/// let err = DistributionError::new(DistributionErrorKind::Empty);
/// assert_eq!(err.kind, DistributionErrorKind::Empty);
/// assert!(format!("{}", err).contains("Empty distribution"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Distribution Error: {} at line {} in {}", kind, line, file)]
pub struct DistributionError {
    /// The kind of error that occurred
    pub kind: DistributionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DistributionError {
    /// Create a new distribution error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DistributionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for the empty-distribution failure.
    #[track_caller]
    pub fn empty() -> Self {
        Self::new(DistributionErrorKind::Empty)
    }

    /// Whether this is the empty-distribution failure.
    pub fn is_empty_distribution(&self) -> bool {
        self.kind == DistributionErrorKind::Empty
    }
}

/// Result type for distribution engine operations.
pub type DistributionResult<T> = std::result::Result<T, DistributionError>;
