//! Recovery from the empty-distribution failure.

use crate::Distribution;
use dicestats_error::{DicestatsError, DistributionError};
use tracing::debug;

/// Errors that can report whether they are the empty-distribution failure.
pub trait EmptyDistributionCheck {
    /// True for `EmptyDistribution`, false for every other failure.
    fn is_empty_distribution(&self) -> bool;
}

impl EmptyDistributionCheck for DistributionError {
    fn is_empty_distribution(&self) -> bool {
        DistributionError::is_empty_distribution(self)
    }
}

impl EmptyDistributionCheck for DicestatsError {
    fn is_empty_distribution(&self) -> bool {
        DicestatsError::is_empty_distribution(self)
    }
}

/// Runs `producer`, replacing an `EmptyDistribution` failure with the point
/// mass at zero.
///
/// Any other error is returned unchanged. This is the recovery policy for a
/// sub-expression that rolled no outcomes, such as an empty dice pool.
///
/// # Examples
///
/// ```
/// use dicestats_core::{Distribution, Mass, catch_empty_distribution};
///
/// let recovered = catch_empty_distribution(|| {
///     Distribution::from_pairs(Vec::<(i64, Mass)>::new())
/// })?;
/// assert_eq!(recovered, Distribution::point(0));
/// # Ok::<(), dicestats_error::DistributionError>(())
/// ```
pub fn catch_empty_distribution<E, F>(producer: F) -> Result<Distribution, E>
where
    F: FnOnce() -> Result<Distribution, E>,
    E: EmptyDistributionCheck,
{
    match producer() {
        Err(err) if err.is_empty_distribution() => {
            debug!("Substituting point mass at zero for empty distribution");
            Ok(Distribution::point(0))
        }
        other => other,
    }
}
