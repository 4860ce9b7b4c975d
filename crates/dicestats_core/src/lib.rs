//! Exact discrete probability distributions for dice statistics.
//!
//! A [`Distribution`] is a finite probability mass function over `i64`
//! values whose masses are arbitrary-precision rationals summing to exactly
//! one. Distributions can only be built through the combinators on the type,
//! so an unnormalized value is never observable from outside this crate.
//!
//! # Examples
//!
//! ```
//! use dicestats_core::Distribution;
//! use num_rational::BigRational;
//!
//! let d6 = Distribution::die(6)?;
//! let two_d6 = d6.combine_bin_op(&d6, |a, b| a + b)?;
//!
//! assert_eq!(two_d6.probability_of(7), BigRational::new(1.into(), 6.into()));
//! # Ok::<(), dicestats_error::DistributionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chart;
mod distribution;
mod recovery;
mod summary;
mod telemetry;

pub use chart::{Chart, ChartPoint, ChartRenderer};
pub use distribution::Distribution;
pub use recovery::{EmptyDistributionCheck, catch_empty_distribution};
pub use summary::Summary;
pub use telemetry::init_tracing;

/// Exact probability mass.
pub type Mass = num_rational::BigRational;
