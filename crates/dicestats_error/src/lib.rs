//! Error types for the dicestats workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The distribution engine has exactly one failure mode,
//! [`DistributionErrorKind::Empty`]. The remaining types belong to the
//! configuration, rendering and command-line layers.
//!
//! # Examples
//!
//! ```
//! use dicestats_error::{DicestatsResult, DistributionError, DistributionErrorKind};
//!
//! fn roll_nothing() -> DicestatsResult<()> {
//!     Err(DistributionError::new(DistributionErrorKind::Empty))?
//! }
//!
//! let err = roll_nothing().unwrap_err();
//! assert!(err.is_empty_distribution());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod distribution;
mod error;
mod render;
mod request;

pub use config::ConfigError;
pub use distribution::{DistributionError, DistributionErrorKind, DistributionResult};
pub use error::{DicestatsError, DicestatsErrorKind, DicestatsResult};
pub use render::{RenderError, RenderErrorKind};
pub use request::RequestError;
