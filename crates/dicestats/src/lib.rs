//! Dicestats - exact dice-roll statistics
//!
//! Dicestats computes the exact probability distribution of dice pools and
//! presents it as a table, a JSON summary or a text bar chart.
//!
//! # Quick Start
//!
//! ```
//! use dicestats::{DiceLimits, Operator, StatsRequest};
//!
//! let request = StatsRequest::new(2, 6).with_operator(Operator::Sum);
//! let distribution = request.build(&DiceLimits::default())?;
//! assert_eq!(distribution.modes(), vec![7]);
//! # Ok::<(), dicestats::DicestatsError>(())
//! ```
//!
//! # Architecture
//!
//! - `dicestats_error` - Error types
//! - `dicestats_core` - The distribution engine, summary statistics and chart types
//!
//! This crate re-exports both and adds configuration, request handling and a
//! text renderer for the `dicestats` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod render;
mod request;

pub use dicestats_core::*;
pub use dicestats_error::*;

pub use config::{ChartConfig, DiceLimits, DicestatsConfig};
pub use render::TextChartRenderer;
pub use request::{Operator, StatsRequest};
