//! Summary statistics over a distribution.
//!
//! Mean and variance are exact; only the standard deviation and the
//! display copies in [`Summary`] are floating point.

use crate::distribution::integer;
use crate::{Distribution, Mass};
use derive_getters::Getters;
use num_traits::{ToPrimitive, Zero};
use serde::Serialize;

impl Distribution {
    /// Mass at exactly `value`; zero outside the support.
    pub fn probability_of(&self, value: i64) -> Mass {
        self.mass_of(value).cloned().unwrap_or_else(Mass::zero)
    }

    /// Mass at values `>= value`.
    pub fn probability_at_least(&self, value: i64) -> Mass {
        self.iter()
            .filter(|(candidate, _)| *candidate >= value)
            .map(|(_, mass)| mass)
            .sum()
    }

    /// Mass at values `<= value`.
    pub fn probability_at_most(&self, value: i64) -> Mass {
        self.iter()
            .filter(|(candidate, _)| *candidate <= value)
            .map(|(_, mass)| mass)
            .sum()
    }

    /// Smallest value in the support.
    pub fn min_value(&self) -> Option<i64> {
        self.support().next()
    }

    /// Largest value in the support.
    pub fn max_value(&self) -> Option<i64> {
        self.support().last()
    }

    /// Every value sharing the highest mass, ascending.
    pub fn modes(&self) -> Vec<i64> {
        let Some(peak) = self.iter().map(|(_, mass)| mass).max() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, mass)| *mass == peak)
            .map(|(value, _)| value)
            .collect()
    }

    /// Exact expected value.
    pub fn mean(&self) -> Mass {
        self.weighted_sum(integer)
    }

    /// Exact variance, `E[(X - mean)^2]`.
    pub fn variance(&self) -> Mass {
        let mean = self.mean();
        self.weighted_sum(|value| {
            let deviation = integer(value) - &mean;
            &deviation * &deviation
        })
    }

    /// Standard deviation, the square root of [`variance`](Self::variance).
    pub fn std_dev(&self) -> f64 {
        self.variance().to_f64().map_or(f64::NAN, f64::sqrt)
    }

    /// Bundles the statistics above for display or serialization.
    pub fn summary(&self) -> Summary {
        let mean = self.mean();
        Summary {
            support_size: self.len(),
            min: self.min_value(),
            max: self.max_value(),
            modes: self.modes(),
            exact_mean: mean.to_string(),
            mean: mean.to_f64().unwrap_or(f64::NAN),
            std_dev: self.std_dev(),
        }
    }
}

/// Display-ready statistics of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Summary {
    /// Number of values with nonzero mass
    support_size: usize,
    /// Smallest possible value
    min: Option<i64>,
    /// Largest possible value
    max: Option<i64>,
    /// Most likely values
    modes: Vec<i64>,
    /// Mean as an exact fraction
    exact_mean: String,
    /// Mean as a float
    mean: f64,
    /// Standard deviation
    std_dev: f64,
}
