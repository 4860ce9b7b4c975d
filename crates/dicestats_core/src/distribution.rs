//! The distribution type and its combinators.
//!
//! Every public constructor funnels through a single private normalization
//! step, so a `Distribution` handed to a caller always has masses summing to
//! exactly one. The only failure is [`DistributionErrorKind::Empty`], raised
//! when that step would divide by a zero total.
//!
//! [`DistributionErrorKind::Empty`]: dicestats_error::DistributionErrorKind::Empty

use crate::Mass;
use dicestats_error::{DistributionError, DistributionResult};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::{debug, instrument, trace};

/// A finite probability mass function over integers.
///
/// Masses are exact rationals. The stored keys are exactly the support:
/// zero-mass entries are discarded during normalization.
///
/// # Examples
///
/// ```
/// use dicestats_core::{Distribution, Mass};
/// use num_traits::One;
///
/// let coin = Distribution::from_pairs([(0, Mass::one()), (1, Mass::one())])?;
/// assert_eq!(coin.probability_of(1), Mass::new(1.into(), 2.into()));
/// # Ok::<(), dicestats_error::DistributionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Distribution {
    masses: BTreeMap<i64, Mass>,
}

fn accumulate(masses: &mut BTreeMap<i64, Mass>, value: i64, mass: Mass) {
    *masses.entry(value).or_insert_with(Mass::zero) += mass;
}

impl Distribution {
    /// Scales an accumulated mapping so its masses sum to one.
    fn normalize(masses: BTreeMap<i64, Mass>) -> DistributionResult<Self> {
        let mut accumulated = Self { masses };
        if accumulated.is_null() {
            debug!(
                entries = accumulated.masses.len(),
                "Refusing to normalize a distribution with no mass"
            );
            return Err(DistributionError::empty());
        }

        let total: Mass = accumulated.masses.values().sum();
        if total.is_zero() {
            debug!(
                entries = accumulated.masses.len(),
                "Masses cancel to a zero total"
            );
            return Err(DistributionError::empty());
        }

        accumulated.masses.retain(|_, mass| !mass.is_zero());
        if !total.is_one() {
            for mass in accumulated.masses.values_mut() {
                *mass = &*mass / &total;
            }
        }
        trace!(support = accumulated.masses.len(), "Normalized distribution");
        Ok(accumulated)
    }

    /// Builds a distribution from raw `(value, weight)` pairs.
    ///
    /// Weights sharing a value are summed, then every weight is divided by
    /// the total. Weights need not be normalized and their order is irrelevant.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyDistribution` when the total weight is zero, which
    /// includes an empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicestats_core::{Distribution, Mass};
    /// use num_traits::Zero;
    ///
    /// assert!(Distribution::from_pairs(Vec::<(i64, Mass)>::new()).is_err());
    /// assert!(Distribution::from_pairs([(3, Mass::zero())]).is_err());
    /// ```
    pub fn from_pairs<I>(pairs: I) -> DistributionResult<Self>
    where
        I: IntoIterator<Item = (i64, Mass)>,
    {
        let mut masses = BTreeMap::new();
        for (value, weight) in pairs {
            accumulate(&mut masses, value, weight);
        }
        Self::normalize(masses)
    }

    /// All mass on a single value.
    pub fn point(value: i64) -> Self {
        Self {
            masses: BTreeMap::from([(value, Mass::one())]),
        }
    }

    /// Equal mass on every value of `values`.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyDistribution` when the range is empty.
    pub fn uniform(values: RangeInclusive<i64>) -> DistributionResult<Self> {
        Self::from_pairs(values.map(|value| (value, Mass::one())))
    }

    /// A fair die numbered `1..=sides`.
    ///
    /// # Errors
    ///
    /// A zero-sided die has no outcomes and fails with `EmptyDistribution`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicestats_core::Distribution;
    ///
    /// let d20 = Distribution::die(20)?;
    /// assert_eq!(d20.len(), 20);
    /// assert!(Distribution::die(0).is_err());
    /// # Ok::<(), dicestats_error::DistributionError>(())
    /// ```
    pub fn die(sides: u32) -> DistributionResult<Self> {
        Self::uniform(1..=i64::from(sides))
    }

    /// Every `(value, mass)` pair, in ascending value order.
    pub fn to_pairs(&self) -> Vec<(i64, Mass)> {
        self.masses
            .iter()
            .map(|(value, mass)| (*value, mass.clone()))
            .collect()
    }

    /// Borrowing iterator over `(value, mass)` in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &Mass)> + '_ {
        self.masses.iter().map(|(value, mass)| (*value, mass))
    }

    /// Values carrying nonzero mass, ascending.
    pub fn support(&self) -> impl Iterator<Item = i64> + '_ {
        self.masses.keys().copied()
    }

    /// Number of values in the support.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Whether the support is empty. Never true for a returned distribution.
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub(crate) fn mass_of(&self, value: i64) -> Option<&Mass> {
        self.masses.get(&value)
    }

    /// True iff every stored mass is exactly zero.
    ///
    /// A normalized distribution is never null; the check exists so that
    /// normalization can fail deliberately instead of dividing by zero.
    pub fn is_null(&self) -> bool {
        self.masses.values().all(Zero::is_zero)
    }

    /// Convolution-style combination under an arbitrary binary operator.
    ///
    /// Every pair `(a, b)` of support values contributes `mass(a) * mass(b)`
    /// to `f(a, b)`. Colliding results are summed and the outcome is
    /// renormalized. Cost is `O(|self| * |other|)`.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyDistribution` if the product has no mass.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicestats_core::{Distribution, Mass};
    ///
    /// let d6 = Distribution::die(6)?;
    /// let highest = d6.combine_bin_op(&d6, i64::max)?;
    /// assert_eq!(highest.probability_of(6), Mass::new(11.into(), 36.into()));
    /// # Ok::<(), dicestats_error::DistributionError>(())
    /// ```
    #[instrument(skip_all, fields(lhs = self.masses.len(), rhs = other.masses.len()))]
    pub fn combine_bin_op<F>(&self, other: &Distribution, f: F) -> DistributionResult<Self>
    where
        F: Fn(i64, i64) -> i64,
    {
        let f = &f;
        let products = self.masses.iter().flat_map(move |(lhs, lhs_mass)| {
            other
                .masses
                .iter()
                .map(move |(rhs, rhs_mass)| (f(*lhs, *rhs), lhs_mass * rhs_mass))
        });
        Self::from_pairs(products)
    }

    /// Combines `count` independent copies of this distribution with `f`.
    ///
    /// Copies are folded from the left, so `f` need not be commutative.
    ///
    /// # Errors
    ///
    /// `count == 0` is an empty dice pool and fails with `EmptyDistribution`.
    #[instrument(skip(self, f), fields(support = self.masses.len()))]
    pub fn repeated<F>(&self, count: usize, f: F) -> DistributionResult<Self>
    where
        F: Fn(i64, i64) -> i64,
    {
        let mut copies = std::iter::repeat_n(self, count);
        let Some(first) = copies.next() else {
            debug!("Empty dice pool");
            return Err(DistributionError::empty());
        };
        copies.try_fold(first.clone(), |acc, copy| acc.combine_bin_op(copy, &f))
    }

    /// Mixes distributions, each scaled by its weight, and renormalizes.
    ///
    /// Weights are not required to sum to one.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyDistribution` if the scaled union has no mass, for
    /// example an empty input or all-zero weights.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicestats_core::{Distribution, Mass};
    ///
    /// let half = Mass::new(1.into(), 2.into());
    /// let mixed = Distribution::merge_weighted([
    ///     (Distribution::point(1), half.clone()),
    ///     (Distribution::point(2), half.clone()),
    /// ])?;
    /// assert_eq!(mixed.probability_of(2), half);
    /// # Ok::<(), dicestats_error::DistributionError>(())
    /// ```
    #[instrument(skip_all)]
    pub fn merge_weighted<I>(weighted: I) -> DistributionResult<Self>
    where
        I: IntoIterator<Item = (Distribution, Mass)>,
    {
        let scaled = weighted.into_iter().flat_map(|(distribution, weight)| {
            distribution
                .masses
                .into_iter()
                .map(move |(value, mass)| (value, mass * &weight))
        });
        Self::from_pairs(scaled)
    }

    /// Removes every value matching `predicate` and renormalizes the rest.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyDistribution` if nothing survives.
    #[instrument(skip_all, fields(support = self.masses.len()))]
    pub fn drop_where<P>(&self, predicate: P) -> DistributionResult<Self>
    where
        P: Fn(i64) -> bool,
    {
        let kept = self
            .masses
            .iter()
            .filter(|(value, _)| !predicate(**value))
            .map(|(value, mass)| (*value, mass.clone()))
            .collect();
        Self::normalize(kept)
    }

    /// Remaps every value through `f`, summing masses that collide.
    ///
    /// Total mass is preserved exactly, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicestats_core::Distribution;
    ///
    /// let d6 = Distribution::die(6)?;
    /// assert_eq!(d6.map_over_values(|_| 0), Distribution::point(0));
    /// # Ok::<(), dicestats_error::DistributionError>(())
    /// ```
    pub fn map_over_values<F>(&self, f: F) -> Self
    where
        F: Fn(i64) -> i64,
    {
        let mut masses = BTreeMap::new();
        for (value, mass) in &self.masses {
            accumulate(&mut masses, f(*value), mass.clone());
        }
        // Only reachable with negative weights.
        masses.retain(|_, mass| !mass.is_zero());
        Self { masses }
    }

    pub(crate) fn weighted_sum<F>(&self, f: F) -> Mass
    where
        F: Fn(i64) -> Mass,
    {
        self.masses.iter().map(|(value, mass)| f(*value) * mass).sum()
    }
}

pub(crate) fn integer(value: i64) -> Mass {
    Mass::from_integer(BigInt::from(value))
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (value, mass)) in self.masses.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", value, mass)?;
        }
        write!(f, "}}")
    }
}
