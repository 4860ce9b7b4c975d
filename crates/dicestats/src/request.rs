//! Dice pool statistics requests.

use crate::DiceLimits;
use dicestats_core::{Distribution, catch_empty_distribution};
use dicestats_error::{DicestatsResult, RequestError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Binary operator used to fold a pool of dice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Total of all dice
    #[default]
    #[display("sum")]
    Sum,
    /// Product of all dice
    #[display("product")]
    Product,
    /// Highest die
    #[display("max")]
    Max,
    /// Lowest die
    #[display("min")]
    Min,
}

impl Operator {
    /// Applies the operator to two rolled values.
    ///
    /// Arithmetic saturates rather than overflowing.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Sum => lhs.saturating_add(rhs),
            Operator::Product => lhs.saturating_mul(rhs),
            Operator::Max => lhs.max(rhs),
            Operator::Min => lhs.min(rhs),
        }
    }
}

/// A pool of identical fair dice folded with one operator, with optional
/// excluded results.
///
/// # Examples
///
/// ```
/// use dicestats::{DiceLimits, StatsRequest};
///
/// // 2d6, rerolling sevens until something else shows up
/// let request = StatsRequest::new(2, 6).with_drops(vec![7]);
/// let distribution = request.build(&DiceLimits::default())?;
/// assert_eq!(distribution.len(), 10);
/// # Ok::<(), dicestats::DicestatsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct StatsRequest {
    #[setters(skip)]
    count: usize,
    #[setters(skip)]
    sides: u32,
    operator: Operator,
    drops: Vec<i64>,
}

impl StatsRequest {
    /// `count` dice with `sides` sides each, summed, nothing dropped.
    pub fn new(count: usize, sides: u32) -> Self {
        Self {
            count,
            sides,
            operator: Operator::default(),
            drops: Vec::new(),
        }
    }

    /// Checks the request against configured limits.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` for a die without sides, a pool or die larger
    /// than the limits allow, or an estimated workload over `max_work`.
    pub fn validate(&self, limits: &DiceLimits) -> DicestatsResult<()> {
        if self.sides == 0 {
            return Err(RequestError::new("a die needs at least one side").into());
        }
        if self.sides > *limits.max_sides() {
            return Err(RequestError::new(format!(
                "{} sides exceeds the configured maximum of {}",
                self.sides,
                limits.max_sides()
            ))
            .into());
        }
        if self.count > *limits.max_count() {
            return Err(RequestError::new(format!(
                "{} dice exceeds the configured maximum of {}",
                self.count,
                limits.max_count()
            ))
            .into());
        }
        let work = self.estimated_work();
        if work > u128::from(*limits.max_work()) {
            return Err(RequestError::new(format!(
                "{} needs about {} combinations, over the configured maximum of {}",
                self.describe(),
                work,
                limits.max_work()
            ))
            .into());
        }
        Ok(())
    }

    /// Upper bound on the pairs the fold in [`build`](Self::build) combines.
    ///
    /// Step `k` pairs the `k`-dice intermediate with one more die, costing
    /// its support size times `sides`. Saturates instead of overflowing.
    pub fn estimated_work(&self) -> u128 {
        let sides = u128::from(self.sides);
        (1..self.count)
            .map(|dice| self.support_bound(dice as u128).saturating_mul(sides))
            .fold(0, u128::saturating_add)
    }

    fn support_bound(&self, dice: u128) -> u128 {
        let sides = u128::from(self.sides);
        match self.operator {
            Operator::Sum => dice.saturating_mul(sides.saturating_sub(1)).saturating_add(1),
            Operator::Max | Operator::Min => sides,
            // a product only depends on which faces were rolled, not their order
            Operator::Product => multisets(dice, sides),
        }
    }

    /// Computes the exact distribution of the request.
    ///
    /// An empty pool (`count == 0`) rolls nothing and becomes the point mass
    /// at zero. Dropping every possible result is still an error.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` if validation fails, or `EmptyDistribution`
    /// if the drops exclude every outcome.
    #[instrument(skip(self, limits), fields(count = self.count, sides = self.sides, operator = %self.operator))]
    pub fn build(&self, limits: &DiceLimits) -> DicestatsResult<Distribution> {
        self.validate(limits)?;

        let die = Distribution::die(self.sides)?;
        let operator = self.operator;
        let pool = catch_empty_distribution(|| die.repeated(self.count, |a, b| operator.apply(a, b)))?;

        if self.drops.is_empty() {
            return Ok(pool);
        }
        debug!(drops = ?self.drops, "Dropping excluded results");
        Ok(pool.drop_where(|value| self.drops.contains(&value))?)
    }

    /// Human-readable description such as `3d6 max`.
    pub fn describe(&self) -> String {
        format!("{}d{} {}", self.count, self.sides, self.operator)
    }
}

/// Multisets of `size` items drawn from `kinds` values, `C(size + kinds - 1, size)`.
fn multisets(size: u128, kinds: u128) -> u128 {
    if kinds == 0 {
        return 0;
    }
    let n = size.saturating_add(kinds - 1);
    let r = size.min(kinds - 1);
    let mut acc: u128 = 1;
    for i in 1..=r {
        // acc is C(n - r + i - 1, i - 1), so the division is exact
        acc = match acc.checked_mul(n - r + i) {
            Some(product) => product / i,
            None => return u128::MAX,
        };
    }
    acc
}
