use std::ops::RangeInclusive;

use num_bigint::BigUint;
use num_traits::CheckedSub;

use crate::{
    count::binomial::binomial,
    error::{CountError, Result},
};

/// The terms of the formula for one exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub exponent: u64,
    /// Non-decreasing digit strings of length `x`: `C(x + 9, x)`.
    pub increasing: BigUint,
    /// Non-increasing digit strings of length `x` with a leading-zero
    /// placeholder as an eleventh symbol: `C(x + 10, x)`.
    pub decreasing: BigUint,
    /// Numbers counted by both terms: `10 * x + 1`.
    pub duplicates: BigUint,
    pub total: BigUint,
}

impl Breakdown {
    pub fn for_exponent(x: u64) -> Result<Self> {
        let n = x.checked_add(10).ok_or(CountError::ExponentTooLarge(x))?;
        let increasing = binomial(n - 1, x)?;
        let decreasing = binomial(n, x)?;
        let duplicates = BigUint::from(x) * 10u32 + 1u32;

        let total = (&increasing + &decreasing)
            .checked_sub(&duplicates)
            .ok_or(CountError::NegativeTotal { exponent: x })?;

        tracing::debug!(exponent = x, %total, "evaluated increasing/decreasing count");

        Ok(Self {
            exponent: x,
            increasing,
            decreasing,
            duplicates,
            total,
        })
    }

    pub fn checked(x: i64) -> Result<Self> {
        let x = u64::try_from(x).map_err(|_| CountError::NegativeExponent(x))?;
        Self::for_exponent(x)
    }
}

/// Count of numbers below `10^x` whose digits never decrease or never
/// increase, each counted once.
pub fn compute_total(x: i64) -> Result<BigUint> {
    Breakdown::checked(x).map(|b| b.total)
}

/// Inclusive range of requested exponents. May start below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentRange {
    pub start: i64,
    pub end: i64,
}

impl ExponentRange {
    pub fn single(x: i64) -> Self {
        Self { start: x, end: x }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Saturates at `u64::MAX` for a range covering every `i64`.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

/// Evaluates every exponent in `range` lazily, in ascending order. A failing
/// exponent yields its error in place and does not stop the rest.
pub fn breakdowns_in_range(
    range: &ExponentRange,
) -> impl Iterator<Item = (i64, Result<Breakdown>)> {
    range.iter().map(|x| (x, Breakdown::checked(x)))
}

pub fn totals_in_range(range: &ExponentRange) -> impl Iterator<Item = (i64, Result<BigUint>)> {
    breakdowns_in_range(range).map(|(x, b)| (x, b.map(|b| b.total)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_for_three() {
        let b = Breakdown::for_exponent(3).unwrap();
        assert_eq!(b.increasing, BigUint::from(220u32));
        assert_eq!(b.decreasing, BigUint::from(286u32));
        assert_eq!(b.duplicates, BigUint::from(31u32));
        assert_eq!(b.total, BigUint::from(475u32));
    }

    #[test]
    fn breakdown_for_zero() {
        let b = Breakdown::for_exponent(0).unwrap();
        assert_eq!(b.increasing, BigUint::from(1u32));
        assert_eq!(b.decreasing, BigUint::from(1u32));
        assert_eq!(b.duplicates, BigUint::from(1u32));
        assert_eq!(b.total, BigUint::from(1u32));
    }

    #[test]
    fn negative_exponent_is_rejected_before_computing() {
        assert_eq!(compute_total(-1), Err(CountError::NegativeExponent(-1)));
        assert_eq!(
            Breakdown::checked(i64::MIN),
            Err(CountError::NegativeExponent(i64::MIN))
        );
    }

    #[test]
    fn largest_signed_exponent_is_exact() {
        let x = i64::MAX as u64;
        let b = Breakdown::checked(i64::MAX).unwrap();
        assert_eq!(b.duplicates, BigUint::from(x) * 10u32 + 1u32);
        assert!(b.duplicates > BigUint::from(u64::MAX));
        assert_eq!(b.total, &b.increasing + &b.decreasing - &b.duplicates);
    }

    #[test]
    fn exponent_without_room_for_the_formula() {
        assert_eq!(
            Breakdown::for_exponent(u64::MAX),
            Err(CountError::ExponentTooLarge(u64::MAX))
        );
    }

    #[test]
    fn range_length() {
        assert_eq!(ExponentRange::single(4).len(), 1);
        assert_eq!(ExponentRange { start: -2, end: 3 }.len(), 6);
        assert!(ExponentRange { start: 3, end: 2 }.is_empty());
        assert_eq!(ExponentRange { start: 3, end: 2 }.len(), 0);
        assert_eq!(ExponentRange { start: 0, end: i64::MAX }.len(), 1 << 63);
        assert_eq!(
            ExponentRange {
                start: i64::MIN,
                end: i64::MAX
            }
            .len(),
            u64::MAX
        );
    }

    #[test]
    fn range_keeps_errors_in_place() {
        let results: Vec<_> = totals_in_range(&ExponentRange { start: -1, end: 2 }).collect();
        let exponents: Vec<i64> = results.iter().map(|(x, _)| *x).collect();
        assert_eq!(exponents, vec![-1, 0, 1, 2]);

        assert_eq!(results[0].1, Err(CountError::NegativeExponent(-1)));
        assert_eq!(results[1].1, Ok(BigUint::from(1u32)));
        assert_eq!(results[2].1, Ok(BigUint::from(10u32)));
        assert_eq!(results[3].1, Ok(BigUint::from(100u32)));
    }

    #[test]
    fn empty_range_yields_nothing() {
        let range = ExponentRange { start: 5, end: 4 };
        assert_eq!(breakdowns_in_range(&range).count(), 0);
    }
}
