//! Splitting a total across allocation branches.
//!
//! Every branch gets `floor(total * portion)`. Flooring leaves a leftover of
//! fewer units than there are branches; the [`RemainderRule`] decides who
//! receives it. The returned amounts always add up to the total.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::errors::AllocationError;
use crate::value::Portion;

/// The share of one allocation branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Share {
    Fixed(Portion),
    /// Whatever the fixed shares leave over.
    Remaining,
}

/// Who receives the units lost to flooring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RemainderRule {
    /// The `remaining` branch, or the last branch when there is none.
    #[default]
    KeeperOrLast,
    /// One unit per branch in document order.
    RoundRobin,
}

/// Split a non-negative `total` across `shares`, in branch order.
pub fn split(
    total: &BigInt,
    shares: &[Share],
    rule: RemainderRule,
) -> Result<Vec<BigInt>, AllocationError> {
    if shares.is_empty() {
        return Err(AllocationError::NoBranches);
    }

    let mut keeper = None;
    for (index, share) in shares.iter().enumerate() {
        if matches!(share, Share::Remaining) {
            if keeper.is_some() {
                return Err(AllocationError::MultipleRemaining);
            }
            keeper = Some(index);
        }
    }

    // Exact sum of the fixed portions as `sum_n / sum_d`.
    let mut sum_n = BigInt::zero();
    let mut sum_d = BigInt::one();
    for share in shares {
        if let Share::Fixed(portion) = share {
            sum_n = sum_n * portion.denominator() + portion.numerator() * &sum_d;
            sum_d *= portion.denominator();
        }
    }
    if sum_n > sum_d {
        return Err(AllocationError::Overflow);
    }
    if keeper.is_none() && sum_n < sum_d {
        return Err(AllocationError::Underflow);
    }

    let rest = Portion::new(&sum_d - &sum_n, sum_d).unwrap_or_else(Portion::zero);
    let mut amounts: Vec<BigInt> = shares
        .iter()
        .map(|share| match share {
            Share::Fixed(portion) => portion.share_of(total),
            Share::Remaining => rest.share_of(total),
        })
        .collect();

    let assigned: BigInt = amounts.iter().sum();
    let mut leftover = total - assigned;
    if !leftover.is_positive() {
        return Ok(amounts);
    }

    match rule {
        RemainderRule::KeeperOrLast => {
            let index = keeper.unwrap_or(amounts.len() - 1);
            amounts[index] += leftover;
        }
        RemainderRule::RoundRobin => {
            let mut index = 0;
            while leftover.is_positive() {
                amounts[index] += 1;
                leftover -= 1;
                index = (index + 1) % amounts.len();
            }
        }
    }
    Ok(amounts)
}
