//! Literal portion arithmetic for `allocate`.
//!
//! Only portion literals (`1/3`, `25%`) take part in the sums; a share given
//! by a variable makes underflow undecidable, but literals alone can still
//! overflow since portions are never negative.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use numscript_diagnostic::DiagnosticKind;
use numscript_ir::{Allocation, BranchPortion, Expr, ExprKind, Range};

use super::Checker;

/// Exact running sum of fractions, kept unreduced.
struct PortionSum {
    numerator: BigInt,
    denominator: BigInt,
}

impl PortionSum {
    fn new() -> Self {
        PortionSum {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn add(&mut self, numerator: &BigInt, denominator: &BigInt) {
        self.numerator = &self.numerator * denominator + numerator * &self.denominator;
        self.denominator = &self.denominator * denominator;
    }

    /// Compare the sum against 1. The denominator is always positive.
    fn cmp_one(&self) -> Ordering {
        self.numerator.cmp(&self.denominator)
    }
}

impl Checker {
    pub(super) fn check_allocation_shape(&mut self, allocation: &Allocation, range: Range) {
        if allocation.branches.len() == 1 {
            self.report(range, DiagnosticKind::SingleBranchAllocation);
        }

        let remaining: Vec<Range> = allocation
            .branches
            .iter()
            .filter_map(|branch| match &branch.portion {
                BranchPortion::Remaining { range } => Some(*range),
                BranchPortion::Share(_) => None,
            })
            .collect();
        for extra in remaining.iter().skip(1) {
            self.report(*extra, DiagnosticKind::MultipleRemaining);
        }

        let mut sum = PortionSum::new();
        let mut all_literal = true;
        for branch in &allocation.branches {
            let BranchPortion::Share(share) = &branch.portion else {
                continue;
            };
            match literal_portion(share) {
                Some((numerator, denominator)) if !denominator.is_zero() => {
                    sum.add(numerator, denominator);
                }
                _ => all_literal = false,
            }
        }

        match (sum.cmp_one(), remaining.first()) {
            (Ordering::Greater, _) => self.report(range, DiagnosticKind::AllocationOverflow),
            (Ordering::Less, None) if all_literal => {
                self.report(range, DiagnosticKind::AllocationUnderflow);
            }
            (Ordering::Equal, Some(keeper)) if all_literal => {
                self.report(*keeper, DiagnosticKind::RedundantRemaining);
            }
            _ => {}
        }
    }
}

fn literal_portion(expr: &Expr) -> Option<(&BigInt, &BigInt)> {
    match &expr.kind {
        ExprKind::Portion {
            numerator,
            denominator,
        } => Some((numerator, denominator)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of(parts: &[(i64, i64)]) -> Ordering {
        let mut sum = PortionSum::new();
        for (n, d) in parts {
            sum.add(&BigInt::from(*n), &BigInt::from(*d));
        }
        sum.cmp_one()
    }

    #[test]
    fn test_portion_sum_against_one() {
        assert_eq!(sum_of(&[]), Ordering::Less);
        assert_eq!(sum_of(&[(1, 3), (2, 3)]), Ordering::Equal);
        assert_eq!(sum_of(&[(1, 2), (25, 100), (1, 4)]), Ordering::Equal);
        assert_eq!(sum_of(&[(1, 2), (1, 3)]), Ordering::Less);
        assert_eq!(sum_of(&[(3, 4), (1, 3)]), Ordering::Greater);
    }
}
