// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_derive::Serialize;
use std::fmt;

/// Trial division with an increasing candidate, retrying a candidate
/// until it no longer divides. The value left over once `t * t`
/// exceeds it is appended as-is, which makes `trial_division(1) == [1]`.
pub(crate) fn trial_division(mut n: u64) -> Vec<u64> {
    let mut factors = vec![];
    let mut t = 2;
    // `t <= n / t` is `t * t <= n` without overflow.
    while t <= n / t {
        if n % t == 0 {
            factors.push(t);
            n /= t;
        } else {
            t += 1;
        }
    }
    factors.push(n);
    factors
}

/// A prime factorization grouped by multiplicity.
///
/// Displays as `2^3 * 3^2 * 5`, or `1` when there are no factors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Factorization {
    powers: Vec<(u64, u32)>,
}

impl Factorization {
    /// Groups a factor list, sorting it first.
    pub fn from_factors(mut factors: Vec<u64>) -> Factorization {
        factors.sort_unstable();
        let mut powers: Vec<(u64, u32)> = vec![];
        for factor in factors {
            match powers.last_mut() {
                Some((prime, exp)) if *prime == factor => *exp += 1,
                _ => powers.push((factor, 1)),
            }
        }
        Factorization { powers }
    }

    /// `(prime, multiplicity)` pairs in ascending order.
    pub fn powers(&self) -> &[(u64, u32)] {
        &self.powers
    }

    /// The expanded factor list, repeating each prime by its multiplicity.
    pub fn factors(&self) -> Vec<u64> {
        self.powers
            .iter()
            .flat_map(|&(prime, exp)| std::iter::repeat(prime).take(exp as usize))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// Multiplies the factors back together. `None` on overflow.
    pub fn product(&self) -> Option<u64> {
        self.powers
            .iter()
            .try_fold(1u64, |acc, &(prime, exp)| {
                prime.checked_pow(exp).and_then(|p| acc.checked_mul(p))
            })
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(fmt, "1");
        }
        for (i, &(prime, exp)) in self.powers.iter().enumerate() {
            if i != 0 {
                write!(fmt, " * ")?;
            }
            if exp == 1 {
                write!(fmt, "{}", prime)?;
            } else {
                write!(fmt, "{}^{}", prime, exp)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_value_is_appended() {
        assert_eq!(trial_division(1), vec![1]);
        assert_eq!(trial_division(2), vec![2]);
        assert_eq!(trial_division(3), vec![3]);
        assert_eq!(trial_division(4), vec![2, 2]);
        assert_eq!(trial_division(12), vec![2, 2, 3]);
    }

    #[test]
    fn no_overflow_near_max() {
        let max = i64::MAX as u64;
        let factors = trial_division(max);
        assert_eq!(factors, vec![7, 7, 73, 127, 337, 92_737, 649_657]);
        // (2^31 - 1) is prime, the loop has to run to its square root.
        assert_eq!(trial_division(2_147_483_647), vec![2_147_483_647]);
    }

    #[test]
    fn grouping() {
        let f = Factorization::from_factors(vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(f.powers(), &[(2, 3), (3, 2), (5, 1)]);
        assert_eq!(f.factors(), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(f.product(), Some(360));
        assert_eq!(f.to_string(), "2^3 * 3^2 * 5");
    }

    #[test]
    fn empty() {
        let f = Factorization::from_factors(vec![]);
        assert!(f.is_empty());
        assert_eq!(f.product(), Some(1));
        assert_eq!(f.to_string(), "1");
    }
}
