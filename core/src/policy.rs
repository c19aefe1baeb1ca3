// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::NumberError;
use crate::factorize::{self, Factorization};
use crate::primality;
use serde_derive::{Deserialize, Serialize};

/// How inputs below 2 are treated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// 0, 1 and negative numbers are not prime, and 1 has no prime
    /// factors.
    #[default]
    Strict,
    /// Reproduces the naive routines: every number below 2 is reported
    /// as prime, and factoring 1 yields `[1]`.
    Legacy,
}

/// Which trial division loop `is_prime` runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Primality {
    /// Odd candidates up to the integer square root.
    #[default]
    SquareRoot,
    /// Every candidate from 2 up to `n - 1`. O(n).
    Exhaustive,
}

/// Bundles the edge-case policy with the primality algorithm.
///
/// ```rust
/// use numkit_core::{Checker, Policy};
///
/// let legacy = Checker::new(Policy::Legacy);
/// assert!(legacy.is_prime(1));
/// assert_eq!(legacy.prime_factors(1).unwrap(), vec![1]);
///
/// let strict = Checker::default();
/// assert!(!strict.is_prime(1));
/// assert_eq!(strict.prime_factors(1).unwrap(), Vec::<u64>::new());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Checker {
    pub policy: Policy,
    pub primality: Primality,
}

impl Checker {
    pub fn new(policy: Policy) -> Checker {
        Checker {
            policy,
            primality: Primality::default(),
        }
    }

    pub fn with_primality(self, primality: Primality) -> Checker {
        Checker { primality, ..self }
    }

    pub fn is_prime(&self, n: i64) -> bool {
        let n = match u64::try_from(n) {
            Ok(n) if n >= 2 => n,
            _ => return self.policy == Policy::Legacy,
        };
        match self.primality {
            Primality::SquareRoot => primality::square_root(n),
            Primality::Exhaustive => primality::exhaustive(n),
        }
    }

    /// Returns the smallest divisor `d` with `1 < d < n`, if any.
    ///
    /// Always `None` for inputs below 4.
    pub fn smallest_divisor(&self, n: i64) -> Option<u64> {
        let n = u64::try_from(n).ok().filter(|&n| n >= 4)?;
        primality::smallest_divisor(n)
    }

    pub fn prime_factors(&self, n: i64) -> Result<Vec<u64>, NumberError> {
        let n = NumberError::at_least(n, 1)?;
        let mut factors = factorize::trial_division(n);
        if self.policy == Policy::Strict && factors == [1] {
            factors.clear();
        }
        Ok(factors)
    }

    pub fn factorization(&self, n: i64) -> Result<Factorization, NumberError> {
        self.prime_factors(n).map(Factorization::from_factors)
    }
}
