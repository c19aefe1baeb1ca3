// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Primality by trial division. Callers handle `n < 2` according to
//! their [`Policy`](crate::Policy); everything here assumes `n >= 2`.

use num::integer::Roots;

pub(crate) fn square_root(n: u64) -> bool {
    smallest_divisor(n).is_none()
}

/// Scans every candidate below `n`. Kept for parity with the original
/// naive routine.
pub(crate) fn exhaustive(n: u64) -> bool {
    !(2..n).any(|i| n % i == 0)
}

/// Smallest divisor in `2..n`, testing 2 and then odd candidates up to
/// `isqrt(n)`.
pub(crate) fn smallest_divisor(n: u64) -> Option<u64> {
    if n < 4 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }
    let limit = n.sqrt();
    (3..=limit).step_by(2).find(|i| n % i == 0)
}
