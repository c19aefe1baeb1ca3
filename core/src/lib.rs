// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Primality testing and prime factorization by trial division.
//! `numkit_core` is the library behind the `numkit` command line tool.
//!
//! Both routines are pure functions of their input. The free functions
//! use the default [Checker], which treats numbers below 2 the way
//! mathematics does. [Policy::Legacy] reproduces the older naive
//! behavior for callers that depend on it.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), numkit_core::NumberError> {
//! assert!(numkit_core::is_prime(17));
//! assert!(!numkit_core::is_prime(18));
//!
//! let factors = numkit_core::prime_factors(360)?;
//! assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
//!
//! let grouped = numkit_core::factorization(360)?;
//! assert_eq!(grouped.to_string(), "2^3 * 3^2 * 5");
//! # Ok(())
//! # }
//! ```
//!
//! ## Input domain
//!
//! Factorization is only defined for `n >= 1`. Zero and negative
//! numbers are rejected with [NumberError::InvalidArgument] under
//! either policy. Primality never fails.

mod error;
mod factorize;
mod policy;
mod primality;

pub use error::NumberError;
pub use factorize::Factorization;
pub use policy::{Checker, Policy, Primality};

/// Returns true if `n` is prime. Numbers below 2 are not.
pub fn is_prime(n: i64) -> bool {
    Checker::default().is_prime(n)
}

/// Prime factors of `n` in non-decreasing order, with multiplicity.
///
/// `prime_factors(1)` is empty.
pub fn prime_factors(n: i64) -> Result<Vec<u64>, NumberError> {
    Checker::default().prime_factors(n)
}

pub fn factorization(n: i64) -> Result<Factorization, NumberError> {
    Checker::default().factorization(n)
}
