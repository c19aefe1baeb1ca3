// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use thiserror::Error;

#[derive(Error, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// Invalid argument {value}: expected an integer of at least {min}
    InvalidArgument { value: i64, min: u64 },
}

impl NumberError {
    /// Checks that `value >= min`, returning it unsigned on success.
    pub(crate) fn at_least(value: i64, min: u64) -> Result<u64, NumberError> {
        match u64::try_from(value) {
            Ok(n) if n >= min => Ok(n),
            _ => Err(NumberError::InvalidArgument { value, min }),
        }
    }
}
