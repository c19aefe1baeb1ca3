// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::Config;
use numkit_core::{Checker, Factorization, NumberError};
use std::fmt;
use std::num::IntErrorKind;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Prime(i64),
    Factor(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The word where a number was expected.
    Parse(String),
    /// The word didn't fit in a 64-bit signed integer.
    OutOfRange(String),
    UnknownCommand(String),
    MissingArgument(&'static str),
    TrailingInput(String),
    /// An input line that couldn't be decoded.
    InvalidUtf8,
    Number(NumberError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Prime {
        n: i64,
        prime: bool,
        divisor: Option<u64>,
    },
    Factors {
        n: i64,
        factorization: Factorization,
    },
}

impl From<NumberError> for QueryError {
    fn from(err: NumberError) -> Self {
        QueryError::Number(err)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Parse(word) => write!(fmt, "Expected an integer, got `{}`", word),
            QueryError::OutOfRange(word) => {
                write!(fmt, "Integer out of range: `{}`", word)
            }
            QueryError::UnknownCommand(word) => write!(
                fmt,
                "Unknown command `{}`. Expected `prime`, `factor` or a number",
                word
            ),
            QueryError::MissingArgument(cmd) => write!(fmt, "`{}` expects a number", cmd),
            QueryError::TrailingInput(rest) => write!(fmt, "Unexpected input: `{}`", rest),
            QueryError::InvalidUtf8 => write!(fmt, "Line is not valid UTF-8"),
            QueryError::Number(err) => write!(fmt, "{}", err),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Prime {
                n, prime: true, ..
            } => write!(fmt, "{} is prime", n),
            Reply::Prime {
                n,
                prime: false,
                divisor: Some(d),
            } => write!(fmt, "{} is not prime (divisible by {})", n, d),
            Reply::Prime { n, .. } => write!(fmt, "{} is not prime", n),
            Reply::Factors { n, factorization } => write!(fmt, "{} = {}", n, factorization),
        }
    }
}

fn parse_number(word: &str) -> Result<i64, QueryError> {
    let digits = word.replace('_', "");
    digits.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            QueryError::OutOfRange(word.to_owned())
        }
        _ => QueryError::Parse(word.to_owned()),
    })
}

fn is_command(word: &str) -> bool {
    matches!(
        word,
        "prime" | "is-prime" | "isprime" | "factor" | "factors" | "factorize"
    )
}

/// Joins a lone command word with the argument after it, so that
/// `numkit prime 17 360` runs `prime 17` and `360`.
pub fn group_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut out: Vec<String> = vec![];
    let mut pending: Option<String> = None;
    for arg in args {
        match pending.take() {
            Some(cmd) => out.push(format!("{} {}", cmd, arg)),
            None if is_command(arg.trim()) => pending = Some(arg),
            None => out.push(arg),
        }
    }
    out.extend(pending);
    out
}

/// Parses `prime N`, `factor N`, or a bare `N` which means `factor N`.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_query(line: &str) -> Result<Option<Query>, QueryError> {
    let mut words = line.split_whitespace();
    let first = match words.next() {
        Some(word) => word,
        None => return Ok(None),
    };
    let query = match first {
        "prime" | "is-prime" | "isprime" => {
            let word = words.next().ok_or(QueryError::MissingArgument("prime"))?;
            Query::Prime(parse_number(word)?)
        }
        "factor" | "factors" | "factorize" => {
            let word = words.next().ok_or(QueryError::MissingArgument("factor"))?;
            Query::Factor(parse_number(word)?)
        }
        word if word.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
            Query::Factor(parse_number(word)?)
        }
        word => return Err(QueryError::UnknownCommand(word.to_owned())),
    };
    let rest = words.collect::<Vec<_>>();
    if !rest.is_empty() {
        return Err(QueryError::TrailingInput(rest.join(" ")));
    }
    Ok(Some(query))
}

/// Evaluates queries against the policy chosen in the config.
#[derive(Clone, Copy)]
pub struct Runner {
    checker: Checker,
}

impl Runner {
    pub fn new(config: &Config) -> Runner {
        Runner {
            checker: config.checker(),
        }
    }

    pub fn eval_query(&self, query: Query) -> Result<Reply, QueryError> {
        tracing::debug!(?query, policy = ?self.checker.policy, "evaluating");
        match query {
            Query::Prime(n) => {
                let prime = self.checker.is_prime(n);
                Ok(Reply::Prime {
                    n,
                    prime,
                    divisor: if prime {
                        None
                    } else {
                        self.checker.smallest_divisor(n)
                    },
                })
            }
            Query::Factor(n) => Ok(Reply::Factors {
                n,
                factorization: self.checker.factorization(n)?,
            }),
        }
    }

    /// Parses and evaluates one line. `None` for blank lines.
    pub fn eval(&self, line: &str) -> Option<Result<Reply, QueryError>> {
        match parse_query(line) {
            Ok(Some(query)) => Some(self.eval_query(query)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
